//! Streaming CSV command reader
//!
//! Provides an iterator over typed commands read from any `Read` source:
//! a file for batch runs, or stdin when commands are piped in.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Failing to open the input is returned from the constructor
//! - A row that cannot be parsed or converted is yielded as an `Err` and
//!   iteration continues with the next row
//! - An I/O failure while reading is yielded once and ends the iteration
//!
//! Errors carry the line number of the offending row.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{Command, LedgerError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Iterator over the commands of a CSV input
#[derive(Debug)]
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    exhausted: bool,
}

impl CommandReader<File> {
    /// Open a command file
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, or an I/O error if
    /// the file or its header row cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::from(e),
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> CommandReader<R> {
    /// Wrap a reader positioned at the header row
    ///
    /// The CSV reader is configured to trim whitespace from all fields and
    /// to accept rows with fewer columns than the header.
    pub fn from_reader(source: R) -> Result<Self, LedgerError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers().map_err(read_error)?.clone();

        Ok(Self {
            reader,
            headers,
            exhausted: false,
        })
    }
}

impl<R: Read> Iterator for CommandReader<R> {
    type Item = Result<Command, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let mut row = StringRecord::new();
        match self.reader.read_record(&mut row) {
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Ok(true) => {
                let line = row.position().map(|position| position.line());
                let command = row
                    .deserialize::<CsvRecord>(Some(&self.headers))
                    .map_err(|e| LedgerError::ParseError {
                        line,
                        message: e.to_string(),
                    })
                    .and_then(|record| convert_csv_record(record, line));
                Some(command)
            }
            Err(e) if e.is_io_error() => {
                self.exhausted = true;
                Some(Err(read_error(e)))
            }
            Err(e) => Some(Err(LedgerError::from(e))),
        }
    }
}

fn read_error(error: csv::Error) -> LedgerError {
    if error.is_io_error() {
        LedgerError::IoError {
            message: error.to_string(),
        }
    } else {
        LedgerError::from(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountKey;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "command,customer,account,value,target_customer,target_account,name\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<Command, LedgerError>> {
        CommandReader::from_reader(content.as_bytes())
            .unwrap()
            .collect()
    }

    #[test]
    fn test_from_path_opens_file() {
        let file = create_temp_csv(&format!("{HEADER}deposit,1,10,5,,,\n"));

        let commands: Vec<_> = CommandReader::from_path(file.path()).unwrap().collect();

        assert_eq!(
            commands,
            vec![Ok(Command::Deposit {
                key: AccountKey::new(1, 10),
                amount: Decimal::new(5, 0),
            })]
        );
    }

    #[test]
    fn test_from_path_fails_on_missing_file() {
        let result = CommandReader::from_path(Path::new("nonexistent.csv"));

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_reads_commands_in_order() {
        let commands = read_all(&format!(
            "{HEADER}\
             add_customer,1,,,,,Asha\n\
             open_savings,1,10,0.05,,,\n\
             transfer,1,10,25,2,20,\n"
        ));

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], Ok(Command::AddCustomer { customer: 1, .. })));
        assert!(matches!(commands[1], Ok(Command::OpenAccount { .. })));
        assert!(matches!(commands[2], Ok(Command::Transfer { .. })));
    }

    #[test]
    fn test_accepts_short_rows() {
        let commands = read_all(&format!("{HEADER}apply_interest,1,10\nremove_customer,2\n"));

        assert_eq!(
            commands,
            vec![
                Ok(Command::ApplyInterest {
                    key: AccountKey::new(1, 10)
                }),
                Ok(Command::RemoveCustomer { customer: 2 }),
            ]
        );
    }

    #[test]
    fn test_trims_whitespace() {
        let commands = read_all(&format!("{HEADER}  withdraw , 1 , 10 , 2.50 ,,,\n"));

        assert_eq!(
            commands,
            vec![Ok(Command::Withdraw {
                key: AccountKey::new(1, 10),
                amount: Decimal::new(250, 2),
            })]
        );
    }

    #[test]
    fn test_errors_carry_line_numbers_and_iteration_continues() {
        let commands = read_all(&format!(
            "{HEADER}\
             deposit,1,10,5,,,\n\
             deposit,x,10,5,,,\n\
             close,1,10,,,,\n\
             deposit,1,10,ten,,,\n\
             deposit,1,10,1,,,\n"
        ));

        assert_eq!(commands.len(), 5);
        assert!(commands[0].is_ok());
        assert!(matches!(
            commands[1],
            Err(LedgerError::ParseError { line: Some(3), .. })
        ));
        assert_eq!(
            commands[2],
            Err(LedgerError::invalid_command("close", Some(4)))
        );
        assert_eq!(
            commands[3],
            Err(LedgerError::invalid_amount("ten", Some(5)))
        );
        assert!(commands[4].is_ok());
    }

    #[test]
    fn test_header_only_input_yields_nothing() {
        assert!(read_all(HEADER).is_empty());
    }
}
