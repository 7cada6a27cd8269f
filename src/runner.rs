//! Batch command runner
//!
//! Ties the pieces together for one run of the binary: read commands, apply
//! each one through a [`LedgerEngine`], then write the requested report.
//!
//! Rows that cannot be parsed and commands the ledger rejects are logged
//! and skipped; processing continues with the next row. Only I/O failures
//! end a run early.

use crate::cli::ReportFormat;
use crate::core::{Bank, LedgerEngine};
use crate::io::{write_accounts_csv, write_history_csv, CommandReader};
use crate::types::{CustomerId, LedgerError};
use std::io::{Read, Write};
use std::path::Path;

/// Counts of what happened to each input row
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands the ledger accepted
    pub applied: usize,
    /// Well-formed commands the ledger rejected
    pub rejected: usize,
    /// Rows that could not be turned into a command
    pub malformed: usize,
}

/// Apply every command of `reader` to `engine`
///
/// # Errors
///
/// Returns an error only if reading the input fails.
pub fn apply_commands<R: Read>(
    reader: CommandReader<R>,
    engine: &mut LedgerEngine,
) -> Result<RunSummary, LedgerError> {
    let mut summary = RunSummary::default();

    for item in reader {
        match item {
            Ok(command) => {
                let name = command.name();
                match engine.process(command) {
                    Ok(()) => summary.applied += 1,
                    Err(e) => {
                        summary.rejected += 1;
                        tracing::warn!(command = name, "{e}");
                    }
                }
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                summary.malformed += 1;
                tracing::warn!("skipping row: {e}");
            }
        }
    }

    Ok(summary)
}

/// Write the selected report for `bank`
///
/// With `customer` set, only the first customer with that id is reported.
///
/// # Errors
///
/// Returns `CustomerNotFound` for an unknown `customer`, or an I/O error if
/// the output cannot be written.
pub fn write_report(
    bank: &Bank,
    report: ReportFormat,
    customer: Option<CustomerId>,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let customers = match customer {
        Some(id) => std::slice::from_ref(bank.customer(id)?),
        None => bank.customers(),
    };

    match report {
        ReportFormat::Accounts => write_accounts_csv(customers, output),
        ReportFormat::History => write_history_csv(customers, output),
    }
}

/// Run a whole batch against a fresh bank
///
/// Commands are read from `input`, or from stdin when it is `None`. The
/// report covers the whole bank unless `customer` selects one customer.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, the selected
/// customer does not exist once all commands are applied, or the report
/// cannot be written.
pub fn run(
    input: Option<&Path>,
    report: ReportFormat,
    customer: Option<CustomerId>,
    output: &mut dyn Write,
) -> Result<RunSummary, LedgerError> {
    let mut engine = LedgerEngine::new();

    let summary = match input {
        Some(path) => apply_commands(CommandReader::from_path(path)?, &mut engine)?,
        None => apply_commands(
            CommandReader::from_reader(std::io::stdin().lock())?,
            &mut engine,
        )?,
    };

    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        malformed = summary.malformed,
        "all commands processed"
    );

    write_report(engine.bank(), report, customer, output)?;
    Ok(summary)
}
