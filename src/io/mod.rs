//! I/O module
//!
//! Handles CSV command parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report serialization)
//! - `command_reader` - Streaming command reader with iterator interface

pub mod command_reader;
pub mod csv_format;

pub use command_reader::CommandReader;
pub use csv_format::{convert_csv_record, write_accounts_csv, write_history_csv, CsvRecord};
