//! Banking Ledger CLI
//!
//! Command-line interface for applying banking commands from CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > accounts.csv
//! cargo run -- --report history commands.csv > history.csv
//! cargo run -- --customer 42 commands.csv > customer.csv
//! cat commands.csv | cargo run -- -v > accounts.csv
//! ```
//!
//! The program reads commands from the input CSV file (or stdin), applies
//! them to a fresh in-memory bank, and writes the selected report to
//! stdout. Rejected commands and malformed rows are logged to stderr and
//! skipped.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, unknown --customer, etc.)

use banking_ledger::{cli, runner};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args);

    let mut output = std::io::stdout().lock();
    if let Err(e) = runner::run(
        args.input_file.as_deref(),
        args.report,
        args.customer,
        &mut output,
    ) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
