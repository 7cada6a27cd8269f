use clap::{ArgAction, Parser, ValueEnum};
use crate::types::CustomerId;
use std::path::PathBuf;

/// Apply banking ledger commands and report the resulting accounts
#[derive(Parser, Debug)]
#[command(name = "banking-ledger")]
#[command(about = "Apply banking ledger commands and report the resulting accounts", long_about = None)]
pub struct CliArgs {
    /// Command CSV file; commands are read from stdin when omitted
    #[arg(value_name = "INPUT", help = "Path to the command CSV file (default: stdin)")]
    pub input_file: Option<PathBuf>,

    /// Report written to stdout once all commands have been applied
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "accounts",
        help = "Report to write: 'accounts' for balances or 'history' for every transaction"
    )]
    pub report: ReportFormat,

    /// Restrict the report to one customer
    #[arg(
        long = "customer",
        value_name = "ID",
        help = "Only report the first customer with this id"
    )]
    pub customer: Option<CustomerId>,

    /// Log verbosity, repeatable
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    pub verbose: u8,
}

/// Available reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Accounts,
    History,
}

impl CliArgs {
    /// Default log filter for the requested verbosity
    ///
    /// Used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
