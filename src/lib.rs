//! Banking Ledger Library
//! # Overview
//!
//! This library keeps an in-memory bank of customers and their accounts and
//! applies money movements to them: deposits, withdrawals, transfers and
//! interest. Commands are streamed from CSV and the resulting state is
//! written back out as a CSV report.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, Command, errors)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - Customer registry and account lookup
//!   - [`core::customer`] - A customer and the accounts they own
//!   - [`core::transfer`] - Atomic movement of funds between accounts
//!   - [`core::engine`] - Command dispatch
//! - [`io`] - CSV command reading and report writing
//! - [`runner`] - One batch run from input to report
//!
//! # Account Kinds
//!
//! - **Standard**: Withdrawals must be positive and covered by the balance
//! - **Savings**: Standard rules, plus interest at a fixed rate on demand
//! - **Current**: Withdrawals may take the balance down to minus the overdraft limit
//!
//! Every successful balance change appends a timestamped transaction to the
//! account's history, so an account's balance always equals the sum of its
//! recorded amounts.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use core::{Bank, Customer, LedgerEngine};
pub use io::{write_accounts_csv, write_history_csv, CommandReader};
pub use runner::{run, RunSummary};
pub use types::{
    Account, AccountKey, AccountKind, AccountNumber, Command, CustomerId, LedgerError,
    Transaction, TransactionKind,
};
