//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `account`: Accounts, their kinds and addresses
//! - `transaction`: Transaction records and identifiers
//! - `command`: Typed ledger operations
//! - `error`: Error types for the ledger

pub mod account;
pub mod command;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountKey, AccountKind};
pub use command::Command;
pub use error::LedgerError;
pub use transaction::{AccountNumber, CustomerId, Transaction, TransactionKind};
