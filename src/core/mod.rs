//! Core ledger module
//!
//! This module contains the ledger components, leaf-first:
//! - `customer` - A customer and the accounts they own
//! - `bank` - All customers, account resolution and transfers
//! - `transfer` - Withdraw-then-deposit orchestration between accounts
//! - `engine` - Command dispatch onto the bank

pub mod bank;
pub mod customer;
pub mod engine;
pub mod transfer;

pub use bank::Bank;
pub use customer::Customer;
pub use engine::LedgerEngine;
pub use transfer::{transfer_funds, transfer_within};
