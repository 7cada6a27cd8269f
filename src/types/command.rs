//! Typed ledger operations
//!
//! A [`Command`] is one request against the bank, already validated for
//! shape (every field it needs is present and well-typed). Whether it
//! succeeds is decided by the ledger when the command is processed.

use super::account::{AccountKey, AccountKind};
use super::transaction::CustomerId;
use rust_decimal::Decimal;

/// One operation against the bank
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new customer
    AddCustomer { customer: CustomerId, name: String },

    /// Remove the first customer with the given id, with all their accounts
    RemoveCustomer { customer: CustomerId },

    /// Open a zero-balance account for an existing customer
    OpenAccount { key: AccountKey, kind: AccountKind },

    /// Remove the first matching account of a customer
    DeleteAccount { key: AccountKey },

    /// Credit an account
    Deposit { key: AccountKey, amount: Decimal },

    /// Debit an account under its withdrawal rule
    Withdraw { key: AccountKey, amount: Decimal },

    /// Move money between two accounts
    Transfer {
        source: AccountKey,
        target: AccountKey,
        amount: Decimal,
    },

    /// Credit interest on a savings account
    ApplyInterest { key: AccountKey },
}

impl Command {
    /// Command name as written in the input
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddCustomer { .. } => "add_customer",
            Command::RemoveCustomer { .. } => "remove_customer",
            Command::OpenAccount { kind, .. } => match kind {
                AccountKind::Standard => "open_standard",
                AccountKind::Savings { .. } => "open_savings",
                AccountKind::Current { .. } => "open_current",
            },
            Command::DeleteAccount { .. } => "delete_account",
            Command::Deposit { .. } => "deposit",
            Command::Withdraw { .. } => "withdraw",
            Command::Transfer { .. } => "transfer",
            Command::ApplyInterest { .. } => "apply_interest",
        }
    }
}
