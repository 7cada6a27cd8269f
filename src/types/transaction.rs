//! Transaction-related types for the banking ledger
//!
//! This module defines the identifiers used across the ledger and the
//! immutable record appended to an account's history whenever its balance
//! changes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Customer identifier
///
/// Chosen by the caller. Uniqueness is not enforced.
pub type CustomerId = u32;

/// Account number
///
/// Chosen by the caller. Uniqueness is not enforced.
pub type AccountNumber = u32;

/// Kind of balance-affecting event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit to the account, including interest
    Deposit,

    /// Debit under the base withdrawal rule
    Withdrawal,

    /// Debit under the overdraft rule of a current account
    OverdraftWithdrawal,
}

impl TransactionKind {
    /// Human readable label recorded in the history
    pub fn description(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::OverdraftWithdrawal => "Withdrawal (Overdraft)",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Immutable record of one balance change
///
/// Deposits carry a positive amount and withdrawals a negative one. The
/// magnitude is the money moved; the sign is informational and is never
/// recomputed from the balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    timestamp: DateTime<Utc>,
    kind: TransactionKind,
    amount: Decimal,
}

impl Transaction {
    /// Record an event happening now
    pub(crate) fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Transaction {
            timestamp: Utc::now(),
            kind,
            amount,
        }
    }

    /// When the balance changed
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Label of the event ("Deposit", "Withdrawal", "Withdrawal (Overdraft)")
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Signed amount applied to the balance
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
