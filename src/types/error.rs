//! Error types for the banking ledger
//!
//! This module defines every error the ledger can report. None of them are
//! fatal to the ledger itself: a rejected operation leaves all balances and
//! histories untouched, and the caller decides how to surface the message.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: Insufficient funds, overdraft exceeded, invalid interest rate
//! - **Lookup Errors**: Customer or account not found
//! - **Arithmetic Errors**: Decimal results that cannot be represented
//! - **Input Errors**: File I/O, malformed CSV rows, unknown commands

use crate::types::{AccountNumber, CustomerId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Base withdrawal rule rejected the request
    ///
    /// Raised for standard and savings accounts when the amount is not
    /// positive or exceeds the current balance.
    #[error("Invalid withdrawal amount or insufficient balance on account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account the withdrawal was attempted on
        account: AccountNumber,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Current account withdrawal would pass the overdraft limit
    #[error("Withdrawal from account {account} exceeds overdraft limit {overdraft_limit}: balance {balance}, requested {requested}")]
    OverdraftExceeded {
        /// Account the withdrawal was attempted on
        account: AccountNumber,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Maximum amount the balance may go below zero
        overdraft_limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Savings account carries a negative interest rate
    ///
    /// Construction does not reject negative rates, so the check happens
    /// when interest is applied.
    #[error("Invalid interest rate {rate} on account {account}")]
    InvalidInterestRate {
        /// Savings account number
        account: AccountNumber,
        /// The offending rate
        rate: Decimal,
    },

    /// Interest was requested on an account that does not accrue it
    #[error("Account {account} is not a savings account")]
    NotSavingsAccount {
        /// Account number
        account: AccountNumber,
    },

    /// No customer with the given id exists in the bank
    #[error("Customer {customer} not found")]
    CustomerNotFound {
        /// Customer id that was looked up
        customer: CustomerId,
    },

    /// The customer holds no account with the given number
    #[error("Account {account} not found for customer {customer}")]
    AccountNotFound {
        /// Customer whose accounts were searched
        customer: CustomerId,
        /// Account number that was looked up
        account: AccountNumber,
    },

    /// A balance update produced a value outside the decimal range
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading commands or writing a report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV row could not be parsed
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown command name in the input
    #[error("Invalid command '{command}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidCommand {
        /// The command string as read
        command: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// A column required by the command is empty
    #[error("{command} requires the {field} column{}", line.map(|l| format!(" (line {})", l)).unwrap_or_default())]
    MissingField {
        /// Command that requires the field
        command: String,
        /// Name of the missing column
        field: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// Value column is not a decimal number
    #[error("Invalid amount '{value}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidAmount {
        /// The value as read
        value: String,
        /// Line number (if available)
        line: Option<u64>,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an OverdraftExceeded error
    pub fn overdraft_exceeded(
        account: AccountNumber,
        balance: Decimal,
        overdraft_limit: Decimal,
        requested: Decimal,
    ) -> Self {
        LedgerError::OverdraftExceeded {
            account,
            balance,
            overdraft_limit,
            requested,
        }
    }

    /// Create an InvalidInterestRate error
    pub fn invalid_interest_rate(account: AccountNumber, rate: Decimal) -> Self {
        LedgerError::InvalidInterestRate { account, rate }
    }

    /// Create a NotSavingsAccount error
    pub fn not_savings_account(account: AccountNumber) -> Self {
        LedgerError::NotSavingsAccount { account }
    }

    /// Create a CustomerNotFound error
    pub fn customer_not_found(customer: CustomerId) -> Self {
        LedgerError::CustomerNotFound { customer }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(customer: CustomerId, account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { customer, account }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a MissingField error
    pub fn missing_field(command: &str, field: &str, line: Option<u64>) -> Self {
        LedgerError::MissingField {
            command: command.to_string(),
            field: field.to_string(),
            line,
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(command: &str, line: Option<u64>) -> Self {
        LedgerError::InvalidCommand {
            command: command.to_string(),
            line,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str, line: Option<u64>) -> Self {
        LedgerError::InvalidAmount {
            value: value.to_string(),
            line,
        }
    }

    /// Whether the error aborts a run instead of skipping a single command
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LedgerError::FileNotFound { .. } | LedgerError::IoError { .. }
        )
    }
}
