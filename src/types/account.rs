//! Account-related types for the banking ledger
//!
//! This module defines the Account structure and the balance primitives
//! every other component builds on. An account's behaviour is selected by
//! its [`AccountKind`]:
//!
//! - **Standard**: withdrawals must be positive and covered by the balance
//! - **Savings**: standard withdrawals, plus interest accrual
//! - **Current**: withdrawals may take the balance down to `-overdraft_limit`
//!
//! The balance always equals the sum of the amounts in the transaction
//! history. Every mutation goes through [`Account::deposit`] or
//! [`Account::withdraw`], which validate first and only then update the
//! balance and append the record.

use super::error::LedgerError;
use super::transaction::{AccountNumber, CustomerId, Transaction, TransactionKind};
use rust_decimal::Decimal;
use std::fmt;

/// Withdrawal and interest policy of an account
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    /// Plain account with the base withdrawal rule
    Standard,

    /// Interest-bearing account
    Savings {
        /// Fraction of the balance credited by `apply_interest`
        interest_rate: Decimal,
    },

    /// Account allowed to go overdrawn
    Current {
        /// Maximum the balance may go below zero
        overdraft_limit: Decimal,
    },
}

impl AccountKind {
    /// Short lowercase name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Standard => "standard",
            AccountKind::Savings { .. } => "savings",
            AccountKind::Current { .. } => "current",
        }
    }

    /// Validate a withdrawal and pick the label it is recorded under
    ///
    /// The current-account rule replaces the base rule entirely: it does not
    /// require a positive amount, so a zero or negative request that fits
    /// under the overdraft limit is accepted.
    fn authorize_withdrawal(
        &self,
        account: AccountNumber,
        balance: Decimal,
        amount: Decimal,
    ) -> Result<TransactionKind, LedgerError> {
        match *self {
            AccountKind::Standard | AccountKind::Savings { .. } => {
                if amount > Decimal::ZERO && balance >= amount {
                    Ok(TransactionKind::Withdrawal)
                } else {
                    Err(LedgerError::insufficient_funds(account, balance, amount))
                }
            }
            AccountKind::Current { overdraft_limit } => {
                let headroom = balance
                    .checked_add(overdraft_limit)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", account))?;

                if headroom >= amount {
                    Ok(TransactionKind::OverdraftWithdrawal)
                } else {
                    Err(LedgerError::overdraft_exceeded(
                        account,
                        balance,
                        overdraft_limit,
                        amount,
                    ))
                }
            }
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Address of an account inside a bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountKey {
    /// Owning customer
    pub customer: CustomerId,

    /// Account number within that customer's accounts
    pub account: AccountNumber,
}

impl AccountKey {
    pub fn new(customer: CustomerId, account: AccountNumber) -> Self {
        AccountKey { customer, account }
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.customer, self.account)
    }
}

/// Ledger account
///
/// Holds a balance and the append-only history of every change made to it.
/// Fields are private so the balance cannot drift from the history.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    kind: AccountKind,
    balance: Decimal,
    history: Vec<Transaction>,
}

impl Account {
    /// Create a standard account with zero balance and empty history
    pub fn new(number: AccountNumber) -> Self {
        Self::with_kind(number, AccountKind::Standard)
    }

    /// Create a savings account
    ///
    /// A negative rate is accepted here and rejected when interest is applied.
    pub fn savings(number: AccountNumber, interest_rate: Decimal) -> Self {
        Self::with_kind(number, AccountKind::Savings { interest_rate })
    }

    /// Create a current account with the given overdraft limit
    pub fn current(number: AccountNumber, overdraft_limit: Decimal) -> Self {
        Self::with_kind(number, AccountKind::Current { overdraft_limit })
    }

    pub fn with_kind(number: AccountNumber, kind: AccountKind) -> Self {
        Account {
            number,
            kind,
            balance: Decimal::ZERO,
            history: Vec::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Transaction history in chronological order
    pub fn transactions(&self) -> &[Transaction] {
        &self.history
    }

    /// Credit the account
    ///
    /// Any amount is accepted, including zero and negative values. The only
    /// failure is a sum that does not fit in a `Decimal`, in which case the
    /// account is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the new balance cannot be represented.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", self.number))?;

        self.record(TransactionKind::Deposit, amount, new_balance);
        Ok(())
    }

    /// Debit the account under its kind's withdrawal rule
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Standard/savings: the amount is not positive or exceeds the balance
    /// - Current: the amount exceeds balance plus overdraft limit
    /// - The new balance cannot be represented
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let kind = self
            .kind
            .authorize_withdrawal(self.number, self.balance, amount)?;

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", self.number))?;

        self.record(kind, -amount, new_balance);
        Ok(())
    }

    /// Credit interest on a savings account
    ///
    /// Interest is `balance * interest_rate`, credited through a regular
    /// deposit. Returns the credited amount.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account is not a savings account
    /// - The interest rate is negative
    /// - The interest or the new balance cannot be represented
    pub fn apply_interest(&mut self) -> Result<Decimal, LedgerError> {
        let AccountKind::Savings { interest_rate } = self.kind else {
            return Err(LedgerError::not_savings_account(self.number));
        };

        if interest_rate < Decimal::ZERO {
            return Err(LedgerError::invalid_interest_rate(self.number, interest_rate));
        }

        let interest = self
            .balance
            .checked_mul(interest_rate)
            .ok_or_else(|| LedgerError::arithmetic_overflow("interest", self.number))?;

        self.deposit(interest)?;
        Ok(interest)
    }

    fn record(&mut self, kind: TransactionKind, amount: Decimal, new_balance: Decimal) {
        self.balance = new_balance;
        self.history.push(Transaction::new(kind, amount));

        tracing::debug!(
            account = self.number,
            %amount,
            balance = %self.balance,
            "{}",
            kind.description()
        );
    }
}
