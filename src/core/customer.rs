//! Customer module
//!
//! A [`Customer`] owns an ordered collection of accounts. Account numbers are
//! not checked for uniqueness; every lookup and removal acts on the first
//! account with a matching number.

use crate::types::{Account, AccountKind, AccountNumber, CustomerId, LedgerError};

/// Bank customer and the accounts they hold
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    accounts: Vec<Account>,
}

impl Customer {
    /// Create a customer with no accounts
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accounts in the order they were added
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Append an account
    ///
    /// Duplicate account numbers are accepted; the earlier account shadows
    /// the later one for lookups.
    pub fn add_account(&mut self, account: Account) {
        tracing::debug!(
            customer = self.id,
            account = account.number(),
            kind = account.kind().name(),
            "account added"
        );
        self.accounts.push(account);
    }

    /// Remove the first account with the given number and return it
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the customer holds no such account,
    /// which is also what a repeated call reports.
    pub fn delete_account(&mut self, number: AccountNumber) -> Result<Account, LedgerError> {
        let index = self
            .position(number)
            .ok_or_else(|| LedgerError::account_not_found(self.id, number))?;

        Ok(self.accounts.remove(index))
    }

    /// First account with the given number
    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    /// First account with the given number, mutably
    pub fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    /// First savings account with the given number, mutably
    ///
    /// Accounts of other kinds that share the number are skipped.
    pub fn find_savings_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| {
            account.number() == number && matches!(account.kind(), AccountKind::Savings { .. })
        })
    }

    pub(crate) fn position(&self, number: AccountNumber) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.number() == number)
    }

    pub(crate) fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }
}
