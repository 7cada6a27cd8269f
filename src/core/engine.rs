//! Ledger engine
//!
//! This module provides the LedgerEngine that applies typed commands to a
//! [`Bank`]. It is the thin dispatcher between whatever collects input and
//! the ledger core: it resolves customers and accounts, invokes exactly one
//! core operation per command, and reports the outcome.
//!
//! The engine enforces only what the core does not:
//! - Accounts can only be opened for a registered customer
//! - Interest goes to the first savings account with the requested number,
//!   skipping accounts of other kinds that share it

use crate::core::bank::Bank;
use crate::core::customer::Customer;
use crate::types::{Account, AccountKey, Command, CustomerId, LedgerError};
use rust_decimal::Decimal;

/// Applies commands to an owned bank
#[derive(Debug, Default)]
pub struct LedgerEngine {
    bank: Bank,
}

impl LedgerEngine {
    /// Create an engine around an empty bank
    pub fn new() -> Self {
        LedgerEngine { bank: Bank::new() }
    }

    /// Create an engine around an existing bank
    pub fn with_bank(bank: Bank) -> Self {
        LedgerEngine { bank }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn into_bank(self) -> Bank {
        self.bank
    }

    /// Apply a single command
    ///
    /// # Errors
    ///
    /// Returns the ledger error of the rejected operation. A rejected
    /// command leaves the bank exactly as it was.
    pub fn process(&mut self, command: Command) -> Result<(), LedgerError> {
        match command {
            Command::AddCustomer { customer, name } => self.add_customer(customer, name),
            Command::RemoveCustomer { customer } => self.remove_customer(customer),
            Command::OpenAccount { key, kind } => {
                self.open_account(key, Account::with_kind(key.account, kind))
            }
            Command::DeleteAccount { key } => self.delete_account(key),
            Command::Deposit { key, amount } => self.deposit(key, amount),
            Command::Withdraw { key, amount } => self.withdraw(key, amount),
            Command::Transfer {
                source,
                target,
                amount,
            } => self.transfer(source, target, amount),
            Command::ApplyInterest { key } => self.apply_interest(key),
        }
    }

    fn add_customer(&mut self, id: CustomerId, name: String) -> Result<(), LedgerError> {
        tracing::info!(customer = id, %name, "customer added");
        self.bank.add_customer(Customer::new(id, name));
        Ok(())
    }

    fn remove_customer(&mut self, id: CustomerId) -> Result<(), LedgerError> {
        let removed = self.bank.remove_customer(id)?;
        tracing::info!(
            customer = id,
            accounts = removed.accounts().len(),
            "customer removed"
        );
        Ok(())
    }

    fn open_account(&mut self, key: AccountKey, account: Account) -> Result<(), LedgerError> {
        let kind = account.kind();
        self.bank.customer_mut(key.customer)?.add_account(account);
        tracing::info!(account = %key, %kind, "account opened");
        Ok(())
    }

    fn delete_account(&mut self, key: AccountKey) -> Result<(), LedgerError> {
        let removed = self
            .bank
            .customer_mut(key.customer)?
            .delete_account(key.account)?;
        tracing::info!(account = %key, balance = %removed.balance(), "account deleted");
        Ok(())
    }

    fn deposit(&mut self, key: AccountKey, amount: Decimal) -> Result<(), LedgerError> {
        let account = self.bank.account_mut(key)?;
        account.deposit(amount)?;
        tracing::info!(account = %key, %amount, balance = %account.balance(), "deposit successful");
        Ok(())
    }

    fn withdraw(&mut self, key: AccountKey, amount: Decimal) -> Result<(), LedgerError> {
        let account = self.bank.account_mut(key)?;
        account.withdraw(amount)?;
        tracing::info!(account = %key, %amount, balance = %account.balance(), "withdrawal successful");
        Ok(())
    }

    fn transfer(
        &mut self,
        source: AccountKey,
        target: AccountKey,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        self.bank.transfer(source, target, amount)?;
        tracing::info!(%source, %target, %amount, "funds transferred successfully");
        Ok(())
    }

    fn apply_interest(&mut self, key: AccountKey) -> Result<(), LedgerError> {
        let customer = self.bank.customer_mut(key.customer)?;
        if customer.find_account(key.account).is_none() {
            return Err(LedgerError::account_not_found(key.customer, key.account));
        }
        let account = customer
            .find_savings_mut(key.account)
            .ok_or_else(|| LedgerError::not_savings_account(key.account))?;
        let interest = account.apply_interest()?;
        tracing::info!(account = %key, %interest, balance = %account.balance(), "interest applied");
        Ok(())
    }
}
