//! Bank module
//!
//! The [`Bank`] owns every customer and is the single entry point for
//! resolving accounts by [`AccountKey`]. Customer ids are not checked for
//! uniqueness: lookups return the first customer with a matching id, and
//! accounts are resolved the same way inside that customer.

use crate::core::customer::Customer;
use crate::core::transfer::{pair_mut, transfer_funds, transfer_within};
use crate::types::{Account, AccountKey, CustomerId, LedgerError};
use rust_decimal::Decimal;

/// All customers of the bank, in registration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bank {
    customers: Vec<Customer>,
}

impl Bank {
    /// Create a bank with no customers
    pub fn new() -> Self {
        Bank {
            customers: Vec::new(),
        }
    }

    /// Customers in the order they were added
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Append a customer; duplicate ids are accepted
    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// First customer with the given id
    pub fn find_customer_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id() == id)
    }

    /// First customer with the given id, mutably
    pub fn find_customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|customer| customer.id() == id)
    }

    /// Like [`Bank::find_customer_by_id`], reporting a miss as an error
    pub fn customer(&self, id: CustomerId) -> Result<&Customer, LedgerError> {
        self.find_customer_by_id(id)
            .ok_or_else(|| LedgerError::customer_not_found(id))
    }

    pub fn customer_mut(&mut self, id: CustomerId) -> Result<&mut Customer, LedgerError> {
        self.find_customer_mut(id)
            .ok_or_else(|| LedgerError::customer_not_found(id))
    }

    /// Remove the first customer with the given id and return it
    ///
    /// The customer's accounts go with it; nothing else refers to them.
    pub fn remove_customer(&mut self, id: CustomerId) -> Result<Customer, LedgerError> {
        let index = self
            .customers
            .iter()
            .position(|customer| customer.id() == id)
            .ok_or_else(|| LedgerError::customer_not_found(id))?;

        Ok(self.customers.remove(index))
    }

    /// Resolve an account by key
    ///
    /// # Errors
    ///
    /// Returns `CustomerNotFound` or `AccountNotFound` on a miss.
    pub fn account(&self, key: AccountKey) -> Result<&Account, LedgerError> {
        self.customer(key.customer)?
            .find_account(key.account)
            .ok_or_else(|| LedgerError::account_not_found(key.customer, key.account))
    }

    /// Resolve an account by key, mutably
    pub fn account_mut(&mut self, key: AccountKey) -> Result<&mut Account, LedgerError> {
        self.customer_mut(key.customer)?
            .find_account_mut(key.account)
            .ok_or_else(|| LedgerError::account_not_found(key.customer, key.account))
    }

    /// Transfer funds between two accounts of this bank
    ///
    /// Both keys are resolved before anything is moved. When they resolve to
    /// the same account the amount is withdrawn and deposited back.
    ///
    /// # Errors
    ///
    /// Returns a lookup error for either side, or the transfer error of
    /// [`transfer_funds`]. No account is modified on error.
    pub fn transfer(
        &mut self,
        source: AccountKey,
        target: AccountKey,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let (source_customer, source_account) = self.locate(source)?;
        let (target_customer, target_account) = self.locate(target)?;

        if source_customer == target_customer {
            let accounts = self.customers[source_customer].accounts_mut();
            if source_account == target_account {
                return transfer_within(&mut accounts[source_account], amount);
            }
            let (from, to) = pair_mut(accounts, source_account, target_account);
            return transfer_funds(from, to, amount);
        }

        let (from, to) = pair_mut(&mut self.customers, source_customer, target_customer);
        transfer_funds(
            &mut from.accounts_mut()[source_account],
            &mut to.accounts_mut()[target_account],
            amount,
        )
    }

    /// Indices of the customer and account a key resolves to
    fn locate(&self, key: AccountKey) -> Result<(usize, usize), LedgerError> {
        let customer_index = self
            .customers
            .iter()
            .position(|customer| customer.id() == key.customer)
            .ok_or_else(|| LedgerError::customer_not_found(key.customer))?;

        let account_index = self.customers[customer_index]
            .position(key.account)
            .ok_or_else(|| LedgerError::account_not_found(key.customer, key.account))?;

        Ok((customer_index, account_index))
    }
}
