//! Directory
//!
//! In-memory registry of customers and accounts. It owns all session state;
//! nothing survives the process.
//!
//! Customers and accounts reference each other by tax id and account number,
//! and the directory resolves those references on demand. Lookups scan
//! linearly, which is fine at teller-session scale.

use crate::domain::DomainError;
use crate::model::{CheckingAccount, Customer, WithdrawalLimits};

/// Registry of every customer and account created in this session.
#[derive(Debug, Default)]
pub struct Directory {
    customers: Vec<Customer>,
    accounts: Vec<CheckingAccount>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer.
    ///
    /// Fails with `DuplicateCustomer` when the tax id is already registered.
    pub fn create_customer(&mut self, customer: Customer) -> Result<(), DomainError> {
        if self.find_customer(customer.tax_id()).is_some() {
            return Err(DomainError::DuplicateCustomer(customer.tax_id().to_string()));
        }

        self.customers.push(customer);
        Ok(())
    }

    /// Open a checking account for an existing customer.
    ///
    /// Account numbers are sequential from 1 in creation order, across all
    /// customers. A rejected request consumes no number. Returns the number
    /// of the new account.
    pub fn create_account(
        &mut self,
        tax_id: &str,
        branch: &str,
        limits: WithdrawalLimits,
    ) -> Result<u32, DomainError> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.tax_id() == tax_id)
            .ok_or_else(|| DomainError::CustomerNotFound(tax_id.to_string()))?;

        let number = self.accounts.len() as u32 + 1;
        customer.add_account(number);
        self.accounts.push(CheckingAccount::new(
            number,
            branch.to_string(),
            tax_id.to_string(),
            limits,
        ));

        Ok(number)
    }

    /// Look up a customer by tax id
    pub fn find_customer(&self, tax_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.tax_id() == tax_id)
    }

    /// Look up an account by number
    pub fn find_account(&self, number: u32) -> Option<&CheckingAccount> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    /// Resolve the account and its holder for a transaction.
    ///
    /// The account comes back mutable, the holder shared; the split borrow
    /// works because customers and accounts live in separate collections.
    pub fn transaction_parties_mut(
        &mut self,
        number: u32,
    ) -> Result<(&mut CheckingAccount, &Customer), DomainError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(DomainError::AccountNotFound(number))?;

        let holder = self
            .customers
            .iter()
            .find(|c| c.tax_id() == account.holder_tax_id())
            .ok_or_else(|| DomainError::CustomerNotFound(account.holder_tax_id().to_string()))?;

        Ok((account, holder))
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &[CheckingAccount] {
        &self.accounts
    }

    /// All customers in registration order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
}
