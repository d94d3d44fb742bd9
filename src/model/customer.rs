//! Customer Model
//!
//! A natural-person customer identified by tax id. Customers own account
//! numbers, not account values; the directory resolves numbers to accounts.

use chrono::NaiveDate;

use crate::domain::DomainError;

use super::{CheckingAccount, Transaction};

/// Customer
///
/// Uniqueness of the tax id is the directory's job, not the customer's.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Tax id (digits only), unique within the directory
    tax_id: String,

    /// Full name
    name: String,

    /// Birth date
    birth_date: NaiveDate,

    /// Free-form address
    address: String,

    /// Numbers of the accounts this customer holds, in creation order
    accounts: Vec<u32>,
}

impl Customer {
    /// Create a customer with no accounts
    pub fn new(tax_id: String, name: String, birth_date: NaiveDate, address: String) -> Self {
        Self {
            tax_id,
            name,
            birth_date,
            address,
            accounts: Vec::new(),
        }
    }

    /// Run a transaction against one of this customer's accounts.
    ///
    /// The customer initiates the movement; the transaction applies it and
    /// records it on success.
    pub fn execute(
        &self,
        account: &mut CheckingAccount,
        transaction: &Transaction,
    ) -> Result<(), DomainError> {
        transaction.register(account)
    }

    /// Link an account number to this customer
    pub fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }
}
