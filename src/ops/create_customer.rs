//! Create Customer Handler
//!
//! Registers a new customer in the directory.

use crate::directory::Directory;
use crate::error::AppResult;
use crate::model::Customer;

use super::{CreateCustomerCommand, CreateCustomerResult};

/// Handler for customer registration
pub struct CreateCustomerHandler<'a> {
    directory: &'a mut Directory,
}

impl<'a> CreateCustomerHandler<'a> {
    pub fn new(directory: &'a mut Directory) -> Self {
        Self { directory }
    }

    /// Execute the create customer command
    pub fn execute(self, command: CreateCustomerCommand) -> AppResult<CreateCustomerResult> {
        let customer = Customer::new(
            command.tax_id,
            command.name,
            command.birth_date,
            command.address,
        );

        let result = CreateCustomerResult {
            tax_id: customer.tax_id().to_string(),
            name: customer.name().to_string(),
        };

        self.directory.create_customer(customer)?;

        tracing::debug!("Customer {} registered", result.tax_id);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_create_customer_command() {
        let cmd = CreateCustomerCommand::new(
            "12345678900".to_string(),
            "Alice Lima".to_string(),
            NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
            "Rua das Flores, 100 - Centro".to_string(),
        );

        assert_eq!(cmd.tax_id, "12345678900");
        assert_eq!(cmd.name, "Alice Lima");
    }
}
