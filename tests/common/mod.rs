//! Common test utilities

use chrono::NaiveDate;
use teller::directory::Directory;
use teller::model::Customer;
use teller::ops::{OpenAccountCommand, OpenAccountHandler};

/// Register a customer with fixed demo details.
pub fn register_customer(directory: &mut Directory, tax_id: &str, name: &str) {
    directory
        .create_customer(Customer::new(
            tax_id.to_string(),
            name.to_string(),
            NaiveDate::from_ymd_opt(1990, 12, 31).expect("valid fixture date"),
            "Rua das Flores, 100 - Centro".to_string(),
        ))
        .expect("customer fixture should register");
}

/// Directory seeded with Alice (12345678900) holding account 1.
pub fn seeded_directory() -> Directory {
    let mut directory = Directory::new();
    register_customer(&mut directory, "12345678900", "Alice Lima");
    OpenAccountHandler::new(&mut directory)
        .execute(OpenAccountCommand::new(
            "12345678900".to_string(),
            "0001".to_string(),
        ))
        .expect("account fixture should open");
    directory
}
