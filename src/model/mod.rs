//! Model module
//!
//! Accounts, customers, and the transactions that connect them.

pub mod account;
pub mod customer;
pub mod transaction;

pub use account::{Account, CheckingAccount, WithdrawalLimits};
pub use customer::Customer;
pub use transaction::Transaction;
