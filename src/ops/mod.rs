//! Operation Handlers module
//!
//! One handler per operator command. Each handler validates input, resolves
//! the parties in the directory, and runs the operation through the model.

mod commands;
mod create_customer;
mod deposit;
mod list_accounts;
mod open_account;
mod statement;
mod withdraw;


pub use commands::*;
pub use create_customer::CreateCustomerHandler;
pub use deposit::DepositHandler;
pub use list_accounts::ListAccountsHandler;
pub use open_account::OpenAccountHandler;
pub use statement::StatementHandler;
pub use withdraw::WithdrawHandler;
