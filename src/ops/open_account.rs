//! Open Account Handler
//!
//! Opens a checking account for an already registered customer.

use crate::directory::Directory;
use crate::error::AppResult;

use super::{OpenAccountCommand, OpenAccountResult};

/// Handler for account opening
pub struct OpenAccountHandler<'a> {
    directory: &'a mut Directory,
}

impl<'a> OpenAccountHandler<'a> {
    pub fn new(directory: &'a mut Directory) -> Self {
        Self { directory }
    }

    /// Execute the open account command
    pub fn execute(self, command: OpenAccountCommand) -> AppResult<OpenAccountResult> {
        let account_number =
            self.directory
                .create_account(&command.tax_id, &command.branch, command.limits)?;

        tracing::debug!(
            "Account {} opened for customer {}",
            account_number,
            command.tax_id
        );
        Ok(OpenAccountResult {
            account_number,
            branch: command.branch,
        })
    }
}
