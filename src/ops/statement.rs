//! Statement Handler
//!
//! Reads an account's history and current balance. Read-only.

use crate::directory::Directory;
use crate::domain::DomainError;
use crate::error::AppResult;

use super::{Statement, StatementCommand};

/// Handler for statements
pub struct StatementHandler<'a> {
    directory: &'a Directory,
}

impl<'a> StatementHandler<'a> {
    pub fn new(directory: &'a Directory) -> Self {
        Self { directory }
    }

    /// Execute the statement command
    pub fn execute(self, command: StatementCommand) -> AppResult<Statement> {
        let account = self
            .directory
            .find_account(command.account_number)
            .ok_or(DomainError::AccountNotFound(command.account_number))?;

        Ok(Statement {
            account_number: account.number(),
            entries: account.history().report().to_vec(),
            balance: account.balance().value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_command() {
        let cmd = StatementCommand::new(2);

        assert_eq!(cmd.account_number, 2);
    }
}
