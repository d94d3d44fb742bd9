//! Withdraw Handler
//!
//! Validates the amount and applies a withdrawal through the account holder.
//! The checking rules themselves live on the account.

use crate::directory::Directory;
use crate::domain::{Amount, DomainError};
use crate::error::AppResult;
use crate::model::Transaction;

use super::{WithdrawCommand, WithdrawResult};

/// Handler for withdrawals
pub struct WithdrawHandler<'a> {
    directory: &'a mut Directory,
}

impl<'a> WithdrawHandler<'a> {
    pub fn new(directory: &'a mut Directory) -> Self {
        Self { directory }
    }

    /// Execute the withdraw command
    pub fn execute(self, command: WithdrawCommand) -> AppResult<WithdrawResult> {
        // Validate amount
        let amount = Amount::new(command.amount).map_err(DomainError::from)?;

        // Resolve the account and its holder
        let (account, holder) = self
            .directory
            .transaction_parties_mut(command.account_number)?;

        let transaction = Transaction::Withdrawal(amount);
        holder.execute(account, &transaction)?;

        tracing::debug!(
            "Withdrawal of {} applied to account {}",
            transaction.amount(),
            command.account_number
        );
        Ok(WithdrawResult {
            account_number: command.account_number,
            amount: transaction.amount().value(),
            balance: account.balance().value(),
        })
    }
}
