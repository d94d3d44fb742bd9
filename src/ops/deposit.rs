//! Deposit Handler
//!
//! Validates the amount and applies a deposit through the account holder.

use crate::directory::Directory;
use crate::domain::{Amount, DomainError};
use crate::error::AppResult;
use crate::model::Transaction;

use super::{DepositCommand, DepositResult};

/// Handler for deposits
pub struct DepositHandler<'a> {
    directory: &'a mut Directory,
}

impl<'a> DepositHandler<'a> {
    pub fn new(directory: &'a mut Directory) -> Self {
        Self { directory }
    }

    /// Execute the deposit command
    pub fn execute(self, command: DepositCommand) -> AppResult<DepositResult> {
        // Validate amount
        let amount = Amount::new(command.amount).map_err(DomainError::from)?;

        // Resolve the account and its holder
        let (account, holder) = self
            .directory
            .transaction_parties_mut(command.account_number)?;

        let transaction = Transaction::Deposit(amount);
        holder.execute(account, &transaction)?;

        tracing::debug!(
            "Deposit of {} applied to account {}",
            transaction.amount(),
            command.account_number
        );
        Ok(DepositResult {
            account_number: command.account_number,
            amount: transaction.amount().value(),
            balance: account.balance().value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_deposit_command() {
        let cmd = DepositCommand::new(1, Decimal::new(10050, 2));

        assert_eq!(cmd.account_number, 1);
        assert_eq!(cmd.amount, Decimal::new(10050, 2));
    }
}
