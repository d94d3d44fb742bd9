//! Transaction Model
//!
//! A transaction is a money movement waiting to be applied to an account.
//! Applying it is the only way a record enters an account's history.

use chrono::Utc;

use crate::domain::{Amount, DomainError, TransactionKind, TransactionRecord};

use super::CheckingAccount;

/// A money movement to apply to one account.
#[derive(Debug, Clone)]
pub enum Transaction {
    Deposit(Amount),
    Withdrawal(Amount),
}

impl Transaction {
    /// Get the kind this transaction records as
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// Get the amount being moved
    pub fn amount(&self) -> &Amount {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => amount,
        }
    }

    /// Apply this transaction to the account and record it.
    ///
    /// When the account rejects the movement, nothing is recorded and the
    /// account is left exactly as it was.
    pub fn register(&self, account: &mut CheckingAccount) -> Result<(), DomainError> {
        match self {
            Transaction::Deposit(amount) => account.deposit(amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(amount)?,
        }

        account.record(TransactionRecord::new(
            self.kind(),
            self.amount().clone(),
            Utc::now(),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WithdrawalLimits;
    use rust_decimal::Decimal;

    fn amount(units: i64) -> Amount {
        Amount::new(Decimal::new(units, 0)).unwrap()
    }

    fn account() -> CheckingAccount {
        CheckingAccount::new(
            1,
            "0001".to_string(),
            "12345678900".to_string(),
            WithdrawalLimits::default(),
        )
    }

    #[test]
    fn test_kind_and_amount_accessors() {
        let deposit = Transaction::Deposit(amount(100));
        let withdrawal = Transaction::Withdrawal(amount(40));

        assert_eq!(deposit.kind(), TransactionKind::Deposit);
        assert_eq!(deposit.amount().value(), Decimal::new(100, 0));
        assert_eq!(withdrawal.kind(), TransactionKind::Withdrawal);
        assert_eq!(withdrawal.amount().value(), Decimal::new(40, 0));
    }

    #[test]
    fn test_register_deposit_appends_record() {
        let mut account = account();

        Transaction::Deposit(amount(100))
            .register(&mut account)
            .unwrap();

        assert_eq!(account.balance().value(), Decimal::new(100, 0));
        let report = account.history().report();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].kind(), TransactionKind::Deposit);
        assert_eq!(report[0].amount().value(), Decimal::new(100, 0));
    }

    #[test]
    fn test_register_withdrawal_appends_record() {
        let mut account = account();
        Transaction::Deposit(amount(100))
            .register(&mut account)
            .unwrap();

        Transaction::Withdrawal(amount(40))
            .register(&mut account)
            .unwrap();

        assert_eq!(account.balance().value(), Decimal::new(60, 0));
        assert_eq!(account.history().len(), 2);
        assert_eq!(
            account.history().report()[1].kind(),
            TransactionKind::Withdrawal
        );
    }

    #[test]
    fn test_register_failure_records_nothing() {
        let mut account = account();

        let result = Transaction::Withdrawal(amount(40)).register(&mut account);

        assert!(matches!(
            result,
            Err(DomainError::InsufficientFunds { .. })
        ));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_register_overflowing_deposit_records_nothing() {
        let mut account = account();
        let max = Amount::new(Decimal::new(1_000_000_000_000, 0)).unwrap();
        Transaction::Deposit(max).register(&mut account).unwrap();

        let result = Transaction::Deposit(amount(1)).register(&mut account);

        assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
        assert_eq!(account.history().len(), 1);
        assert_eq!(
            account.balance().value(),
            Decimal::new(1_000_000_000_000, 0)
        );
    }
}
