//! Account Model
//!
//! Account is the core model for holding a balance and its history.
//! CheckingAccount layers withdrawal rules on top of the base account.

use rust_decimal::Decimal;

use crate::domain::{Amount, Balance, DomainError, History, TransactionRecord};

/// Withdrawal rules applied to checking accounts.
///
/// Limits are fixed at account creation and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalLimits {
    /// Largest amount a single withdrawal may move
    pub per_withdrawal: Decimal,

    /// Number of withdrawals an account may make in one day
    pub daily_withdrawals: u32,
}

impl Default for WithdrawalLimits {
    fn default() -> Self {
        Self {
            per_withdrawal: Decimal::new(500, 0),
            daily_withdrawals: 3,
        }
    }
}

/// Base account
///
/// Holds identification, the current balance, and the transaction history.
/// Balance changes go through `deposit` and `withdraw`; the history is
/// recorded separately by [`crate::model::Transaction::register`].
#[derive(Debug, Clone)]
pub struct Account {
    /// Sequential account number, unique within the directory
    number: u32,

    /// Branch code stamped at creation
    branch: String,

    /// Tax id of the holder, resolved through the directory
    holder_tax_id: String,

    /// Current balance
    balance: Balance,

    /// Applied transactions, oldest first
    history: History,
}

impl Account {
    /// Create an account with a zero balance and an empty history
    pub fn new(number: u32, branch: String, holder_tax_id: String) -> Self {
        Self {
            number,
            branch,
            holder_tax_id,
            balance: Balance::zero(),
            history: History::new(),
        }
    }

    /// Add money to the balance.
    /// Fails when the new balance would exceed the maximum allowed value.
    pub fn deposit(&mut self, amount: &Amount) -> Result<(), DomainError> {
        self.balance = self.balance.credit(amount)?;
        Ok(())
    }

    /// Remove money from the balance.
    /// Fails when the available balance does not cover the amount.
    pub fn withdraw(&mut self, amount: &Amount) -> Result<(), DomainError> {
        self.balance = self
            .balance
            .debit(amount)
            .ok_or_else(|| DomainError::insufficient_funds(amount.value(), self.balance.value()))?;
        Ok(())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn holder_tax_id(&self) -> &str {
        &self.holder_tax_id
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

/// Checking account
///
/// Wraps the base account and enforces two extra rules on withdrawals:
/// a per-withdrawal amount cap and a daily withdrawal quota.
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    account: Account,
    limits: WithdrawalLimits,

    /// Withdrawals applied so far; failed attempts don't count
    withdrawals_made: u32,
}

impl CheckingAccount {
    /// Create a checking account with a zero balance and an empty history
    pub fn new(number: u32, branch: String, holder_tax_id: String, limits: WithdrawalLimits) -> Self {
        Self {
            account: Account::new(number, branch, holder_tax_id),
            limits,
            withdrawals_made: 0,
        }
    }

    /// Add money to the balance. The withdrawal rules don't apply here.
    pub fn deposit(&mut self, amount: &Amount) -> Result<(), DomainError> {
        self.account.deposit(amount)
    }

    /// Remove money from the balance, enforcing checking rules.
    ///
    /// The per-withdrawal cap is checked before the daily quota, so a request
    /// that breaks both rules reports the amount problem. The quota is
    /// consumed only when the withdrawal goes through.
    pub fn withdraw(&mut self, amount: &Amount) -> Result<(), DomainError> {
        if amount.value() > self.limits.per_withdrawal {
            return Err(DomainError::WithdrawalLimitExceeded {
                limit: self.limits.per_withdrawal,
            });
        }

        if self.withdrawals_made >= self.limits.daily_withdrawals {
            return Err(DomainError::DailyWithdrawalsExhausted {
                limit: self.limits.daily_withdrawals,
            });
        }

        self.account.withdraw(amount)?;
        self.withdrawals_made += 1;
        Ok(())
    }

    /// Append a record to the account history.
    /// Only [`crate::model::Transaction::register`] calls this, which keeps
    /// the history restricted to operations that were actually applied.
    pub(crate) fn record(&mut self, record: TransactionRecord) {
        self.account.history.add(record);
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn number(&self) -> u32 {
        self.account.number()
    }

    pub fn branch(&self) -> &str {
        self.account.branch()
    }

    pub fn holder_tax_id(&self) -> &str {
        self.account.holder_tax_id()
    }

    pub fn balance(&self) -> &Balance {
        self.account.balance()
    }

    pub fn history(&self) -> &History {
        self.account.history()
    }

    pub fn limits(&self) -> &WithdrawalLimits {
        &self.limits
    }

    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmountError;

    fn amount(units: i64) -> Amount {
        Amount::new(Decimal::new(units, 0)).unwrap()
    }

    fn checking_account() -> CheckingAccount {
        CheckingAccount::new(
            1,
            "0001".to_string(),
            "12345678900".to_string(),
            WithdrawalLimits::default(),
        )
    }

    #[test]
    fn test_new_account_starts_empty() {
        let account = checking_account();

        assert_eq!(account.number(), 1);
        assert_eq!(account.branch(), "0001");
        assert_eq!(account.holder_tax_id(), "12345678900");
        assert_eq!(account.balance().value(), Decimal::ZERO);
        assert!(account.history().is_empty());
        assert_eq!(account.withdrawals_made(), 0);
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = checking_account();

        account.deposit(&amount(100)).unwrap();
        account.deposit(&amount(50)).unwrap();

        assert_eq!(account.balance().value(), Decimal::new(150, 0));
    }

    #[test]
    fn test_deposit_beyond_max_rejected() {
        let mut account = checking_account();
        let max = Amount::new(Decimal::new(1_000_000_000_000, 0)).unwrap();
        account.deposit(&max).unwrap();

        let result = account.deposit(&amount(1));

        assert!(matches!(
            result,
            Err(DomainError::InvalidAmount(AmountError::Overflow))
        ));
        assert_eq!(account.balance().value(), Decimal::new(1_000_000_000_000, 0));
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = checking_account();
        account.deposit(&amount(100)).unwrap();

        account.withdraw(&amount(30)).unwrap();

        assert_eq!(account.balance().value(), Decimal::new(70, 0));
        assert_eq!(account.withdrawals_made(), 1);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = checking_account();
        account.deposit(&amount(50)).unwrap();

        let result = account.withdraw(&amount(100));

        assert!(matches!(result, Err(DomainError::InsufficientFunds { .. })));
        // Balance and quota untouched
        assert_eq!(account.balance().value(), Decimal::new(50, 0));
        assert_eq!(account.withdrawals_made(), 0);
    }

    #[test]
    fn test_withdraw_over_per_withdrawal_limit() {
        let mut account = checking_account();
        account.deposit(&amount(1000)).unwrap();

        let result = account.withdraw(&amount(600));

        assert!(matches!(
            result,
            Err(DomainError::WithdrawalLimitExceeded { .. })
        ));
        assert_eq!(account.balance().value(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_daily_quota_exhausted() {
        let mut account = checking_account();
        account.deposit(&amount(1000)).unwrap();

        // Use up the quota
        account.withdraw(&amount(100)).unwrap();
        account.withdraw(&amount(100)).unwrap();
        account.withdraw(&amount(100)).unwrap();

        let result = account.withdraw(&amount(100));

        assert!(matches!(
            result,
            Err(DomainError::DailyWithdrawalsExhausted { limit: 3 })
        ));
        assert_eq!(account.balance().value(), Decimal::new(700, 0));
    }

    #[test]
    fn test_amount_cap_checked_before_daily_quota() {
        let mut account = checking_account();
        account.deposit(&amount(5000)).unwrap();

        // Exhaust the quota first
        for _ in 0..3 {
            account.withdraw(&amount(100)).unwrap();
        }

        // Over-cap request must report the amount problem, not the quota
        let result = account.withdraw(&amount(600));

        assert!(matches!(
            result,
            Err(DomainError::WithdrawalLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_failed_withdrawal_does_not_consume_quota() {
        let mut account = checking_account();
        account.deposit(&amount(100)).unwrap();

        // Three failures in a row
        for _ in 0..3 {
            assert!(account.withdraw(&amount(500)).is_err());
        }
        assert_eq!(account.withdrawals_made(), 0);

        // The quota is still fully available
        account.withdraw(&amount(50)).unwrap();
        assert_eq!(account.withdrawals_made(), 1);
    }

    #[test]
    fn test_deposit_allowed_after_quota_exhausted() {
        let mut account = checking_account();
        account.deposit(&amount(1000)).unwrap();
        for _ in 0..3 {
            account.withdraw(&amount(100)).unwrap();
        }

        account.deposit(&amount(500)).unwrap();

        assert_eq!(account.balance().value(), Decimal::new(1200, 0));
    }

    #[test]
    fn test_custom_limits() {
        let limits = WithdrawalLimits {
            per_withdrawal: Decimal::new(50, 0),
            daily_withdrawals: 1,
        };
        let mut account =
            CheckingAccount::new(7, "0001".to_string(), "98765432100".to_string(), limits);
        account.deposit(&amount(200)).unwrap();

        assert!(matches!(
            account.withdraw(&amount(60)),
            Err(DomainError::WithdrawalLimitExceeded { .. })
        ));
        account.withdraw(&amount(40)).unwrap();
        assert!(matches!(
            account.withdraw(&amount(40)),
            Err(DomainError::DailyWithdrawalsExhausted { limit: 1 })
        ));
    }
}
