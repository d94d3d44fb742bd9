//! Configuration module
//!
//! Loads configuration from environment variables. Every variable is
//! optional, so the console runs with no environment at all.

use std::env;

use rust_decimal::Decimal;

use crate::model::WithdrawalLimits;

/// Branch code stamped on accounts when no override is set
const DEFAULT_BRANCH: &str = "0001";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Branch code stamped on new accounts
    pub branch: String,

    /// Largest single withdrawal for new checking accounts
    pub withdrawal_limit: Decimal,

    /// Daily withdrawal quota for new checking accounts
    pub daily_withdrawals: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let branch = env::var("TELLER_BRANCH").unwrap_or(defaults.branch);

        let withdrawal_limit = match env::var("TELLER_WITHDRAWAL_LIMIT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TELLER_WITHDRAWAL_LIMIT"))?,
            Err(_) => defaults.withdrawal_limit,
        };
        if withdrawal_limit <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue("TELLER_WITHDRAWAL_LIMIT"));
        }

        let daily_withdrawals = match env::var("TELLER_DAILY_WITHDRAWALS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TELLER_DAILY_WITHDRAWALS"))?,
            Err(_) => defaults.daily_withdrawals,
        };

        Ok(Self {
            branch,
            withdrawal_limit,
            daily_withdrawals,
        })
    }

    /// Withdrawal rules for accounts opened under this configuration
    pub fn limits(&self) -> WithdrawalLimits {
        WithdrawalLimits {
            per_withdrawal: self.withdrawal_limit,
            daily_withdrawals: self.daily_withdrawals,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let limits = WithdrawalLimits::default();
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            withdrawal_limit: limits.per_withdrawal,
            daily_withdrawals: limits.daily_withdrawals,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
