//! Domain Error Types
//!
//! Pure domain errors that don't depend on the console layer.

use thiserror::Error;

use super::AmountError;

/// Business rule violations reported by the account model and the directory.
///
/// These errors are independent of how the operator entered the request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Amount failed validation (zero, negative, sub-centavo precision,
    /// or over the maximum allowed value)
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// Insufficient balance for a withdrawal
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    },

    /// Withdrawal larger than the per-withdrawal cap
    #[error("Withdrawal exceeds the per-withdrawal limit of {limit}")]
    WithdrawalLimitExceeded { limit: rust_decimal::Decimal },

    /// Daily withdrawal quota already used up
    #[error("Daily withdrawal limit reached ({limit} per day)")]
    DailyWithdrawalsExhausted { limit: u32 },

    /// Customer not found
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(u32),

    /// Tax id already registered
    #[error("Customer already registered: {0}")]
    DuplicateCustomer(String),
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(
        requested: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    ) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }
}
