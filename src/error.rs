//! Error handling module
//!
//! Centralized error types for the console session.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Operator input errors
    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(String),

    #[error("Invalid date (expected dd/mm/yyyy): {0}")]
    InvalidDateFormat(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    // Environment errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for errors that end the session. Everything else is reported to
    /// the operator and the menu comes back.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Config(_))
    }
}
