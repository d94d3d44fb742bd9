//! teller Library
//!
//! Re-exports modules for integration testing and external use.

pub mod console;
pub mod directory;
pub mod domain;
pub mod model;
pub mod ops;

pub mod config;
mod error;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use domain::{Amount, AmountError, Balance, DomainError};
