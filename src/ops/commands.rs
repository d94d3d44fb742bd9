//! Command definitions
//!
//! Commands represent operator intentions; results are what the console
//! reports back. Amounts travel as raw decimals and are validated by the
//! handler that executes the command.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::TransactionRecord;
use crate::model::WithdrawalLimits;

// =========================================================================
// CreateCustomerCommand
// =========================================================================

/// Command to register a new customer
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub tax_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

impl CreateCustomerCommand {
    pub fn new(tax_id: String, name: String, birth_date: NaiveDate, address: String) -> Self {
        Self {
            tax_id,
            name,
            birth_date,
            address,
        }
    }
}

/// Result of a successful customer registration
#[derive(Debug, Clone)]
pub struct CreateCustomerResult {
    pub tax_id: String,
    pub name: String,
}

// =========================================================================
// OpenAccountCommand
// =========================================================================

/// Command to open a checking account for an existing customer
#[derive(Debug, Clone)]
pub struct OpenAccountCommand {
    pub tax_id: String,
    pub branch: String,
    pub limits: WithdrawalLimits,
}

impl OpenAccountCommand {
    pub fn new(tax_id: String, branch: String) -> Self {
        Self {
            tax_id,
            branch,
            limits: WithdrawalLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: WithdrawalLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// Result of a successful account opening
#[derive(Debug, Clone)]
pub struct OpenAccountResult {
    pub account_number: u32,
    pub branch: String,
}

// =========================================================================
// DepositCommand
// =========================================================================

/// Command to deposit money into an account
#[derive(Debug, Clone)]
pub struct DepositCommand {
    pub account_number: u32,
    /// Amount as entered by the operator, validated on execution
    pub amount: Decimal,
}

impl DepositCommand {
    pub fn new(account_number: u32, amount: Decimal) -> Self {
        Self {
            account_number,
            amount,
        }
    }
}

/// Result of a successful deposit
#[derive(Debug, Clone)]
pub struct DepositResult {
    pub account_number: u32,
    pub amount: Decimal,
    /// Balance after the deposit was applied
    pub balance: Decimal,
}

// =========================================================================
// WithdrawCommand
// =========================================================================

/// Command to withdraw money from an account
#[derive(Debug, Clone)]
pub struct WithdrawCommand {
    pub account_number: u32,
    /// Amount as entered by the operator, validated on execution
    pub amount: Decimal,
}

impl WithdrawCommand {
    pub fn new(account_number: u32, amount: Decimal) -> Self {
        Self {
            account_number,
            amount,
        }
    }
}

/// Result of a successful withdrawal
#[derive(Debug, Clone)]
pub struct WithdrawResult {
    pub account_number: u32,
    pub amount: Decimal,
    /// Balance after the withdrawal was applied
    pub balance: Decimal,
}

// =========================================================================
// StatementCommand
// =========================================================================

/// Command to read an account statement
#[derive(Debug, Clone)]
pub struct StatementCommand {
    pub account_number: u32,
}

impl StatementCommand {
    pub fn new(account_number: u32) -> Self {
        Self { account_number }
    }
}

/// Snapshot of an account's history and balance
#[derive(Debug, Clone)]
pub struct Statement {
    pub account_number: u32,
    /// Applied transactions, oldest first
    pub entries: Vec<TransactionRecord>,
    pub balance: Decimal,
}

/// One line of the account listing
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub number: u32,
    pub branch: String,
    pub holder_name: String,
    pub holder_tax_id: String,
}
