//! Transaction History
//!
//! Ledger records kept per account.
//! Records are immutable facts that have happened; a history only ever grows.

use chrono::{DateTime, Utc};
use std::fmt;

use super::Amount;

/// Kind of ledger record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money entered the account
    Deposit,

    /// Money left the account
    Withdrawal,
}

impl TransactionKind {
    /// Get the kind as a statement label
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One applied transaction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Amount,
    timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a record for an applied transaction.
    pub fn new(kind: TransactionKind, amount: Amount, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    /// Get the record kind
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Get the amount moved
    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Get the moment the transaction was applied
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Append-only sequence of transaction records, owned by exactly one account.
///
/// Nothing removes or rewrites entries, and failed operations never reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn add(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// All records in insertion order
    pub fn report(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// True when no transaction was ever applied
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of applied transactions
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(kind: TransactionKind, units: i64) -> TransactionRecord {
        let amount = Amount::new(Decimal::new(units, 0)).unwrap();
        TransactionRecord::new(kind, amount, Utc::now())
    }

    #[test]
    fn test_history_starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.report().is_empty());
    }

    #[test]
    fn test_history_preserves_insertion_order() {
        let mut history = History::new();
        history.add(record(TransactionKind::Deposit, 100));
        history.add(record(TransactionKind::Withdrawal, 40));
        history.add(record(TransactionKind::Deposit, 10));

        let kinds: Vec<_> = history.report().iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
                TransactionKind::Deposit,
            ]
        );
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_record_accessors() {
        let rec = record(TransactionKind::Withdrawal, 40);

        assert_eq!(rec.kind(), TransactionKind::Withdrawal);
        assert_eq!(rec.amount().value(), Decimal::new(40, 0));
        assert!(rec.timestamp() <= Utc::now());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TransactionKind::Deposit.label(), "Deposit");
        assert_eq!(TransactionKind::Withdrawal.to_string(), "Withdrawal");
    }
}
