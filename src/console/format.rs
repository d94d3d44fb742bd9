//! Report formatting
//!
//! Currency values are rendered Brazilian style: `R$ 1.234,56` with a dot
//! for thousands and a comma for centavos. Dates follow dd/mm/yyyy.

use rust_decimal::Decimal;

use crate::ops::{AccountSummary, Statement};

/// Timestamp layout used on statement lines
const STATEMENT_TIME: &str = "%d/%m/%Y %H:%M:%S";

/// Format a value as Brazilian currency.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let plain = format!("{rounded:.2}");

    let (digits, negative) = match plain.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (plain.as_str(), false),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let sign = if negative { "-" } else { "" };
    format!("R$ {sign}{},{fraction}", group_thousands(integer))
}

/// Insert a dot every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render a statement: one line per applied transaction, then the balance.
pub fn render_statement(statement: &Statement) -> String {
    let mut out = String::new();
    out.push_str("\n======== STATEMENT ========\n");

    if statement.entries.is_empty() {
        out.push_str("No transactions recorded.\n");
    } else {
        for record in &statement.entries {
            out.push_str(&format!(
                "{} - {}: {}\n",
                record.timestamp().format(STATEMENT_TIME),
                record.kind(),
                format_brl(record.amount().value()),
            ));
        }
    }

    out.push_str(&format!(
        "\nCurrent balance: {}\n",
        format_brl(statement.balance)
    ));
    out.push_str("===========================\n");
    out
}

/// Render the account listing, one block per account in creation order.
pub fn render_account_list(accounts: &[AccountSummary]) -> String {
    let mut out = String::new();
    out.push_str("\n======== ACCOUNTS ========\n");

    if accounts.is_empty() {
        out.push_str("No accounts registered.\n");
    } else {
        for summary in accounts {
            out.push_str(&format!(
                "Branch: {}\nAccount: {}\nHolder: {}\nTax id: {}\n",
                summary.branch, summary.number, summary.holder_name, summary.holder_tax_id,
            ));
            out.push_str("--------------------------\n");
        }
    }

    out.push_str("==========================\n");
    out
}
