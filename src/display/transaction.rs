//! Transaction display formatting
//!
//! Register-style listing of transactions for terminal output.

use crate::models::{Transaction, TransactionType, DATE_FORMAT};

/// Marker shown in the type column
fn type_icon(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    }
}

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, currency: &str) -> String {
    format!(
        "{:<12} {:<4} {:>16} {:<15} {}",
        txn.date.format(DATE_FORMAT).to_string(),
        type_icon(txn.transaction_type),
        txn.amount.format_with_symbol(currency),
        truncate(&txn.category, 15),
        truncate(&txn.description, 25)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    days: u64,
    currency: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Last {} transactions over {} days:\n",
        transactions.len(),
        days
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');
    output.push_str(&format!(
        "{:<12} {:<4} {:>16} {:<15} {}\n",
        "Date", "Type", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency));
        output.push('\n');
    }

    output
}

/// One-line confirmation after recording a transaction
pub fn format_recorded(txn: &Transaction, currency: &str) -> String {
    format!(
        "Recorded #{}: {} {} - {} ({})",
        txn.id,
        txn.transaction_type,
        txn.amount.format_with_symbol(currency),
        txn.description,
        txn.date.format(DATE_FORMAT)
    )
}

/// Truncate to `max_chars` characters, marking the cut with "..."
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            7,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::from_minor(123_450),
            "Развлечения",
            "Билеты в кино на выходные с друзьями",
            TransactionType::Expense,
        )
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&sample(), "руб.");
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("1,234.50 руб."));
        assert!(formatted.contains("Развлечения"));
        assert!(formatted.contains("Билеты в кино на выход..."));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], 30, "руб.");
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_register_header() {
        let formatted = format_transaction_register(&[sample()], 30, "");
        assert!(formatted.starts_with("Last 1 transactions over 30 days:"));
        assert!(formatted.contains("Description"));
    }

    #[test]
    fn test_format_recorded() {
        let text = format_recorded(&sample(), "руб.");
        assert!(text.starts_with("Recorded #7: expense 1,234.50 руб."));
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Еда", 10), "Еда");
        let result = truncate("Коммунальные платежи", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }
}
