//! Financial summary report
//!
//! Totals per transaction type, per-category breakdowns with percentage
//! shares, and the resulting balance for a window of days.

use chrono::NaiveDate;

use crate::models::{Money, TransactionType};
use crate::services::{Ledger, TransactionFilter};

/// One category line of the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: Money,
    /// Share of the type's total, 0 when that total is 0
    pub percentage: f64,
}

/// Sign of the window's balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Surplus,
    Deficit,
    Even,
}

impl BalanceStatus {
    fn of(balance: Money) -> Self {
        if balance.is_positive() {
            Self::Surplus
        } else if balance.is_negative() {
            Self::Deficit
        } else {
            Self::Even
        }
    }
}

/// Summary of a window of the ledger
#[derive(Debug, Clone)]
pub struct FinancialSummary {
    pub days: u64,
    /// First date included in the window
    pub start_date: NaiveDate,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income categories, largest first
    pub income: Vec<CategoryBreakdown>,
    /// Expense categories, largest first
    pub expenses: Vec<CategoryBreakdown>,
    pub balance: Money,
    pub status: BalanceStatus,
}

impl FinancialSummary {
    /// Generate a summary for the last `days` days
    pub fn generate(ledger: &Ledger, days: u64) -> Self {
        Self::generate_with(ledger, &TransactionFilter::last_days(days))
    }

    /// Generate a summary for an explicit window
    ///
    /// Any type restriction on `filter` is ignored; both sides are always
    /// reported.
    pub fn generate_with(ledger: &Ledger, filter: &TransactionFilter) -> Self {
        let mut filter = filter.clone();
        filter.transaction_type = None;
        filter.limit = None;

        let summary = ledger.category_summary(&filter);
        let total_income = summary.total(TransactionType::Income);
        let total_expenses = summary.total(TransactionType::Expense);
        let balance = total_income - total_expenses;

        let breakdown = |transaction_type: TransactionType| -> Vec<CategoryBreakdown> {
            let total = summary.total(transaction_type);
            summary
                .ranked(transaction_type)
                .into_iter()
                .map(|(category, amount)| CategoryBreakdown {
                    category: category.to_string(),
                    amount,
                    percentage: amount.percentage_of(total),
                })
                .collect()
        };

        Self {
            days: filter.days,
            start_date: filter.cutoff(),
            total_income,
            total_expenses,
            income: breakdown(TransactionType::Income),
            expenses: breakdown(TransactionType::Expense),
            balance,
            status: BalanceStatus::of(balance),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Financial summary for the last {} days\n", self.days));
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!(
            "\nIncome: {}\n",
            self.total_income.format_with_symbol(currency)
        ));
        push_rows(&mut output, &self.income, currency);

        output.push_str(&format!(
            "\nExpenses: {}\n",
            self.total_expenses.format_with_symbol(currency)
        ));
        push_rows(&mut output, &self.expenses, currency);

        output.push_str(&format!(
            "\nBalance: {}\n",
            self.balance.format_with_symbol(currency)
        ));
        output.push_str(match self.status {
            BalanceStatus::Surplus => "You are in the black.\n",
            BalanceStatus::Deficit => "Expenses exceed income.\n",
            BalanceStatus::Even => "You broke even.\n",
        });

        output
    }
}

fn push_rows(output: &mut String, rows: &[CategoryBreakdown], currency: &str) {
    for row in rows {
        output.push_str(&format!(
            "  • {}: {} ({:.1}%)\n",
            row.category,
            row.amount.format_with_symbol(currency),
            row.percentage
        ));
    }
}
