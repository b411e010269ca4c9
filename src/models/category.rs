//! Category registry
//!
//! Categories are a closed vocabulary fixed for the lifetime of the process,
//! one ordered list per transaction type.

use super::transaction::TransactionType;
use crate::error::{FinanceError, FinanceResult};

const INCOME_CATEGORIES: &[&str] = &[
    "Зарплата",
    "Фриланс",
    "Инвестиции",
    "Подарки",
    "Прочие доходы",
];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Еда",
    "Транспорт",
    "Развлечения",
    "Коммунальные",
    "Здоровье",
    "Одежда",
    "Образование",
    "Прочие расходы",
];

/// Static lookup of valid categories per transaction type
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRegistry;

impl CategoryRegistry {
    /// Ordered category names for a transaction type
    pub fn categories(&self, transaction_type: TransactionType) -> &'static [&'static str] {
        match transaction_type {
            TransactionType::Income => INCOME_CATEGORIES,
            TransactionType::Expense => EXPENSE_CATEGORIES,
        }
    }

    /// Check whether `name` is a registered category for the type
    pub fn contains(&self, transaction_type: TransactionType, name: &str) -> bool {
        self.categories(transaction_type).contains(&name)
    }

    /// Select a category by its 1-based menu position
    pub fn category_at(
        &self,
        transaction_type: TransactionType,
        position: usize,
    ) -> FinanceResult<&'static str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.categories(transaction_type).get(idx))
            .copied()
            .ok_or_else(|| FinanceError::category_not_found(format!("#{}", position)))
    }

    /// Resolve user input to a registered category
    ///
    /// Accepts either an exact category name or a 1-based position.
    pub fn resolve(
        &self,
        transaction_type: TransactionType,
        input: &str,
    ) -> FinanceResult<&'static str> {
        let input = input.trim();

        if let Some(name) = self
            .categories(transaction_type)
            .iter()
            .find(|name| **name == input)
        {
            return Ok(*name);
        }

        if let Ok(position) = input.parse::<usize>() {
            return self.category_at(transaction_type, position);
        }

        Err(FinanceError::Validation(format!(
            "'{}' is not a valid {} category",
            input, transaction_type
        )))
    }
}
