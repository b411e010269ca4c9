//! Transaction model
//!
//! A transaction is a single income or expense event. Amounts are always
//! stored non-negative; direction is carried by [`TransactionType`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::FinanceError;

/// Textual date format used by the persisted store and CLI input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Capitalized label used in synthesized descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(FinanceError::Validation(format!(
                "Unknown transaction type '{}', expected 'income' or 'expense'",
                other
            ))),
        }
    }
}

/// Parse a `YYYY-MM-DD` date typed by a user
pub fn parse_date(input: &str) -> Result<NaiveDate, FinanceError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid date '{}' (expected YYYY-MM-DD): {}",
            input.trim(),
            e
        ))
    })
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Positional identifier, `count + 1` at creation time
    pub id: u64,

    #[serde(with = "date_format")]
    pub date: NaiveDate,

    /// Non-negative amount
    pub amount: Money,

    pub category: String,

    pub description: String,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The sign of `amount` is dropped, and a blank description is replaced
    /// by `"<Type> - <Category>"`.
    pub fn new(
        id: u64,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        let category = category.into();
        let description = description.into();
        let description = if description.trim().is_empty() {
            default_description(transaction_type, &category)
        } else {
            description
        };

        Self {
            id,
            date,
            amount: amount.abs(),
            category,
            description,
            transaction_type,
        }
    }

    /// Amount with direction applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Label used when a transaction is recorded without a description
pub fn default_description(transaction_type: TransactionType, category: &str) -> String {
    format!("{} - {}", transaction_type.label(), category)
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.signed_amount(),
            self.description
        )
    }
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}
