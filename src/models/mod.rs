//! Core data models for the finance tracker
//!
//! Transactions, their direction, the money type and the category registry.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::CategoryRegistry;
pub use money::Money;
pub use transaction::{parse_date, Transaction, TransactionType, DATE_FORMAT};
