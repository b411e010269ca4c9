//! Reports module for the finance tracker

pub mod summary;

pub use summary::{BalanceStatus, CategoryBreakdown, FinancialSummary};
