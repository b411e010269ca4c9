//! Finance Tracker - personal income and expense ledger
//!
//! This library records income and expense transactions in a local JSON
//! store and derives time-windowed summaries: balance, per-category totals
//! and percentage breakdowns.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, money and the category registry
//! - `storage`: JSON file storage layer
//! - `services`: The ledger (recording, querying, aggregation)
//! - `reports`: Financial summary report
//! - `display` / `cli`: Terminal formatting and command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use finance::models::TransactionType;
//! use finance::services::{CreateTransactionInput, Ledger};
//!
//! let mut ledger = Ledger::open("finances.json".into());
//! ledger.add(CreateTransactionInput {
//!     amount: 450.0,
//!     category: "Еда".to_string(),
//!     description: String::new(),
//!     transaction_type: TransactionType::Expense,
//!     date: None,
//! })?;
//! println!("{}", ledger.get_balance(30));
//! # Ok::<(), finance::FinanceError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
