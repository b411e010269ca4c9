//! Service layer for the finance tracker
//!
//! Validation and querying on top of the storage layer.

pub mod ledger;

pub use ledger::{
    today, AddedTransaction, CategorySummary, CreateTransactionInput, Ledger, TransactionFilter,
};
