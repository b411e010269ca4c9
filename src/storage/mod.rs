//! Storage layer for the finance tracker
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use transactions::{LoadOutcome, TransactionStore};
