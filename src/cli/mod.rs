//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger service.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryArgs};
pub use report::{handle_balance_command, handle_summary_command, WindowArgs};
pub use transaction::{handle_add_command, handle_list_command, AddArgs, ListArgs};
