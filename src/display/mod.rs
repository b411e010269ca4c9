//! Display formatting for terminal output

pub mod category;
pub mod transaction;

pub use category::{format_all_categories, format_category_list};
pub use transaction::{format_recorded, format_transaction_register, format_transaction_row};
