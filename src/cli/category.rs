//! Category CLI commands

use clap::Args;

use crate::display::{format_all_categories, format_category_list};
use crate::error::FinanceResult;
use crate::models::TransactionType;
use crate::services::Ledger;

/// Arguments for `categories`
#[derive(Args, Debug)]
pub struct CategoryArgs {
    /// Only show categories for one transaction type
    #[arg(short = 't', long = "type")]
    pub transaction_type: Option<TransactionType>,
}

/// Handle `categories`
pub fn handle_category_command(ledger: &Ledger, args: CategoryArgs) -> FinanceResult<()> {
    let text = match args.transaction_type {
        Some(t) => format_category_list(ledger.registry(), t),
        None => format_all_categories(ledger.registry()),
    };
    print!("{}", text);
    Ok(())
}
