//! Transaction CLI commands
//!
//! Recording income/expenses and listing recent transactions.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_recorded, format_transaction_register};
use crate::error::FinanceResult;
use crate::models::{parse_date, Money, TransactionType};
use crate::services::{CreateTransactionInput, Ledger, TransactionFilter};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type: income or expense
    pub kind: TransactionType,

    /// Amount (the sign is ignored)
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Category name or its number from `categories`
    #[arg(short, long)]
    pub category: String,

    /// Description (defaults to "<Type> - <Category>")
    #[arg(short, long)]
    pub description: Option<String>,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Window size in days
    #[arg(short = 'n', long)]
    pub days: Option<u64>,

    /// Only show one transaction type
    #[arg(short = 't', long = "type")]
    pub transaction_type: Option<TransactionType>,

    /// Maximum number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `add`
pub fn handle_add_command(
    ledger: &mut Ledger,
    settings: &Settings,
    args: AddArgs,
) -> FinanceResult<()> {
    let amount = Money::parse(&args.amount)?;
    let category = ledger.registry().resolve(args.kind, &args.category)?;
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let added = ledger.add(CreateTransactionInput {
        amount: amount.as_major(),
        category: category.to_string(),
        description: args.description.unwrap_or_default(),
        transaction_type: args.kind,
        date,
    })?;

    println!("{}", format_recorded(&added.transaction, &settings.currency_symbol));

    if let Some(err) = &added.save_error {
        eprintln!(
            "Warning: the transaction is kept for this session but was not saved: {}",
            err
        );
    }

    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    ledger: &Ledger,
    settings: &Settings,
    args: ListArgs,
) -> FinanceResult<()> {
    let days = args.days.unwrap_or(u64::from(settings.default_window_days));

    let mut filter =
        TransactionFilter::last_days(days).limit(args.limit.unwrap_or(settings.list_limit));
    filter.transaction_type = args.transaction_type;

    let transactions = ledger.query(&filter);
    print!(
        "{}",
        format_transaction_register(&transactions, days, &settings.currency_symbol)
    );

    Ok(())
}
