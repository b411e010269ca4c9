//! CLI commands for reports

use clap::Args;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::reports::FinancialSummary;
use crate::services::Ledger;

/// Window argument shared by `summary` and `balance`
#[derive(Args, Debug)]
pub struct WindowArgs {
    /// Window size in days
    #[arg(short = 'n', long)]
    pub days: Option<u64>,
}

impl WindowArgs {
    fn days(&self, settings: &Settings) -> u64 {
        self.days.unwrap_or(u64::from(settings.default_window_days))
    }
}

/// Handle `summary`
pub fn handle_summary_command(
    ledger: &Ledger,
    settings: &Settings,
    args: WindowArgs,
) -> FinanceResult<()> {
    let report = FinancialSummary::generate(ledger, args.days(settings));
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle `balance`
pub fn handle_balance_command(
    ledger: &Ledger,
    settings: &Settings,
    args: WindowArgs,
) -> FinanceResult<()> {
    let days = args.days(settings);
    let balance = ledger.get_balance(days);
    println!(
        "Balance for the last {} days: {}",
        days,
        balance.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}
