use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance::cli::{
    handle_add_command, handle_balance_command, handle_category_command, handle_list_command,
    handle_summary_command, AddArgs, CategoryArgs, ListArgs, WindowArgs,
};
use finance::config::{FinancePaths, Settings};
use finance::services::Ledger;
use finance::storage::LoadOutcome;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal income and expense ledger",
    long_about = "Records income and expenses in a local JSON file and reports \
                  balances and per-category breakdowns over recent days."
)]
struct Cli {
    /// Ledger file to use instead of the one in the data directory
    #[arg(short, long, global = true, env = "FINANCE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an income or an expense
    Add(AddArgs),

    /// List recent transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show totals, category breakdowns and balance
    Summary(WindowArgs),

    /// Show the balance for a window
    Balance(WindowArgs),

    /// Show the available categories
    Categories(CategoryArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "finance=debug" } else { "finance=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = cli.file.clone().unwrap_or_else(|| paths.ledger_file());

    let mut ledger = Ledger::open(ledger_path.clone());
    if let LoadOutcome::Corrupt(reason) = ledger.load_outcome() {
        eprintln!(
            "Warning: could not read {} ({}); starting with an empty ledger.",
            ledger_path.display(),
            reason
        );
    }

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut ledger, &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&ledger, &settings, args)?,
        Some(Commands::Summary(args)) => handle_summary_command(&ledger, &settings, args)?,
        Some(Commands::Balance(args)) => handle_balance_command(&ledger, &settings, args)?,
        Some(Commands::Categories(args)) => handle_category_command(&ledger, args)?,
        Some(Commands::Config { write }) => {
            if write {
                settings.save(&paths)?;
            }

            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", ledger_path.display());
            println!();
            println!("Settings:");
            println!("  Default window:  {} days", settings.default_window_days);
            println!("  List limit:      {}", settings.list_limit);
            println!("  Currency:        {}", settings.currency_symbol);
        }
        None => {
            println!("Finance Tracker - personal income and expense ledger");
            println!();
            println!("Run 'finance --help' for usage information.");
        }
    }

    Ok(())
}
