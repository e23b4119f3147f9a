use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_ledger::cli::{
    handle_add_command, handle_analysis_command, handle_balance_command, handle_budget_command,
    handle_list_command, handle_report_command, handle_summary_command, AddCommands,
    BudgetCommands, Shell,
};
use finance_ledger::config::{paths::LedgerPaths, settings::Settings};
use finance_ledger::display::format_categories;
use finance_ledger::logging::init_tracing;
use finance_ledger::storage::FileStore;
use finance_ledger::{Ledger, LedgerResult};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "Track income and expenses in fixed categories, set monthly budgets \
                  per expense category, and get balances, monthly summaries, \
                  spending insights and monthly reports. Run without a command \
                  to open the interactive menu."
)]
struct Cli {
    /// Ledger data file (defaults to finance_data.txt in the config directory)
    #[arg(long, global = true, env = "FINANCE_LEDGER_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction
    #[command(subcommand)]
    Add(AddCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show the current balance
    Balance,

    /// Show income, expenses and savings for a month
    Summary {
        /// Month to summarize (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Compare this month with last month and check budgets
    Analysis,

    /// Print the monthly financial report
    Report {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List all transactions in the order they were entered
    #[command(alias = "ls")]
    List,

    /// List the income and expense categories
    Categories,

    /// Open the interactive menu
    Shell,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = settings.resolve_data_file(&paths, cli.data_file);

    let mut ledger = Ledger::open(FileStore::new(&data_file))?;

    let result = run_command(&mut ledger, &settings, &paths, &data_file, cli.command);

    if let Err(e) = ledger.close() {
        tracing::warn!(error = %e, "failed to flush ledger on exit");
    }

    result?;
    Ok(())
}

fn run_command(
    ledger: &mut Ledger,
    settings: &Settings,
    paths: &LedgerPaths,
    data_file: &Path,
    command: Option<Commands>,
) -> LedgerResult<()> {
    match command {
        Some(Commands::Add(cmd)) => handle_add_command(ledger, settings, cmd),
        Some(Commands::Budget(cmd)) => handle_budget_command(ledger, settings, cmd),
        Some(Commands::Balance) => handle_balance_command(ledger, settings),
        Some(Commands::Summary { period }) => {
            handle_summary_command(ledger, settings, period.as_deref())
        }
        Some(Commands::Analysis) => handle_analysis_command(ledger),
        Some(Commands::Report { period }) => handle_report_command(ledger, period.as_deref()),
        Some(Commands::List) => handle_list_command(ledger, settings),
        Some(Commands::Categories) => {
            print!("{}", format_categories());
            Ok(())
        }
        Some(Commands::Config) => {
            println!("Finance Ledger Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Data file:        {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Transactions:    {}", ledger.transactions().len());
            println!("  Budgets:         {}", ledger.budgets().len());
            Ok(())
        }
        Some(Commands::Shell) | None => {
            let stdin = io::stdin();
            Shell::new(ledger, settings, stdin.lock(), io::stdout()).run()
        }
    }
}
