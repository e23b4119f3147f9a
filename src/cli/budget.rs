//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_budget_list};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::ExpenseCategory;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for an expense category
    Set {
        /// Expense category
        category: String,
        /// Monthly limit (e.g., "400" or "400.00")
        amount: String,
    },

    /// List every budget that has been set
    #[command(alias = "ls")]
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            ledger.set_budget(&category, &amount)?;

            let category: ExpenseCategory = category.trim().parse()?;
            println!(
                "Budget for {} set to {}",
                category,
                format_amount(&settings.currency_symbol, ledger.budgets().limit_or_zero(category))
            );
        }
        BudgetCommands::List => {
            print!(
                "{}",
                format_budget_list(ledger.budgets(), &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
