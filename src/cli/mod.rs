//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod budget;
pub mod report;
pub mod shell;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{
    handle_analysis_command, handle_balance_command, handle_report_command,
    handle_summary_command,
};
pub use shell::Shell;
pub use transaction::{handle_add_command, handle_list_command, AddCommands};
