//! Display formatting for terminal output
//!
//! Formatting helpers shared by the CLI commands and the interactive shell.

pub mod report;
pub mod transaction;

pub use report::{
    format_balance, format_budget_list, format_categories, format_insights,
    format_monthly_summary,
};
pub use transaction::format_transaction_register;

use crate::models::Money;

/// Currency symbol followed by the signed amount, e.g. "$-12.50"
pub fn format_amount(symbol: &str, amount: Money) -> String {
    format!("{}{}", symbol, amount.to_decimal_string())
}
