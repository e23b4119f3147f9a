//! Finance Ledger - a personal finance ledger for the terminal
//!
//! Records income and expense transactions in fixed category taxonomies,
//! keeps monthly per-category budgets, and derives balances, monthly
//! summaries, spending insights and a monthly report. Everything is saved
//! to a single sectioned text file after every change.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories, transactions, budgets and month periods
//! - `storage`: The text file format and the stores that read and write it
//! - `ledger`: The ledger itself and its operations
//! - `reports`: Monthly summary, spending analysis and the monthly report
//! - `display`: Terminal formatting shared by the commands and the shell
//! - `cli`: Command handlers and the interactive shell
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```
//! use finance_ledger::Ledger;
//!
//! let mut ledger = Ledger::in_memory();
//! ledger.add_transaction("100", "Salary", "income", "").unwrap();
//! ledger.add_transaction("30", "Food", "expense", "groceries").unwrap();
//! assert_eq!(ledger.balance().to_string(), "$70.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
