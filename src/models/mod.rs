//! Core data models for the finance ledger
//!
//! Transactions, the fixed category taxonomy, budgets, money and months.

pub mod budget;
pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{BudgetLimit, Budgets};
pub use category::{Category, ExpenseCategory, IncomeCategory, TransactionKind};
pub use money::{Money, MAX_AMOUNT};
pub use period::MonthPeriod;
pub use transaction::Transaction;
