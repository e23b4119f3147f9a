//! Reports module for the finance ledger
//!
//! Derivations over the recorded history: the monthly summary, spending
//! insights, and the monthly financial report.

pub mod analysis;
pub mod monthly;
pub mod summary;

pub use analysis::{Insight, SpendingAnalysis};
pub use monthly::{BreakdownRow, FinancialReport};
pub use summary::MonthlySummary;
