//! Monthly Financial Report
//!
//! Fixed-layout text report for one month:
//!
//! ```text
//! Financial Report for 3/2025
//! ========================================
//! Income: $3000.00
//! Expenses: $500.00
//! Savings: $2500.00
//! Saving Rate: 83.3%
//!
//! Expense Breakdown:
//!   Food: $500.00 (Budget: $400.00)
//! ```

use std::fmt;

use super::summary::MonthlySummary;
use crate::models::{Budgets, ExpenseCategory, Money, MonthPeriod, Transaction};

pub const REPORT_DIVIDER_WIDTH: usize = 40;

/// One line of the expense breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub category: ExpenseCategory,
    pub spent: Money,
    /// Present only when the category has a budget above zero
    pub budget: Option<Money>,
}

#[derive(Debug, Clone)]
pub struct FinancialReport {
    pub summary: MonthlySummary,
    pub breakdown: Vec<BreakdownRow>,
}

impl FinancialReport {
    pub fn generate(transactions: &[Transaction], budgets: &Budgets, period: MonthPeriod) -> Self {
        let summary = MonthlySummary::generate(transactions, period);

        let breakdown = summary
            .category_expenses
            .iter()
            .map(|(category, spent)| BreakdownRow {
                category: *category,
                spent: *spent,
                budget: budgets.get(*category).filter(|b| b.is_positive()),
            })
            .collect();

        Self { summary, breakdown }
    }
}

/// Currency prefix followed by the signed amount, e.g. "$-12.50"
fn dollars(amount: Money) -> String {
    format!("${}", amount.to_decimal_string())
}

impl fmt::Display for FinancialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;

        writeln!(f, "Financial Report for {}", summary.period)?;
        writeln!(f, "{}", "=".repeat(REPORT_DIVIDER_WIDTH))?;
        writeln!(f, "Income: {}", dollars(summary.income))?;
        writeln!(f, "Expenses: {}", dollars(summary.expenses))?;
        writeln!(f, "Savings: {}", dollars(summary.savings))?;
        writeln!(f, "Saving Rate: {:.1}%", summary.saving_rate())?;
        writeln!(f)?;
        write!(f, "Expense Breakdown:")?;

        for row in &self.breakdown {
            write!(f, "\n  {}: {}", row.category, dollars(row.spent))?;
            if let Some(budget) = row.budget {
                write!(f, " (Budget: {})", dollars(budget))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, IncomeCategory};
    use chrono::NaiveDate;

    fn txn(dollars: i64, category: Category, day: u32) -> Transaction {
        Transaction::new(
            Money::from_dollars(dollars),
            category,
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            "",
        )
        .unwrap()
    }

    fn march() -> MonthPeriod {
        MonthPeriod::new(2025, 3).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let transactions = vec![
            txn(3000, Category::Income(IncomeCategory::Salary), 1),
            txn(400, Category::Expense(ExpenseCategory::Food), 2),
            txn(100, Category::Expense(ExpenseCategory::Food), 3),
            txn(20, Category::Expense(ExpenseCategory::Transport), 4),
        ];
        let mut budgets = Budgets::new();
        budgets.set(ExpenseCategory::Food, Money::from_dollars(400)).unwrap();
        budgets.set(ExpenseCategory::Transport, Money::zero()).unwrap();

        let report = FinancialReport::generate(&transactions, &budgets, march()).to_string();

        assert_eq!(
            report,
            "Financial Report for 3/2025\n\
             ========================================\n\
             Income: $3000.00\n\
             Expenses: $520.00\n\
             Savings: $2480.00\n\
             Saving Rate: 82.7%\n\
             \n\
             Expense Breakdown:\n  \
             Food: $500.00 (Budget: $400.00)\n  \
             Transport: $20.00"
        );
    }

    #[test]
    fn test_empty_month_report() {
        let report = FinancialReport::generate(&[], &Budgets::new(), march()).to_string();

        assert_eq!(
            report,
            "Financial Report for 3/2025\n\
             ========================================\n\
             Income: $0.00\n\
             Expenses: $0.00\n\
             Savings: $0.00\n\
             Saving Rate: 0.0%\n\
             \n\
             Expense Breakdown:"
        );
    }

    #[test]
    fn test_negative_savings_format() {
        let transactions = vec![
            txn(100, Category::Income(IncomeCategory::Gift), 1),
            txn(125, Category::Expense(ExpenseCategory::Shopping), 2),
        ];
        let report = FinancialReport::generate(&transactions, &Budgets::new(), march()).to_string();

        assert!(report.contains("\nSavings: $-25.00\n"));
        assert!(report.contains("\nSaving Rate: -25.0%\n"));
    }

    #[test]
    fn test_divider_is_forty_equals() {
        let report = FinancialReport::generate(&[], &Budgets::new(), march()).to_string();
        let divider = report.lines().nth(1).unwrap();
        assert_eq!(divider.len(), 40);
        assert!(divider.chars().all(|c| c == '='));
    }
}
