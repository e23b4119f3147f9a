//! Formatting for balances, summaries, insights and budgets

use super::format_amount;
use crate::models::{Budgets, ExpenseCategory, IncomeCategory, Money};
use crate::reports::MonthlySummary;

pub const NO_INSIGHTS_MESSAGE: &str =
    "Not enough data for analysis. Keep tracking your transactions!";

/// Current balance plus a one-line status
pub fn format_balance(balance: Money, symbol: &str) -> String {
    let status = if balance.is_positive() {
        "Status: Positive balance ✓"
    } else {
        "Status: Negative balance ⚠"
    };
    format!(
        "Current Balance: {}\n{}\n",
        format_amount(symbol, balance),
        status
    )
}

/// Monthly totals; the saving rate is only shown when there was income
pub fn format_monthly_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("--- Monthly Summary ({}) ---\n", summary.period));
    output.push_str(&format!("Income: {}\n", format_amount(symbol, summary.income)));
    output.push_str(&format!("Expenses: {}\n", format_amount(symbol, summary.expenses)));
    output.push_str(&format!("Savings: {}\n", format_amount(symbol, summary.savings)));

    if summary.income.is_positive() {
        output.push_str(&format!("Saving Rate: {:.1}%\n", summary.saving_rate()));
    }

    output
}

/// Bulleted insights, or a hint when there is nothing to say yet
pub fn format_insights(insights: &[String]) -> String {
    if insights.is_empty() {
        return format!("{}\n", NO_INSIGHTS_MESSAGE);
    }

    insights.iter().map(|i| format!("• {}\n", i)).collect()
}

pub fn format_budget_list(budgets: &Budgets, symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    budgets
        .iter()
        .map(|limit| {
            format!(
                "{:<14} {}\n",
                limit.category.name(),
                format_amount(symbol, limit.amount)
            )
        })
        .collect()
}

/// Both category taxonomies, one line each
pub fn format_categories() -> String {
    let income: Vec<_> = IncomeCategory::all().iter().map(|c| c.name()).collect();
    let expense: Vec<_> = ExpenseCategory::all().iter().map(|c| c.name()).collect();
    format!(
        "Income categories: {}\nExpense categories: {}\n",
        income.join(", "),
        expense.join(", ")
    )
}
