//! Spending analysis
//!
//! Compares a month against the one before it and checks spending against
//! budgets, producing short human-readable insights.

use std::fmt;

use super::summary::MonthlySummary;
use crate::models::{Budgets, ExpenseCategory, Money, MonthPeriod, Transaction};

/// Usage above this percentage of a budget earns a warning
pub const BUDGET_WARNING_PERCENT: f64 = 80.0;

/// One observation about the month's spending
#[derive(Debug, Clone, PartialEq)]
pub enum Insight {
    SavingsIncreased(Money),
    SavingsDecreased(Money),
    OverBudget {
        category: ExpenseCategory,
        percent_over: f64,
    },
    NearBudget {
        category: ExpenseCategory,
        percent_used: f64,
    },
    TopCategory {
        category: ExpenseCategory,
        amount: Money,
    },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SavingsIncreased(delta) => write!(
                f,
                "Great! Your savings increased by {} compared to last month",
                delta
            ),
            Self::SavingsDecreased(delta) => write!(
                f,
                "Warning: Your savings decreased by {} compared to last month",
                delta
            ),
            Self::OverBudget {
                category,
                percent_over,
            } => write!(
                f,
                "You exceeded your {} budget by {:.1}%",
                category, percent_over
            ),
            Self::NearBudget {
                category,
                percent_used,
            } => write!(
                f,
                "Warning: You've used {:.1}% of your {} budget",
                percent_used, category
            ),
            Self::TopCategory { category, amount } => write!(
                f,
                "Your highest spending category is {} ({})",
                category, amount
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpendingAnalysis {
    pub current: MonthlySummary,
    pub previous: MonthlySummary,
    pub insights: Vec<Insight>,
}

impl SpendingAnalysis {
    /// Analyze `period` against the month before it
    pub fn generate(transactions: &[Transaction], budgets: &Budgets, period: MonthPeriod) -> Self {
        let current = MonthlySummary::generate(transactions, period);
        let previous = MonthlySummary::generate(transactions, period.previous());

        let mut insights = Vec::new();

        if current.savings > previous.savings {
            insights.push(Insight::SavingsIncreased(current.savings - previous.savings));
        } else if current.savings < previous.savings {
            insights.push(Insight::SavingsDecreased(previous.savings - current.savings));
        }

        for (category, spent) in &current.category_expenses {
            let budget = budgets.limit_or_zero(*category);
            if !budget.is_positive() {
                continue;
            }

            let percentage = spent.as_f64() / budget.as_f64() * 100.0;
            if percentage > 100.0 {
                insights.push(Insight::OverBudget {
                    category: *category,
                    percent_over: percentage - 100.0,
                });
            } else if percentage > BUDGET_WARNING_PERCENT {
                insights.push(Insight::NearBudget {
                    category: *category,
                    percent_used: percentage,
                });
            }
        }

        if let Some((category, amount)) = current.top_category() {
            insights.push(Insight::TopCategory { category, amount });
        }

        Self {
            current,
            previous,
            insights,
        }
    }

    /// The insights rendered as sentences, in order
    pub fn messages(&self) -> Vec<String> {
        self.insights.iter().map(|i| i.to_string()).collect()
    }
}
