//! Monthly Summary
//!
//! Income, expenses and savings for one calendar month, with expenses broken
//! down by category.

use crate::models::{ExpenseCategory, Money, MonthPeriod, Transaction};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub period: MonthPeriod,
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses; negative when the month overspent
    pub savings: Money,
    /// Spending per category, in order of first appearance in the month.
    /// Categories without spending are absent.
    pub category_expenses: Vec<(ExpenseCategory, Money)>,
}

impl MonthlySummary {
    /// Summarize the transactions dated inside `period`
    pub fn generate(transactions: &[Transaction], period: MonthPeriod) -> Self {
        let mut income = Money::zero();
        let mut expenses = Money::zero();
        let mut category_expenses: Vec<(ExpenseCategory, Money)> = Vec::new();

        for txn in transactions.iter().filter(|t| period.contains(t.date())) {
            match txn.expense_category() {
                None => income += txn.amount(),
                Some(category) => {
                    expenses += txn.amount();
                    match category_expenses.iter_mut().find(|(c, _)| *c == category) {
                        Some((_, total)) => *total += txn.amount(),
                        None => category_expenses.push((category, txn.amount())),
                    }
                }
            }
        }

        Self {
            period,
            income,
            expenses,
            savings: income - expenses,
            category_expenses,
        }
    }

    /// Savings as a percentage of income; zero when there was no income
    pub fn saving_rate(&self) -> f64 {
        if self.income.is_positive() {
            self.savings.as_f64() / self.income.as_f64() * 100.0
        } else {
            0.0
        }
    }

    /// Spending in one category this month
    pub fn spent_on(&self, category: ExpenseCategory) -> Money {
        self.category_expenses
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, amount)| *amount)
            .unwrap_or_default()
    }

    /// The category with the most spending; on a tie the one seen first wins
    pub fn top_category(&self) -> Option<(ExpenseCategory, Money)> {
        self.category_expenses
            .iter()
            .copied()
            .fold(None, |best, (category, amount)| match best {
                Some((_, best_amount)) if amount <= best_amount => best,
                _ => Some((category, amount)),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expenses.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, IncomeCategory};
    use chrono::NaiveDate;

    fn txn(dollars: i64, category: Category, ymd: (i32, u32, u32)) -> Transaction {
        Transaction::new(
            Money::from_dollars(dollars),
            category,
            NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            "",
        )
        .unwrap()
    }

    fn food() -> Category {
        Category::Expense(ExpenseCategory::Food)
    }

    fn shopping() -> Category {
        Category::Expense(ExpenseCategory::Shopping)
    }

    fn salary() -> Category {
        Category::Income(IncomeCategory::Salary)
    }

    #[test]
    fn test_generate_monthly_summary() {
        let transactions = vec![
            txn(3000, salary(), (2025, 3, 1)),
            txn(40, shopping(), (2025, 3, 2)),
            txn(400, food(), (2025, 3, 5)),
            txn(100, food(), (2025, 3, 20)),
            txn(999, food(), (2025, 2, 28)),
            txn(500, salary(), (2024, 3, 1)),
        ];

        let summary = MonthlySummary::generate(&transactions, MonthPeriod::new(2025, 3).unwrap());

        assert_eq!(summary.income, Money::from_dollars(3000));
        assert_eq!(summary.expenses, Money::from_dollars(540));
        assert_eq!(summary.savings, Money::from_dollars(2460));
        assert_eq!(
            summary.category_expenses,
            vec![
                (ExpenseCategory::Shopping, Money::from_dollars(40)),
                (ExpenseCategory::Food, Money::from_dollars(500)),
            ]
        );
        assert_eq!(summary.spent_on(ExpenseCategory::Food), Money::from_dollars(500));
        assert_eq!(summary.spent_on(ExpenseCategory::Transport), Money::zero());
    }

    #[test]
    fn test_empty_month() {
        let transactions = vec![txn(3000, salary(), (2025, 3, 1))];
        let summary = MonthlySummary::generate(&transactions, MonthPeriod::new(2025, 4).unwrap());

        assert_eq!(summary.income, Money::zero());
        assert_eq!(summary.expenses, Money::zero());
        assert_eq!(summary.savings, Money::zero());
        assert!(summary.category_expenses.is_empty());
        assert!(summary.is_empty());
        assert_eq!(summary.saving_rate(), 0.0);
    }

    #[test]
    fn test_negative_savings() {
        let transactions = vec![txn(100, salary(), (2025, 3, 1)), txn(250, food(), (2025, 3, 2))];
        let summary = MonthlySummary::generate(&transactions, MonthPeriod::new(2025, 3).unwrap());

        assert_eq!(summary.savings, Money::from_dollars(-150));
        assert_eq!(summary.saving_rate(), -150.0);
    }

    #[test]
    fn test_top_category_first_seen_wins_tie() {
        let transactions = vec![
            txn(50, shopping(), (2025, 3, 1)),
            txn(50, food(), (2025, 3, 2)),
        ];
        let summary = MonthlySummary::generate(&transactions, MonthPeriod::new(2025, 3).unwrap());

        assert_eq!(
            summary.top_category(),
            Some((ExpenseCategory::Shopping, Money::from_dollars(50)))
        );
    }

    #[test]
    fn test_top_category_picks_maximum() {
        let transactions = vec![
            txn(50, shopping(), (2025, 3, 1)),
            txn(30, food(), (2025, 3, 2)),
            txn(30, food(), (2025, 3, 3)),
        ];
        let summary = MonthlySummary::generate(&transactions, MonthPeriod::new(2025, 3).unwrap());

        assert_eq!(
            summary.top_category(),
            Some((ExpenseCategory::Food, Money::from_dollars(60)))
        );
    }
}
