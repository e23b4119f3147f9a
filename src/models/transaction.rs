//! Transaction model
//!
//! A transaction is an immutable income or expense record. Its kind is
//! carried by its category, so the two can never disagree.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::category::{Category, ExpenseCategory, TransactionKind};
use super::money::{Money, MAX_AMOUNT};

/// Only constructed through [`Transaction::new`], so the amount invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Always strictly positive; the kind decides the sign in the balance
    amount: Money,
    category: Category,
    date: NaiveDate,
    description: String,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// Line breaks in the description are flattened to spaces and surrounding
    /// whitespace is trimmed, so the description reads back unchanged from
    /// the data file.
    pub fn new(
        amount: Money,
        category: Category,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<Self, TransactionValidationError> {
        if !amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(amount));
        }
        if !amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(amount));
        }

        let description: String = description.into();
        let description = description.replace(['\r', '\n'], " ").trim().to_string();

        Ok(Self {
            amount,
            category,
            date,
            description,
        })
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kind(&self) -> TransactionKind {
        self.category.kind()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }

    /// The expense category, if this is an expense
    pub fn expense_category(&self) -> Option<ExpenseCategory> {
        self.category.as_expense()
    }

    /// Amount with the sign it contributes to the balance
    pub fn signed_amount(&self) -> Money {
        if self.is_expense() {
            -self.amount
        } else {
            self.amount
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind(),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeCategory;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            Money::from_cents(5000),
            Category::Expense(ExpenseCategory::Food),
            date(),
            "Groceries",
        )
        .unwrap();

        assert_eq!(txn.amount(), Money::from_cents(5000));
        assert_eq!(txn.kind(), TransactionKind::Expense);
        assert_eq!(txn.expense_category(), Some(ExpenseCategory::Food));
        assert_eq!(txn.signed_amount(), Money::from_cents(-5000));
        assert!(txn.is_expense());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let category = Category::Income(IncomeCategory::Salary);
        assert!(Transaction::new(Money::zero(), category, date(), "").is_err());
        assert!(Transaction::new(Money::from_cents(-1), category, date(), "").is_err());
    }

    #[test]
    fn test_rejects_amount_over_max() {
        let category = Category::Income(IncomeCategory::Salary);
        assert!(Transaction::new(MAX_AMOUNT, category, date(), "").is_ok());
        assert_eq!(
            Transaction::new(MAX_AMOUNT + Money::from_cents(1), category, date(), ""),
            Err(TransactionValidationError::AmountTooLarge(
                MAX_AMOUNT + Money::from_cents(1)
            ))
        );
    }

    #[test]
    fn test_description_is_single_line() {
        let txn = Transaction::new(
            Money::from_cents(100),
            Category::Income(IncomeCategory::Gift),
            date(),
            "from\ngrandma\r\n",
        )
        .unwrap();
        assert_eq!(txn.description(), "from grandma");
    }

    #[test]
    fn test_description_is_trimmed() {
        let txn = Transaction::new(
            Money::from_cents(100),
            Category::Expense(ExpenseCategory::Food),
            date(),
            "  lunch  ",
        )
        .unwrap();
        assert_eq!(txn.description(), "lunch");
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            Money::from_cents(300000),
            Category::Income(IncomeCategory::Salary),
            date(),
            "",
        )
        .unwrap();
        assert_eq!(format!("{}", txn), "2025-01-15 income Salary $3000.00");
    }
}
