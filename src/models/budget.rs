//! Monthly budget limits per expense category
//!
//! Budgets keep the order in which categories were first given a limit;
//! that order is what gets written to the data file.

use serde::Serialize;
use std::fmt;

use super::category::ExpenseCategory;
use super::money::{Money, MAX_AMOUNT};

/// A monthly spending ceiling for one expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetLimit {
    pub category: ExpenseCategory,
    pub amount: Money,
}

/// Insertion-ordered map from expense category to its monthly limit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Budgets {
    limits: Vec<BudgetLimit>,
}

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a category; an existing entry is overwritten in place
    pub fn set(
        &mut self,
        category: ExpenseCategory,
        amount: Money,
    ) -> Result<(), BudgetValidationError> {
        if amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(amount));
        }
        if !amount.is_within_limit() {
            return Err(BudgetValidationError::AmountTooLarge(amount));
        }

        match self.limits.iter_mut().find(|l| l.category == category) {
            Some(limit) => limit.amount = amount,
            None => self.limits.push(BudgetLimit { category, amount }),
        }
        Ok(())
    }

    /// The limit for a category, if one was set
    pub fn get(&self, category: ExpenseCategory) -> Option<Money> {
        self.limits
            .iter()
            .find(|l| l.category == category)
            .map(|l| l.amount)
    }

    /// The limit for a category, zero when none was set
    pub fn limit_or_zero(&self, category: ExpenseCategory) -> Money {
        self.get(category).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BudgetLimit> {
        self.limits.iter()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => write!(f, "Budget cannot be negative: {}", amount),
            Self::AmountTooLarge(amount) => {
                write!(f, "Budget {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
