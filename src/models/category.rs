//! Transaction kinds and the fixed category taxonomy
//!
//! Income and expense categories are closed enums, so a transaction whose
//! category doesn't match its kind cannot be constructed. Names are matched
//! exactly, the same way they are written to the data file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Whether a transaction adds to or takes from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Lowercase name used in the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Category names allowed for this kind, in menu order
    pub fn category_names(&self) -> Vec<&'static str> {
        match self {
            Self::Income => IncomeCategory::all().iter().map(|c| c.name()).collect(),
            Self::Expense => ExpenseCategory::all().iter().map(|c| c.name()).collect(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::InvalidKind(s.to_string())),
        }
    }
}

/// Categories an income transaction may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investment,
    Gift,
    Other,
}

impl IncomeCategory {
    pub fn all() -> &'static [Self] {
        &[
            Self::Salary,
            Self::Freelance,
            Self::Investment,
            Self::Gift,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Gift => "Gift",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IncomeCategory {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| LedgerError::InvalidCategory(s.to_string()))
    }
}

/// Categories an expense transaction (and a budget) may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Healthcare,
    Shopping,
    Education,
    Other,
}

impl ExpenseCategory {
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Utilities,
            Self::Healthcare,
            Self::Shopping,
            Self::Education,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| LedgerError::InvalidCategory(s.to_string()))
    }
}

/// A category tagged with the kind it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    /// Look up `name` in the taxonomy for `kind`
    pub fn parse(kind: TransactionKind, name: &str) -> Result<Self, LedgerError> {
        match kind {
            TransactionKind::Income => name.parse().map(Self::Income),
            TransactionKind::Expense => name.parse().map(Self::Expense),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Income(_) => TransactionKind::Income,
            Self::Expense(_) => TransactionKind::Expense,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Income(c) => c.name(),
            Self::Expense(c) => c.name(),
        }
    }

    /// The expense category, if this is one
    pub fn as_expense(&self) -> Option<ExpenseCategory> {
        match self {
            Self::Expense(c) => Some(*c),
            Self::Income(_) => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!(matches!(
            "transfer".parse::<TransactionKind>(),
            Err(LedgerError::InvalidKind(_))
        ));
    }

    #[test]
    fn test_every_taxonomy_pair_parses() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            for name in kind.category_names() {
                let category = Category::parse(kind, name).unwrap();
                assert_eq!(category.kind(), kind);
                assert_eq!(category.name(), name);
            }
        }
    }

    #[test]
    fn test_category_outside_kind_taxonomy() {
        assert!(matches!(
            Category::parse(TransactionKind::Income, "Food"),
            Err(LedgerError::InvalidCategory(_))
        ));
        assert!(matches!(
            Category::parse(TransactionKind::Expense, "Salary"),
            Err(LedgerError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_other_exists_in_both() {
        assert_eq!(
            Category::parse(TransactionKind::Income, "Other").unwrap(),
            Category::Income(IncomeCategory::Other)
        );
        assert_eq!(
            Category::parse(TransactionKind::Expense, "Other").unwrap(),
            Category::Expense(ExpenseCategory::Other)
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("food".parse::<ExpenseCategory>().is_err());
        assert!("Food".parse::<ExpenseCategory>().is_ok());
    }
}
