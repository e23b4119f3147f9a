//! Transaction display formatting

use crate::models::Transaction;

const REGISTER_HEADER: &str = "Date       | Type    | Category      | Amount   | Description";

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} | {:7} | {:12} | {}{:>7} | {}",
        txn.date().format("%Y-%m-%d"),
        txn.kind().as_str(),
        txn.category().name(),
        symbol,
        txn.amount().to_decimal_string(),
        txn.description()
    )
}

/// Format all transactions as a register, in the order they were entered
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found!\n".to_string();
    }

    let mut output = String::new();
    output.push_str(REGISTER_HEADER);
    output.push('\n');
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseCategory, IncomeCategory, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_row_layout() {
        let txn = Transaction::new(
            Money::from_cents(4250),
            Category::Expense(ExpenseCategory::Food),
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            "lunch",
        )
        .unwrap();

        assert_eq!(
            format_transaction_row(&txn, "$"),
            "2025-01-03 | expense | Food         | $  42.50 | lunch"
        );
    }

    #[test]
    fn test_register() {
        let txn = Transaction::new(
            Money::from_dollars(3000),
            Category::Income(IncomeCategory::Salary),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "",
        )
        .unwrap();

        let register = format_transaction_register(&[txn], "$");
        let lines: Vec<_> = register.lines().collect();
        assert_eq!(lines[0], REGISTER_HEADER);
        assert_eq!(lines[1], "-".repeat(60));
        assert_eq!(lines[2], "2025-01-01 | income  | Salary       | $3000.00 | ");
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[], "$"), "No transactions found!\n");
    }
}
