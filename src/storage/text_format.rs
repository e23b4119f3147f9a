//! Line-oriented text format for the ledger data file
//!
//! ```text
//! [TRANSACTIONS]
//! 3000.00,Salary,income,2025-01-01,January pay
//! 42.50,Food,expense,2025-01-03,
//! [BUDGETS]
//! Food,400.00
//! ```
//!
//! Decoding is lenient: a line that can't be turned into a valid
//! transaction or budget is skipped and counted, and decoding carries on with
//! the next line. Nothing in the file can make a load fail.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Budgets, Category, ExpenseCategory, Money, Transaction, TransactionKind};

pub const TRANSACTIONS_HEADER: &str = "[TRANSACTIONS]";
pub const BUDGETS_HEADER: &str = "[BUDGETS]";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything recovered from a data file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedLedger {
    pub transactions: Vec<Transaction>,
    pub budgets: Budgets,
    /// Non-blank lines that were dropped because they didn't parse
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Transactions,
    Budgets,
}

/// Render transactions and budgets in the data file layout
pub fn encode(transactions: &[Transaction], budgets: &Budgets) -> String {
    let mut output = String::new();

    output.push_str(TRANSACTIONS_HEADER);
    output.push('\n');
    for txn in transactions {
        output.push_str(&format!(
            "{},{},{},{},{}\n",
            txn.amount().to_decimal_string(),
            txn.category().name(),
            txn.kind().as_str(),
            txn.date().format(DATE_FORMAT),
            txn.description()
        ));
    }

    output.push_str(BUDGETS_HEADER);
    output.push('\n');
    for limit in budgets.iter() {
        output.push_str(&format!(
            "{},{}\n",
            limit.category.name(),
            limit.amount.to_decimal_string()
        ));
    }

    output
}

/// Parse the data file contents, skipping any line that doesn't parse
pub fn decode(contents: &str) -> LoadedLedger {
    let mut loaded = LoadedLedger::default();
    let mut section = None;

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();

        if line == TRANSACTIONS_HEADER {
            section = Some(Section::Transactions);
            continue;
        }
        if line == BUDGETS_HEADER {
            section = Some(Section::Budgets);
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let parsed = match section {
            Some(Section::Transactions) => match parse_transaction(line) {
                Some(txn) => {
                    loaded.transactions.push(txn);
                    true
                }
                None => false,
            },
            Some(Section::Budgets) => match parse_budget(line) {
                Some((category, amount)) => loaded.budgets.set(category, amount).is_ok(),
                None => false,
            },
            None => false,
        };

        if !parsed {
            debug!(line = index + 1, content = line, "skipping unparseable ledger line");
            loaded.skipped_lines += 1;
        }
    }

    loaded
}

/// `amount,category,kind,date[,description]`; the description keeps any commas
fn parse_transaction(line: &str) -> Option<Transaction> {
    let parts: Vec<&str> = line.splitn(5, ',').collect();
    if parts.len() < 4 {
        return None;
    }

    let amount = Money::parse(parts[0]).ok()?;
    let kind: TransactionKind = parts[2].parse().ok()?;
    let category = Category::parse(kind, parts[1].trim()).ok()?;
    let date = NaiveDate::parse_from_str(parts[3].trim(), DATE_FORMAT).ok()?;
    let description = parts.get(4).copied().unwrap_or("");

    Transaction::new(amount, category, date, description).ok()
}

/// `category,amount`
fn parse_budget(line: &str) -> Option<(ExpenseCategory, Money)> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 2 {
        return None;
    }

    let category: ExpenseCategory = parts[0].trim().parse().ok()?;
    let amount = Money::parse(parts[1]).ok()?;
    Some((category, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeCategory;

    fn txn(cents: i64, category: Category, ymd: (i32, u32, u32), description: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();
        Transaction::new(Money::from_cents(cents), category, date, description).unwrap()
    }

    #[test]
    fn test_encode_layout() {
        let transactions = vec![
            txn(300000, Category::Income(IncomeCategory::Salary), (2025, 1, 1), "January pay"),
            txn(4250, Category::Expense(ExpenseCategory::Food), (2025, 1, 3), ""),
        ];
        let mut budgets = Budgets::new();
        budgets.set(ExpenseCategory::Food, Money::from_dollars(400)).unwrap();

        let text = encode(&transactions, &budgets);
        assert_eq!(
            text,
            "[TRANSACTIONS]\n\
             3000.00,Salary,income,2025-01-01,January pay\n\
             42.50,Food,expense,2025-01-03,\n\
             [BUDGETS]\n\
             Food,400.00\n"
        );
    }

    #[test]
    fn test_round_trip_preserves_order_and_commas() {
        let transactions = vec![
            txn(1999, Category::Expense(ExpenseCategory::Shopping), (2025, 2, 10), "shoes, socks"),
            txn(100000, Category::Income(IncomeCategory::Other), (2024, 12, 31), "refund"),
            txn(500, Category::Expense(ExpenseCategory::Other), (2025, 1, 1), ""),
        ];
        let mut budgets = Budgets::new();
        budgets.set(ExpenseCategory::Transport, Money::from_cents(12050)).unwrap();
        budgets.set(ExpenseCategory::Food, Money::zero()).unwrap();

        let loaded = decode(&encode(&transactions, &budgets));
        assert_eq!(loaded.transactions, transactions);
        assert_eq!(loaded.budgets, budgets);
        assert_eq!(loaded.skipped_lines, 0);
    }

    #[test]
    fn test_malformed_lines_are_skipped_and_counted() {
        let text = "\
stray line before any section
[TRANSACTIONS]
abc,Food,expense,2025-01-03,bad amount
10.00,Food,expense,2025-13-40,bad date
10.00,Food,expense
10.00,Salary,expense,2025-01-03,wrong taxonomy
10.00,Food,transfer,2025-01-03,unknown kind
-5.00,Food,expense,2025-01-03,negative
25.00,Food,expense,2025-01-03,good

[BUDGETS]
Food,notanumber
Food,1,2
Salary,100
Food,-10
Food,300
";
        let loaded = decode(text);

        assert_eq!(loaded.transactions.len(), 1);
        assert_eq!(loaded.transactions[0].description(), "good");
        assert_eq!(loaded.budgets.get(ExpenseCategory::Food), Some(Money::from_dollars(300)));
        assert_eq!(loaded.budgets.len(), 1);
        assert_eq!(loaded.skipped_lines, 11);
    }

    #[test]
    fn test_oversized_amounts_are_skipped() {
        let text = "\
[TRANSACTIONS]
90000000000000000.00,Salary,income,2025-01-01,too big
1000000000000.00,Salary,income,2025-01-01,largest allowed
[BUDGETS]
Food,90000000000000000.00
";
        let loaded = decode(text);

        assert_eq!(loaded.transactions.len(), 1);
        assert_eq!(loaded.transactions[0].amount(), crate::models::MAX_AMOUNT);
        assert!(loaded.budgets.is_empty());
        assert_eq!(loaded.skipped_lines, 2);
    }

    #[test]
    fn test_padded_description_reads_back_unchanged() {
        let transactions = vec![txn(
            700,
            Category::Expense(ExpenseCategory::Food),
            (2025, 3, 3),
            "  bagels   ",
        )];

        let loaded = decode(&encode(&transactions, &Budgets::new()));
        assert_eq!(loaded.transactions, transactions);
        assert_eq!(loaded.transactions[0].description(), "bagels");
    }

    #[test]
    fn test_accepts_float_style_amounts() {
        let text = "[TRANSACTIONS]\n3000.0,Salary,income,2025-01-01,\n[BUDGETS]\nFood,400.0\n";
        let loaded = decode(text);

        assert_eq!(loaded.transactions[0].amount(), Money::from_dollars(3000));
        assert_eq!(loaded.transactions[0].description(), "");
        assert_eq!(loaded.budgets.get(ExpenseCategory::Food), Some(Money::from_dollars(400)));
    }

    #[test]
    fn test_missing_description_field() {
        let loaded = decode("[TRANSACTIONS]\n12.00,Gift,income,2025-05-05\n");
        assert_eq!(loaded.transactions.len(), 1);
        assert_eq!(loaded.transactions[0].description(), "");
    }

    #[test]
    fn test_empty_input() {
        let loaded = decode("");
        assert!(loaded.transactions.is_empty());
        assert!(loaded.budgets.is_empty());
        assert_eq!(loaded.skipped_lines, 0);
    }
}
