//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_amount;
use crate::display::transaction::format_transaction_register;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::TransactionKind;
use crate::storage::text_format::DATE_FORMAT;

/// Add subcommands, one per transaction kind
#[derive(Subcommand)]
pub enum AddCommands {
    /// Record income (Salary, Freelance, Investment, Gift, Other)
    Income {
        /// Income category
        category: String,
        /// Amount (e.g., "3000" or "3000.00")
        amount: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Record an expense (Food, Transport, Entertainment, ...)
    Expense {
        /// Expense category
        category: String,
        /// Amount (e.g., "42.50")
        amount: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

/// Handle an add command
pub fn handle_add_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: AddCommands,
) -> LedgerResult<()> {
    let (kind, category, amount, description, date) = match cmd {
        AddCommands::Income {
            category,
            amount,
            description,
            date,
        } => (TransactionKind::Income, category, amount, description, date),
        AddCommands::Expense {
            category,
            amount,
            description,
            date,
        } => (TransactionKind::Expense, category, amount, description, date),
    };

    let transaction = match date {
        Some(date) => ledger.add_transaction_on(
            parse_date(&date)?,
            &amount,
            &category,
            kind.as_str(),
            &description,
        )?,
        None => ledger.add_transaction(&amount, &category, kind.as_str(), &description)?,
    };

    println!(
        "Added {} of {} to {} on {}",
        transaction.kind(),
        format_amount(&settings.currency_symbol, transaction.amount()),
        transaction.category(),
        transaction.date().format(DATE_FORMAT)
    );

    Ok(())
}

/// Print every transaction in entry order
pub fn handle_list_command(ledger: &Ledger, settings: &Settings) -> LedgerResult<()> {
    print!(
        "{}",
        format_transaction_register(ledger.transactions(), &settings.currency_symbol)
    );
    Ok(())
}

fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(format!("'{}', expected YYYY-MM-DD", input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(matches!(
            parse_date("2025-02-30"),
            Err(LedgerError::InvalidDate(_))
        ));
        assert!(parse_date("28/02/2025").is_err());
    }

    #[test]
    fn test_add_expense_with_date() {
        let mut ledger = Ledger::in_memory();
        let cmd = AddCommands::Expense {
            category: "Food".into(),
            amount: "42.50".into(),
            description: "lunch".into(),
            date: Some("2025-01-03".into()),
        };

        handle_add_command(&mut ledger, &Settings::default(), cmd).unwrap();

        let txn = &ledger.transactions()[0];
        assert_eq!(txn.expense_category(), Some(ExpenseCategory::Food));
        assert_eq!(txn.date(), NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
    }

    #[test]
    fn test_add_rejects_category_of_other_kind() {
        let mut ledger = Ledger::in_memory();
        let cmd = AddCommands::Income {
            category: "Food".into(),
            amount: "10".into(),
            description: String::new(),
            date: None,
        };

        let result = handle_add_command(&mut ledger, &Settings::default(), cmd);
        assert!(matches!(result, Err(LedgerError::InvalidCategory(_))));
        assert!(ledger.transactions().is_empty());
    }
}
