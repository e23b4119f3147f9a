//! Interactive menu shell
//!
//! A numbered menu over the same ledger operations the subcommands use.
//! Input and output are generic so the shell can be driven from tests.
//! Errors are printed and the loop continues; only "9" or end of input exits.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{
    format_amount, format_balance, format_insights, format_monthly_summary,
    format_transaction_register,
};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{ExpenseCategory, MonthPeriod, TransactionKind};

const RULE_WIDTH: usize = 50;

const MENU_ITEMS: [&str; 9] = [
    "Add Income",
    "Add Expense",
    "Set Budget",
    "View Balance",
    "Monthly Summary",
    "Spending Analysis",
    "Generate Report",
    "View All Transactions",
    "Exit",
];

pub const FAREWELL: &str = "Thank you for using Personal Finance Manager!";

pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            ledger,
            settings,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input runs out
    pub fn run(&mut self) -> LedgerResult<()> {
        writeln!(self.output, "Welcome to Personal Finance Manager!")?;

        loop {
            self.print_menu()?;
            let choice = match self.prompt("Enter your choice (1-9): ")? {
                Some(choice) => choice,
                None => break,
            };

            let result = match choice.as_str() {
                "1" => self.add_transaction(TransactionKind::Income),
                "2" => self.add_transaction(TransactionKind::Expense),
                "3" => self.set_budget(),
                "4" => self.view_balance(),
                "5" => self.monthly_summary(),
                "6" => self.spending_analysis(),
                "7" => self.generate_report(),
                "8" => self.view_transactions(),
                "9" => break,
                _ => {
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    Ok(())
                }
            };

            if let Err(e) = result {
                debug!(error = %e, "shell command failed");
                writeln!(self.output, "An error occurred: {}", e)?;
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        Ok(())
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "       PERSONAL FINANCE MANAGER")?;
        writeln!(self.output, "{}", rule)?;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item)?;
        }
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> LedgerResult<()> {
        let title = match kind {
            TransactionKind::Income => "Add Income",
            TransactionKind::Expense => "Add Expense",
        };
        writeln!(self.output, "\n--- {} ---", title)?;
        writeln!(self.output, "Categories: {}", kind.category_names().join(", "))?;

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(());
        };
        if !kind.category_names().contains(&category.as_str()) {
            writeln!(self.output, "Invalid category!")?;
            return Ok(());
        }

        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter description (optional): ")? else {
            return Ok(());
        };

        match self
            .ledger
            .add_transaction(&amount, &category, kind.as_str(), &description)
        {
            Ok(_) => writeln!(self.output, "Transaction added successfully")?,
            Err(e) => self.report_rejection(e)?,
        }
        Ok(())
    }

    fn set_budget(&mut self) -> LedgerResult<()> {
        writeln!(self.output, "\n--- Set Budget ---")?;
        writeln!(
            self.output,
            "Categories: {}",
            TransactionKind::Expense.category_names().join(", ")
        )?;

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(());
        };
        let category: ExpenseCategory = match category.parse() {
            Ok(category) => category,
            Err(_) => {
                writeln!(self.output, "Invalid category!")?;
                return Ok(());
            }
        };

        let Some(amount) = self.prompt("Enter budget amount: ")? else {
            return Ok(());
        };

        match self.ledger.set_budget(category.name(), &amount) {
            Ok(()) => {
                let limit = self.ledger.budgets().limit_or_zero(category);
                writeln!(
                    self.output,
                    "Budget for {} set to {}",
                    category,
                    format_amount(&self.settings.currency_symbol, limit)
                )?;
            }
            Err(e) => self.report_rejection(e)?,
        }
        Ok(())
    }

    fn view_balance(&mut self) -> LedgerResult<()> {
        let text = format_balance(self.ledger.balance(), &self.settings.currency_symbol);
        write!(self.output, "\n{}", text)?;
        Ok(())
    }

    fn monthly_summary(&mut self) -> LedgerResult<()> {
        let Some(period) = self.prompt_period()? else {
            return Ok(());
        };

        let summary = self.ledger.summary_for(period);
        let text = format_monthly_summary(&summary, &self.settings.currency_symbol);
        write!(self.output, "\n{}", text)?;
        Ok(())
    }

    fn spending_analysis(&mut self) -> LedgerResult<()> {
        writeln!(self.output, "\n--- Spending Analysis ---")?;
        let text = format_insights(&self.ledger.spending_analysis());
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn generate_report(&mut self) -> LedgerResult<()> {
        let Some(period) = self.prompt_period()? else {
            return Ok(());
        };

        let report = self.ledger.report_for(period);
        writeln!(self.output, "\n{}", report)?;
        Ok(())
    }

    fn view_transactions(&mut self) -> LedgerResult<()> {
        if !self.ledger.transactions().is_empty() {
            writeln!(self.output, "\n--- All Transactions ---")?;
        } else {
            writeln!(self.output)?;
        }
        let text =
            format_transaction_register(self.ledger.transactions(), &self.settings.currency_symbol);
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Ask for a year and month, blank meaning the current one
    ///
    /// Prints "Invalid input!" and returns `None` when either answer is not
    /// a number or the month is out of range.
    fn prompt_period(&mut self) -> LedgerResult<Option<MonthPeriod>> {
        let today = MonthPeriod::current();

        let Some(year) = self.prompt("Enter year (leave blank for current): ")? else {
            return Ok(None);
        };
        let Some(month) = self.prompt("Enter month (1-12, leave blank for current): ")? else {
            return Ok(None);
        };

        let year = if year.is_empty() {
            Some(today.year())
        } else {
            year.parse::<i32>().ok()
        };
        let month = if month.is_empty() {
            Some(today.month())
        } else {
            month.parse::<u32>().ok()
        };

        match year.zip(month).and_then(|(y, m)| MonthPeriod::new(y, m)) {
            Some(period) => Ok(Some(period)),
            None => {
                writeln!(self.output, "Invalid input!")?;
                Ok(None)
            }
        }
    }

    /// Print a validation failure; anything else propagates to the loop
    fn report_rejection(&mut self, error: LedgerError) -> LedgerResult<()> {
        if error.is_validation() {
            writeln!(self.output, "{}", error)?;
            Ok(())
        } else {
            Err(error)
        }
    }
}
