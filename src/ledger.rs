//! The ledger: recorded transactions, budgets, and the queries over them
//!
//! A [`Ledger`] is opened from a [`LedgerStore`] at startup, mutated through
//! validated operations that save after every change, and closed with a
//! final flush.
//!
//! A failed save never undoes the in-memory change. It is logged as a
//! warning and the operation still succeeds.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Budgets, Category, ExpenseCategory, Money, MonthPeriod, Transaction, TransactionKind,
};
use crate::reports::{FinancialReport, MonthlySummary, SpendingAnalysis};
use crate::storage::{LedgerStore, MemoryStore};

pub struct Ledger {
    transactions: Vec<Transaction>,
    budgets: Budgets,
    store: Box<dyn LedgerStore>,
    /// Set when the last save failed
    unsaved: bool,
}

impl Ledger {
    /// Create an empty ledger that saves to `store`
    pub fn new(store: impl LedgerStore + 'static) -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Budgets::new(),
            store: Box::new(store),
            unsaved: false,
        }
    }

    /// An empty ledger backed by memory only
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Load a ledger from `store`
    ///
    /// Malformed records in the store are skipped; see
    /// [`crate::storage::text_format`].
    pub fn open(store: impl LedgerStore + 'static) -> LedgerResult<Self> {
        let loaded = store.load()?;
        info!(
            store = %store.describe(),
            transactions = loaded.transactions.len(),
            budgets = loaded.budgets.len(),
            skipped = loaded.skipped_lines,
            "ledger opened"
        );

        Ok(Self {
            transactions: loaded.transactions,
            budgets: loaded.budgets,
            store: Box::new(store),
            unsaved: false,
        })
    }

    /// Final flush of anything a failed save left behind
    ///
    /// A ledger whose every change already reached the store is not
    /// rewritten, so read-only sessions never touch the data file.
    pub fn close(self) -> LedgerResult<()> {
        if self.unsaved {
            self.store.save(&self.transactions, &self.budgets)?;
        }
        debug!(store = %self.store.describe(), "ledger closed");
        Ok(())
    }

    /// Whether some change has not reached the store yet
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Record a transaction dated today
    ///
    /// `kind`, `category` and `amount` are raw user input and are checked in
    /// that order.
    pub fn add_transaction(
        &mut self,
        amount: &str,
        category: &str,
        kind: &str,
        description: &str,
    ) -> LedgerResult<Transaction> {
        let today = chrono::Local::now().date_naive();
        self.add_transaction_on(today, amount, category, kind, description)
    }

    /// Record a transaction with an explicit date
    pub fn add_transaction_on(
        &mut self,
        date: NaiveDate,
        amount: &str,
        category: &str,
        kind: &str,
        description: &str,
    ) -> LedgerResult<Transaction> {
        let kind: TransactionKind = kind.parse()?;
        let category = Category::parse(kind, category.trim())?;
        let amount = parse_amount(amount)?;

        let transaction = Transaction::new(amount, category, date, description.trim())
            .map_err(|e| LedgerError::InvalidAmount(e.to_string()))?;

        self.record(transaction)
    }

    /// Append an already-built transaction and save
    pub fn record(&mut self, transaction: Transaction) -> LedgerResult<Transaction> {
        if !transaction.amount().is_positive() {
            return Err(LedgerError::InvalidAmount(transaction.amount().to_string()));
        }

        debug!(%transaction, "recording transaction");
        self.transactions.push(transaction.clone());
        self.persist();
        Ok(transaction)
    }

    /// Set the monthly limit for an expense category, replacing any earlier one
    pub fn set_budget(&mut self, category: &str, amount: &str) -> LedgerResult<()> {
        let category: ExpenseCategory = category.trim().parse()?;
        let amount = parse_amount(amount)?;

        self.budgets
            .set(category, amount)
            .map_err(|e| LedgerError::InvalidAmount(e.to_string()))?;

        debug!(%category, %amount, "budget set");
        self.persist();
        Ok(())
    }

    /// Total income minus total expenses over the whole history
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(|t| t.signed_amount()).sum()
    }

    /// Summary of one calendar month
    pub fn monthly_summary(&self, year: i32, month: u32) -> LedgerResult<MonthlySummary> {
        Ok(self.summary_for(month_period(year, month)?))
    }

    pub fn summary_for(&self, period: MonthPeriod) -> MonthlySummary {
        MonthlySummary::generate(&self.transactions, period)
    }

    /// Insights for the current month
    pub fn spending_analysis(&self) -> Vec<String> {
        self.spending_analysis_for(chrono::Local::now().date_naive())
    }

    /// Insights for the month containing `today`
    pub fn spending_analysis_for(&self, today: NaiveDate) -> Vec<String> {
        self.analyze(MonthPeriod::containing(today)).messages()
    }

    pub fn analyze(&self, period: MonthPeriod) -> SpendingAnalysis {
        SpendingAnalysis::generate(&self.transactions, &self.budgets, period)
    }

    /// Fixed-layout text report for one month
    pub fn generate_report(&self, year: i32, month: u32) -> LedgerResult<String> {
        Ok(self.report_for(month_period(year, month)?).to_string())
    }

    pub fn report_for(&self, period: MonthPeriod) -> FinancialReport {
        FinancialReport::generate(&self.transactions, &self.budgets, period)
    }

    /// Transactions in the order they were entered
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &Budgets {
        &self.budgets
    }

    pub fn budget_for(&self, category: ExpenseCategory) -> Option<Money> {
        self.budgets.get(category)
    }

    /// Where this ledger is saved
    pub fn location(&self) -> String {
        self.store.describe()
    }

    fn persist(&mut self) {
        match self.store.save(&self.transactions, &self.budgets) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                self.unsaved = true;
                warn!(
                    store = %self.store.describe(),
                    error = %e,
                    "failed to save ledger; change kept in memory"
                );
            }
        }
    }
}

fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|_| LedgerError::InvalidAmount(input.trim().to_string()))
}

fn month_period(year: i32, month: u32) -> LedgerResult<MonthPeriod> {
    MonthPeriod::new(year, month)
        .ok_or_else(|| LedgerError::InvalidPeriod(format!("{}-{:02}", year, month)))
}
