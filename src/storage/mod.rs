//! Storage layer for the finance ledger
//!
//! The ledger talks to persistence through the [`LedgerStore`] trait. The
//! real store is a single text file written atomically; an in-memory store
//! backs scratch ledgers and tests.

pub mod file_io;
pub mod text_format;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, warn};

pub use file_io::{read_text, write_text_atomic};
pub use text_format::LoadedLedger;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budgets, Transaction};

/// Where a ledger is loaded from and saved to
pub trait LedgerStore {
    /// Load everything; a store that has never been written yields an empty ledger
    fn load(&self) -> LedgerResult<LoadedLedger>;

    /// Replace the stored contents with these transactions and budgets
    fn save(&self, transactions: &[Transaction], budgets: &Budgets) -> LedgerResult<()>;

    /// Human-readable location, for messages
    fn describe(&self) -> String;
}

/// Text file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for FileStore {
    fn load(&self) -> LedgerResult<LoadedLedger> {
        let Some(contents) = read_text(&self.path)? else {
            debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(LoadedLedger::default());
        };

        let loaded = text_format::decode(&contents);
        if loaded.skipped_lines > 0 {
            warn!(
                path = %self.path.display(),
                skipped = loaded.skipped_lines,
                "skipped malformed lines while loading ledger"
            );
        }
        debug!(
            transactions = loaded.transactions.len(),
            budgets = loaded.budgets.len(),
            "ledger loaded"
        );
        Ok(loaded)
    }

    fn save(&self, transactions: &[Transaction], budgets: &Budgets) -> LedgerResult<()> {
        write_text_atomic(&self.path, &text_format::encode(transactions, budgets))?;
        debug!(path = %self.path.display(), transactions = transactions.len(), "ledger saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store holding the encoded text
///
/// Clones share the same buffer, so a caller can keep a handle and inspect
/// what the ledger wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Rc<RefCell<Option<String>>>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing data file text
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(contents.into()))),
            fail_saves: false,
        }
    }

    /// A store whose every save fails, for exercising persistence errors
    pub fn failing() -> Self {
        Self {
            contents: Rc::default(),
            fail_saves: true,
        }
    }

    /// The text last saved, if any
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> LedgerResult<LoadedLedger> {
        Ok(self
            .contents
            .borrow()
            .as_deref()
            .map(text_format::decode)
            .unwrap_or_default())
    }

    fn save(&self, transactions: &[Transaction], budgets: &Budgets) -> LedgerResult<()> {
        if self.fail_saves {
            return Err(LedgerError::Storage("in-memory store refuses writes".into()));
        }
        *self.contents.borrow_mut() = Some(text_format::encode(transactions, budgets));
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
