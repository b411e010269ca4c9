//! Transaction store backed by a single JSON file
//!
//! The whole ledger is held in memory in entry order. `load` replaces it
//! wholesale and `save` rewrites the file wholesale.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// On-disk document: `{ "transactions": [...] }`
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LedgerData {
    transactions: Vec<Transaction>,
}

/// Result of reading the persisted store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; holds the number of transactions
    Loaded(usize),
    /// No file yet; the store starts empty
    Missing,
    /// The file was unreadable or malformed; the store was reset to empty
    Corrupt(String),
}

impl LoadOutcome {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt(_))
    }
}

/// In-memory ordered ledger with whole-file persistence
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store bound to `path`; nothing is read until `load`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load transactions from disk
    ///
    /// Never fails: a missing file yields an empty store, and a corrupt one
    /// is logged and also yields an empty store.
    pub fn load(&mut self) -> LoadOutcome {
        match read_ledger(&self.path) {
            Ok(Some(transactions)) => {
                info!(
                    path = %self.path.display(),
                    count = transactions.len(),
                    "loaded ledger"
                );
                let count = transactions.len();
                self.transactions = transactions;
                LoadOutcome::Loaded(count)
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no ledger file, starting empty");
                self.transactions.clear();
                LoadOutcome::Missing
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ledger unreadable, starting empty");
                self.transactions.clear();
                LoadOutcome::Corrupt(e.to_string())
            }
        }
    }

    /// Save all transactions to disk, replacing the previous file
    ///
    /// On failure the in-memory ledger is left as it is.
    pub fn save(&self) -> FinanceResult<()> {
        let data = LedgerData {
            transactions: self.transactions.clone(),
        };

        write_json_atomic(&self.path, &data).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to save ledger");
            e
        })?;

        debug!(
            path = %self.path.display(),
            count = self.transactions.len(),
            "saved ledger"
        );
        Ok(())
    }

    /// Append a transaction in entry order
    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Id for the next transaction
    ///
    /// `count + 1` for any file this store wrote itself. A file with gaps in
    /// its ids gets the id after the highest one instead, so ids stay unique.
    pub fn next_id(&self) -> u64 {
        let max_id = self.transactions.iter().map(|t| t.id).max().unwrap_or(0);
        (self.transactions.len() as u64).max(max_id) + 1
    }

    /// All transactions in entry order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

fn read_ledger(path: &Path) -> FinanceResult<Option<Vec<Transaction>>> {
    let Some(data) = read_json::<LedgerData, _>(path)? else {
        return Ok(None);
    };

    let mut seen = HashSet::with_capacity(data.transactions.len());
    for txn in &data.transactions {
        if !seen.insert(txn.id) {
            return Err(FinanceError::StoreRead(format!(
                "duplicate transaction id {}",
                txn.id
            )));
        }
        if txn.amount.is_negative() {
            return Err(FinanceError::StoreRead(format!(
                "transaction {} has a negative amount",
                txn.id
            )));
        }
    }

    Ok(Some(data.transactions))
}
