//! Ledger service
//!
//! The single entry point used by the command-line shell: recording
//! transactions, windowed queries, and per-window aggregation.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{Days, Local, NaiveDate};
use tracing::{debug, info};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryRegistry, Money, Transaction, TransactionType};
use crate::storage::{LoadOutcome, TransactionStore};

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Options for selecting a window of transactions
#[derive(Debug, Clone)]
pub struct TransactionFilter {
    /// Size of the window in days; 0 means "today only"
    pub days: u64,
    /// Restrict to one transaction type
    pub transaction_type: Option<TransactionType>,
    /// Maximum number of transactions to return, applied after sorting
    pub limit: Option<usize>,
    /// Reference date for the window (defaults to today)
    pub as_of: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Window covering the last `days` days
    pub fn last_days(days: u64) -> Self {
        Self {
            days,
            transaction_type: None,
            limit: None,
            as_of: None,
        }
    }

    /// Filter by transaction type
    pub fn of_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Anchor the window at a fixed date instead of today
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Earliest date included in the window
    ///
    /// Windows reaching past the calendar's lower bound cover all time.
    pub fn cutoff(&self) -> NaiveDate {
        let anchor = self.as_of.unwrap_or_else(today);
        anchor
            .checked_sub_days(Days::new(self.days))
            .unwrap_or(NaiveDate::MIN)
    }

    fn matches(&self, cutoff: NaiveDate, txn: &Transaction) -> bool {
        txn.date >= cutoff
            && self
                .transaction_type
                .map_or(true, |t| t == txn.transaction_type)
    }
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Amount in whole units; the sign is ignored
    pub amount: f64,
    pub category: String,
    /// Blank descriptions are replaced by `"<Type> - <Category>"`
    pub description: String,
    pub transaction_type: TransactionType,
    /// Defaults to today
    pub date: Option<NaiveDate>,
}

/// A transaction that was appended to the ledger
///
/// `save_error` is set when the ledger could not be written afterwards; the
/// transaction stays in memory and the next successful save persists it.
#[derive(Debug)]
pub struct AddedTransaction {
    pub transaction: Transaction,
    pub save_error: Option<FinanceError>,
}

impl AddedTransaction {
    pub fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Per-category totals for a window, one map per transaction type
///
/// Categories with no activity in the window are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    pub income: HashMap<String, Money>,
    pub expense: HashMap<String, Money>,
}

impl CategorySummary {
    pub fn totals(&self, transaction_type: TransactionType) -> &HashMap<String, Money> {
        match transaction_type {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    /// Sum of all categories for a type
    pub fn total(&self, transaction_type: TransactionType) -> Money {
        self.totals(transaction_type).values().copied().sum()
    }

    /// Category share of its type's total, in percent (0 when the total is 0)
    pub fn percentage(&self, transaction_type: TransactionType, category: &str) -> f64 {
        self.totals(transaction_type)
            .get(category)
            .map_or(0.0, |amount| {
                amount.percentage_of(self.total(transaction_type))
            })
    }

    /// Categories ordered by descending amount, ties by name
    pub fn ranked(&self, transaction_type: TransactionType) -> Vec<(&str, Money)> {
        let mut rows: Vec<(&str, Money)> = self
            .totals(transaction_type)
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

/// Ledger bound to one persisted store file
pub struct Ledger {
    store: TransactionStore,
    registry: CategoryRegistry,
    load_outcome: LoadOutcome,
}

impl Ledger {
    /// Open the ledger stored at `path`
    ///
    /// A missing or corrupt file yields an empty ledger; see [`Ledger::load_outcome`].
    pub fn open(path: PathBuf) -> Self {
        let mut store = TransactionStore::new(path);
        let load_outcome = store.load();
        Self {
            store,
            registry: CategoryRegistry,
            load_outcome,
        }
    }

    /// How the last load went
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Re-read the store file, replacing the in-memory ledger
    pub fn reload(&mut self) -> &LoadOutcome {
        self.load_outcome = self.store.load();
        &self.load_outcome
    }

    /// Write the whole ledger to disk
    pub fn save(&self) -> FinanceResult<()> {
        self.store.save()
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Ordered category names for a type
    pub fn categories(&self, transaction_type: TransactionType) -> &'static [&'static str] {
        self.registry.categories(transaction_type)
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Record a new transaction and persist the ledger
    ///
    /// Rejects non-finite amounts and categories not registered for the
    /// type; the ledger is untouched in that case.
    pub fn add(&mut self, input: CreateTransactionInput) -> FinanceResult<AddedTransaction> {
        let amount = Money::from_major(input.amount)?;

        if !self.registry.contains(input.transaction_type, &input.category) {
            return Err(FinanceError::Validation(format!(
                "'{}' is not a valid {} category",
                input.category, input.transaction_type
            )));
        }

        let transaction = Transaction::new(
            self.store.next_id(),
            input.date.unwrap_or_else(today),
            amount,
            input.category,
            input.description,
            input.transaction_type,
        );

        self.store.push(transaction.clone());
        info!(
            id = transaction.id,
            kind = %transaction.transaction_type,
            amount = %transaction.amount,
            category = %transaction.category,
            "recorded transaction"
        );

        let save_error = self.store.save().err();
        Ok(AddedTransaction {
            transaction,
            save_error,
        })
    }

    /// Transactions in the window, most recent first
    ///
    /// Same-date transactions keep their entry order.
    pub fn query(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let cutoff = filter.cutoff();
        let mut transactions: Vec<Transaction> = self
            .store
            .all()
            .iter()
            .filter(|t| filter.matches(cutoff, t))
            .cloned()
            .collect();

        // sort_by is stable
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        debug!(
            days = filter.days,
            %cutoff,
            count = transactions.len(),
            "queried transactions"
        );
        transactions
    }

    /// Transactions from the last `days` days, optionally of one type
    pub fn get_transactions(
        &self,
        days: u64,
        transaction_type: Option<TransactionType>,
    ) -> Vec<Transaction> {
        let mut filter = TransactionFilter::last_days(days);
        filter.transaction_type = transaction_type;
        self.query(&filter)
    }

    /// Income minus expenses over the filtered window
    pub fn balance(&self, filter: &TransactionFilter) -> Money {
        self.query(filter)
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    /// Income minus expenses over the last `days` days
    pub fn get_balance(&self, days: u64) -> Money {
        self.balance(&TransactionFilter::last_days(days))
    }

    /// Per-category totals over the filtered window
    pub fn category_summary(&self, filter: &TransactionFilter) -> CategorySummary {
        let mut summary = CategorySummary::default();

        for txn in self.query(filter) {
            let bucket = match txn.transaction_type {
                TransactionType::Income => &mut summary.income,
                TransactionType::Expense => &mut summary.expense,
            };
            *bucket.entry(txn.category).or_insert_with(Money::zero) += txn.amount;
        }

        summary
    }

    /// Per-category totals over the last `days` days
    pub fn get_category_summary(&self, days: u64) -> CategorySummary {
        self.category_summary(&TransactionFilter::last_days(days))
    }
}
