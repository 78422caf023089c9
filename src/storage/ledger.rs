//! Ledger file storage
//!
//! Owns the on-disk representation of the ledger: a single CSV file with
//! header `date,amount,category,description`, kept sorted ascending by date
//! after every mutation. Rewrites go through a temp file + rename so a
//! failure never leaves a half-written ledger behind.
//!
//! Corrupt rows are reported, never repaired: any operation that finds one
//! aborts before writing, leaving the file exactly as it was.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Money, Transaction, DATE_FORMAT};

/// Column order of the ledger file
const HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// A ledger row as stored on disk, before any cell has been validated
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRow {
    date: String,
    amount: String,
    category: String,
    description: String,
}

impl RawRow {
    /// Validate all cells; `row` is the 1-based data row number for diagnostics
    fn parse(self, row: usize) -> TallyResult<Transaction> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| TallyError::bad_date(row, self.date.clone()))?;
        let amount = Money::parse(&self.amount)
            .map_err(|_| TallyError::bad_amount(row, self.amount.clone()))?;
        let category: Category = self
            .category
            .parse()
            .map_err(|_| TallyError::bad_category(row, self.category.clone()))?;
        Ok(Transaction::new(date, amount, category, self.description))
    }
}

impl From<&Transaction> for RawRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format(DATE_FORMAT).to_string(),
            amount: txn.amount.csv_cell(),
            category: txn.category.as_str().to_string(),
            description: txn.description.clone(),
        }
    }
}

/// Outcome of [`LedgerStore::initialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The ledger file did not exist and was created header-only
    Created,
    /// The ledger file existed and was re-sorted
    Resorted,
}

/// Handle to a single ledger file
///
/// The path is explicit so tests can point a store at a temporary file.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store handle for the given ledger file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Prepare the store for use
    ///
    /// Creates a header-only file if none exists; otherwise re-sorts the
    /// existing file so the ascending-by-date invariant holds from startup.
    pub fn initialize(&self) -> TallyResult<InitOutcome> {
        if self.path.exists() {
            self.resort()?;
            return Ok(InitOutcome::Resorted);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TallyError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(&self.path).map_err(|e| {
            TallyError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(HEADER)?;
        writer
            .flush()
            .map_err(|e| TallyError::Storage(format!("Failed to flush ledger: {}", e)))?;

        Ok(InitOutcome::Created)
    }

    /// Load and validate every row of the ledger
    ///
    /// Returns rows in stored order. Any cell that fails to parse aborts the
    /// load with a diagnostic naming the row; the file is not touched.
    pub fn load(&self) -> TallyResult<Vec<Transaction>> {
        if !self.path.exists() {
            return Err(TallyError::Storage(format!(
                "Ledger file not found: {}",
                self.path.display()
            )));
        }

        let file = File::open(&self.path).map_err(|e| {
            TallyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut transactions = Vec::new();

        for (i, record) in reader.deserialize::<RawRow>().enumerate() {
            let raw = record?;
            transactions.push(raw.parse(i + 1)?);
        }

        Ok(transactions)
    }

    /// Add one transaction to the ledger
    ///
    /// The new row joins the existing rows and the whole file is rewritten in
    /// sorted order. If an existing row is corrupt the add aborts and the
    /// file is left unchanged.
    pub fn add(&self, txn: &Transaction) -> TallyResult<()> {
        let mut transactions = self.load()?;
        transactions.push(txn.clone());
        transactions.sort_by_key(|t| t.date);
        self.write_all(&transactions)
    }

    /// Re-sort the ledger ascending by date and rewrite it in place
    ///
    /// Dates are re-canonicalized to `YYYY-MM-DD` on the way out. Aborts
    /// without writing if any row fails to parse.
    pub fn resort(&self) -> TallyResult<()> {
        let mut transactions = self.load()?;
        transactions.sort_by_key(|t| t.date);
        self.write_all(&transactions)
    }

    /// Rewrite the whole ledger atomically (write to temp, then rename)
    fn write_all(&self, transactions: &[Transaction]) -> TallyResult<()> {
        let temp_path = self.path.with_extension("csv.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| TallyError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(HEADER)?;
        for txn in transactions {
            writer.serialize(RawRow::from(txn))?;
        }
        writer
            .flush()
            .map_err(|e| TallyError::Storage(format!("Failed to flush ledger: {}", e)))?;

        let file = writer
            .into_inner()
            .map_err(|e| TallyError::Storage(format!("Failed to finish ledger write: {}", e)))?;
        file.sync_all()
            .map_err(|e| TallyError::Storage(format!("Failed to sync ledger: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            TallyError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}
