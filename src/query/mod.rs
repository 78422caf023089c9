//! Query engine
//!
//! Range selection with aggregate totals, and the expense breakdown grouped
//! by description. Both load the full ledger through the store, so a corrupt
//! row surfaces here the same way it does during a resort.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::TallyResult;
use crate::models::{Money, Transaction};
use crate::storage::LedgerStore;

/// Result of a date-range query
#[derive(Debug, Clone)]
pub struct RangeReport {
    /// Inclusive start of the queried range
    pub start: NaiveDate,
    /// Inclusive end of the queried range
    pub end: NaiveDate,
    /// Matching rows in ascending date order
    pub transactions: Vec<Transaction>,
    /// Sum of Income rows in the result
    pub total_income: Money,
    /// Sum of Expense rows in the result
    pub total_expense: Money,
}

impl RangeReport {
    /// Net savings over the range: income minus expense
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Whether the range matched no rows
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Select ledger rows with `start <= date <= end` and total them
///
/// Order is inherited from the store, which keeps rows ascending by date.
/// An empty match is a normal, empty report.
pub fn query_range(
    store: &LedgerStore,
    start: NaiveDate,
    end: NaiveDate,
) -> TallyResult<RangeReport> {
    let transactions: Vec<Transaction> = store
        .load()?
        .into_iter()
        .filter(|t| t.date >= start && t.date <= end)
        .collect();

    let total_income = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let total_expense = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    Ok(RangeReport {
        start,
        end,
        transactions,
        total_income,
        total_expense,
    })
}

/// Count Expense rows grouped by description, most frequent first
///
/// The description doubles as the de facto expense sub-category. Ties are
/// broken by description so the output is deterministic.
pub fn category_breakdown(store: &LedgerStore) -> TallyResult<Vec<(String, usize)>> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for txn in store.load()? {
        if txn.is_expense() {
            *counts.entry(txn.description).or_default() += 1;
        }
    }

    let mut breakdown: Vec<(String, usize)> = counts.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(breakdown)
}
