//! Transaction model
//!
//! A transaction is a value object: a date, a positive amount, one of two
//! categories, and a free-text description. There is no identity beyond the
//! fields themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Date format used everywhere: in the ledger file, prompts, and reports
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The two transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// Parse from the single-letter form used at the interactive prompt
    /// (`i`/`I` for Income, `e`/`E` for Expense)
    pub fn from_letter(s: &str) -> Option<Self> {
        match s.trim() {
            "i" | "I" => Some(Self::Income),
            "e" | "E" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The word stored in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            _ => Err(()),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Amount, strictly positive at entry
    pub amount: Money,

    /// Income or Expense
    pub category: Category,

    /// Free text, may be empty
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.category == Category::Income
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.category == Category::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.amount,
            self.category,
            self.description
        )
    }
}
