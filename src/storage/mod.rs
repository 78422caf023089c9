//! CSV file storage layer

pub mod ledger;

pub use ledger::{InitOutcome, LedgerStore};
