//! Core data models for tally-cli

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{Category, Transaction, DATE_FORMAT};
