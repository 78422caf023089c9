//! tally-cli - Terminal-based personal finance ledger
//!
//! Records dated income/expense transactions into a single CSV ledger,
//! answers inclusive date-range queries with income/expense/net summaries,
//! breaks expenses down by description, and charts daily totals in the
//! terminal. Driven by an interactive numbered menu.
//!
//! # Architecture
//!
//! - `config`: configuration and path management
//! - `error`: custom error types
//! - `models`: core data models (money, transactions)
//! - `storage`: CSV ledger storage layer
//! - `query`: range queries and aggregation
//! - `report`: terminal report and chart formatting
//! - `input`: validated interactive input
//! - `app`: the interactive menu controller

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod query;
pub mod report;
pub mod storage;

pub use error::{TallyError, TallyResult};
