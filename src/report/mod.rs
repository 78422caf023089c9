//! Report formatting for terminal output
//!
//! All formatters return strings; the controller decides where they go.

pub mod chart;

use crate::models::{Transaction, DATE_FORMAT};
use crate::query::RangeReport;

pub use chart::{daily_series, render_chart, DailyPoint};

/// Format a list of transactions as a register
pub fn format_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10}  {:>12}  {:8}  {}\n",
        "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format!(
            "{}  {:>12}  {:8}  {}\n",
            txn.date.format(DATE_FORMAT),
            txn.amount.format_with_symbol(symbol),
            txn.category.as_str(),
            txn.description
        ));
    }

    output
}

/// Format the income/expense/net summary of a range query
pub fn format_summary(report: &RangeReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Summary:\n");
    output.push_str(&format!(
        "Total Income: {}\n",
        report.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expense: {}\n",
        report.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Savings: {}\n",
        report.net().format_with_symbol(symbol)
    ));
    output
}

/// Format the expense breakdown (description, count) listing
pub fn format_breakdown(breakdown: &[(String, usize)]) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let widest = breakdown
        .iter()
        .map(|(description, _)| description.chars().count())
        .max()
        .unwrap_or(0)
        .max("(no description)".len());

    let mut output = String::new();
    output.push_str("Category Breakdown:\n");
    for (description, count) in breakdown {
        let label = if description.is_empty() {
            "(no description)"
        } else {
            description.as_str()
        };
        output.push_str(&format!("{:<width$}  {}\n", label, count, width = widest));
    }
    output
}
