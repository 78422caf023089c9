//! Terminal time-series chart
//!
//! Resamples a query result to one data point per calendar day (missing days
//! sum to zero) and renders the daily Income and Expense series as
//! horizontal bars over the date axis.

use chrono::NaiveDate;

use crate::models::{Money, Transaction, DATE_FORMAT};

/// One calendar day of the resampled series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

/// Re-index transactions by date into a dense daily series
///
/// Covers every day from the earliest to the latest transaction date;
/// days with no transactions carry zero for both series.
pub fn daily_series(transactions: &[Transaction]) -> Vec<DailyPoint> {
    let Some(first) = transactions.iter().map(|t| t.date).min() else {
        return Vec::new();
    };
    let last = transactions
        .iter()
        .map(|t| t.date)
        .max()
        .unwrap_or(first);

    let mut series = Vec::new();
    let mut day = first;
    loop {
        let mut point = DailyPoint {
            date: day,
            income: Money::zero(),
            expense: Money::zero(),
        };
        for txn in transactions.iter().filter(|t| t.date == day) {
            if txn.is_income() {
                point.income += txn.amount;
            } else {
                point.expense += txn.amount;
            }
        }
        series.push(point);

        if day >= last {
            break;
        }
        // succ_opt only fails at NaiveDate::MAX
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    series
}

/// Render the daily series as a two-row-per-day bar chart
///
/// Both series share one scale: the largest single-day total. `width` is the
/// bar width in characters.
pub fn render_chart(series: &[DailyPoint], width: usize, symbol: &str) -> String {
    if series.is_empty() {
        return "Nothing to plot.\n".to_string();
    }

    let max_cents = series
        .iter()
        .flat_map(|p| [p.income.cents(), p.expense.cents()])
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str("Income and Expenses Over Time\n");
    output.push_str(&"─".repeat(12 + 3 + width + 2 + 10));
    output.push('\n');

    for point in series {
        output.push_str(&format!(
            "{}  I {}  {}\n",
            point.date.format(DATE_FORMAT),
            format_bar(point.income.cents(), max_cents, width),
            point.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:12}E {}  {}\n",
            "",
            format_bar(point.expense.cents(), max_cents, width),
            point.expense.format_with_symbol(symbol)
        ));
    }

    output.push_str("I = Income, E = Expense\n");
    output
}

/// Create a simple bar representation scaled to `max_value`
fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
