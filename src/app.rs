//! Interactive menu controller
//!
//! One-state loop: show the menu, dispatch the choice, repeat until exit.
//! Ledger corruption found by a menu action is reported and the menu keeps
//! running; only input-stream failures end the session.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::input::Prompter;
use crate::models::{Transaction, DATE_FORMAT};
use crate::query;
use crate::report;
use crate::storage::LedgerStore;

const MENU: &str = "\n1. Add new transaction\n\
                    2. View transactions and summary within a date range\n\
                    3. Generate category breakdown\n\
                    4. Exit\n\
                    Enter your choice (1-4): ";

/// Run the menu loop until the user exits
pub fn run<R: BufRead, W: Write>(
    store: &LedgerStore,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    loop {
        let choice = prompter.read_line(MENU)?;
        let result = match choice.trim() {
            "1" => add_transaction(store, prompter),
            "2" => view_range(store, settings, prompter),
            "3" => breakdown(store, prompter),
            "4" => {
                writeln!(prompter.writer(), "Exiting...")?;
                return Ok(());
            }
            _ => {
                writeln!(prompter.writer(), "Invalid choice. Enter 1, 2, 3, or 4.")?;
                continue;
            }
        };

        // Storage problems and exhausted prompts abort the action, not the
        // session; only a closed input stream ends it
        match result {
            Ok(()) => {}
            Err(TallyError::InputClosed) => return Err(TallyError::InputClosed),
            Err(err) => writeln!(prompter.writer(), "{}", err)?,
        }
    }
}

/// Menu option 1: prompt for every field and append to the ledger
fn add_transaction<R: BufRead, W: Write>(
    store: &LedgerStore,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    let date = prompter.read_date(
        "Enter the date of the transaction (YYYY-MM-DD) or press Enter for today: ",
        true,
    )?;
    let amount = prompter.read_amount()?;
    let category = prompter.read_category()?;
    let description = prompter.read_description()?;

    store.add(&Transaction::new(date, amount, category, description))?;
    writeln!(prompter.writer(), "Transaction added successfully!")?;
    Ok(())
}

/// Menu option 2: range query with summary and optional chart
fn view_range<R: BufRead, W: Write>(
    store: &LedgerStore,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    let start = prompter.read_date("Enter the start date (YYYY-MM-DD): ", false)?;
    let end = prompter.read_date("Enter the end date (YYYY-MM-DD): ", false)?;

    let range = query::query_range(store, start, end)?;
    if range.is_empty() {
        writeln!(
            prompter.writer(),
            "No transactions found in the given date range."
        )?;
        return Ok(());
    }

    let symbol = &settings.currency_symbol;
    writeln!(
        prompter.writer(),
        "Transactions from {} to {}:",
        start.format(DATE_FORMAT),
        end.format(DATE_FORMAT)
    )?;
    write!(
        prompter.writer(),
        "{}",
        report::format_register(&range.transactions, symbol)
    )?;
    writeln!(prompter.writer())?;
    write!(prompter.writer(), "{}", report::format_summary(&range, symbol))?;

    if prompter.confirm("Do you want to see a plot? (y/n): ")? {
        let series = report::daily_series(&range.transactions);
        write!(
            prompter.writer(),
            "{}",
            report::render_chart(&series, settings.chart_width, symbol)
        )?;
    }

    Ok(())
}

/// Menu option 3: expense counts by description
fn breakdown<R: BufRead, W: Write>(
    store: &LedgerStore,
    prompter: &mut Prompter<R, W>,
) -> TallyResult<()> {
    let counts = query::category_breakdown(store)?;
    write!(prompter.writer(), "{}", report::format_breakdown(&counts))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(store: &LedgerStore, script: &str) -> (TallyResult<()>, String) {
        let settings = Settings::default();
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = run(store, &settings, &mut prompter);
        let output = {
            // drain the writer for assertions
            let bytes = std::mem::take(prompter.writer());
            String::from_utf8(bytes).unwrap()
        };
        (result, output)
    }

    fn new_store(dir: &TempDir) -> LedgerStore {
        let store = LedgerStore::new(dir.path().join("ledger.csv"));
        store.initialize().unwrap();
        store
    }

    #[test]
    fn test_exit_immediately() {
        let dir = TempDir::new().unwrap();
        let store = new_store(&dir);

        let (result, output) = run_script(&store, "4\n");
        result.unwrap();
        assert!(output.contains("Enter your choice (1-4):"));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_invalid_choice_reloops() {
        let dir = TempDir::new().unwrap();
        let store = new_store(&dir);

        let (result, output) = run_script(&store, "7\n4\n");
        result.unwrap();
        assert!(output.contains("Invalid choice. Enter 1, 2, 3, or 4."));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_add_transaction_persists() {
        let dir = TempDir::new().unwrap();
        let store = new_store(&dir);

        let (result, output) =
            run_script(&store, "1\n2024-01-05\n100\ni\nSalary\n4\n");
        result.unwrap();
        assert!(output.contains("Transaction added successfully!"));

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "date,amount,category,description\n2024-01-05,100.00,Income,Salary\n"
        );
    }

    #[test]
    fn test_range_view_with_summary_and_plot() {
        let dir = TempDir::new().unwrap();
        let store = new_store(&dir);

        let script = "1\n2024-01-05\n100\ni\nSalary\n\
                      1\n2024-01-07\n25.50\ne\nGroceries\n\
                      2\n2024-01-01\n2024-01-31\ny\n\
                      4\n";
        let (result, output) = run_script(&store, script);
        result.unwrap();

        assert!(output.contains("Transactions from 2024-01-01 to 2024-01-31:"));
        assert!(output.contains("Total Income: $100.00"));
        assert!(output.contains("Total Expense: $25.50"));
        assert!(output.contains("Net Savings: $74.50"));
        assert!(output.contains("Income and Expenses Over Time"));
        // gap day between the two transactions appears in the chart
        assert!(output.contains("2024-01-06"));
    }

    #[test]
    fn test_empty_range_reports_and_continues() {
        let dir = TempDir::new().unwrap();
        let store = new_store(&dir);

        let (result, output) = run_script(&store, "2\n2024-01-01\n2024-01-31\n4\n");
        result.unwrap();
        assert!(output.contains("No transactions found in the given date range."));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_breakdown_output() {
        let dir = TempDir::new().unwrap();
        let store = new_store(&dir);

        let script = "1\n2024-01-01\n20\ne\nGroceries\n\
                      1\n2024-01-08\n30\ne\nGroceries\n\
                      1\n2024-01-02\n800\ne\nRent\n\
                      3\n4\n";
        let (result, output) = run_script(&store, script);
        result.unwrap();

        let breakdown_pos = output.find("Category Breakdown:").unwrap();
        let groceries_pos = output[breakdown_pos..].find("Groceries").unwrap();
        let rent_pos = output[breakdown_pos..].find("Rent").unwrap();
        assert!(groceries_pos < rent_pos);
    }

    #[test]
    fn test_corrupt_ledger_reported_menu_continues() {
        let dir = TempDir::new().unwrap();
        let store = LedgerStore::new(dir.path().join("ledger.csv"));
        fs::write(
            store.path(),
            "date,amount,category,description\nnot-a-date,1.00,Income,x\n",
        )
        .unwrap();

        let (result, output) = run_script(&store, "3\n4\n");
        result.unwrap();
        assert!(output.contains("Corrupt ledger row 1"));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_eof_ends_session() {
        let dir = TempDir::new().unwrap();
        let store = new_store(&dir);

        let (result, _) = run_script(&store, "");
        assert!(matches!(result, Err(TallyError::InputClosed)));
    }

    #[test]
    fn test_retry_exhaustion_returns_to_menu() {
        let dir = TempDir::new().unwrap();
        let store = new_store(&dir);

        // ten bad category answers exhaust the budget; the menu must survive
        let script = format!("1\n2024-01-05\n100\n{}4\n", "x\n".repeat(10));
        let (result, output) = run_script(&store, &script);
        result.unwrap();

        assert!(output.contains("too many invalid attempts entering the category"));
        assert!(output.contains("Exiting..."));
        // nothing was persisted for the abandoned entry
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "date,amount,category,description\n"
        );
    }
}
