//! Validated interactive input
//!
//! A `Prompter` wraps a pair of injected streams and asks until an answer
//! passes validation. Retries are bounded rather than recursive so a scripted
//! or closed input stream fails cleanly instead of looping forever.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};

use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Money, DATE_FORMAT};

/// Attempts allowed per field before giving up
const MAX_RETRIES: usize = 10;

/// Prompt/validate loop over injected input and output streams
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Borrow the output stream (for report output between prompts)
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Print a prompt and read one line, without the trailing newline
    ///
    /// EOF on the input stream is an error: there is nothing left to ask.
    pub fn read_line(&mut self, prompt: &str) -> TallyResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(TallyError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read a `YYYY-MM-DD` date
    ///
    /// With `allow_default`, an empty line yields today's date.
    pub fn read_date(&mut self, prompt: &str, allow_default: bool) -> TallyResult<NaiveDate> {
        for _ in 0..MAX_RETRIES {
            let line = self.read_line(prompt)?;
            let trimmed = line.trim();

            if trimmed.is_empty() && allow_default {
                return Ok(Local::now().date_naive());
            }

            match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(
                    self.writer,
                    "Invalid date format. Please enter the date in YYYY-MM-DD format."
                )?,
            }
        }
        Err(retries_exhausted("date"))
    }

    /// Read a strictly positive amount
    pub fn read_amount(&mut self) -> TallyResult<Money> {
        for _ in 0..MAX_RETRIES {
            let line = self.read_line("Enter the amount: ")?;
            match Money::parse(&line) {
                Ok(amount) if amount.is_positive() => return Ok(amount),
                Ok(_) => writeln!(
                    self.writer,
                    "Amount must be a positive number and not zero."
                )?,
                Err(_) => writeln!(self.writer, "Invalid amount. Please enter a number.")?,
            }
        }
        Err(retries_exhausted("amount"))
    }

    /// Read a category letter (`I` for Income, `E` for Expense)
    pub fn read_category(&mut self) -> TallyResult<Category> {
        for _ in 0..MAX_RETRIES {
            let line = self.read_line("Enter the category ('I' for Income or 'E' for Expense): ")?;
            match Category::from_letter(&line) {
                Some(category) => return Ok(category),
                None => writeln!(
                    self.writer,
                    "Invalid category. Please enter 'I' for Income or 'E' for Expense."
                )?,
            }
        }
        Err(retries_exhausted("category"))
    }

    /// Read a free-text description, default empty
    pub fn read_description(&mut self) -> TallyResult<String> {
        self.read_line("Enter a description (optional): ")
    }

    /// Ask a yes/no question; only `y`/`Y` counts as yes
    pub fn confirm(&mut self, prompt: &str) -> TallyResult<bool> {
        let line = self.read_line(prompt)?;
        Ok(line.trim().eq_ignore_ascii_case("y"))
    }
}

fn retries_exhausted(field: &str) -> TallyError {
    TallyError::Input(format!("too many invalid attempts entering the {}", field))
}
