//! Line-oriented prompting over any reader and writer.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

/// Date format accepted at every date prompt.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prompt failures that end the session.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Reading or writing the terminal failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input reached end of file.
    #[error("input closed")]
    Closed,
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Asks once and returns the trimmed answer.
    pub fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer, showing each rejection.
    pub fn ask_with<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => self.say(format!("  {reason}"))?,
            }
        }
    }

    /// Asks for a `YYYY-MM-DD` date.
    pub fn ask_date(&mut self, label: &str) -> Result<NaiveDate, PromptError> {
        self.ask_with(label, parse_date)
    }

    /// Asks for an optional date; a blank answer means none.
    pub fn ask_optional_date(&mut self, label: &str) -> Result<Option<NaiveDate>, PromptError> {
        self.ask_with(label, |raw| {
            if raw.is_empty() {
                Ok(None)
            } else {
                parse_date(raw).map(Some)
            }
        })
    }

    /// Asks for a whole number no smaller than `min`.
    pub fn ask_count(&mut self, label: &str, min: i32) -> Result<i32, PromptError> {
        self.ask_with(label, |raw| match raw.parse::<i32>() {
            Ok(n) if n >= min => Ok(n),
            Ok(_) => Err(format!("Enter a number of at least {min}.")),
            Err(_) => Err("Enter a whole number.".to_string()),
        })
    }

    /// Asks a yes/no question; only `yes` or `y` confirm.
    pub fn confirm(&mut self, label: &str) -> Result<bool, PromptError> {
        let answer = self.ask(label)?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "yes" | "y"))
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| format!("{raw:?} is not a date (expected YYYY-MM-DD)."))
}
