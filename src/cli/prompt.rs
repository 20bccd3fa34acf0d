//! Interactive prompt for the per-exchange file limit.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::{Error, Result};

/// Ask for the maximum number of files to process per exchange.
///
/// Uses a themed prompt on a terminal and falls back to a plain line read
/// when stdin is redirected, so the tool stays scriptable. The raw input
/// must be a pure digit string; anything else aborts the run before any
/// file is touched.
pub fn max_files() -> Result<usize> {
    let raw = if io::stdin().is_terminal() {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Maximum number of files to process per exchange")
            .interact_text()?
    } else {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        line
    };
    parse_max_files(&raw)
}

/// Validate a raw max-files value: digits only, nothing else.
pub fn parse_max_files(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidMaxFiles(trimmed.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| Error::InvalidMaxFiles(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_digit_strings() {
        assert_eq!(parse_max_files("30").unwrap(), 30);
        assert_eq!(parse_max_files("  7\n").unwrap(), 7);
    }

    #[test]
    fn zero_is_a_digit_string_and_processes_nothing() {
        assert_eq!(parse_max_files("0").unwrap(), 0);
    }

    #[test]
    fn rejects_anything_that_is_not_digits() {
        for raw in ["", "abc", "-3", "3.5", "1e2", "ten", "+5"] {
            assert!(
                parse_max_files(raw).is_err(),
                "{raw:?} should have been rejected"
            );
        }
    }
}
