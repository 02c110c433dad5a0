//! Calendar-date helpers for the fixed `YYYY-MM-DD` textual form.
//!
//! Dates cross the application boundary as zero-padded `YYYY-MM-DD` strings
//! (a controlled internal format, not untrusted input). Malformed text is a
//! programmer error and fails loudly, distinct from any business-rule
//! rejection. All arithmetic happens on parsed [`NaiveDate`] values, never
//! on strings.

use chrono::NaiveDate;
use thiserror::Error;

/// The fixed textual date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error raised when date text does not match the fixed format.
#[derive(Debug, Error)]
#[error("Malformed date text {text:?}: {source}")]
pub struct DateError {
    /// The offending input text.
    pub text: String,
    /// The underlying parse failure.
    #[source]
    pub source: chrono::ParseError,
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|source| DateError {
        text: text.to_string(),
        source,
    })
}

/// Formats a calendar date as a zero-padded `YYYY-MM-DD` string.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
