//! Error types for loading trip data and parsing filter selectors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a city's CSV file into a [`Dataset`](crate::loader::Dataset).
///
/// Any of these aborts the whole load; no partial dataset is returned.
#[derive(Error, Debug)]
pub enum LoadError {
    /// City key is not in the catalog
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// Source file could not be opened or read
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed CSV (unbalanced quotes, bad UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is not named in the header row
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A start-time cell could not be parsed as a timestamp
    #[error("row {row}: cannot parse start time '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    /// A duration or birth-year cell holds text that is not a number.
    ///
    /// Stricter than leaving such cells as they are: a value that can never be
    /// counted fails the load instead of silently dropping out of the reports.
    #[error("row {row}: cannot parse {column} '{value}' as a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Errors raised when selector text does not name a known month or day.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectorError {
    #[error("'{0}' is not one of the available months")]
    UnknownMonth(String),

    #[error("'{0}' is not a day of the week")]
    UnknownWeekday(String),
}
