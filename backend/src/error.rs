//! Error types for the calendar backend.

use shared::ParseEnumError;
use thiserror::Error;

/// Errors raised at the crate's fallible boundaries.
///
/// Grid computation itself is total; these only come from parsing
/// user-supplied strings and loading input files.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("{0}")]
    InvalidArgument(#[from] ParseEnumError),

    #[error("Invalid date key '{0}'. Expected YYYY-MM-DD")]
    InvalidDateKey(String),

    #[error("Date {0} is too close to the edge of the supported calendar range")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
