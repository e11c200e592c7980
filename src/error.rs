//! Error types for the shift earnings engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only parsing, validation, settings maintenance and configuration loading
//! can fail. The eligibility rules and the earnings calculator never return
//! an error: missing configuration degrades to zero contributions.

use thiserror::Error;

/// The main error type for the shift earnings engine.
///
/// # Example
///
/// ```
/// use shift_earnings::error::ScheduleError;
///
/// let error = ScheduleError::InvalidDateKey {
///     key: "2024-13-01".to_string(),
///     message: "input is out of range".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date key '2024-13-01': input is out of range"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A date key was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date key '{key}': {message}")]
    InvalidDateKey {
        /// The offending key.
        key: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A year/month pair did not name a calendar month.
    #[error("Invalid month {year}-{month}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested 1-based month.
        month: u32,
    },

    /// Settings contained an unusable value.
    #[error("Invalid settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No shift combination with the given id is configured.
    #[error("Shift combination not found: {id}")]
    CombinationNotFound {
        /// The combination id that was not found.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return ScheduleError.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
