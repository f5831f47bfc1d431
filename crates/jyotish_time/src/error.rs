//! Error types for time parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time parsing or instant conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not `YYYY-MM-DD` or names a day that does not exist.
    InvalidDate(String),
    /// Time string is not `HH:MM` or `HH:MM:SS`.
    InvalidTime(String),
    /// UTC offset outside ±14 hours.
    InvalidOffset(i32),
    /// Julian Day cannot be represented as a civil instant.
    OutOfRange(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            Self::InvalidTime(s) => write!(f, "invalid time '{s}', expected HH:MM"),
            Self::InvalidOffset(m) => write!(f, "invalid UTC offset: {m} minutes"),
            Self::OutOfRange(jd) => write!(f, "julian day {jd} is outside the civil range"),
        }
    }
}

impl Error for TimeError {}
