//! Error types for time and civil-zone handling.

use thiserror::Error;

/// Errors from instant conversion and civil-zone resolution.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// UTC offset in hours is not finite or outside ±18 h.
    #[error("invalid UTC offset: {0} hours")]
    InvalidOffset(f64),
    /// Zone name is neither a numeric offset nor a known IANA zone.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),
    /// Julian Date cannot be represented as a calendar date-time.
    #[error("Julian date out of representable range: {0}")]
    OutOfRange(f64),
}

/// A civil date string matched none of the accepted formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format: {input:?}")]
pub struct DateFormatError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl DateFormatError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
