//! Error type for ephemeris collaborators.

use panchanga_time::TimeError;
use thiserror::Error;

/// Errors raised by an [`Ephemeris`](crate::Ephemeris) implementation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("time conversion failed: {0}")]
    Time(#[from] TimeError),
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    #[error("epoch outside ephemeris coverage: JD {jd_ut}")]
    EpochOutOfRange { jd_ut: f64 },
    #[error("ephemeris backend failure: {0}")]
    Backend(String),
}
