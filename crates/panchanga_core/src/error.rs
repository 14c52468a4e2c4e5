//! Error and warning types for panchanga computation.

use panchanga_ephem::EphemerisError;
use panchanga_time::{DateFormatError, TimeError};
use thiserror::Error;

/// Top-level failure of a panchanga computation.
///
/// Every variant is terminal for the snapshot being built; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PanchangaError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),
    /// A rise/set or phase search found no event inside its window.
    #[error("astronomical search failed: {0}")]
    AstronomicalSearch(&'static str),
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("numerical error: {0}")]
    Numerical(#[from] NumericalError),
}

impl From<TimeError> for PanchangaError {
    fn from(e: TimeError) -> Self {
        Self::Ephemeris(EphemerisError::Time(e))
    }
}

/// Problems with the caller-supplied place or zone.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("City '{0}' not found in database.")]
    UnresolvedPlace(String),
    #[error("Missing required geographical parameters.")]
    IncompleteGeography,
    #[error("coordinates out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// Interpolation cannot proceed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum NumericalError {
    /// Two interpolation nodes share the same ordinate.
    #[error("duplicate interpolation node at y = {value}")]
    DuplicateNode { value: f64 },
    #[error("interpolation needs at least two nodes, got {0}")]
    TooFewNodes(usize),
    #[error("node arrays differ in length")]
    LengthMismatch,
}

/// Non-fatal doubt about an interpolated boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericalDegeneracy {
    /// Samples still decrease after seam unwrapping.
    NonMonotonic,
    /// The target lies outside the sampled range.
    Extrapolated,
    /// The polynomial left the sample bracket around the target; a linear
    /// estimate inside the bracket was used instead.
    OutsideBracket,
}

impl std::fmt::Display for NumericalDegeneracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonMonotonic => f.write_str("samples not monotonic"),
            Self::Extrapolated => f.write_str("target outside sampled range"),
            Self::OutsideBracket => f.write_str("interpolant left its bracket, linear fallback used"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_place_names_the_place() {
        let e = PanchangaError::from(ConfigurationError::UnresolvedPlace("Atlantis".into()));
        assert_eq!(e.to_string(), "City 'Atlantis' not found in database.");
    }

    #[test]
    fn incomplete_geography_message() {
        let e = PanchangaError::from(ConfigurationError::IncompleteGeography);
        assert_eq!(e.to_string(), "Missing required geographical parameters.");
    }

    #[test]
    fn date_error_converts() {
        let e: PanchangaError = DateFormatError::new("xx").into();
        assert!(matches!(e, PanchangaError::DateFormat(_)));
    }
}
