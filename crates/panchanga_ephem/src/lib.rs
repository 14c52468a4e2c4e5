//! Ephemeris contract for panchanga computation.
//!
//! The calendar engines only ever ask three questions of an ephemeris:
//! where is a body on the sky, when does it next rise or set, and when does
//! the Moon−Sun elongation next (or last) reach a given angle. [`Ephemeris`]
//! captures exactly that. [`MeanEphemeris`] answers it from analytic series
//! so the whole stack runs without kernel files.

pub mod crossing;
pub mod error;
pub mod frames;
pub mod location;
pub mod mean;
pub mod riseset;

pub use crossing::{CrossingConfig, find_crossing, is_genuine_crossing, normalize_to_pm180};
pub use error::EphemerisError;
pub use frames::{ecliptic_to_equatorial, equatorial_to_ecliptic, mean_obliquity_deg};
pub use location::{GeoLocation, Observer};
pub use mean::MeanEphemeris;
pub use riseset::{RiseSetConfig, RiseSetDirection, search_rise_set};

use panchanga_time::Instant;

/// Bodies a panchanga needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
}

/// Apparent equatorial coordinates, true equator and equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialPosition {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
    pub distance_km: f64,
}

/// Astronomical collaborator used by the calendar engines.
pub trait Ephemeris: Send + Sync {
    /// Apparent RA/Dec of `body` as seen by `observer`.
    fn equatorial_position(
        &self,
        body: Body,
        instant: Instant,
        observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError>;

    /// First rise or set of `body` in `[search_start, search_start + window_days]`.
    fn find_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: RiseSetDirection,
        search_start: Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError>;

    /// First instant at which `lon(leading) − lon(reference)` equals
    /// `target_deg`, searching `limit_days` from `search_start`.
    /// A negative limit searches backward in time.
    fn find_phase_crossing(
        &self,
        leading: Body,
        reference: Body,
        target_deg: f64,
        search_start: Instant,
        limit_days: f64,
    ) -> Result<Option<Instant>, EphemerisError>;
}

// Compile-time assertion: shared across threads.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_all() {
        assert_send_sync::<MeanEphemeris>();
    }
};
