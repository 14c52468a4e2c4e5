//! Pañcāṅga (Hindu almanac) computation.
//!
//! Given an [`Ephemeris`](panchanga_ephem::Ephemeris), a place and a civil
//! date, this crate derives tithi, nakshatra, yoga, karana, vaara, masa,
//! ritu, ahargana, elapsed Kali/Śaka year and samvatsara, each evaluated at
//! local sunrise, together with the instant each time-varying element ends.
//!
//! The crate is organized bottom-up:
//! - [`angle`], [`ayanamsa`]: longitude normalization, segment indexing,
//!   tropical/sidereal longitudes
//! - [`boundary`]: inverse-Lagrange root-finder for angle crossings
//! - [`engines`]: one pure function per element
//! - [`panchanga`]: orchestrator producing a [`PanchangaSnapshot`]
//! - [`names`], [`report`]: name tables and local-time rendering
//! - [`places`]: city catalog and coordinate queries

pub mod angle;
pub mod ayanamsa;
pub mod boundary;
pub mod config;
pub mod engines;
pub mod error;
pub mod names;
pub mod panchanga;
pub mod places;
pub mod report;
pub mod types;

pub use angle::{lunar_phase, normalize_degrees, segment_index, sidereal_longitude, tropical_longitude, unwrap_forward};
pub use ayanamsa::{AyanamsaModel, ayanamsa};
pub use boundary::{BoundaryEstimate, DEFAULT_OFFSETS, find_boundary, inverse_lagrange};
pub use config::{PanchangaConfig, TithiStrategy};
pub use engines::{
    ahargana, day_duration, elapsed_year, karana_at, masa_at, nakshatra_at, ritu, samvatsara, tithi_at, vaara_at,
    yoga_at,
};
pub use error::{ConfigurationError, NumericalDegeneracy, NumericalError, PanchangaError};
pub use names::{Element, NameTable, SanskritNames, label, masa_label};
pub use panchanga::{PanchangaRequest, panchanga_at_sunrise, panchanga_for_date, panchanga_on, sunrise_sunset};
pub use places::{Place, PlaceCatalog, PlaceQuery, PlaceResolver};
pub use report::PanchangaReport;
pub use types::{
    DayDuration, ElapsedYear, KaranaInfo, LeapTithi, MasaInfo, NakshatraInfo, PanchangaSnapshot, TithiInfo, VaaraInfo,
    YogaInfo,
};

// Compile-time assertion: shared across threads.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_all() {
        assert_send_sync::<PanchangaSnapshot>();
        assert_send_sync::<PanchangaConfig>();
        assert_send_sync::<PlaceCatalog>();
        assert_send_sync::<SanskritNames>();
    }
};
