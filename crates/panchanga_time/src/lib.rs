//! Time primitives for panchanga computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - [`Instant`], an absolute moment on the UT axis
//! - ΔT (TT − UT) for feeding analytic ephemerides
//! - Greenwich/local mean sidereal time
//! - [`CivilZone`] for fixed-offset or IANA civil time
//! - Civil date-string parsing

pub mod date;
pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod zone;

pub use date::parse_civil_date;
pub use delta_t::delta_t_seconds;
pub use error::{DateFormatError, TimeError};
pub use instant::Instant;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    julian_centuries,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use zone::CivilZone;
