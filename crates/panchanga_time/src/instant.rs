//! Absolute instants on the UT axis.

use chrono::{DateTime, Utc};

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, jd_to_calendar};

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// An absolute moment, stored as a Julian Date in Universal Time.
///
/// Every event time in a panchanga (sunrise, boundary ends, new moons)
/// is an `Instant`; conversion to civil time happens only at the edges.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Instant(f64);

impl Instant {
    pub const fn from_jd_ut(jd: f64) -> Self {
        Self(jd)
    }

    /// Julian Date (UT).
    pub const fn jd_ut(self) -> f64 {
        self.0
    }

    /// Julian Date (TT), i.e. UT + ΔT.
    pub fn jd_tt(self) -> f64 {
        self.0 + delta_t_seconds(self.0) / SECONDS_PER_DAY
    }

    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(UNIX_EPOCH_JD + dt.timestamp_millis() as f64 / MILLIS_PER_DAY)
    }

    /// Convert to a UTC date-time, rounded to the millisecond.
    pub fn to_utc(self) -> Result<DateTime<Utc>, TimeError> {
        if !self.0.is_finite() {
            return Err(TimeError::OutOfRange(self.0));
        }
        let millis = ((self.0 - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
        if millis.abs() > i64::MAX as f64 {
            return Err(TimeError::OutOfRange(self.0));
        }
        DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::OutOfRange(self.0))
    }

    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Signed days from `earlier` to `self`.
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.0 - earlier.0
    }

    /// Gregorian year of this instant in UTC.
    pub fn utc_year(self) -> i32 {
        jd_to_calendar(self.0).0
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_utc() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            Err(_) => write!(f, "JD {:.6}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn utc_round_trip_millisecond() {
        let dt = Utc.with_ymd_and_hms(2023, 1, 1, 1, 2, 3).single().unwrap();
        let back = Instant::from_utc(dt).to_utc().unwrap();
        assert_eq!(back, dt);
    }

    #[test]
    fn unix_epoch_maps_to_jd() {
        let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).single().unwrap();
        assert_eq!(Instant::from_utc(dt).jd_ut(), UNIX_EPOCH_JD);
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let t = Instant::from_jd_ut(2_459_945.5);
        let diff_s = (t.jd_tt() - t.jd_ut()) * SECONDS_PER_DAY;
        assert!(diff_s > 60.0 && diff_s < 80.0, "ΔT = {diff_s}");
    }

    #[test]
    fn day_arithmetic() {
        let a = Instant::from_jd_ut(2_459_945.5);
        let b = a.add_days(1.25);
        assert!((b.days_since(a) - 1.25).abs() < 1e-12);
        assert!(b > a);
    }

    #[test]
    fn year_of_instant() {
        assert_eq!(Instant::from_jd_ut(2_459_945.5).utc_year(), 2023);
        assert_eq!(Instant::from_jd_ut(2_459_945.4).utc_year(), 2022);
    }

    #[test]
    fn display_utc() {
        assert_eq!(Instant::from_jd_ut(2_451_545.0).to_string(), "2000-01-01T12:00:00Z");
    }

    #[test]
    fn non_finite_is_out_of_range() {
        assert!(Instant::from_jd_ut(f64::NAN).to_utc().is_err());
    }
}
