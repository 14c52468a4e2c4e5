//! Result types for panchanga elements.
//!
//! Indices are 1-based where the traditional count is (tithi, nakshatra,
//! yoga, karana, masa, rashi) and 0-based where the element is a cycle
//! position (vaara, ritu, samvatsara).

use chrono::{NaiveDate, NaiveTime};
use panchanga_ephem::Observer;
use panchanga_time::Instant;

use crate::error::NumericalDegeneracy;

/// Tithi (lunar day) at the reference instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TithiInfo {
    /// 1..=30; 1–15 Shukla paksha, 16–30 Krishna paksha.
    pub index: u8,
    /// Moon − Sun tropical elongation at the reference, [0, 360).
    pub phase_deg: f64,
    /// When this tithi ends.
    pub end: Instant,
    /// Present when the following tithi begins and ends before the next sunrise.
    pub leap: Option<LeapTithi>,
    pub warning: Option<NumericalDegeneracy>,
}

impl TithiInfo {
    /// True in the waxing fortnight (tithis 1–15).
    pub fn is_shukla(&self) -> bool {
        self.index <= 15
    }

    /// 1-based position within the paksha (1–15).
    pub fn tithi_in_paksha(&self) -> u8 {
        (self.index - 1) % 15 + 1
    }
}

/// A skipped (kshaya) tithi: never current at any sunrise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeapTithi {
    /// 1..=30
    pub index: u8,
    pub end: Instant,
}

/// Moon's nakshatra (27-scheme).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NakshatraInfo {
    /// 1 = Ashwini .. 27 = Revati.
    pub index: u8,
    /// Moon's sidereal longitude at the reference.
    pub longitude_deg: f64,
    pub end: Instant,
    pub warning: Option<NumericalDegeneracy>,
}

impl NakshatraInfo {
    /// Quarter within the nakshatra, 1..=4.
    pub fn pada(&self) -> u8 {
        let span = 360.0 / 27.0;
        let within = self.longitude_deg - f64::from(self.index - 1) * span;
        ((within / (span / 4.0)).floor() as i64).clamp(0, 3) as u8 + 1
    }
}

/// Luni-solar yoga.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YogaInfo {
    /// 1 = Vishkumbha .. 27 = Vaidhriti.
    pub index: u8,
    /// Sidereal Sun + Moon, [0, 360).
    pub total_deg: f64,
    pub end: Instant,
    pub warning: Option<NumericalDegeneracy>,
}

/// Half-tithi. Index only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KaranaInfo {
    /// 1..=60 within the synodic month.
    pub index: u8,
}

/// Weekday of the sunrise in local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VaaraInfo {
    /// 0 = Sunday .. 6 = Saturday.
    pub index: u8,
    /// Local time-of-day of the sunrise.
    pub local_time: NaiveTime,
}

/// Amanta lunar month.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasaInfo {
    /// 1 = Chaitra .. 12 = Phalguna.
    pub masa: u8,
    /// Solar rashi at the preceding new moon, 1..=12.
    pub rashi: u8,
    /// Adhika (intercalary) month: no rashi change between the bounding new moons.
    pub is_leap: bool,
    pub last_new_moon: Instant,
    pub next_new_moon: Instant,
}

/// Elapsed years in the Kali and Śaka eras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElapsedYear {
    pub kali: i64,
    pub saka: i64,
}

/// Length of daylight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayDuration {
    pub hours: f64,
    /// `HH:MM:SS`, rounded to the second.
    pub formatted: String,
}

/// Complete panchanga for one civil date and place, evaluated at sunrise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanchangaSnapshot {
    pub date: NaiveDate,
    pub observer: Observer,
    /// Julian Day (UT) of the sunrise.
    pub julian_day: f64,
    pub sunrise: Instant,
    pub sunset: Instant,
    pub day_duration: DayDuration,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vaara: VaaraInfo,
    pub masa: MasaInfo,
    /// 0 = Vasanta .. 5 = Shishira.
    pub ritu: u8,
    /// Days since the Kali epoch (fractional).
    pub ahargana: f64,
    pub elapsed_year: ElapsedYear,
    /// Position in the 60-year cycle, 0..=59.
    pub samvatsara: u8,
}
