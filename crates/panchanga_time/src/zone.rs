//! Civil time zones: fixed UTC offsets or IANA zones.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::instant::Instant;

/// Largest accepted fixed offset magnitude, in hours.
const MAX_OFFSET_HOURS: f64 = 18.0;

/// The civil clock an observer keeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CivilZone {
    /// Constant offset from UTC (e.g. IST = +05:30).
    Fixed(FixedOffset),
    /// IANA zone whose offset may change with daylight saving rules.
    Named(Tz),
}

impl CivilZone {
    /// Fixed zone from a signed hour offset (may be fractional, e.g. 5.5).
    pub fn from_hours(hours: f64) -> Result<Self, TimeError> {
        if !hours.is_finite() || hours.abs() > MAX_OFFSET_HOURS {
            return Err(TimeError::InvalidOffset(hours));
        }
        let seconds = (hours * 3600.0).round() as i32;
        FixedOffset::east_opt(seconds)
            .map(Self::Fixed)
            .ok_or(TimeError::InvalidOffset(hours))
    }

    /// Parse `"5.5"`, `"+05:30"` or an IANA name such as `"Asia/Kolkata"`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if let Ok(hours) = s.parse::<f64>() {
            return Self::from_hours(hours);
        }
        if let Some(hours) = parse_hh_mm(s) {
            return Self::from_hours(hours);
        }
        s.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| TimeError::UnknownZone(s.to_string()))
    }

    /// UTC offset in effect at `instant`.
    pub fn offset_at(&self, instant: Instant) -> Result<FixedOffset, TimeError> {
        let utc = instant.to_utc()?;
        Ok(match self {
            Self::Fixed(off) => *off,
            Self::Named(tz) => tz.offset_from_utc_datetime(&utc.naive_utc()).fix(),
        })
    }

    /// UTC offset at `instant` in hours.
    pub fn offset_hours_at(&self, instant: Instant) -> Result<f64, TimeError> {
        Ok(self.offset_at(instant)?.local_minus_utc() as f64 / 3600.0)
    }

    /// The instant at which the civil `date` begins in this zone.
    ///
    /// When midnight falls in a DST gap the first valid local time of the
    /// day is used instead.
    pub fn local_midnight(&self, date: NaiveDate) -> Instant {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        let start = self
            .resolve_local(midnight)
            .or_else(|| self.resolve_local(midnight + TimeDelta::hours(1)))
            .unwrap_or_else(|| midnight.and_utc());
        Instant::from_utc(start)
    }

    /// Civil date-time of `instant` in this zone.
    pub fn to_local(&self, instant: Instant) -> Result<DateTime<FixedOffset>, TimeError> {
        let offset = self.offset_at(instant)?;
        Ok(instant.to_utc()?.with_timezone(&offset))
    }

    fn resolve_local(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Self::Fixed(off) => off
                .from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            Self::Named(tz) => tz
                .from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl std::fmt::Display for CivilZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(off) => write!(f, "{off}"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CivilZone {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CivilZone {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hh_mm(s: &str) -> Option<f64> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1.0, &s[1..]),
        b'-' => (-1.0, &s[1..]),
        _ => return None,
    };
    let (h, m) = rest.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if m >= 60 {
        return None;
    }
    Some(sign * (h as f64 + m as f64 / 60.0))
}
