//! Vaara: weekday of the sunrise.

use chrono::{Datelike, Timelike};
use panchanga_time::{CivilZone, Instant};

use crate::error::PanchangaError;
use crate::types::VaaraInfo;

/// Weekday (0 = Sunday) of `sunrise` in the observer's local civil time.
pub fn vaara_at(sunrise: Instant, zone: &CivilZone) -> Result<VaaraInfo, PanchangaError> {
    let local = zone.to_local(sunrise)?;
    // Drop sub-second noise from the JD round trip.
    let local_time = local.time().with_nanosecond(0).unwrap_or(local.time());
    Ok(VaaraInfo {
        index: local.weekday().num_days_from_sunday() as u8,
        local_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_morning_in_india() {
        // 2023-01-01 01:10 UT = 06:40 IST, a Sunday.
        let sunrise = Instant::from_jd_ut(2_459_945.5 + 70.0 / 1440.0);
        let v = vaara_at(sunrise, &CivilZone::from_hours(5.5).unwrap()).unwrap();
        assert_eq!(v.index, 0);
        assert_eq!(v.local_time.format("%H:%M").to_string(), "06:40");
    }

    #[test]
    fn local_date_not_utc_date() {
        // 2023-01-01 20:00 UT is already Monday 2023-01-02 in Tokyo.
        let t = Instant::from_jd_ut(2_459_945.5 + 20.0 / 24.0);
        let tokyo = CivilZone::parse("Asia/Tokyo").unwrap();
        assert_eq!(vaara_at(t, &tokyo).unwrap().index, 1);
        assert_eq!(vaara_at(t, &CivilZone::from_hours(0.0).unwrap()).unwrap().index, 0);
    }
}
