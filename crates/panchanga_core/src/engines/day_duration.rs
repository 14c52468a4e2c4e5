//! Daylight length between sunrise and sunset.

use panchanga_time::Instant;

use crate::types::DayDuration;

/// `sunset − sunrise` in hours, plus an `HH:MM:SS` rendering rounded to the second.
pub fn day_duration(sunrise: Instant, sunset: Instant) -> DayDuration {
    let hours = sunset.days_since(sunrise) * 24.0;
    DayDuration {
        hours,
        formatted: format_hms(hours),
    }
}

fn format_hms(hours: f64) -> String {
    let total = (hours * 3600.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{sign}{:02}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_past_six_to_six() {
        let day = 2_459_945.5;
        let d = day_duration(
            Instant::from_jd_ut(day + 6.5 / 24.0),
            Instant::from_jd_ut(day + 18.0 / 24.0),
        );
        assert_eq!(d.formatted, "11:30:00");
        assert!((d.hours - 11.5).abs() < 1e-6);
    }

    #[test]
    fn rounds_to_nearest_second() {
        assert_eq!(format_hms(1.0 + 59.6 / 3600.0), "01:01:00");
        assert_eq!(format_hms(0.0), "00:00:00");
        assert_eq!(format_hms(-0.5), "-00:30:00");
    }
}
