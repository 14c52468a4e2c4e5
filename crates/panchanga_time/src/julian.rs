//! Julian Date ↔ Gregorian calendar conversion.
//!
//! Standard algorithm from Meeus, "Astronomical Algorithms", ch. 7.
//! Dates before 1582-Oct-15 are interpreted in the Julian calendar.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `1.5` is noon on the first of the month).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;

    let gregorian = (year, month, day) >= (1582, 10, 15.0);
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn unix_epoch() {
        assert!((calendar_to_jd(1970, 1, 1.0) - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn new_year_2023() {
        assert!((calendar_to_jd(2023, 1, 1.0) - 2_459_945.5).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957-Oct-4.81 = JD 2436116.31
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn julian_calendar_date() {
        // Meeus example 7.b: 333-Jan-27.5 = JD 1842713.0
        assert!((calendar_to_jd(333, 1, 27.5) - 1_842_713.0).abs() < 1e-9);
    }

    #[test]
    fn inverse_of_j2000() {
        let (y, m, d) = jd_to_calendar(J2000_JD);
        assert_eq!((y, m), (2000, 1));
        assert!((d - 1.5).abs() < 1e-9);
    }

    #[test]
    fn inverse_handles_february() {
        let jd = calendar_to_jd(2024, 2, 29.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 2));
        assert!((d - 29.25).abs() < 1e-6, "day = {d}");
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(julian_centuries(J2000_JD), 0.0);
    }
}
