//! ΔT = TT − UT.
//!
//! Piecewise model: Stephenson & Houlden quadratics before 1620, a decadal
//! table (sampled from Meeus's biennial series) through 1990, Meeus's
//! 1990/2000/2010 estimates to 2005, and the Espenak–Meeus polynomials after.
//!
//! Panchanga boundaries are quoted to the minute, so a few seconds of model
//! error here is well below anything the output can show.

/// Decadal ΔT samples (seconds) for 1620, 1630, …, 1990.
#[rustfmt::skip]
const DECADAL: [f64; 38] = [
    124.0, 85.0, 62.0, 48.0, 37.0, 26.0, 16.0, 10.0,  9.0, 10.0,
     11.0, 11.0, 12.0, 13.0, 15.0, 16.0, 17.0, 17.0, 13.7, 12.5,
     12.0,  7.5,  5.7,  7.1,  7.9,  1.6, -5.4, -5.9, -2.7, 10.5,
     21.2, 24.0, 24.3, 29.1, 33.1, 40.2, 50.5, 56.9,
];

const TABLE_START_YEAR: f64 = 1620.0;
const TABLE_END_YEAR: f64 = 1990.0;

/// Decimal Gregorian year for a JD (UT), good to a day or so.
fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - 2_451_544.5) / 365.2425
}

fn ancient(year: f64) -> f64 {
    let c = (year - 948.0) / 100.0;
    1830.0 - 405.0 * c + 46.5 * c * c
}

fn medieval(year: f64) -> f64 {
    let c = (year - 1850.0) / 100.0;
    22.5 * c * c
}

fn tabulated(year: f64) -> f64 {
    let pos = (year - TABLE_START_YEAR) / 10.0;
    let i = (pos.floor() as usize).min(DECADAL.len() - 2);
    let frac = pos - i as f64;
    DECADAL[i] + (DECADAL[i + 1] - DECADAL[i]) * frac
}

fn recent(year: f64) -> f64 {
    const DT: [f64; 3] = [56.86, 63.83, 70.0];
    let a = DT[1] - DT[0];
    let b = DT[2] - DT[1];
    let c = b - a;
    let n = (year - 2000.0) / 10.0;
    DT[1] + n / 2.0 * (a + b + n * c)
}

fn modern(year: f64) -> f64 {
    let t = year - 2000.0;
    62.92 + 0.32217 * t + 0.005589 * t * t
}

fn future(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year).max(0.0)
}

/// ΔT in seconds at the given Julian Date (UT).
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    let year = decimal_year(jd_ut);
    if year < 948.0 {
        ancient(year)
    } else if year < TABLE_START_YEAR {
        medieval(year)
    } else if year < TABLE_END_YEAR {
        tabulated(year)
    } else if year < 2005.0 {
        recent(year)
    } else if year < 2050.0 {
        modern(year)
    } else {
        future(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn year_2000_near_64s() {
        let dt = delta_t_seconds(calendar_to_jd(2000, 1, 1.0));
        assert!((dt - 63.83).abs() < 0.1, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_2023_near_70s() {
        let dt = delta_t_seconds(calendar_to_jd(2023, 1, 1.0));
        assert!((65.0..76.0).contains(&dt), "ΔT(2023) = {dt}");
    }

    #[test]
    fn table_hits_sample_points() {
        let dt = delta_t_seconds(calendar_to_jd(1900, 1, 1.0));
        assert!((dt - (-2.7)).abs() < 0.2, "ΔT(1900) = {dt}");
    }

    #[test]
    fn ancient_is_large() {
        let dt = delta_t_seconds(calendar_to_jd(500, 1, 1.0));
        assert!(dt > 3000.0, "ΔT(500) = {dt}");
    }

    #[test]
    fn continuous_at_table_end() {
        let before = delta_t_seconds(calendar_to_jd(1989, 12, 31.0));
        let after = delta_t_seconds(calendar_to_jd(1990, 1, 2.0));
        assert!((before - after).abs() < 0.5, "{before} vs {after}");
    }
}
