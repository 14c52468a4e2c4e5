//! Ahargana, elapsed Kali/Śaka years and the 60-year samvatsara cycle.
//!
//! Pure integer/float arithmetic; no ephemeris involved.

use crate::types::ElapsedYear;

/// Julian Day of the Kali epoch used as ahargana zero.
pub const AHARGANA_EPOCH_JD: f64 = 588_465.5;

/// Sidereal year length in days used for elapsed-year counting.
const SIDEREAL_YEAR_DAYS: f64 = 365.25636;

/// Kali year of the Śaka era's start.
const SAKA_OFFSET: i64 = 3179;

/// Kali year from which the samvatsara count is re-based.
const SAMVATSARA_REBASE_KALI: i64 = 4009;

/// Days elapsed since the Kali epoch.
pub fn ahargana(jd: f64) -> f64 {
    jd - AHARGANA_EPOCH_JD
}

/// Elapsed Kali and Śaka years for an ahargana and the current masa (1..=12).
pub fn elapsed_year(ahargana: f64, masa: u8) -> ElapsedYear {
    let shifted = ahargana + f64::from(4 - i32::from(masa)) * 30.0;
    let kali = (shifted / SIDEREAL_YEAR_DAYS).floor() as i64;
    ElapsedYear {
        kali,
        saka: kali - SAKA_OFFSET,
    }
}

/// Position 0..=59 in the samvatsara cycle for an elapsed Kali year.
pub fn samvatsara(kali: i64) -> u8 {
    let k = if kali >= SAMVATSARA_REBASE_KALI {
        (kali - 14).rem_euclid(60)
    } else {
        kali
    };
    let correction = (k * 211 - 108).div_euclid(18_000);
    (k + 27 + correction).rem_euclid(60) as u8
}
