//! Amanta lunar month and season.
//!
//! The month runs new moon to new moon and takes its name from the solar
//! rashi at the preceding new moon. When the Sun has not changed rashi by the
//! following new moon the month is adhika (intercalary).

use panchanga_ephem::{Body, Ephemeris, Observer};
use panchanga_time::Instant;

use crate::angle::{segment_index, tropical_longitude};
use crate::error::PanchangaError;
use crate::types::MasaInfo;

const RASHI_SPAN_DEG: f64 = 30.0;

/// Masa 1..=12 following a solar rashi 1..=12.
pub fn masa_from_rashi(rashi: u8) -> u8 {
    rashi % 12 + 1
}

/// Ritu 0..=5 (Vasanta .. Shishira) for masa 1..=12.
pub fn ritu(masa: u8) -> u8 {
    masa.saturating_sub(1) / 2
}

fn solar_rashi(ephem: &dyn Ephemeris, observer: &Observer, at: Instant) -> Result<u8, PanchangaError> {
    let sun = tropical_longitude(ephem, Body::Sun, at, observer)?;
    Ok(segment_index(sun, RASHI_SPAN_DEG, 12))
}

/// Lunar month containing `reference`.
///
/// Both bounding new moons come from the ephemeris phase search, the earlier
/// one by searching backward up to `window_days`.
pub fn masa_at(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    reference: Instant,
    window_days: f64,
) -> Result<MasaInfo, PanchangaError> {
    let last_new_moon = ephem
        .find_phase_crossing(Body::Moon, Body::Sun, 0.0, reference, -window_days)?
        .ok_or(PanchangaError::AstronomicalSearch("previous new moon not found"))?;
    let next_new_moon = ephem
        .find_phase_crossing(Body::Moon, Body::Sun, 0.0, reference, window_days)?
        .ok_or(PanchangaError::AstronomicalSearch("next new moon not found"))?;

    let rashi = solar_rashi(ephem, observer, last_new_moon)?;
    let next_rashi = solar_rashi(ephem, observer, next_new_moon)?;
    let masa = masa_from_rashi(rashi);
    let is_leap = rashi == next_rashi;
    tracing::debug!(
        masa,
        rashi,
        next_rashi,
        is_leap,
        last = %last_new_moon,
        next = %next_new_moon,
        "masa"
    );

    Ok(MasaInfo {
        masa,
        rashi,
        is_leap,
        last_new_moon,
        next_new_moon,
    })
}
