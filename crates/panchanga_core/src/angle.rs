//! Longitude utilities: normalization, segment indexing, tropical and
//! sidereal longitude of a body.

use panchanga_ephem::{Body, Ephemeris, EphemerisError, Observer, equatorial_to_ecliptic, mean_obliquity_deg};
use panchanga_time::Instant;

use crate::ayanamsa::AyanamsaModel;

/// Normalize an angle to [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// 1-based segment number of `angle` for segments of width `span`.
///
/// `ceil(angle / span)` with 0 remapped to `count`, so an angle exactly on
/// 0° belongs to the last segment.
pub fn segment_index(angle: f64, span: f64, count: u8) -> u8 {
    let raw = (normalize_degrees(angle) / span).ceil() as i64;
    let n = i64::from(count);
    let idx = raw.rem_euclid(n);
    if idx == 0 { count } else { idx as u8 }
}

/// Lift `next` by whole turns until it is no more than 180° behind `prev`.
pub fn unwrap_forward(prev: f64, next: f64) -> f64 {
    let mut v = next;
    while v < prev - 180.0 {
        v += 360.0;
    }
    v
}

/// Tropical ecliptic longitude of `body` for `observer`, degrees in [0, 360).
///
/// RA/Dec from the ephemeris are turned into a unit vector and rotated into
/// the ecliptic of date using the mean obliquity.
pub fn tropical_longitude(
    ephem: &dyn Ephemeris,
    body: Body,
    instant: Instant,
    observer: &Observer,
) -> Result<f64, EphemerisError> {
    let eq = ephem.equatorial_position(body, instant, observer)?;
    let (lon, _) = equatorial_to_ecliptic(eq.ra_deg, eq.dec_deg, mean_obliquity_deg(instant.jd_tt()));
    Ok(normalize_degrees(lon))
}

/// Sidereal longitude: tropical minus ayanamsa, degrees in [0, 360).
pub fn sidereal_longitude(
    ephem: &dyn Ephemeris,
    body: Body,
    instant: Instant,
    observer: &Observer,
    ayanamsa: &AyanamsaModel,
) -> Result<f64, EphemerisError> {
    let trop = tropical_longitude(ephem, body, instant, observer)?;
    Ok(normalize_degrees(trop - ayanamsa.at(instant)))
}

/// Moon − Sun tropical elongation in [0, 360).
pub fn lunar_phase(ephem: &dyn Ephemeris, instant: Instant, observer: &Observer) -> Result<f64, EphemerisError> {
    let sun = tropical_longitude(ephem, Body::Sun, instant, observer)?;
    let moon = tropical_longitude(ephem, Body::Moon, instant, observer)?;
    Ok(normalize_degrees(moon - sun))
}
