//! Rise/set search for the Sun and Moon.
//!
//! Iterated hour-angle method: start from local transit, step to the hour
//! angle at which the body's altitude equals the target altitude, then
//! re-evaluate the body's position at the estimate until the correction
//! falls below [`CONVERGENCE_DAYS`].
//!
//! Sources: Meeus, "Astronomical Algorithms", ch. 15; Montenbruck & Pfleger.

use std::f64::consts::{PI, TAU};

use panchanga_time::{Instant, gmst_rad, sidereal::SIDEREAL_RATE};

use crate::error::EphemerisError;
use crate::location::GeoLocation;
use crate::{Body, EquatorialPosition};

/// Maximum iterations for the refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Mean Earth radius in meters (geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equatorial Earth radius in km (lunar horizontal parallax).
const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Which horizon crossing to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiseSetDirection {
    Rise,
    Set,
}

/// Horizon model parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semidiameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip for observer elevation: dip = sqrt(2h/R). Default: true.
    pub elevation_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            elevation_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Geometric dip of the horizon in degrees.
    pub fn dip_deg(&self, elevation_m: f64) -> f64 {
        if self.elevation_correction && elevation_m > 0.0 {
            (2.0 * elevation_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            0.0
        }
    }

    /// Geocentric altitude of the body's center at the rise/set instant.
    ///
    /// Sun: `−(refraction + semidiameter) − dip`.
    /// Moon: `0.7275·π − refraction − dip` where π is the horizontal parallax.
    pub fn target_altitude_deg(&self, body: Body, distance_km: f64, elevation_m: f64) -> f64 {
        let refraction = self.refraction_arcmin / 60.0;
        let dip = self.dip_deg(elevation_m);
        match body {
            Body::Sun => -(refraction + self.semidiameter_arcmin / 60.0) - dip,
            Body::Moon => {
                let parallax = (EARTH_EQUATORIAL_RADIUS_KM / distance_km)
                    .clamp(-1.0, 1.0)
                    .asin()
                    .to_degrees();
                0.7275 * parallax - refraction - dip
            }
        }
    }
}

/// Approximate local solar noon from a 0h UT Julian Date and east longitude.
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn wrap_pm_pi(a: f64) -> f64 {
    let a = a.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Target hour angle in radians, or `None` if the body never reaches the altitude.
fn target_hour_angle(h0_deg: f64, lat_rad: f64, dec_deg: f64) -> Option<f64> {
    let dec = dec_deg.to_radians();
    let cos_h = (h0_deg.to_radians().sin() - lat_rad.sin() * dec.sin()) / (lat_rad.cos() * dec.cos());
    (-1.0..=1.0).contains(&cos_h).then(|| cos_h.acos())
}

/// One rise/set event near the given approximate local noon.
///
/// Returns `Ok(None)` when the body stays above or below the target
/// altitude for that day.
fn event_near_noon<F>(
    geocentric: &mut F,
    body: Body,
    location: &GeoLocation,
    direction: RiseSetDirection,
    jd_noon: f64,
    config: &RiseSetConfig,
) -> Result<Option<f64>, EphemerisError>
where
    F: FnMut(Instant) -> Result<EquatorialPosition, EphemerisError>,
{
    let phi = location.latitude_rad();
    let rate = TAU * SIDEREAL_RATE;
    let sign = match direction {
        RiseSetDirection::Rise => -1.0,
        RiseSetDirection::Set => 1.0,
    };

    let hour_angle_at = |jd: f64, ra_deg: f64| {
        wrap_pm_pi(gmst_rad(jd) + location.longitude_rad() - ra_deg.to_radians())
    };

    let pos = geocentric(Instant::from_jd_ut(jd_noon))?;
    let h0 = config.target_altitude_deg(body, pos.distance_km, location.elevation_m);
    let Some(h_target) = target_hour_angle(h0, phi, pos.dec_deg) else {
        return Ok(None);
    };
    let transit = jd_noon - hour_angle_at(jd_noon, pos.ra_deg) / rate;
    let mut jd = transit + sign * h_target / rate;

    for _ in 0..MAX_ITERATIONS {
        let pos = geocentric(Instant::from_jd_ut(jd))?;
        let h0 = config.target_altitude_deg(body, pos.distance_km, location.elevation_m);
        let Some(h_target) = target_hour_angle(h0, phi, pos.dec_deg) else {
            return Ok(None);
        };
        let correction = wrap_pm_pi(sign * h_target - hour_angle_at(jd, pos.ra_deg)) / rate;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(Some(jd))
}

/// First rise or set of `body` in `[search_start, search_start + window_days]`.
///
/// `geocentric` supplies the body's apparent geocentric RA/Dec/distance.
pub fn search_rise_set<F>(
    mut geocentric: F,
    body: Body,
    location: &GeoLocation,
    direction: RiseSetDirection,
    search_start: Instant,
    window_days: f64,
    config: &RiseSetConfig,
) -> Result<Option<Instant>, EphemerisError>
where
    F: FnMut(Instant) -> Result<EquatorialPosition, EphemerisError>,
{
    if !window_days.is_finite() || window_days <= 0.0 {
        return Err(EphemerisError::InvalidQuery("rise/set window must be positive"));
    }
    let start = search_start.jd_ut();
    let end = start + window_days;
    let jd0 = (start + 0.5).floor() - 0.5;
    let days = window_days.ceil() as i64 + 1;

    for k in -1..=days {
        let noon = approximate_local_noon_jd(jd0 + k as f64, location.longitude_deg);
        if let Some(jd) = event_near_noon(&mut geocentric, body, location, direction, noon, config)? {
            if jd >= start && jd <= end {
                tracing::debug!(?body, ?direction, jd, "rise/set event found");
                return Ok(Some(Instant::from_jd_ut(jd)));
            }
        }
    }
    Ok(None)
}
