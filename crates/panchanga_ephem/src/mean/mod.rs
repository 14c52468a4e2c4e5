//! Analytic Sun/Moon ephemeris needing no kernel files.
//!
//! Positions are apparent (nutation in longitude, solar aberration) and
//! referred to the true equator and equinox of date. Accuracy is about
//! 0.01° for the Sun and the Moon over a few centuries around J2000,
//! which puts element boundaries within a minute or two.

pub mod moon;
pub mod sun;

use panchanga_time::{Instant, julian_centuries, local_sidereal_time_rad};

use crate::crossing::{CrossingConfig, find_crossing, normalize_to_pm180};
use crate::error::EphemerisError;
use crate::frames::{ecliptic_to_equatorial, mean_obliquity_deg};
use crate::location::{GeoLocation, Observer};
use crate::riseset::{RiseSetConfig, RiseSetDirection, search_rise_set};
use crate::{Body, Ephemeris, EquatorialPosition};

/// Equatorial Earth radius in km.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// Polar/equatorial axis ratio b/a.
const AXIS_RATIO: f64 = 0.996_647_19;

/// JD range (UT) over which the series are accepted: roughly 1000 BCE to 3000 CE.
const COVERAGE_JD: std::ops::RangeInclusive<f64> = 1_356_000.5..=2_817_000.5;

/// Ecliptic longitude/latitude (degrees) and distance (km).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_km: f64,
}

pub(crate) fn deg_sin(x: f64) -> f64 {
    x.to_radians().sin()
}

fn deg_cos(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Nutation in longitude and obliquity, degrees (Meeus ch. 22, 0.5″ terms).
pub fn nutation_deg(t: f64) -> (f64, f64) {
    let omega = 125.04452 - 1934.136261 * t;
    let l_sun = 280.4665 + 36000.7698 * t;
    let l_moon = 218.3165 + 481267.8813 * t;
    let dpsi = -17.20 * deg_sin(omega) - 1.32 * deg_sin(2.0 * l_sun) - 0.23 * deg_sin(2.0 * l_moon)
        + 0.21 * deg_sin(2.0 * omega);
    let deps = 9.20 * deg_cos(omega) + 0.57 * deg_cos(2.0 * l_sun) + 0.10 * deg_cos(2.0 * l_moon)
        - 0.09 * deg_cos(2.0 * omega);
    (dpsi / 3600.0, deps / 3600.0)
}

/// Reference [`Ephemeris`] built on truncated analytic series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanEphemeris {
    pub rise_set: RiseSetConfig,
    pub crossing: CrossingConfig,
}

impl MeanEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rise_set_config(mut self, config: RiseSetConfig) -> Self {
        self.rise_set = config;
        self
    }

    fn check_coverage(instant: Instant) -> Result<(), EphemerisError> {
        if COVERAGE_JD.contains(&instant.jd_ut()) {
            Ok(())
        } else {
            Err(EphemerisError::EpochOutOfRange {
                jd_ut: instant.jd_ut(),
            })
        }
    }

    /// Apparent geocentric ecliptic position, true equinox of date.
    pub fn apparent_ecliptic(&self, body: Body, instant: Instant) -> Result<EclipticPoint, EphemerisError> {
        Self::check_coverage(instant)?;
        let t = julian_centuries(instant.jd_tt());
        let (dpsi, _) = nutation_deg(t);
        let mut p = match body {
            Body::Sun => {
                let p = sun::true_position(t);
                EclipticPoint {
                    lon_deg: p.lon_deg + sun::aberration_deg(p.distance_km),
                    ..p
                }
            }
            Body::Moon => moon::true_position(t),
        };
        p.lon_deg = (p.lon_deg + dpsi).rem_euclid(360.0);
        Ok(p)
    }

    /// Apparent geocentric RA/Dec.
    pub fn geocentric(&self, body: Body, instant: Instant) -> Result<EquatorialPosition, EphemerisError> {
        let p = self.apparent_ecliptic(body, instant)?;
        let t = julian_centuries(instant.jd_tt());
        let (_, deps) = nutation_deg(t);
        let eps = mean_obliquity_deg(instant.jd_tt()) + deps;
        let (ra_deg, dec_deg) = ecliptic_to_equatorial(p.lon_deg, p.lat_deg, eps);
        Ok(EquatorialPosition {
            ra_deg,
            dec_deg,
            distance_km: p.distance_km,
        })
    }
}

/// Shift geocentric RA/Dec to the observer's position (Meeus ch. 40).
///
/// The distance is left geocentric.
pub fn topocentric(geo: EquatorialPosition, location: &GeoLocation, instant: Instant) -> EquatorialPosition {
    let phi = location.latitude_rad();
    let u = (AXIS_RATIO * phi.tan()).atan();
    let h_ratio = location.elevation_m / (EARTH_RADIUS_KM * 1000.0);
    let rho_sin = AXIS_RATIO * u.sin() + h_ratio * phi.sin();
    let rho_cos = u.cos() + h_ratio * phi.cos();

    let sin_par = EARTH_RADIUS_KM / geo.distance_km;
    let ra = geo.ra_deg.to_radians();
    let dec = geo.dec_deg.to_radians();
    let hour_angle = local_sidereal_time_rad(instant, location.longitude_deg) - ra;

    let denom = dec.cos() - rho_cos * sin_par * hour_angle.cos();
    let d_ra = (-rho_cos * sin_par * hour_angle.sin()).atan2(denom);
    let dec_topo = ((dec.sin() - rho_sin * sin_par) * d_ra.cos()).atan2(denom);

    EquatorialPosition {
        ra_deg: (geo.ra_deg + d_ra.to_degrees()).rem_euclid(360.0),
        dec_deg: dec_topo.to_degrees(),
        distance_km: geo.distance_km,
    }
}

impl Ephemeris for MeanEphemeris {
    fn equatorial_position(
        &self,
        body: Body,
        instant: Instant,
        observer: &Observer,
    ) -> Result<EquatorialPosition, EphemerisError> {
        let geo = self.geocentric(body, instant)?;
        Ok(topocentric(geo, &observer.location, instant))
    }

    fn find_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: RiseSetDirection,
        search_start: Instant,
        window_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        search_rise_set(
            |t| self.geocentric(body, t),
            body,
            &observer.location,
            direction,
            search_start,
            window_days,
            &self.rise_set,
        )
    }

    fn find_phase_crossing(
        &self,
        leading: Body,
        reference: Body,
        target_deg: f64,
        search_start: Instant,
        limit_days: f64,
    ) -> Result<Option<Instant>, EphemerisError> {
        let separation = |t: Instant| -> Result<f64, EphemerisError> {
            let lead = self.apparent_ecliptic(leading, t)?.lon_deg;
            let refr = self.apparent_ecliptic(reference, t)?.lon_deg;
            Ok(normalize_to_pm180(lead - refr - target_deg))
        };
        find_crossing(separation, search_start, limit_days, &self.crossing)
    }
}
