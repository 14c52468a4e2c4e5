//! Earth Rotation Angle and mean sidereal time.
//!
//! UT is used in place of UT1; the difference (< 0.9 s) is invisible at
//! the resolution of rise/set and panchanga boundaries.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::instant::Instant;
use crate::julian::J2000_JD;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Ratio of sidereal to solar day rates.
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle at a JD (UT), radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + SIDEREAL_RATE * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a JD (UT), radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / 36525.0;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local mean sidereal time for an east longitude (degrees), radians in [0, 2π).
pub fn local_sidereal_time_rad(instant: Instant, longitude_east_deg: f64) -> f64 {
    (gmst_rad(instant.jd_ut()) + longitude_east_deg.to_radians()).rem_euclid(TAU)
}
