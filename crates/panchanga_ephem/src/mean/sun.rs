//! Low-precision solar coordinates (Meeus ch. 25), ~0.01°.

use super::{EclipticPoint, deg_sin};

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

/// Geometric (true) ecliptic coordinates of the Sun, mean equinox of date.
///
/// `t` is Julian centuries of TT from J2000.0.
pub fn true_position(t: f64) -> EclipticPoint {
    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m = 357.52911 + t * (35999.05029 - t * 0.0001537);
    let e = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * deg_sin(m)
        + (0.019993 - t * 0.000101) * deg_sin(2.0 * m)
        + 0.000289 * deg_sin(3.0 * m);

    let true_lon = l0 + c;
    let anomaly = m + c;
    let r_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * anomaly.to_radians().cos());

    EclipticPoint {
        lon_deg: true_lon.rem_euclid(360.0),
        lat_deg: 0.0,
        distance_km: r_au * AU_KM,
    }
}

/// Annual aberration in longitude, degrees (−20.4898″ / R).
pub fn aberration_deg(distance_km: f64) -> f64 {
    -20.4898 / 3600.0 / (distance_km / AU_KM)
}
