//! Equatorial ↔ ecliptic rotation and obliquity of the ecliptic.

use panchanga_time::julian_centuries;

/// Mean obliquity of the ecliptic of date, degrees.
///
/// Meeus eq. 22.2 (IAU 1980): 23°26′21.448″ − 46.8150″T − 0.00059″T² + 0.001813″T³.
pub fn mean_obliquity_deg(jd_tt: f64) -> f64 {
    let t = julian_centuries(jd_tt);
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// Unit vector for a direction given as (longitude, latitude) in degrees.
pub fn unit_vector(lon_deg: f64, lat_deg: f64) -> [f64; 3] {
    let (sl, cl) = lon_deg.to_radians().sin_cos();
    let (sb, cb) = lat_deg.to_radians().sin_cos();
    [cb * cl, cb * sl, sb]
}

/// Direction of a vector as (longitude in [0, 360), latitude) in degrees.
pub fn direction_deg(v: &[f64; 3]) -> (f64, f64) {
    let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if r == 0.0 {
        return (0.0, 0.0);
    }
    let lon = v[1].atan2(v[0]).to_degrees().rem_euclid(360.0);
    let lat = (v[2] / r).clamp(-1.0, 1.0).asin().to_degrees();
    (lon, lat)
}

/// Rotate a vector about the x-axis by `angle_deg`.
fn rotate_x(v: &[f64; 3], angle_deg: f64) -> [f64; 3] {
    let (s, c) = angle_deg.to_radians().sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}

/// (RA, Dec) → (ecliptic longitude, latitude), all degrees.
pub fn equatorial_to_ecliptic(ra_deg: f64, dec_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    direction_deg(&rotate_x(&unit_vector(ra_deg, dec_deg), obliquity_deg))
}

/// (ecliptic longitude, latitude) → (RA, Dec), all degrees.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    direction_deg(&rotate_x(&unit_vector(lon_deg, lat_deg), -obliquity_deg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_time::J2000_JD;

    #[test]
    fn obliquity_at_j2000() {
        let eps = mean_obliquity_deg(J2000_JD);
        assert!((eps - 23.439_291).abs() < 1e-5, "ε = {eps}");
    }

    #[test]
    fn equinox_maps_to_itself() {
        let (lon, lat) = equatorial_to_ecliptic(0.0, 0.0, 23.44);
        assert!(lon.abs() < 1e-12 && lat.abs() < 1e-12);
    }

    #[test]
    fn solstice_point() {
        // Ecliptic longitude 90° sits at RA 90°, Dec +ε.
        let (ra, dec) = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((ra - 90.0).abs() < 1e-9, "ra = {ra}");
        assert!((dec - 23.44).abs() < 1e-9, "dec = {dec}");
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: α = 116.328942°, δ = 28.026183°, ε = 23.4392911° → λ = 113.215630°, β = 6.684170°
        let (lon, lat) = equatorial_to_ecliptic(116.328_942, 28.026_183, 23.439_291_1);
        assert!((lon - 113.215_630).abs() < 1e-5, "λ = {lon}");
        assert!((lat - 6.684_170).abs() < 1e-5, "β = {lat}");
    }

    #[test]
    fn rotation_is_invertible() {
        let (ra, dec) = ecliptic_to_equatorial(201.3, -4.2, 23.44);
        let (lon, lat) = equatorial_to_ecliptic(ra, dec, 23.44);
        assert!((lon - 201.3).abs() < 1e-9 && (lat + 4.2).abs() < 1e-9);
    }
}
