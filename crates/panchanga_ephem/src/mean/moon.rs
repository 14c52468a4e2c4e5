//! Lunar coordinates from the periodic terms of Meeus ch. 47 (tables 47.A/47.B).

use super::{EclipticPoint, deg_sin};

// Multiples of D, M, M′, F; Σl coefficient (1e-6 deg); Σr coefficient (1e-3 km).
#[rustfmt::skip]
const LON_DIST: [(i8, i8, i8, i8, f64, f64); 60] = [
    (0, 0, 1, 0, 6288774.0, -20905355.0),
    (2, 0, -1, 0, 1274027.0, -3699111.0),
    (2, 0, 0, 0, 658314.0, -2955968.0),
    (0, 0, 2, 0, 213618.0, -569925.0),
    (0, 1, 0, 0, -185116.0, 48888.0),
    (0, 0, 0, 2, -114332.0, -3149.0),
    (2, 0, -2, 0, 58793.0, 246158.0),
    (2, -1, -1, 0, 57066.0, -152138.0),
    (2, 0, 1, 0, 53322.0, -170733.0),
    (2, -1, 0, 0, 45758.0, -204586.0),
    (0, 1, -1, 0, -40923.0, -129620.0),
    (1, 0, 0, 0, -34720.0, 108743.0),
    (0, 1, 1, 0, -30383.0, 104755.0),
    (2, 0, 0, -2, 15327.0, 10321.0),
    (0, 0, 1, 2, -12528.0, 0.0),
    (0, 0, 1, -2, 10980.0, 79661.0),
    (4, 0, -1, 0, 10675.0, -34782.0),
    (0, 0, 3, 0, 10034.0, -23210.0),
    (4, 0, -2, 0, 8548.0, -21636.0),
    (2, 1, -1, 0, -7888.0, 24208.0),
    (2, 1, 0, 0, -6766.0, 30824.0),
    (1, 0, -1, 0, -5163.0, -8379.0),
    (1, 1, 0, 0, 4987.0, -16675.0),
    (2, -1, 1, 0, 4036.0, -12831.0),
    (2, 0, 2, 0, 3994.0, -10445.0),
    (4, 0, 0, 0, 3861.0, -11650.0),
    (2, 0, -3, 0, 3665.0, 14403.0),
    (0, 1, -2, 0, -2689.0, -7003.0),
    (2, 0, -1, 2, -2602.0, 0.0),
    (2, -1, -2, 0, 2390.0, 10056.0),
    (1, 0, 1, 0, -2348.0, 6322.0),
    (2, -2, 0, 0, 2236.0, -9884.0),
    (0, 1, 2, 0, -2120.0, 5751.0),
    (0, 2, 0, 0, -2069.0, 0.0),
    (2, -2, -1, 0, 2048.0, -4950.0),
    (2, 0, 1, -2, -1773.0, 4130.0),
    (2, 0, 0, 2, -1595.0, 0.0),
    (4, -1, -1, 0, 1215.0, -3958.0),
    (0, 0, 2, 2, -1110.0, 0.0),
    (3, 0, -1, 0, -892.0, 3258.0),
    (2, 1, 1, 0, -810.0, 2616.0),
    (4, -1, -2, 0, 759.0, -1897.0),
    (0, 2, -1, 0, -713.0, -2117.0),
    (2, 2, -1, 0, -700.0, 2354.0),
    (2, 1, -2, 0, 691.0, 0.0),
    (2, -1, 0, -2, 596.0, 0.0),
    (4, 0, 1, 0, 549.0, -1423.0),
    (0, 0, 4, 0, 537.0, -1117.0),
    (4, -1, 0, 0, 520.0, -1571.0),
    (1, 0, -2, 0, -487.0, -1739.0),
    (2, 1, 0, -2, -399.0, 0.0),
    (0, 0, 2, -2, -381.0, -4421.0),
    (1, 1, 1, 0, 351.0, 0.0),
    (3, 0, -2, 0, -340.0, 0.0),
    (4, 0, -3, 0, 330.0, 0.0),
    (2, -1, 2, 0, 327.0, 0.0),
    (0, 2, 1, 0, -323.0, 1165.0),
    (1, 1, -1, 0, 299.0, 0.0),
    (2, 0, 3, 0, 294.0, 0.0),
    (2, 0, -1, -2, 0.0, 8752.0),
];

// Multiples of D, M, M′, F; Σb coefficient (1e-6 deg).
#[rustfmt::skip]
const LAT: [(i8, i8, i8, i8, f64); 60] = [
    (0, 0, 0, 1, 5128122.0),
    (0, 0, 1, 1, 280602.0),
    (0, 0, 1, -1, 277693.0),
    (2, 0, 0, -1, 173237.0),
    (2, 0, -1, 1, 55413.0),
    (2, 0, -1, -1, 46271.0),
    (2, 0, 0, 1, 32573.0),
    (0, 0, 2, 1, 17198.0),
    (2, 0, 1, -1, 9266.0),
    (0, 0, 2, -1, 8822.0),
    (2, -1, 0, -1, 8216.0),
    (2, 0, -2, -1, 4324.0),
    (2, 0, 1, 1, 4200.0),
    (2, 1, 0, -1, -3359.0),
    (2, -1, -1, 1, 2463.0),
    (2, -1, 0, 1, 2211.0),
    (2, -1, -1, -1, 2065.0),
    (0, 1, -1, -1, -1870.0),
    (4, 0, -1, -1, 1828.0),
    (0, 1, 0, 1, -1794.0),
    (0, 0, 0, 3, -1749.0),
    (0, 1, -1, 1, -1565.0),
    (1, 0, 0, 1, -1491.0),
    (0, 1, 1, 1, -1475.0),
    (0, 1, 1, -1, -1410.0),
    (0, 1, 0, -1, -1344.0),
    (1, 0, 0, -1, -1335.0),
    (0, 0, 3, 1, 1107.0),
    (4, 0, 0, -1, 1021.0),
    (4, 0, -1, 1, 833.0),
    (0, 0, 1, -3, 777.0),
    (4, 0, -2, 1, 671.0),
    (2, 0, 0, -3, 607.0),
    (2, 0, 2, -1, 596.0),
    (2, -1, 1, -1, 491.0),
    (2, 0, -2, 1, -451.0),
    (0, 0, 3, -1, 439.0),
    (2, 0, 2, 1, 422.0),
    (2, 0, -3, -1, 421.0),
    (2, 1, -1, 1, -366.0),
    (2, 1, 0, 1, -351.0),
    (4, 0, 0, 1, 331.0),
    (2, -1, 1, 1, 315.0),
    (2, -2, 0, -1, 302.0),
    (0, 0, 1, 3, -283.0),
    (2, 1, 1, -1, -229.0),
    (1, 1, 0, -1, 223.0),
    (1, 1, 0, 1, 223.0),
    (0, 1, -2, -1, -220.0),
    (2, 1, -1, -1, -220.0),
    (1, 0, 1, 1, -185.0),
    (2, -1, -2, -1, 181.0),
    (0, 1, 2, 1, -177.0),
    (4, 0, -2, -1, 176.0),
    (4, -1, -1, -1, 166.0),
    (1, 0, 1, -1, -164.0),
    (4, 0, 1, -1, 132.0),
    (1, 0, -1, -1, -119.0),
    (4, -1, 0, -1, 115.0),
    (2, -2, 0, 1, 107.0),
];

/// Eccentricity factor for terms containing the Sun's anomaly.
fn e_factor(m_mult: i8, e: f64) -> f64 {
    match m_mult.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    }
}

/// Geocentric ecliptic coordinates of the Moon, mean equinox of date.
///
/// `t` is Julian centuries of TT from J2000.0.
pub fn true_position(t: f64) -> EclipticPoint {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0 - t4 / 65194000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0 - t4 / 113065000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0 - t4 / 14712000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0 + t4 / 863310000.0;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479264.290 * t;
    let a3 = 313.45 + 481266.484 * t;
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let mut sl = 0.0;
    let mut sr = 0.0;
    for &(cd, cm, cmp, cf, l, r) in &LON_DIST {
        let arg = (cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f).to_radians();
        let ef = e_factor(cm, e);
        sl += l * ef * arg.sin();
        sr += r * ef * arg.cos();
    }

    let mut sb = 0.0;
    for &(cd, cm, cmp, cf, b) in &LAT {
        let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        sb += b * e_factor(cm, e) * deg_sin(arg);
    }

    sl += 3958.0 * deg_sin(a1) + 1962.0 * deg_sin(lp - f) + 318.0 * deg_sin(a2);
    sb += -2235.0 * deg_sin(lp) + 382.0 * deg_sin(a3) + 175.0 * deg_sin(a1 - f)
        + 175.0 * deg_sin(a1 + f)
        + 127.0 * deg_sin(lp - mp)
        - 115.0 * deg_sin(lp + mp);

    EclipticPoint {
        lon_deg: (lp + sl / 1e6).rem_euclid(360.0),
        lat_deg: sb / 1e6,
        distance_km: 385_000.56 + sr / 1000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchanga_time::julian_centuries;

    #[test]
    fn meeus_example_47a() {
        // 1992-Apr-12.0 TD: λ = 133.162655°, β = −3.229126°, Δ = 368409.7 km
        let p = true_position(julian_centuries(2_448_724.5));
        assert!((p.lon_deg - 133.162_655).abs() < 1e-5, "λ = {}", p.lon_deg);
        assert!((p.lat_deg + 3.229_126).abs() < 1e-5, "β = {}", p.lat_deg);
        assert!((p.distance_km - 368_409.7).abs() < 0.1, "Δ = {}", p.distance_km);
    }
}
