//! Yoga: 27 segments of the sidereal Sun + Moon longitude sum.

use panchanga_ephem::{Body, Ephemeris, Observer};
use panchanga_time::Instant;

use crate::angle::{normalize_degrees, segment_index, sidereal_longitude};
use crate::ayanamsa::AyanamsaModel;
use crate::boundary::{DEFAULT_OFFSETS, find_boundary};
use crate::error::PanchangaError;
use crate::types::YogaInfo;

pub const YOGA_COUNT: u8 = 27;
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Yoga number 1..=27 for a sidereal Sun + Moon sum.
pub fn yoga_from_total(total_deg: f64) -> u8 {
    segment_index(total_deg, YOGA_SPAN_DEG, YOGA_COUNT)
}

/// Yoga at `reference` and its end instant.
///
/// Ayanamsa does not cancel in the sum, so both longitudes are sidereal.
pub fn yoga_at(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    reference: Instant,
    ayanamsa: &AyanamsaModel,
) -> Result<YogaInfo, PanchangaError> {
    let total = |t: Instant| -> Result<f64, PanchangaError> {
        let sun = sidereal_longitude(ephem, Body::Sun, t, observer, ayanamsa)?;
        let moon = sidereal_longitude(ephem, Body::Moon, t, observer, ayanamsa)?;
        Ok(normalize_degrees(sun + moon))
    };

    let total_deg = total(reference)?;
    let index = yoga_from_total(total_deg);
    let estimate = find_boundary(reference, f64::from(index) * YOGA_SPAN_DEG, &DEFAULT_OFFSETS, total)?;
    tracing::debug!(index, total_deg, end = %estimate.instant, "yoga");

    Ok(YogaInfo {
        index,
        total_deg,
        end: estimate.instant,
        warning: estimate.warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::testing::{LinearEphemeris, at, observer};

    #[test]
    fn linear_sum_end() {
        // Sidereal Sun 250°, Moon 115°: sum 5°, growing 14°/day.
        let aya = 24.392;
        let e = LinearEphemeris::new(250.0 + aya, 115.0 + aya);
        let info = yoga_at(&e, &observer(), at(0.0), &AyanamsaModel::default()).unwrap();
        assert_eq!(info.index, 1);
        assert!((info.total_deg - 5.0).abs() < 1e-9);
        let expected = (YOGA_SPAN_DEG - 5.0) / 14.0;
        assert!((info.end.days_since(at(0.0)) - expected).abs() < 1e-9);
    }

    #[test]
    fn index_range() {
        for i in 0..3600 {
            let y = yoga_from_total(f64::from(i) * 0.1);
            assert!((1..=27).contains(&y), "yoga {y}");
        }
    }
}
