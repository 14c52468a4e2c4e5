//! Nakshatra: the Moon's 13°20′ sidereal mansion.

use panchanga_ephem::{Body, Ephemeris, Observer};
use panchanga_time::Instant;

use crate::angle::{segment_index, sidereal_longitude};
use crate::ayanamsa::AyanamsaModel;
use crate::boundary::{DEFAULT_OFFSETS, find_boundary};
use crate::error::PanchangaError;
use crate::types::NakshatraInfo;

pub const NAKSHATRA_COUNT: u8 = 27;
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Nakshatra number 1..=27 for a sidereal lunar longitude.
pub fn nakshatra_from_longitude(moon_sidereal_deg: f64) -> u8 {
    segment_index(moon_sidereal_deg, NAKSHATRA_SPAN_DEG, NAKSHATRA_COUNT)
}

/// Nakshatra at `reference` and when the Moon leaves it.
pub fn nakshatra_at(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    reference: Instant,
    ayanamsa: &AyanamsaModel,
) -> Result<NakshatraInfo, PanchangaError> {
    let moon = |t: Instant| -> Result<f64, PanchangaError> {
        Ok(sidereal_longitude(ephem, Body::Moon, t, observer, ayanamsa)?)
    };

    let longitude = moon(reference)?;
    let index = nakshatra_from_longitude(longitude);
    let target = f64::from(index) * NAKSHATRA_SPAN_DEG;
    let estimate = find_boundary(reference, target, &DEFAULT_OFFSETS, moon)?;
    tracing::debug!(index, longitude, end = %estimate.instant, "nakshatra");

    Ok(NakshatraInfo {
        index,
        longitude_deg: longitude,
        end: estimate.instant,
        warning: estimate.warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::testing::{LinearEphemeris, at, observer};

    #[test]
    fn index_rule() {
        assert_eq!(nakshatra_from_longitude(0.0), 27);
        assert_eq!(nakshatra_from_longitude(1.0), 1);
        assert_eq!(nakshatra_from_longitude(13.3), 1);
        assert_eq!(nakshatra_from_longitude(13.4), 2);
        assert_eq!(nakshatra_from_longitude(359.0), 27);
    }

    #[test]
    fn linear_moon_leaves_ashwini() {
        // Tropical 34.392° in 2023 is sidereal 10°.
        let e = LinearEphemeris::new(280.0, 24.392 + 10.0);
        let info = nakshatra_at(&e, &observer(), at(0.0), &AyanamsaModel::default()).unwrap();
        assert_eq!(info.index, 1);
        assert!((info.longitude_deg - 10.0).abs() < 1e-9);
        let expected = (NAKSHATRA_SPAN_DEG - 10.0) / 13.0;
        assert!((info.end.days_since(at(0.0)) - expected).abs() < 1e-9);
        assert!(info.warning.is_none());
    }

    #[test]
    fn revati_wraps_into_ashwini() {
        let e = LinearEphemeris::new(280.0, 24.392 + 355.0);
        let info = nakshatra_at(&e, &observer(), at(0.0), &AyanamsaModel::default()).unwrap();
        assert_eq!(info.index, 27);
        assert!((info.end.days_since(at(0.0)) - 5.0 / 13.0).abs() < 1e-9);
    }
}
