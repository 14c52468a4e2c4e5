//! Karana: half-tithi, 60 segments of 6° of elongation.

use panchanga_ephem::{Ephemeris, Observer};
use panchanga_time::Instant;

use crate::angle::{lunar_phase, segment_index};
use crate::error::PanchangaError;
use crate::types::KaranaInfo;

pub const KARANA_COUNT: u8 = 60;
pub const KARANA_SPAN_DEG: f64 = 6.0;

/// Karana number 1..=60 for an elongation in degrees.
pub fn karana_from_phase(phase_deg: f64) -> u8 {
    segment_index(phase_deg, KARANA_SPAN_DEG, KARANA_COUNT)
}

pub fn karana_at(ephem: &dyn Ephemeris, observer: &Observer, reference: Instant) -> Result<KaranaInfo, PanchangaError> {
    let phase = lunar_phase(ephem, reference, observer)?;
    Ok(KaranaInfo {
        index: karana_from_phase(phase),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::tithi::tithi_from_phase;

    #[test]
    fn two_karanas_per_tithi() {
        for i in 1..3600 {
            let phase = f64::from(i) * 0.1;
            let k = karana_from_phase(phase);
            let t = tithi_from_phase(phase);
            assert!((1..=60).contains(&k));
            assert_eq!((k + 1) / 2, t, "phase {phase}: karana {k}, tithi {t}");
        }
    }

    #[test]
    fn zero_is_last() {
        assert_eq!(karana_from_phase(0.0), 60);
        assert_eq!(karana_from_phase(6.0), 1);
        assert_eq!(karana_from_phase(6.01), 2);
    }
}
