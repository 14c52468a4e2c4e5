//! Tithi: which 12° segment of the Moon−Sun elongation the reference falls in,
//! when it ends, and whether the next tithi is skipped.

use panchanga_ephem::{Body, CrossingConfig, Ephemeris, Observer, find_crossing, normalize_to_pm180};
use panchanga_time::Instant;

use crate::angle::{lunar_phase, normalize_degrees, segment_index, tropical_longitude};
use crate::boundary::interpolate_crossing;
use crate::config::{PanchangaConfig, TithiStrategy};
use crate::error::PanchangaError;
use crate::types::{LeapTithi, TithiInfo};

pub const TITHI_SPAN_DEG: f64 = 12.0;
pub const TITHI_COUNT: u8 = 30;

/// Offsets (days) of the relative-motion table. The node at 0 is exact
/// (no motion yet) and is not sampled.
const RELATIVE_OFFSETS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Tithi number 1..=30 for an elongation in degrees.
pub fn tithi_from_phase(phase_deg: f64) -> u8 {
    segment_index(phase_deg, TITHI_SPAN_DEG, TITHI_COUNT)
}

/// Tithi current at `reference`, with its end instant.
pub fn tithi_at(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    reference: Instant,
    config: &PanchangaConfig,
) -> Result<TithiInfo, PanchangaError> {
    let phase = lunar_phase(ephem, reference, observer)?;
    let index = tithi_from_phase(phase);
    let skipped = skipped_tithi(ephem, observer, reference, index)?;

    let info = match config.tithi_strategy {
        TithiStrategy::Interpolated => interpolated(ephem, observer, reference, phase, index, skipped)?,
        TithiStrategy::PhaseSearch => {
            phase_search(ephem, observer, reference, phase, index, skipped, config.phase_search_window_days)?
        }
    };
    tracing::debug!(
        index = info.index,
        phase = info.phase_deg,
        end = %info.end,
        leap = ?info.leap.map(|l| l.index),
        "tithi"
    );
    Ok(info)
}

/// The skipped tithi, if the tithi one day later is more than one step ahead.
fn skipped_tithi(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    reference: Instant,
    index: u8,
) -> Result<Option<u8>, PanchangaError> {
    let tomorrow = tithi_from_phase(lunar_phase(ephem, reference.add_days(1.0), observer)?);
    let advance = (i16::from(tomorrow) - i16::from(index) + 30).rem_euclid(30);
    Ok((advance > 1).then_some(index % TITHI_COUNT + 1))
}

fn interpolated(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    reference: Instant,
    phase: f64,
    index: u8,
    skipped: Option<u8>,
) -> Result<TithiInfo, PanchangaError> {
    let moon0 = tropical_longitude(ephem, Body::Moon, reference, observer)?;
    let sun0 = tropical_longitude(ephem, Body::Sun, reference, observer)?;

    let mut relative = [0.0; RELATIVE_OFFSETS.len()];
    for (slot, &offset) in relative.iter_mut().zip(&RELATIVE_OFFSETS).skip(1) {
        let t = reference.add_days(offset);
        let lunar = normalize_degrees(tropical_longitude(ephem, Body::Moon, t, observer)? - moon0);
        let solar = normalize_degrees(tropical_longitude(ephem, Body::Sun, t, observer)? - sun0);
        let mut rel = lunar - solar;
        if rel < 0.0 {
            rel += 360.0;
        }
        *slot = rel;
    }

    let degrees_left = f64::from(index) * TITHI_SPAN_DEG - phase;
    let (offset, warning) = interpolate_crossing(&RELATIVE_OFFSETS, &relative, degrees_left)?;

    let leap = match skipped {
        Some(leap_index) => {
            let leap_left = f64::from(index + 1) * TITHI_SPAN_DEG - phase;
            let (leap_offset, _) = interpolate_crossing(&RELATIVE_OFFSETS, &relative, leap_left)?;
            Some(LeapTithi {
                index: leap_index,
                end: reference.add_days(leap_offset),
            })
        }
        None => None,
    };

    Ok(TithiInfo {
        index,
        phase_deg: phase,
        end: reference.add_days(offset),
        leap,
        warning,
    })
}

fn phase_search(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    reference: Instant,
    phase: f64,
    index: u8,
    skipped: Option<u8>,
    window_days: f64,
) -> Result<TithiInfo, PanchangaError> {
    let end = elongation_crossing(ephem, observer, f64::from(index) * TITHI_SPAN_DEG, reference, window_days)?
        .ok_or(PanchangaError::AstronomicalSearch("tithi end not found in window"))?;

    let leap = match skipped {
        Some(leap_index) => {
            let leap_end =
                elongation_crossing(ephem, observer, f64::from(leap_index) * TITHI_SPAN_DEG, end, window_days)?
                    .ok_or(PanchangaError::AstronomicalSearch("skipped tithi end not found in window"))?;
            Some(LeapTithi {
                index: leap_index,
                end: leap_end,
            })
        }
        None => None,
    };

    Ok(TithiInfo {
        index,
        phase_deg: phase,
        end,
        leap,
        warning: None,
    })
}

/// First instant from `start` on at which the observer's elongation reaches
/// `target_deg`. Searching the same topocentric elongation that picked the
/// index keeps the end after the reference.
fn elongation_crossing(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    target_deg: f64,
    start: Instant,
    window_days: f64,
) -> Result<Option<Instant>, PanchangaError> {
    let target = normalize_degrees(target_deg);
    let found = find_crossing(
        |t| Ok(normalize_to_pm180(lunar_phase(ephem, t, observer)? - target)),
        start,
        window_days,
        &CrossingConfig::default(),
    )?;
    Ok(found)
}
