//! Boundary root-finder: when does a sampled angle reach a target?
//!
//! The angle is sampled at a handful of day offsets, unwrapped across the
//! 0°/360° seam, and the sample table is inverted with a Lagrange polynomial
//! (time as a function of angle). One deterministic pass, O(k²) in the
//! number of samples.

use panchanga_time::Instant;

use crate::angle::{normalize_degrees, unwrap_forward};
use crate::error::{NumericalDegeneracy, NumericalError, PanchangaError};

/// Default sampling offsets in days from the start instant.
pub const DEFAULT_OFFSETS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Rounding allowance (days) when checking an estimate against its bracket.
const BRACKET_SLACK_DAYS: f64 = 1e-9;

/// Interpolated crossing instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryEstimate {
    pub instant: Instant,
    /// Days from the start instant to `instant`.
    pub offset_days: f64,
    pub warning: Option<NumericalDegeneracy>,
}

/// Evaluate at `target` the Lagrange polynomial through the nodes `(y[i], x[i])`.
///
/// This is inverse interpolation: given samples `y = f(x)`, it estimates the
/// `x` at which `f` reaches `target`.
pub fn inverse_lagrange(x: &[f64], y: &[f64], target: f64) -> Result<f64, NumericalError> {
    if x.len() != y.len() {
        return Err(NumericalError::LengthMismatch);
    }
    if x.len() < 2 {
        return Err(NumericalError::TooFewNodes(x.len()));
    }
    let mut total = 0.0;
    for (i, (&xi, &yi)) in x.iter().zip(y).enumerate() {
        let mut numer = 1.0;
        let mut denom = 1.0;
        for (j, &yj) in y.iter().enumerate() {
            if j != i {
                numer *= target - yj;
                denom *= yi - yj;
            }
        }
        if denom == 0.0 {
            return Err(NumericalError::DuplicateNode { value: yi });
        }
        total += numer * xi / denom;
    }
    Ok(total)
}

/// Check a monotone sample table against a target; log and return any doubt.
pub(crate) fn assess_samples(samples: &[f64], target: f64) -> Option<NumericalDegeneracy> {
    let warning = if samples.windows(2).any(|w| w[1] <= w[0]) {
        Some(NumericalDegeneracy::NonMonotonic)
    } else {
        match (samples.first(), samples.last()) {
            (Some(&lo), Some(&hi)) if target < lo || target > hi => Some(NumericalDegeneracy::Extrapolated),
            _ => None,
        }
    };
    if let Some(w) = warning {
        tracing::warn!(?samples, target, warning = %w, "boundary interpolation degenerate");
    }
    warning
}

/// Inverse interpolation of `target` in the table `(x[i], y[i])`, checked
/// against the sample bracket that contains the target.
///
/// A high-order polynomial through unevenly spaced angles can swing outside
/// `[x[i], x[i+1]]` even when `y[i] <= target <= y[i+1]`. In that case the
/// linear estimate inside the bracket is returned with
/// [`NumericalDegeneracy::OutsideBracket`].
pub fn interpolate_crossing(
    x: &[f64],
    y: &[f64],
    target: f64,
) -> Result<(f64, Option<NumericalDegeneracy>), NumericalError> {
    let warning = assess_samples(y, target);
    let estimate = inverse_lagrange(x, y, target)?;

    let bracket = y.windows(2).position(|w| w[0] <= target && target <= w[1]);
    if let Some(i) = bracket {
        let (x0, x1) = (x[i], x[i + 1]);
        if !(x0 - BRACKET_SLACK_DAYS..=x1 + BRACKET_SLACK_DAYS).contains(&estimate) {
            let span = y[i + 1] - y[i];
            let linear = if span > 0.0 { x0 + (target - y[i]) / span * (x1 - x0) } else { x0 };
            tracing::warn!(estimate, linear, bracket = i, "interpolant outside bracket");
            return Ok((linear, warning.or(Some(NumericalDegeneracy::OutsideBracket))));
        }
    }
    Ok((estimate, warning))
}

/// Find when `f` (an angle in degrees) next reaches `target`.
///
/// `f` is sampled at `start + offset` for each offset. Samples are
/// normalized to [0, 360) and then unwrapped so the table is continuous.
/// The target is lifted into `[y0, y0 + 360)` so it always lies ahead of
/// the first sample.
pub fn find_boundary<F>(
    start: Instant,
    target: f64,
    offsets: &[f64],
    mut f: F,
) -> Result<BoundaryEstimate, PanchangaError>
where
    F: FnMut(Instant) -> Result<f64, PanchangaError>,
{
    let mut samples = Vec::with_capacity(offsets.len());
    for &offset in offsets {
        let value = normalize_degrees(f(start.add_days(offset))?);
        let value = match samples.last() {
            Some(&prev) => unwrap_forward(prev, value),
            None => value,
        };
        samples.push(value);
    }

    let mut lifted = normalize_degrees(target);
    if let Some(&first) = samples.first() {
        while lifted < first {
            lifted += 360.0;
        }
    }

    let (offset_days, warning) = interpolate_crossing(offsets, &samples, lifted)?;
    tracing::debug!(?samples, target = lifted, offset_days, "boundary interpolated");

    Ok(BoundaryEstimate {
        instant: start.add_days(offset_days),
        offset_days,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: f64 = 2_459_945.5;

    fn linear(origin: f64, rate: f64) -> impl FnMut(Instant) -> Result<f64, PanchangaError> {
        move |t: Instant| Ok(origin + rate * (t.jd_ut() - T0))
    }

    #[test]
    fn inverse_of_linear_is_exact() {
        let x = [0.0, 0.5, 1.0];
        let y = [10.0, 16.0, 22.0];
        let v = inverse_lagrange(&x, &y, 13.0).unwrap();
        assert!((v - 0.25).abs() < 1e-12, "v = {v}");
    }

    #[test]
    fn inverse_of_quadratic() {
        // y = x² on x in [1, 3]; y = 4 → x = 2 exactly at a node
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 4.0, 9.0];
        assert!((inverse_lagrange(&x, &y, 4.0).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_node_is_an_error() {
        let r = inverse_lagrange(&[0.0, 1.0, 2.0], &[5.0, 5.0, 6.0], 5.5);
        assert!(matches!(r, Err(NumericalError::DuplicateNode { .. })));
    }

    #[test]
    fn too_few_nodes() {
        assert!(matches!(inverse_lagrange(&[0.0], &[1.0], 1.0), Err(NumericalError::TooFewNodes(1))));
        assert!(matches!(inverse_lagrange(&[0.0, 1.0], &[1.0], 1.0), Err(NumericalError::LengthMismatch)));
    }

    #[test]
    fn linear_boundary() {
        let est = find_boundary(Instant::from_jd_ut(T0), 120.0, &DEFAULT_OFFSETS, linear(100.0, 13.0)).unwrap();
        assert!((est.offset_days - 20.0 / 13.0).abs() < 1e-9, "offset = {}", est.offset_days);
        // 1.54 d is beyond the 1-day window
        assert_eq!(est.warning, Some(NumericalDegeneracy::Extrapolated));
    }

    #[test]
    fn boundary_across_seam() {
        // 355° advancing 13°/day crosses 360° at 5/13 day.
        let est = find_boundary(Instant::from_jd_ut(T0), 360.0, &DEFAULT_OFFSETS, linear(355.0, 13.0)).unwrap();
        assert!((est.offset_days - 5.0 / 13.0).abs() < 1e-9, "offset = {}", est.offset_days);
        assert_eq!(est.warning, None);
        assert!(est.instant > Instant::from_jd_ut(T0));
    }

    #[test]
    fn target_below_start_is_lifted_a_turn() {
        // Start at 350°, target 6° means 16° ahead.
        let est = find_boundary(Instant::from_jd_ut(T0), 6.0, &DEFAULT_OFFSETS, linear(350.0, 20.0)).unwrap();
        assert!((est.offset_days - 0.8).abs() < 1e-9, "offset = {}", est.offset_days);
    }

    #[test]
    fn target_on_start_sample_ends_at_start() {
        // A start exactly on the boundary: the element ends there, not a turn later.
        let start = Instant::from_jd_ut(T0);
        let est = find_boundary(start, 100.0, &DEFAULT_OFFSETS, linear(100.0, 13.0)).unwrap();
        assert_eq!(est.offset_days, 0.0);
        assert_eq!(est.instant, start);
        assert_eq!(est.warning, None);
    }

    #[test]
    fn stationary_samples_flagged() {
        let r = find_boundary(Instant::from_jd_ut(T0), 20.0, &DEFAULT_OFFSETS, |_| Ok(10.0));
        assert!(matches!(r, Err(PanchangaError::Numerical(NumericalError::DuplicateNode { .. }))));
    }

    #[test]
    fn retrograde_samples_warn() {
        let w = assess_samples(&[10.0, 9.0, 8.5], 9.5);
        assert_eq!(w, Some(NumericalDegeneracy::NonMonotonic));
    }

    #[test]
    fn wild_interpolant_falls_back_to_bracket() {
        // Slow start then fast: the quartic through these dips below zero
        // near the origin.
        let x = [0.0, 0.25, 0.5, 0.75, 1.0];
        let y = [0.0, 2.98, 4.66, 7.48, 11.61];
        let raw = inverse_lagrange(&x, &y, 0.28).unwrap();
        assert!(raw < 0.0, "raw = {raw}");
        let (v, w) = interpolate_crossing(&x, &y, 0.28).unwrap();
        assert!((v - 0.25 * 0.28 / 2.98).abs() < 1e-12, "v = {v}");
        assert_eq!(w, Some(NumericalDegeneracy::OutsideBracket));
    }

    #[test]
    fn well_behaved_table_is_untouched() {
        let x = [0.0, 0.25, 0.5, 0.75, 1.0];
        let y = [0.0, 3.0, 6.0, 9.0, 12.0];
        let (v, w) = interpolate_crossing(&x, &y, 4.5).unwrap();
        assert!((v - 0.375).abs() < 1e-12);
        assert_eq!(w, None);
    }

    #[test]
    fn sampler_errors_propagate() {
        let r = find_boundary(Instant::from_jd_ut(T0), 20.0, &DEFAULT_OFFSETS, |_| {
            Err(PanchangaError::AstronomicalSearch("boom"))
        });
        assert_eq!(r.unwrap_err(), PanchangaError::AstronomicalSearch("boom"));
    }
}
