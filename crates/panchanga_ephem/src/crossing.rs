//! Angle-crossing search: coarse scan plus bisection.
//!
//! Used for Moon−Sun phase targets (new moon, tithi ends). The separation
//! function is wrapped to (−180, 180] so that a target crossing is a sign
//! change; sign changes caused by the ±180° wrap are rejected.

use panchanga_time::Instant;

use crate::error::EphemerisError;

/// Scan and refinement parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingConfig {
    /// Coarse scan step in days.
    pub step_days: f64,
    /// Bisection stops when the bracket is narrower than this.
    pub convergence_days: f64,
    pub max_iterations: u32,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            step_days: 0.5,
            convergence_days: 1e-7,
            max_iterations: 60,
        }
    }
}

/// Normalize an angle to (−180, 180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// A sign change that is a real zero crossing, not a ±180° wrap.
pub fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Find the first instant where `separation` crosses zero, scanning from
/// `search_start` for `limit_days` (negative = backward in time).
///
/// `separation(t)` must already be wrapped with [`normalize_to_pm180`].
pub fn find_crossing<F>(
    mut separation: F,
    search_start: Instant,
    limit_days: f64,
    config: &CrossingConfig,
) -> Result<Option<Instant>, EphemerisError>
where
    F: FnMut(Instant) -> Result<f64, EphemerisError>,
{
    if !limit_days.is_finite() || limit_days == 0.0 {
        return Err(EphemerisError::InvalidQuery("search limit must be finite and non-zero"));
    }
    if config.step_days.is_nan() || config.step_days <= 0.0 || config.max_iterations == 0 {
        return Err(EphemerisError::InvalidQuery("crossing config must have positive step and iterations"));
    }

    let step = config.step_days.copysign(limit_days);
    let steps = (limit_days.abs() / config.step_days).ceil() as usize;
    let end = search_start.add_days(limit_days);

    let mut t_prev = search_start;
    let mut f_prev = separation(t_prev)?;
    if f_prev == 0.0 {
        return Ok(Some(search_start));
    }

    for i in 1..=steps {
        let t_curr = if i == steps { end } else { search_start.add_days(step * i as f64) };
        let f_curr = separation(t_curr)?;

        if f_curr == 0.0 {
            return Ok(Some(t_curr));
        }
        if is_genuine_crossing(f_prev, f_curr) {
            let (t_a, f_a, t_b) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr)
            } else {
                (t_curr, f_curr, t_prev)
            };
            let t = bisect(&mut separation, t_a, f_a, t_b, config)?;
            tracing::debug!(jd = t.jd_ut(), "crossing refined");
            return Ok(Some(t));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

fn bisect<F>(
    separation: &mut F,
    mut t_a: Instant,
    mut f_a: f64,
    mut t_b: Instant,
    config: &CrossingConfig,
) -> Result<Instant, EphemerisError>
where
    F: FnMut(Instant) -> Result<f64, EphemerisError>,
{
    for _ in 0..config.max_iterations {
        let t_mid = t_a.add_days(0.5 * t_b.days_since(t_a));
        let f_mid = separation(t_mid)?;
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        if t_b.days_since(t_a).abs() < config.convergence_days {
            break;
        }
    }
    Ok(t_a.add_days(0.5 * t_b.days_since(t_a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: f64 = 2_459_945.5;

    /// Linear phase advancing 12°/day from 100° at T0.
    fn linear_phase(target: f64) -> impl FnMut(Instant) -> Result<f64, EphemerisError> {
        move |t: Instant| Ok(normalize_to_pm180(100.0 + 12.0 * (t.jd_ut() - T0) - target))
    }

    #[test]
    fn pm180_range() {
        assert_eq!(normalize_to_pm180(190.0), -170.0);
        assert_eq!(normalize_to_pm180(180.0), 180.0);
        assert_eq!(normalize_to_pm180(-180.0), 180.0);
        assert_eq!(normalize_to_pm180(-10.0), -10.0);
    }

    #[test]
    fn wrap_is_not_a_crossing() {
        assert!(is_genuine_crossing(-1.0, 2.0));
        assert!(!is_genuine_crossing(179.0, -179.0));
    }

    #[test]
    fn forward_crossing() {
        let t = find_crossing(linear_phase(160.0), Instant::from_jd_ut(T0), 10.0, &CrossingConfig::default())
            .unwrap()
            .unwrap();
        assert!((t.jd_ut() - (T0 + 5.0)).abs() < 1e-6, "t = {}", t.jd_ut());
    }

    #[test]
    fn backward_crossing() {
        // 0° was crossed 100/12 days before T0.
        let t = find_crossing(linear_phase(0.0), Instant::from_jd_ut(T0), -35.0, &CrossingConfig::default())
            .unwrap()
            .unwrap();
        assert!((t.jd_ut() - (T0 - 100.0 / 12.0)).abs() < 1e-6, "t = {}", t.jd_ut());
    }

    #[test]
    fn target_at_start_returns_start() {
        let start = Instant::from_jd_ut(T0);
        let t = find_crossing(linear_phase(100.0), start, 3.0, &CrossingConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(t, start);
    }

    #[test]
    fn none_outside_window() {
        let r = find_crossing(linear_phase(160.0), Instant::from_jd_ut(T0), 2.0, &CrossingConfig::default())
            .unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn zero_limit_rejected() {
        let r = find_crossing(linear_phase(0.0), Instant::from_jd_ut(T0), 0.0, &CrossingConfig::default());
        assert!(r.is_err());
    }
}
