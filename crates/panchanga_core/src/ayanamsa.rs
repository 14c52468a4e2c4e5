//! Linear ayanamsa model.
//!
//! The precession offset between the tropical and sidereal zodiacs is taken
//! as a straight line in the calendar year. The default parameters
//! approximate Lahiri around the present epoch.

use panchanga_time::Instant;

/// `base_deg + rate_deg_per_year × (utc_year − epoch_year)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AyanamsaModel {
    /// Ayanamsa at the epoch year, degrees. Default: 24.07.
    pub base_deg: f64,
    /// Annual drift in degrees. Default: 0.014.
    pub rate_deg_per_year: f64,
    /// Default: 2000.
    pub epoch_year: i32,
}

impl Default for AyanamsaModel {
    fn default() -> Self {
        Self::approximate_lahiri()
    }
}

impl AyanamsaModel {
    pub const fn approximate_lahiri() -> Self {
        Self {
            base_deg: 24.07,
            rate_deg_per_year: 0.014,
            epoch_year: 2000,
        }
    }

    /// Ayanamsa in degrees, stepping once per UTC calendar year.
    pub fn at(&self, instant: Instant) -> f64 {
        self.for_year(instant.utc_year())
    }

    pub fn for_year(&self, utc_year: i32) -> f64 {
        self.base_deg + self.rate_deg_per_year * f64::from(utc_year - self.epoch_year)
    }
}

/// Ayanamsa at `instant` under the default model.
pub fn ayanamsa(instant: Instant) -> f64 {
    AyanamsaModel::default().at(instant)
}
