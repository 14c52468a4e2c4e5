//! Computation settings.

use crate::ayanamsa::AyanamsaModel;

/// How the tithi end instant is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TithiStrategy {
    /// Inverse-Lagrange interpolation over one day of relative Moon/Sun motion.
    #[default]
    Interpolated,
    /// Scan-and-bisect search on the observer's Moon − Sun elongation.
    PhaseSearch,
}

/// Settings shared by the engines and the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanchangaConfig {
    pub ayanamsa: AyanamsaModel,
    pub tithi_strategy: TithiStrategy,
    /// How far past local midnight to look for sunrise and sunset. Default: 2.0.
    pub sunrise_window_days: f64,
    /// Limit for each new-moon search around the reference. Default: 35.0.
    pub new_moon_window_days: f64,
    /// Limit for phase searches under [`TithiStrategy::PhaseSearch`]. Default: 3.0.
    pub phase_search_window_days: f64,
}

impl Default for PanchangaConfig {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaModel::default(),
            tithi_strategy: TithiStrategy::default(),
            sunrise_window_days: 2.0,
            new_moon_window_days: 35.0,
            phase_search_window_days: 3.0,
        }
    }
}

impl PanchangaConfig {
    pub fn with_tithi_strategy(mut self, strategy: TithiStrategy) -> Self {
        self.tithi_strategy = strategy;
        self
    }

    pub fn with_ayanamsa(mut self, ayanamsa: AyanamsaModel) -> Self {
        self.ayanamsa = ayanamsa;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PanchangaConfig::default();
        assert_eq!(c.tithi_strategy, TithiStrategy::Interpolated);
        assert_eq!(c.sunrise_window_days, 2.0);
        assert_eq!(c.ayanamsa, AyanamsaModel::approximate_lahiri());
    }

    #[test]
    fn builder() {
        let c = PanchangaConfig::default().with_tithi_strategy(TithiStrategy::PhaseSearch);
        assert_eq!(c.tithi_strategy, TithiStrategy::PhaseSearch);
    }
}
