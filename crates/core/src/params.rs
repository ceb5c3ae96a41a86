//! Caller-owned simulation parameters with fail-fast validation.

use crate::error::InvalidConfiguration;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the knobs driving one step.
///
/// Owned by the controlling caller and passed by value into each step; the
/// core never mutates it. Fields are private so every instance has passed
/// range validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    wind_speed: f64,
    wind_direction: f64,
    tree_regrowth_probability: f64,
    spontaneous_ignition_probability: f64,
}

impl SimulationParameters {
    /// Default per-step probability that ash regrows into a tree.
    pub const DEFAULT_TREE_REGROWTH: f64 = 0.01;
    /// Increment used by regrowth up/down controls.
    pub const TREE_REGROWTH_STEP: f64 = 0.01;
    /// Default per-step probability that an untouched tree ignites.
    pub const DEFAULT_SPONTANEOUS_IGNITION: f64 = 0.0001;
    /// Increment used by ignition up/down controls.
    pub const SPONTANEOUS_IGNITION_STEP: f64 = 0.0001;

    /// Validated constructor.
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration`] when any value (NaN included) falls
    /// outside its documented range: wind speed and both probabilities in
    /// `[0, 1]`, wind direction in `[0, 360)` degrees.
    pub fn new(
        wind_speed: f64,
        wind_direction: f64,
        tree_regrowth_probability: f64,
        spontaneous_ignition_probability: f64,
    ) -> Result<Self, InvalidConfiguration> {
        if !(0.0..=1.0).contains(&wind_speed) {
            return Err(InvalidConfiguration::WindSpeed(wind_speed));
        }
        if !(0.0..360.0).contains(&wind_direction) {
            return Err(InvalidConfiguration::WindDirection(wind_direction));
        }
        Self::check_probability("tree regrowth probability", tree_regrowth_probability)?;
        Self::check_probability(
            "spontaneous ignition probability",
            spontaneous_ignition_probability,
        )?;
        Ok(Self {
            wind_speed,
            wind_direction,
            tree_regrowth_probability,
            spontaneous_ignition_probability,
        })
    }

    fn check_probability(name: &'static str, value: f64) -> Result<(), InvalidConfiguration> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(InvalidConfiguration::Probability { name, value })
        }
    }

    /// Wind speed in `[0, 1]`; 0 disables directional steering entirely.
    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// Compass wind direction in degrees: 0 points up, growing clockwise.
    pub fn wind_direction(&self) -> f64 {
        self.wind_direction
    }

    /// Per-step probability that ash regrows into a tree.
    pub fn tree_regrowth_probability(&self) -> f64 {
        self.tree_regrowth_probability
    }

    /// Per-step probability that a tree with no burning neighbor ignites.
    pub fn spontaneous_ignition_probability(&self) -> f64 {
        self.spontaneous_ignition_probability
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            wind_speed: 0.0,
            wind_direction: 0.0,
            tree_regrowth_probability: Self::DEFAULT_TREE_REGROWTH,
            spontaneous_ignition_probability: Self::DEFAULT_SPONTANEOUS_IGNITION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_configuration() {
        let params = SimulationParameters::default();
        assert_eq!(params.wind_speed(), 0.0);
        assert_eq!(params.wind_direction(), 0.0);
        assert_eq!(
            params.tree_regrowth_probability(),
            SimulationParameters::DEFAULT_TREE_REGROWTH
        );
        assert_eq!(
            params.spontaneous_ignition_probability(),
            SimulationParameters::DEFAULT_SPONTANEOUS_IGNITION
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            SimulationParameters::new(1.5, 0.0, 0.0, 0.0),
            Err(InvalidConfiguration::WindSpeed(_))
        ));
        assert!(matches!(
            SimulationParameters::new(0.0, 360.0, 0.0, 0.0),
            Err(InvalidConfiguration::WindDirection(_))
        ));
        assert!(matches!(
            SimulationParameters::new(0.0, 0.0, -0.1, 0.0),
            Err(InvalidConfiguration::Probability { .. })
        ));
        assert!(matches!(
            SimulationParameters::new(0.0, 0.0, 0.0, 1.01),
            Err(InvalidConfiguration::Probability { .. })
        ));
    }

    #[test]
    fn nan_is_rejected_not_clamped() {
        assert!(SimulationParameters::new(f64::NAN, 0.0, 0.0, 0.0).is_err());
        assert!(SimulationParameters::new(0.0, f64::NAN, 0.0, 0.0).is_err());
        assert!(SimulationParameters::new(0.0, 0.0, f64::NAN, 0.0).is_err());
        assert!(SimulationParameters::new(0.0, 0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn boundary_values_are_accepted() {
        assert!(SimulationParameters::new(1.0, 359.9, 1.0, 1.0).is_ok());
        assert!(SimulationParameters::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }
}
