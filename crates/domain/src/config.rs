//! Classifier configuration structures
//!
//! Thresholds are plain values owned by each rule once the engine is built.
//! Nothing here reads from the environment; see the infra loader for that.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BULKY_DIMENSION_THRESHOLD, DEFAULT_BULKY_VOLUME_THRESHOLD,
    DEFAULT_EXPRESS_MAX_MASS, DEFAULT_EXPRESS_MAX_VOLUME, DEFAULT_FRAGILE_DENSITY_THRESHOLD,
    DEFAULT_HEAVY_MASS_THRESHOLD,
};
use crate::errors::{ParcelSortError, Result};

/// Numeric thresholds used by the classification rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Mass at or above which a package is heavy (default: 20)
    pub heavy_mass: f64,

    /// Volume at or above which a package is bulky (default: 1,000,000)
    pub bulky_volume: f64,

    /// Single dimension at or above which a package is bulky (default: 150)
    pub bulky_dimension: f64,

    /// Density at or below which a package is fragile (default: 5)
    pub fragile_density: f64,

    /// Largest volume still eligible for express handling (default: 50,000)
    pub express_max_volume: f64,

    /// Largest mass still eligible for express handling (default: 5)
    pub express_max_mass: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            heavy_mass: DEFAULT_HEAVY_MASS_THRESHOLD,
            bulky_volume: DEFAULT_BULKY_VOLUME_THRESHOLD,
            bulky_dimension: DEFAULT_BULKY_DIMENSION_THRESHOLD,
            fragile_density: DEFAULT_FRAGILE_DENSITY_THRESHOLD,
            express_max_volume: DEFAULT_EXPRESS_MAX_VOLUME,
            express_max_mass: DEFAULT_EXPRESS_MAX_MASS,
        }
    }
}

impl RuleThresholds {
    /// Check every threshold is a finite, strictly positive number
    ///
    /// # Errors
    /// Returns `ParcelSortError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("heavy_mass", self.heavy_mass),
            ("bulky_volume", self.bulky_volume),
            ("bulky_dimension", self.bulky_dimension),
            ("fragile_density", self.fragile_density),
            ("express_max_volume", self.express_max_volume),
            ("express_max_mass", self.express_max_mass),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParcelSortError::Config(format!(
                    "threshold {name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Engine configuration: thresholds plus the opt-in rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Thresholds shared by every rule
    pub thresholds: RuleThresholds,

    /// Append the low-density FRAGILE rule after the standard chain
    pub enable_fragile: bool,

    /// Append the small-and-light EXPRESS rule after the standard chain
    pub enable_express: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = RuleThresholds::default();
        assert_eq!(t.heavy_mass, 20.0);
        assert_eq!(t.bulky_volume, 1_000_000.0);
        assert_eq!(t.bulky_dimension, 150.0);
        assert_eq!(t.fragile_density, 5.0);
        assert_eq!(t.express_max_volume, 50_000.0);
        assert_eq!(t.express_max_mass, 5.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_default_config_has_no_opt_in_rules() {
        let config = ClassifierConfig::default();
        assert!(!config.enable_fragile);
        assert!(!config.enable_express);
    }

    #[test]
    fn test_validate_rejects_non_positive_threshold() {
        let t = RuleThresholds { bulky_dimension: 0.0, ..RuleThresholds::default() };
        let err = t.validate().unwrap_err();
        assert!(matches!(err, ParcelSortError::Config(ref msg) if msg.contains("bulky_dimension")));

        let t = RuleThresholds { heavy_mass: f64::NAN, ..RuleThresholds::default() };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{"thresholds": {"heavy_mass": 30.0}, "enable_fragile": true}"#)
                .unwrap();
        assert_eq!(config.thresholds.heavy_mass, 30.0);
        assert_eq!(config.thresholds.bulky_volume, 1_000_000.0);
        assert!(config.enable_fragile);
        assert!(!config.enable_express);
    }
}
