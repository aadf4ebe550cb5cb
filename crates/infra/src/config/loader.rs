//! Configuration loader
//!
//! Builds a [`ClassifierConfig`] from defaults plus environment overrides.
//!
//! ## Environment Variables
//! - `PARCELSORT_HEAVY_MASS_THRESHOLD`: heavy mass threshold (kg)
//! - `PARCELSORT_BULKY_VOLUME_THRESHOLD`: bulky volume threshold (cm³)
//! - `PARCELSORT_BULKY_DIMENSION_THRESHOLD`: bulky single-dimension threshold (cm)
//! - `PARCELSORT_FRAGILE_DENSITY_THRESHOLD`: fragile density threshold
//! - `PARCELSORT_EXPRESS_MAX_VOLUME`: express maximum volume (cm³)
//! - `PARCELSORT_EXPRESS_MAX_MASS`: express maximum mass (kg)
//! - `PARCELSORT_ENABLE_FRAGILE`: append the FRAGILE rule (true/false)
//! - `PARCELSORT_ENABLE_EXPRESS`: append the EXPRESS rule (true/false)
//!
//! Every variable is optional; unset variables keep their default.

use parcelsort_domain::{ClassifierConfig, ParcelSortError, Result, RuleThresholds};

/// Overrides `RuleThresholds::heavy_mass`
pub const ENV_HEAVY_MASS: &str = "PARCELSORT_HEAVY_MASS_THRESHOLD";
/// Overrides `RuleThresholds::bulky_volume`
pub const ENV_BULKY_VOLUME: &str = "PARCELSORT_BULKY_VOLUME_THRESHOLD";
/// Overrides `RuleThresholds::bulky_dimension`
pub const ENV_BULKY_DIMENSION: &str = "PARCELSORT_BULKY_DIMENSION_THRESHOLD";
/// Overrides `RuleThresholds::fragile_density`
pub const ENV_FRAGILE_DENSITY: &str = "PARCELSORT_FRAGILE_DENSITY_THRESHOLD";
/// Overrides `RuleThresholds::express_max_volume`
pub const ENV_EXPRESS_MAX_VOLUME: &str = "PARCELSORT_EXPRESS_MAX_VOLUME";
/// Overrides `RuleThresholds::express_max_mass`
pub const ENV_EXPRESS_MAX_MASS: &str = "PARCELSORT_EXPRESS_MAX_MASS";
/// Enables the FRAGILE rule
pub const ENV_ENABLE_FRAGILE: &str = "PARCELSORT_ENABLE_FRAGILE";
/// Enables the EXPRESS rule
pub const ENV_ENABLE_EXPRESS: &str = "PARCELSORT_ENABLE_EXPRESS";

/// Load configuration, falling back to defaults on error
///
/// Invalid environment values are logged and ignored as a whole: the
/// defaults are returned rather than a partially applied configuration.
pub fn load() -> ClassifierConfig {
    match load_from_env() {
        Ok(config) => {
            tracing::info!(
                fragile = config.enable_fragile,
                express = config.enable_express,
                "Classifier configuration loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid classifier configuration, using defaults");
            ClassifierConfig::default()
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ParcelSortError::Config` if a variable is set but is not a
/// finite, strictly positive number.
pub fn load_from_env() -> Result<ClassifierConfig> {
    let defaults = RuleThresholds::default();

    let thresholds = RuleThresholds {
        heavy_mass: env_f64(ENV_HEAVY_MASS)?.unwrap_or(defaults.heavy_mass),
        bulky_volume: env_f64(ENV_BULKY_VOLUME)?.unwrap_or(defaults.bulky_volume),
        bulky_dimension: env_f64(ENV_BULKY_DIMENSION)?.unwrap_or(defaults.bulky_dimension),
        fragile_density: env_f64(ENV_FRAGILE_DENSITY)?.unwrap_or(defaults.fragile_density),
        express_max_volume: env_f64(ENV_EXPRESS_MAX_VOLUME)?
            .unwrap_or(defaults.express_max_volume),
        express_max_mass: env_f64(ENV_EXPRESS_MAX_MASS)?.unwrap_or(defaults.express_max_mass),
    };
    thresholds.validate()?;

    Ok(ClassifierConfig {
        thresholds,
        enable_fragile: env_bool(ENV_ENABLE_FRAGILE, false),
        enable_express: env_bool(ENV_ENABLE_EXPRESS, false),
    })
}

/// Parse an optional float from an environment variable
///
/// # Errors
/// Returns `ParcelSortError::Config` if the variable is set but does not
/// parse as `f64`.
fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| ParcelSortError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
