//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of building a rule engine from
//! environment-provided configuration.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use parcelsort_core::RuleEngine;
use parcelsort_domain::{Category, Measurement, ParcelSortError};
use parcelsort_infra::config;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const VARS: [&str; 8] = [
    "PARCELSORT_HEAVY_MASS_THRESHOLD",
    "PARCELSORT_BULKY_VOLUME_THRESHOLD",
    "PARCELSORT_BULKY_DIMENSION_THRESHOLD",
    "PARCELSORT_FRAGILE_DENSITY_THRESHOLD",
    "PARCELSORT_EXPRESS_MAX_VOLUME",
    "PARCELSORT_EXPRESS_MAX_MASS",
    "PARCELSORT_ENABLE_FRAGILE",
    "PARCELSORT_ENABLE_EXPRESS",
];

fn clear_env() {
    for key in VARS {
        std::env::remove_var(key);
    }
}

#[test]
fn test_env_thresholds_shift_classification() {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
    clear_env();

    std::env::set_var("PARCELSORT_HEAVY_MASS_THRESHOLD", "30");
    let result = config::load_from_env();
    clear_env();

    let engine = RuleEngine::from_config(&result.expect("config should load"));
    let package = Measurement::new(10.0, 10.0, 10.0, 25.0);
    assert_eq!(engine.classify(&package), Category::STANDARD);

    let default_engine = RuleEngine::standard();
    assert_eq!(default_engine.classify(&package), Category::SPECIAL);
}

#[test]
fn test_env_enables_optional_rules() {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
    clear_env();

    std::env::set_var("PARCELSORT_ENABLE_FRAGILE", "true");
    std::env::set_var("PARCELSORT_ENABLE_EXPRESS", "1");
    let result = config::load_from_env();
    clear_env();

    let engine = RuleEngine::from_config(&result.expect("config should load"));
    assert_eq!(
        engine.rule_names(),
        vec!["reject", "special_heavy", "special_bulky", "fragile", "express"]
    );

    // Small and light enough for both: fragile is registered first
    assert_eq!(engine.classify(&Measurement::new(10.0, 10.0, 10.0, 1.0)), Category::FRAGILE);
    // 500 cm³ at 4 kg is too dense for fragile
    assert_eq!(engine.classify(&Measurement::new(10.0, 10.0, 5.0, 4.0)), Category::EXPRESS);
    assert_eq!(engine.classify(&Measurement::new(10.0, 10.0, 10.0, 10.0)), Category::STANDARD);
}

#[test]
fn test_invalid_env_is_config_error_and_load_falls_back() {
    let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
    clear_env();

    std::env::set_var("PARCELSORT_BULKY_VOLUME_THRESHOLD", "0");
    let strict = config::load_from_env();
    let lenient = config::load();
    clear_env();

    assert!(matches!(strict, Err(ParcelSortError::Config(_))));
    assert_eq!(lenient, Default::default());
}
