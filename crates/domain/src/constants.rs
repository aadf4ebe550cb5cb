//! Classification constants
//!
//! Centralized location for the default thresholds and canonical messages
//! used throughout the workspace.

// Default rule thresholds
pub const DEFAULT_HEAVY_MASS_THRESHOLD: f64 = 20.0; // kg
pub const DEFAULT_BULKY_VOLUME_THRESHOLD: f64 = 1_000_000.0; // cm³
pub const DEFAULT_BULKY_DIMENSION_THRESHOLD: f64 = 150.0; // cm

// Opt-in rule thresholds
pub const DEFAULT_FRAGILE_DENSITY_THRESHOLD: f64 = 5.0;
pub const DEFAULT_EXPRESS_MAX_VOLUME: f64 = 50_000.0; // cm³
pub const DEFAULT_EXPRESS_MAX_MASS: f64 = 5.0; // kg

/// Scale applied to `mass / volume` so densities read as kg per 1000 cm³.
pub const DENSITY_SCALE: f64 = 1000.0;

// Validation messages (exact text is part of the public contract)
pub const MSG_NOT_NUMERIC: &str = "All dimensions and mass must be numbers.";
pub const MSG_NOT_POSITIVE: &str = "All dimensions and mass must be positive.";

/// Categories pre-registered in a fresh metrics collector.
pub const BASE_CATEGORIES: [&str; 3] = ["STANDARD", "SPECIAL", "REJECTED"];
