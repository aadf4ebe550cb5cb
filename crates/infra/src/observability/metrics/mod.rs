//! Metrics collection modules
//!
//! Thread-safe metrics for the classification pipeline.

pub mod classification;

// Re-export metric types for convenience
pub use classification::PackageMetrics;
