//! Process-wide default collector and service
//!
//! The free [`sort`] function classifies with the standard rule chain and
//! reports into [`DEFAULT_METRICS`]. Code that needs isolation should build
//! its own [`ClassificationService`] instead.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parcelsort_core::{ClassificationService, MetricsRecorder, RuleEngine};
use parcelsort_domain::{Category, OperationalSummary, Result};

use crate::observability::metrics::PackageMetrics;
use crate::time::MonotonicClock;

/// Shared metrics collector used by [`sort`]
pub static DEFAULT_METRICS: Lazy<Arc<PackageMetrics>> =
    Lazy::new(|| Arc::new(PackageMetrics::new()));

static DEFAULT_SERVICE: Lazy<ClassificationService> = Lazy::new(|| {
    let metrics: Arc<dyn MetricsRecorder> = DEFAULT_METRICS.clone();
    ClassificationService::new(RuleEngine::standard(), metrics, Arc::new(MonotonicClock))
});

/// Service wired to [`DEFAULT_METRICS`]
///
/// Its engine can be replaced with `swap_engine`; the change is visible to
/// every later [`sort`] call in the process.
pub fn default_service() -> &'static ClassificationService {
    &DEFAULT_SERVICE
}

/// Classify a package with the default service
///
/// # Errors
/// `InvalidType` if any input is NaN, otherwise `InvalidValue` if any input
/// is zero or negative.
pub fn sort(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    DEFAULT_SERVICE.sort(width, height, length, mass)
}

/// Summary of everything classified through [`sort`] so far
pub fn operational_summary() -> OperationalSummary {
    DEFAULT_METRICS.operational_summary()
}
