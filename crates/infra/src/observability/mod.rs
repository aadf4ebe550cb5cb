//! Observability infrastructure for metrics and logging
//!
//! This module provides:
//! - A thread-safe classification metrics collector (counts, timing samples,
//!   error counter, percentiles)
//! - Poison-safe mutex handling
//! - Category cardinality enforcement
//! - `tracing-subscriber` initialisation
//!
//! ## Design Principles
//!
//! 1. **Poison Recovery**: a poisoned lock is released, logged with
//!    `tracing::warn!`, cleared with `Mutex::clear_poison` and re-acquired.
//!    Nothing panics and nothing is logged while the guard is held.
//!
//! 2. **Single Lock**: counts, samples and the error counter live behind one
//!    mutex so a summary never sees a count without its sample.
//!
//! 3. **No I/O under the lock**: log events are emitted after the guard is
//!    dropped.
//!
//! ## Error Handling
//!
//! ```rust
//! use std::time::Duration;
//!
//! use parcelsort_domain::Category;
//! use parcelsort_infra::observability::metrics::PackageMetrics;
//!
//! let metrics = PackageMetrics::new();
//!
//! // Metric failures are reported, never fatal
//! if let Err(e) = metrics.observe(&Category::STANDARD, Duration::from_micros(40)) {
//!     tracing::warn!("Failed to record metric: {}", e);
//! }
//! ```

pub mod logging;
pub mod metrics;

use parcelsort_domain::ParcelSortError;

/// Metrics error type
///
/// Recording methods return `MetricsResult<()>`. Without a category limit
/// they always succeed.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Empty data set - cannot calculate aggregate metric
    #[error("Empty data: cannot calculate {metric}")]
    EmptyData {
        /// Metric name that failed (e.g., "P95", "P50")
        metric: &'static str,
    },

    /// Category cardinality limit exceeded
    ///
    /// The observation is dropped entirely: neither the count nor the timing
    /// sample is recorded.
    #[error("Category cardinality exceeded for '{category}': {count} >= {limit}")]
    CardinalityExceeded {
        /// Category that was rejected
        category: String,
        /// Distinct categories already tracked
        count: usize,
        /// Configured limit
        limit: usize,
    },
}

impl From<MetricsError> for ParcelSortError {
    fn from(err: MetricsError) -> Self {
        ParcelSortError::Metrics(err.to_string())
    }
}

/// Result type for metrics operations
pub type MetricsResult<T> = Result<T, MetricsError>;
