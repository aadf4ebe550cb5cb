//! Classification metrics: per-category counts, timing samples and errors
//!
//! ## Design
//! - **One mutex** over all mutable state so every summary is a consistent
//!   snapshot and `total_processed == processing_samples` always holds
//! - **Poison-safe locking** with explicit match pattern (no .expect())
//! - **Permissive categories**: unseen labels are added at 0 on first use,
//!   unless a category limit is configured
//! - **Unbounded samples**: every observation keeps its timing sample (no
//!   ring-buffer eviction), which the count/sample pairing relies on

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use parcelsort_core::MetricsRecorder;
use parcelsort_domain::constants::BASE_CATEGORIES;
use parcelsort_domain::{Category, OperationalSummary, Result as DomainResult};

use crate::observability::{MetricsError, MetricsResult};

#[derive(Debug, Default)]
struct MetricsState {
    category_counts: BTreeMap<String, u64>,
    processing_times: Vec<Duration>,
    error_count: u64,
}

/// Thread-safe collector for package classification metrics
#[derive(Debug)]
pub struct PackageMetrics {
    state: Mutex<MetricsState>,
    started_at: Instant,
    category_limit: Option<usize>,
}

impl Default for PackageMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageMetrics {
    /// Create a collector seeded with STANDARD, SPECIAL and REJECTED at 0
    pub fn new() -> Self {
        Self::with_categories(BASE_CATEGORIES)
    }

    /// Create a collector seeded with a custom category list
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category_counts = categories.into_iter().map(|c| (c.into(), 0)).collect();
        Self {
            state: Mutex::new(MetricsState { category_counts, ..MetricsState::default() }),
            started_at: Instant::now(),
            category_limit: None,
        }
    }

    /// Cap the number of distinct categories tracked
    ///
    /// Observations for an unseen category beyond the cap fail with
    /// `MetricsError::CardinalityExceeded` and record nothing.
    #[must_use]
    pub fn with_category_limit(mut self, limit: usize) -> Self {
        self.category_limit = Some(limit);
        self
    }

    /// Acquire the state, recovering from poisoning
    ///
    /// A poisoned guard is released before the warning is logged; the poison
    /// flag is then cleared so later calls take the fast path.
    fn lock(&self, operation: &'static str) -> MutexGuard<'_, MetricsState> {
        if let Ok(guard) = self.state.lock() {
            return guard;
        }

        tracing::warn!(
            metric = "PackageMetrics::state",
            operation,
            "Mutex poisoned, recovering data"
        );
        self.state.clear_poison();
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poison_err) => poison_err.into_inner(),
        }
    }

    /// Record a successful classification with its processing duration
    ///
    /// Increments the category counter (creating it if unseen) and appends
    /// the timing sample in one critical section.
    pub fn observe(&self, category: &Category, duration: Duration) -> MetricsResult<()> {
        {
            let mut state = self.lock("observe");
            let key = category.as_str();

            if !state.category_counts.contains_key(key) {
                if let Some(limit) = self.category_limit {
                    let count = state.category_counts.len();
                    if count >= limit {
                        return Err(MetricsError::CardinalityExceeded {
                            category: key.to_string(),
                            count,
                            limit,
                        });
                    }
                }
            }

            *state.category_counts.entry(key.to_string()).or_insert(0) += 1;
            state.processing_times.push(duration);
        }

        tracing::trace!(
            category = %category,
            duration_us = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            "classification_observed"
        );
        Ok(())
    }

    /// Increment the error counter
    pub fn record_error(&self) -> MetricsResult<()> {
        self.lock("record_error").error_count += 1;
        tracing::trace!("classification_error");
        Ok(())
    }

    /// Aggregated, point-in-time copy of the collector
    pub fn operational_summary(&self) -> OperationalSummary {
        let state = self.lock("operational_summary");

        let total_processed = state.category_counts.values().sum();
        let processing_samples = state.processing_times.len();
        let avg_processing_time = if processing_samples == 0 {
            None
        } else {
            let total: f64 = state.processing_times.iter().map(Duration::as_secs_f64).sum();
            Some(total / processing_samples as f64)
        };

        OperationalSummary {
            category_counts: state.category_counts.clone(),
            total_processed,
            avg_processing_time,
            processing_samples,
            error_count: state.error_count,
            uptime_seconds: self.started_at.elapsed().as_secs_f64(),
        }
    }

    /// Count for a single category, 0 when unseen
    pub fn category_count(&self, category: &str) -> u64 {
        self.lock("category_count").category_counts.get(category).copied().unwrap_or(0)
    }

    /// Number of failed classifications recorded
    pub fn error_count(&self) -> u64 {
        self.lock("error_count").error_count
    }

    /// Get P50 (median) processing time
    ///
    /// Returns `MetricsError::EmptyData` if no samples recorded.
    pub fn p50_processing_time(&self) -> MetricsResult<Duration> {
        self.percentile(0.50, "P50")
    }

    /// Get P95 processing time
    ///
    /// Returns `MetricsError::EmptyData` if no samples recorded.
    pub fn p95_processing_time(&self) -> MetricsResult<Duration> {
        self.percentile(0.95, "P95")
    }

    /// Get P99 processing time
    ///
    /// Returns `MetricsError::EmptyData` if no samples recorded.
    pub fn p99_processing_time(&self) -> MetricsResult<Duration> {
        self.percentile(0.99, "P99")
    }

    /// Nearest-rank percentile over a sorted copy of the samples
    ///
    /// The copy is taken under the lock; sorting happens after release.
    fn percentile(&self, percentile: f64, metric: &'static str) -> MetricsResult<Duration> {
        let mut sorted = self.lock("percentile").processing_times.clone();
        if sorted.is_empty() {
            return Err(MetricsError::EmptyData { metric });
        }

        sorted.sort_unstable();
        let index = ((sorted.len() as f64 * percentile) as usize).min(sorted.len() - 1);
        Ok(sorted[index])
    }
}

impl MetricsRecorder for PackageMetrics {
    fn observe(&self, category: &Category, duration: Duration) -> DomainResult<()> {
        PackageMetrics::observe(self, category, duration).map_err(Into::into)
    }

    fn record_error(&self) -> DomainResult<()> {
        PackageMetrics::record_error(self).map_err(Into::into)
    }
}
