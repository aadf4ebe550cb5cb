//! Classification service - core business logic
//!
//! `sort` is the single entry point: validate, classify, time, report.
//! Every call produces exactly one metrics update (`observe` on success,
//! `record_error` on failure). Metrics failures are logged and dropped; they
//! never change the returned label or the original error.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use parcelsort_domain::{Category, Measurement, Result};
use parking_lot::RwLock;
use serde_json::Value;

use super::engine::RuleEngine;
use super::ports::{Clock, MetricsRecorder};
use super::validation::{validate, validate_json};

/// Classification service for turning package measurements into categories
#[derive(Debug)]
pub struct ClassificationService {
    engine: RwLock<Arc<RuleEngine>>,
    metrics: Arc<dyn MetricsRecorder>,
    clock: Arc<dyn Clock>,
}

impl ClassificationService {
    /// Create a new classification service
    pub fn new(
        engine: RuleEngine,
        metrics: Arc<dyn MetricsRecorder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { engine: RwLock::new(Arc::new(engine)), metrics, clock }
    }

    /// Classify a package from its dimensions and mass
    ///
    /// # Errors
    /// `InvalidType` or `InvalidValue` when validation fails. The error
    /// counter is incremented before the error is returned.
    pub fn sort(&self, width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
        self.run(|| validate(width, height, length, mass))
    }

    /// Classify dynamically-typed input (JSON object or 4-element array)
    ///
    /// # Errors
    /// Same as [`Self::sort`]; missing or non-number fields are `InvalidType`.
    pub fn sort_json(&self, input: &Value) -> Result<Category> {
        self.run(|| validate_json(input))
    }

    /// Current engine handle
    pub fn engine(&self) -> Arc<RuleEngine> {
        Arc::clone(&*self.engine.read())
    }

    /// Replace the engine, returning the previous one
    ///
    /// Calls already in flight finish with the engine they started with.
    pub fn swap_engine(&self, engine: RuleEngine) -> Arc<RuleEngine> {
        let next = Arc::new(engine);
        let rules = next.rule_names();
        let previous = std::mem::replace(&mut *self.engine.write(), next);
        tracing::info!(rules = ?rules, "Classification engine reconfigured");
        previous
    }

    fn run<F>(&self, validate_input: F) -> Result<Category>
    where
        F: FnOnce() -> Result<Measurement>,
    {
        let started = self.clock.now();
        let engine = self.engine();

        match validate_input() {
            Ok(measurement) => {
                let category = engine.classify(&measurement);
                let duration = self.clock.now().saturating_duration_since(started);
                report("observe", || self.metrics.observe(&category, duration));
                tracing::debug!(
                    category = %category,
                    duration_us = duration_micros(duration),
                    "Package classified"
                );
                Ok(category)
            }
            Err(err) => {
                report("record_error", || self.metrics.record_error());
                tracing::debug!(error = %err, "Package rejected by validation");
                Err(err)
            }
        }
    }
}

/// Run a metrics call, logging and dropping any error or panic
fn report<F>(operation: &'static str, call: F)
where
    F: FnOnce() -> Result<()>,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            tracing::warn!(operation, error = %e, "Failed to record classification metric");
        }
        Err(_) => {
            tracing::warn!(operation, "Metrics recorder panicked, metric dropped");
        }
    }
}

/// Whole microseconds, saturating at `u64::MAX`
pub(crate) fn duration_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}
