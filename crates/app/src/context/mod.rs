//! Application context - dependency injection container

use std::sync::Arc;

use parcelsort_core::{ClassificationService, MetricsRecorder, RuleEngine};
use parcelsort_domain::{ClassifierConfig, OperationalSummary};
use parcelsort_infra::{config, MonotonicClock, PackageMetrics};

/// Application context - holds the service and its collaborators
#[derive(Debug)]
pub struct AppContext {
    /// Configuration the engine was built from
    pub config: ClassifierConfig,
    /// Collector the service reports into
    pub metrics: Arc<PackageMetrics>,
    /// Classification entry point
    pub service: Arc<ClassificationService>,
}

impl AppContext {
    /// Build a context from environment configuration
    ///
    /// Invalid environment values fall back to the defaults (logged by the
    /// loader).
    pub fn new() -> Self {
        Self::with_config(config::load())
    }

    /// Build a context from an explicit configuration
    pub fn with_config(config: ClassifierConfig) -> Self {
        let metrics = Arc::new(PackageMetrics::new());
        let recorder: Arc<dyn MetricsRecorder> = metrics.clone();
        let engine = RuleEngine::from_config(&config);
        tracing::debug!(rules = ?engine.rule_names(), "Rule engine built");

        let service =
            Arc::new(ClassificationService::new(engine, recorder, Arc::new(MonotonicClock)));

        Self { config, metrics, service }
    }

    /// Operational summary of this context's collector
    pub fn summary(&self) -> OperationalSummary {
        self.metrics.operational_summary()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::with_config(ClassifierConfig::default())
    }
}
