//! In-memory implementations of the core ports

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use parcelsort_core::{Clock, MetricsRecorder};
use parcelsort_domain::{Category, Result as DomainResult};

/// Wall clock backed by `Instant::now`
#[derive(Debug, Default)]
pub struct RealClock;

impl Clock for RealClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Counts observations per category and errors under one lock
#[derive(Debug, Default)]
pub struct CountingMetrics {
    inner: Mutex<Counts>,
}

#[derive(Debug, Default, Clone)]
pub struct Counts {
    pub by_category: HashMap<String, u64>,
    pub samples: Vec<Duration>,
    pub errors: u64,
}

impl CountingMetrics {
    pub fn snapshot(&self) -> Counts {
        self.inner.lock().unwrap().clone()
    }

    pub fn total(&self) -> u64 {
        self.snapshot().by_category.values().sum()
    }
}

impl MetricsRecorder for CountingMetrics {
    fn observe(&self, category: &Category, duration: Duration) -> DomainResult<()> {
        let mut counts = self.inner.lock().unwrap();
        *counts.by_category.entry(category.to_string()).or_insert(0) += 1;
        counts.samples.push(duration);
        Ok(())
    }

    fn record_error(&self) -> DomainResult<()> {
        self.inner.lock().unwrap().errors += 1;
        Ok(())
    }
}
