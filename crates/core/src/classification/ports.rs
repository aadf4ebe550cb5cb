//! Port interfaces for package classification

use std::fmt::Debug;
use std::time::{Duration, Instant};

use parcelsort_domain::{Category, Result};

/// Sink for classification outcomes
///
/// Implementations must be thread-safe. Both methods are called from the
/// classification hot path; an `Err` or a panic is logged by the caller and
/// otherwise ignored, so a failing sink can never change a classification
/// result. Recorders that hold locks should recover from poisoning, since a
/// panic inside one call is not propagated to later ones.
pub trait MetricsRecorder: Send + Sync + Debug {
    /// Record one successful classification and its processing time
    fn observe(&self, category: &Category, duration: Duration) -> Result<()>;

    /// Record one failed classification
    fn record_error(&self) -> Result<()>;
}

/// Monotonic time source used to measure processing time
pub trait Clock: Send + Sync + Debug {
    /// Current instant; successive calls never go backwards
    fn now(&self) -> Instant;
}
