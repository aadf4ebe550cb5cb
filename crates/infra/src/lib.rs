//! # ParcelSort Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The thread-safe classification metrics collector
//! - The monotonic clock adapter
//! - Environment-based configuration loading
//! - `tracing-subscriber` initialisation
//! - JSON batch input/output
//! - Process-wide defaults behind the free [`sort`] function
//!
//! ## Architecture
//! - Implements traits defined in `parcelsort-core`
//! - Depends on `parcelsort-domain` and `parcelsort-core`
//! - Contains all "impure" code (I/O, environment, global state)

pub mod config;
pub mod defaults;
pub mod io;
pub mod observability;
pub mod time;

// Re-export commonly used items
pub use defaults::{default_service, operational_summary, sort, DEFAULT_METRICS};
pub use observability::metrics::PackageMetrics;
pub use observability::{MetricsError, MetricsResult};
pub use time::MonotonicClock;
