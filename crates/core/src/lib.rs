//! # ParcelSort Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Classification rules and the rule engine
//! - Port/adapter interfaces (traits) for metrics and time
//! - The classification service (`sort`)
//!
//! ## Architecture Principles
//! - Only depends on `parcelsort-domain`
//! - No I/O, no global state
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod classification;

// Re-export specific items to avoid ambiguity
pub use classification::ports::{Clock, MetricsRecorder};
pub use classification::rules::{
    ClassificationRule, ExpressRule, FragileRule, RejectRule, SpecialBulkyRule, SpecialHeavyRule,
};
pub use classification::{ClassificationService, RuleEngine};
