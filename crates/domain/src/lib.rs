//! # ParcelSort Domain
//!
//! Business domain types and models for ParcelSort.
//!
//! This crate contains:
//! - Domain data types (Measurement, Package, Category)
//! - Domain error types and Result definitions
//! - Configuration structures (RuleThresholds, ClassifierConfig)
//! - Domain constants and unit helpers
//!
//! ## Architecture
//! - No dependencies on other ParcelSort crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
