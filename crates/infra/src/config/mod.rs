//! Configuration loading
//!
//! Classifier configuration comes from code defaults overridden by
//! environment variables. There is no file-based configuration.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_env};
