//! # ParcelSort App
//!
//! Command-line application layer.
//!
//! This crate contains:
//! - Commands (demo run, single classification, JSON batch)
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the classification service to its metrics collector and clock
//! - The `parcelsort` binary is a thin clap front-end over the commands

pub mod commands;
pub mod context;

// Re-export for convenience
pub use commands::*;
pub use context::*;
