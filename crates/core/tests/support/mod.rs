//! Shared test helpers for `parcelsort-core` integration tests.
//!
//! Lightweight in-memory port implementations so the property tests can
//! focus on behaviour instead of boilerplate.

pub mod ports;
