//! Domain utilities

pub mod units;

pub use units::{convert, Unit};
