//! Application commands
//!
//! Each command takes the [`AppContext`](crate::context::AppContext) and
//! returns plain data; printing is left to the binary.

pub mod batch;
pub mod classify;
pub mod demo;

pub use batch::{run_batch, BatchReport};
pub use classify::{classify, classify_args};
pub use demo::{run_demo, DemoCase, DemoResult, DEMO_CASES};
