//! Domain types

pub mod category;
pub mod measurement;
pub mod package;
pub mod stats;

pub use category::Category;
pub use measurement::Measurement;
pub use package::Package;
pub use stats::{BatchStatistics, OperationalSummary};
