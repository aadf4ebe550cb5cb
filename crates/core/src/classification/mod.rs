//! Package classification domain

pub mod engine;
pub mod ports;
pub mod rules;
pub mod service;
pub mod validation;

pub use engine::RuleEngine;
pub use ports::*;
pub use rules::*;
pub use service::*;
pub use validation::{validate, validate_json};
