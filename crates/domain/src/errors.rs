//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MSG_NOT_NUMERIC, MSG_NOT_POSITIVE};

/// Main error type for ParcelSort
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ParcelSortError {
    /// One of the four inputs is not a number
    #[error("{}", MSG_NOT_NUMERIC)]
    InvalidType,

    /// One of the four inputs is zero or negative
    #[error("{}", MSG_NOT_POSITIVE)]
    InvalidValue,

    /// Invalid threshold or environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Batch file could not be read or written
    #[error("I/O error: {0}")]
    Io(String),

    /// Batch document is not valid JSON of the expected shape
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Metrics recorder failure; never returned by `sort`
    #[error("Metrics error: {0}")]
    Metrics(String),
}

impl ParcelSortError {
    /// Whether this error was produced by input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidType | Self::InvalidValue)
    }
}

impl From<std::io::Error> for ParcelSortError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ParcelSortError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for ParcelSort operations
pub type Result<T> = std::result::Result<T, ParcelSortError>;
