//! JSON batch input/output
//!
//! Input files are JSON arrays of `{width, height, length, mass}` objects
//! (4-element arrays are accepted too). Each record is classified on its
//! own, so one bad record yields an error entry instead of failing the batch.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use parcelsort_core::ClassificationService;
use parcelsort_domain::{Category, Package, ParcelSortError, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Result of classifying one record of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortOutcome {
    /// Zero-based position in the input
    pub index: usize,
    /// The record as read
    pub input: Value,
    /// Assigned label, set when classification succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Validation error, set when classification failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ParcelSortError>,
}

impl SortOutcome {
    /// Whether the record was classified
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Read a JSON array of well-formed packages
///
/// # Errors
/// `Serialization` if the document is not an array of valid packages (a
/// non-positive or missing field fails the whole read).
pub fn read_packages<R: Read>(reader: R) -> Result<Vec<Package>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read packages from a file
///
/// # Errors
/// `Io` if the file cannot be opened, otherwise as [`read_packages`].
pub fn read_packages_from_path(path: impl AsRef<Path>) -> Result<Vec<Package>> {
    let file = File::open(path.as_ref())?;
    read_packages(BufReader::new(file))
}

/// Read a JSON array of raw records without validating them
///
/// # Errors
/// `Serialization` if the document is not a JSON array.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Value>> {
    match serde_json::from_reader(reader)? {
        Value::Array(items) => Ok(items),
        other => Err(ParcelSortError::Serialization(format!(
            "expected a JSON array of packages, found {}",
            json_kind(&other)
        ))),
    }
}

/// Read raw records from a file
///
/// # Errors
/// `Io` if the file cannot be opened, otherwise as [`read_records`].
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let file = File::open(path.as_ref())?;
    read_records(BufReader::new(file))
}

/// Classify every record through the service
///
/// Each record goes through `sort_json`, so metrics see one observation or
/// one error per record.
pub fn classify_batch(service: &ClassificationService, records: &[Value]) -> Vec<SortOutcome> {
    let outcomes: Vec<SortOutcome> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let (category, error) = match service.sort_json(record) {
                Ok(category) => (Some(category), None),
                Err(e) => (None, Some(e)),
            };
            SortOutcome { index, input: record.clone(), category, error }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::info!(total = outcomes.len(), failed, "Batch classified");
    outcomes
}

/// Write outcomes as pretty-printed JSON followed by a newline
///
/// # Errors
/// `Serialization` or `Io` if writing fails.
pub fn write_results<W: Write>(mut writer: W, outcomes: &[SortOutcome]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, outcomes)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Nested JSON view of a package with derived properties
pub fn format_package(package: &Package) -> Value {
    json!({
        "dimensions": {
            "width": package.width(),
            "height": package.height(),
            "length": package.length(),
        },
        "mass": package.mass(),
        "volume": package.volume(),
        "is_bulky": package.is_bulky(),
        "is_heavy": package.is_heavy(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
