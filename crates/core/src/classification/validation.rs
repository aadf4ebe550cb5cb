//! Input validation for classification requests
//!
//! Two checks, always in this order over all four inputs:
//! 1. every input is a number (`InvalidType`)
//! 2. every input is strictly positive (`InvalidValue`)

use parcelsort_domain::{Measurement, ParcelSortError, Result};
use serde_json::Value;

/// Field names in argument order
pub const FIELDS: [&str; 4] = ["width", "height", "length", "mass"];

/// Validate four numeric inputs
///
/// NaN counts as "not a number". Infinities are numbers and pass if
/// positive.
///
/// # Errors
/// `InvalidType` if any value is NaN, else `InvalidValue` if any value is
/// zero or negative.
pub fn validate(width: f64, height: f64, length: f64, mass: f64) -> Result<Measurement> {
    let measurement = Measurement::new(width, height, length, mass);
    measurement.check()?;
    Ok(measurement)
}

/// Validate dynamically-typed input
///
/// Accepts either an object with `width`, `height`, `length` and `mass`
/// keys or an array of exactly four values in that order. Missing keys and
/// non-number values (strings, booleans, null) are type errors.
///
/// # Errors
/// Same as [`validate`].
pub fn validate_json(input: &Value) -> Result<Measurement> {
    let raw: [Option<f64>; 4] = match input {
        Value::Object(map) => FIELDS.map(|key| map.get(key).and_then(Value::as_f64)),
        Value::Array(items) if items.len() == FIELDS.len() => {
            [0, 1, 2, 3].map(|i| items[i].as_f64())
        }
        _ => return Err(ParcelSortError::InvalidType),
    };

    match raw {
        [Some(width), Some(height), Some(length), Some(mass)] => {
            validate(width, height, length, mass)
        }
        _ => Err(ParcelSortError::InvalidType),
    }
}
