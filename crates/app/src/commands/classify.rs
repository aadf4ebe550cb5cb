//! Single package classification

use parcelsort_domain::{Category, Result};
use serde_json::Value;

use crate::context::AppContext;

/// Classify one package through the context's service
///
/// # Errors
/// Propagates validation errors from the service.
pub fn classify(
    ctx: &AppContext,
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
) -> Result<Category> {
    let category = ctx.service.sort(width, height, length, mass)?;
    tracing::info!(width, height, length, mass, category = %category, "Package classified");
    Ok(category)
}

/// Classify one package from raw command-line text
///
/// Values that parse as `f64` (including `NaN` and `inf`) go through
/// [`classify`]. If any value is not a number, the raw text is sent through
/// `sort_json`, so the failure is typed and counted like any other
/// validation error.
///
/// # Errors
/// `InvalidType` for non-numeric text, otherwise as [`classify`].
pub fn classify_args(ctx: &AppContext, args: &[String; 4]) -> Result<Category> {
    let parsed = args.each_ref().map(|raw| raw.trim().parse::<f64>().ok());
    match parsed {
        [Some(width), Some(height), Some(length), Some(mass)] => {
            classify(ctx, width, height, length, mass)
        }
        _ => {
            let raw = Value::Array(args.iter().cloned().map(Value::String).collect());
            ctx.service.sort_json(&raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use parcelsort_domain::ParcelSortError;

    use super::*;

    #[test]
    fn test_classify_reports_label_and_error() {
        let ctx = AppContext::default();
        assert_eq!(classify(&ctx, 150.0, 100.0, 100.0, 25.0).unwrap(), Category::REJECTED);
        assert_eq!(
            classify(&ctx, 1.0, 1.0, 1.0, 0.0).unwrap_err(),
            ParcelSortError::InvalidValue
        );
        assert_eq!(ctx.metrics.error_count(), 1);
    }

    fn args(values: [&str; 4]) -> [String; 4] {
        values.map(String::from)
    }

    #[test]
    fn test_classify_args_types_and_counts_bad_text() {
        let ctx = AppContext::default();

        assert_eq!(classify_args(&ctx, &args(["150", "1", "1", "25"])).unwrap(), Category::REJECTED);

        let err = classify_args(&ctx, &args(["10", "10", "10", "-5"])).unwrap_err();
        assert_eq!(err.to_string(), "All dimensions and mass must be positive.");

        let err = classify_args(&ctx, &args(["abc", "10", "10", "10"])).unwrap_err();
        assert_eq!(err, ParcelSortError::InvalidType);
        assert_eq!(err.to_string(), "All dimensions and mass must be numbers.");

        let err = classify_args(&ctx, &args(["NaN", "1", "1", "1"])).unwrap_err();
        assert_eq!(err, ParcelSortError::InvalidType);

        let summary = ctx.summary();
        assert_eq!(summary.total_processed, 1);
        assert_eq!(summary.error_count, 3);
    }
}
