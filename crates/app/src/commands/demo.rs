//! Reference demonstration cases

use parcelsort_domain::{Category, Result};
use serde::Serialize;

use crate::context::AppContext;

/// A named reference package and the label it must receive
#[derive(Debug, Clone)]
pub struct DemoCase {
    /// Human-readable case name
    pub name: &'static str,
    /// Width, height and length in cm
    pub dimensions: (f64, f64, f64),
    /// Mass in kg
    pub mass: f64,
    /// Label the case must receive
    pub expected: Category,
}

/// Outcome of one demo case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoResult {
    /// Human-readable case name
    pub name: &'static str,
    /// Width in cm
    pub width: f64,
    /// Height in cm
    pub height: f64,
    /// Length in cm
    pub length: f64,
    /// Mass in kg
    pub mass: f64,
    /// Volume in cm³
    pub volume: f64,
    /// Label actually assigned
    pub category: Category,
    /// Label the case must receive
    pub expected: Category,
}

impl DemoResult {
    /// Whether the assigned label is the expected one
    pub fn matches(&self) -> bool {
        self.category == self.expected
    }
}

/// Reference packages covering each standard label
pub const DEMO_CASES: [DemoCase; 5] = [
    DemoCase {
        name: "Standard Package",
        dimensions: (10.0, 10.0, 10.0),
        mass: 5.0,
        expected: Category::STANDARD,
    },
    DemoCase {
        name: "Bulky by Volume",
        dimensions: (100.0, 100.0, 100.0),
        mass: 10.0,
        expected: Category::SPECIAL,
    },
    DemoCase {
        name: "Bulky by Dimension",
        dimensions: (150.0, 50.0, 50.0),
        mass: 10.0,
        expected: Category::SPECIAL,
    },
    DemoCase {
        name: "Heavy Package",
        dimensions: (50.0, 50.0, 50.0),
        mass: 25.0,
        expected: Category::SPECIAL,
    },
    DemoCase {
        name: "Rejected Package",
        dimensions: (150.0, 100.0, 100.0),
        mass: 25.0,
        expected: Category::REJECTED,
    },
];

/// Classify every demo case
///
/// # Errors
/// Only if a case fails validation, which the built-in cases never do.
pub fn run_demo(ctx: &AppContext) -> Result<Vec<DemoResult>> {
    DEMO_CASES
        .iter()
        .map(|case| {
            let (width, height, length) = case.dimensions;
            let category = ctx.service.sort(width, height, length, case.mass)?;
            if category != case.expected {
                tracing::warn!(
                    case = case.name,
                    expected = %case.expected,
                    actual = %category,
                    "Demo case classified unexpectedly"
                );
            }
            Ok(DemoResult {
                name: case.name,
                width,
                height,
                length,
                mass: case.mass,
                volume: width * height * length,
                category,
                expected: case.expected.clone(),
            })
        })
        .collect()
}
