//! Package measurements and the derived geometry predicates shared by rules

use serde::{Deserialize, Serialize};

use crate::constants::DENSITY_SCALE;
use crate::errors::{ParcelSortError, Result};

/// Four raw inputs of a classification call
///
/// Construction does not validate; the classification service rejects
/// non-numeric or non-positive values before any rule sees them. Every method
/// here is total over `f64`, so rules stay safe even for unvalidated input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Width in centimetres
    pub width: f64,
    /// Height in centimetres
    pub height: f64,
    /// Length in centimetres
    pub length: f64,
    /// Mass in kilograms
    pub mass: f64,
}

impl Measurement {
    /// Build a measurement without validating it
    pub const fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self { width, height, length, mass }
    }

    /// Values in argument order: width, height, length, mass
    pub const fn values(&self) -> [f64; 4] {
        [self.width, self.height, self.length, self.mass]
    }

    /// Check that every value is a number and strictly positive
    ///
    /// The type check covers all four values before the positivity check.
    ///
    /// # Errors
    /// `InvalidType` if any value is NaN, otherwise `InvalidValue` if any
    /// value is zero or negative.
    pub fn check(&self) -> Result<()> {
        let values = self.values();
        if values.iter().any(|v| v.is_nan()) {
            return Err(ParcelSortError::InvalidType);
        }
        if values.iter().any(|v| *v <= 0.0) {
            return Err(ParcelSortError::InvalidValue);
        }
        Ok(())
    }

    /// Width × height × length in cm³
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Largest of the three dimensions
    pub fn longest_side(&self) -> f64 {
        self.width.max(self.height).max(self.length)
    }

    /// Density in kg per 1000 cm³, `None` when the volume is zero
    pub fn density(&self) -> Option<f64> {
        let volume = self.volume();
        if volume == 0.0 {
            return None;
        }
        Some(self.mass / volume * DENSITY_SCALE)
    }

    /// Bulky when the volume or any single dimension meets its threshold
    pub fn is_bulky(&self, volume_threshold: f64, dimension_threshold: f64) -> bool {
        self.volume() >= volume_threshold
            || [self.width, self.height, self.length].iter().any(|d| *d >= dimension_threshold)
    }

    /// Heavy when the mass meets the threshold
    pub fn is_heavy(&self, mass_threshold: f64) -> bool {
        self.mass >= mass_threshold
    }
}
