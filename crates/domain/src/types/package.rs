//! Validated package value type

use serde::{Deserialize, Serialize};

use crate::config::RuleThresholds;
use crate::constants::{
    DEFAULT_BULKY_DIMENSION_THRESHOLD, DEFAULT_BULKY_VOLUME_THRESHOLD,
    DEFAULT_HEAVY_MASS_THRESHOLD,
};
use crate::errors::{ParcelSortError, Result};
use crate::types::measurement::Measurement;

/// A package whose four measurements are known to be positive numbers
///
/// Derived flags use the default thresholds; use the `*_with` variants for
/// custom ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Measurement", into = "Measurement")]
pub struct Package {
    measurement: Measurement,
}

impl Package {
    /// Create a package, rejecting non-numeric or non-positive values
    ///
    /// # Errors
    /// `InvalidType` if any value is NaN, otherwise `InvalidValue` if any value
    /// is zero or negative.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self> {
        Self::try_from(Measurement::new(width, height, length, mass))
    }

    /// Underlying validated measurement
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Width in centimetres
    pub fn width(&self) -> f64 {
        self.measurement.width
    }

    /// Height in centimetres
    pub fn height(&self) -> f64 {
        self.measurement.height
    }

    /// Length in centimetres
    pub fn length(&self) -> f64 {
        self.measurement.length
    }

    /// Mass in kilograms
    pub fn mass(&self) -> f64 {
        self.measurement.mass
    }

    /// Volume in cm³
    pub fn volume(&self) -> f64 {
        self.measurement.volume()
    }

    /// Bulky under the default thresholds
    pub fn is_bulky(&self) -> bool {
        self.measurement.is_bulky(DEFAULT_BULKY_VOLUME_THRESHOLD, DEFAULT_BULKY_DIMENSION_THRESHOLD)
    }

    /// Heavy under the default threshold
    pub fn is_heavy(&self) -> bool {
        self.measurement.is_heavy(DEFAULT_HEAVY_MASS_THRESHOLD)
    }

    /// Bulky under custom thresholds
    pub fn is_bulky_with(&self, thresholds: &RuleThresholds) -> bool {
        self.measurement.is_bulky(thresholds.bulky_volume, thresholds.bulky_dimension)
    }

    /// Heavy under custom thresholds
    pub fn is_heavy_with(&self, thresholds: &RuleThresholds) -> bool {
        self.measurement.is_heavy(thresholds.heavy_mass)
    }
}

impl TryFrom<Measurement> for Package {
    type Error = ParcelSortError;

    fn try_from(measurement: Measurement) -> Result<Self> {
        measurement.check()?;
        Ok(Self { measurement })
    }
}

impl From<Package> for Measurement {
    fn from(package: Package) -> Self {
        package.measurement
    }
}
