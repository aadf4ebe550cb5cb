//! Classification rules
//!
//! Each rule pairs a pure predicate over a [`Measurement`] with a fixed
//! [`Category`]. Rules carry their own thresholds and hold no other state,
//! so a rule is safe to share across threads once built.
//!
//! ## Catalogue
//!
//! | Rule | Applies when | Label |
//! |------|--------------|-------|
//! | [`RejectRule`] | heavy AND bulky | `REJECTED` |
//! | [`SpecialHeavyRule`] | heavy | `SPECIAL` |
//! | [`SpecialBulkyRule`] | bulky | `SPECIAL` |
//! | [`FragileRule`] | density <= threshold | `FRAGILE` |
//! | [`ExpressRule`] | small volume AND light | `EXPRESS` |
//!
//! The predicates overlap on purpose: the engine resolves overlaps by
//! registration order, which is why `RejectRule` must precede the two
//! `SPECIAL` rules.

use std::fmt::Debug;

use parcelsort_domain::constants::{
    DEFAULT_BULKY_DIMENSION_THRESHOLD, DEFAULT_BULKY_VOLUME_THRESHOLD,
    DEFAULT_EXPRESS_MAX_MASS, DEFAULT_EXPRESS_MAX_VOLUME, DEFAULT_FRAGILE_DENSITY_THRESHOLD,
    DEFAULT_HEAVY_MASS_THRESHOLD,
};
use parcelsort_domain::{Category, Measurement, RuleThresholds};

/// A predicate-classification pair evaluated by the rule engine
///
/// `applies` must be deterministic, side-effect free and total over any
/// `f64` input (no panics, including for zero volume).
pub trait ClassificationRule: Send + Sync + Debug {
    /// Whether this rule matches the measurement
    fn applies(&self, measurement: &Measurement) -> bool;

    /// Label returned when this rule matches
    fn classify(&self) -> Category;

    /// Stable identifier used in logs
    fn name(&self) -> &'static str;
}

/// Heavy AND bulky → `REJECTED`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectRule {
    heavy_mass: f64,
    bulky_volume: f64,
    bulky_dimension: f64,
}

impl Default for RejectRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RejectRule {
    /// Rule using the default thresholds
    pub const fn new() -> Self {
        Self {
            heavy_mass: DEFAULT_HEAVY_MASS_THRESHOLD,
            bulky_volume: DEFAULT_BULKY_VOLUME_THRESHOLD,
            bulky_dimension: DEFAULT_BULKY_DIMENSION_THRESHOLD,
        }
    }

    /// Rule using the matching fields of `thresholds`
    pub fn from_thresholds(thresholds: &RuleThresholds) -> Self {
        Self {
            heavy_mass: thresholds.heavy_mass,
            bulky_volume: thresholds.bulky_volume,
            bulky_dimension: thresholds.bulky_dimension,
        }
    }

    /// Override the heavy mass threshold (kg)
    #[must_use]
    pub fn with_heavy_mass(mut self, threshold: f64) -> Self {
        self.heavy_mass = threshold;
        self
    }

    /// Override the bulky volume threshold (cm³)
    #[must_use]
    pub fn with_bulky_volume(mut self, threshold: f64) -> Self {
        self.bulky_volume = threshold;
        self
    }

    /// Override the bulky single-dimension threshold (cm)
    #[must_use]
    pub fn with_bulky_dimension(mut self, threshold: f64) -> Self {
        self.bulky_dimension = threshold;
        self
    }
}

impl ClassificationRule for RejectRule {
    fn applies(&self, measurement: &Measurement) -> bool {
        measurement.is_heavy(self.heavy_mass)
            && measurement.is_bulky(self.bulky_volume, self.bulky_dimension)
    }

    fn classify(&self) -> Category {
        Category::REJECTED
    }

    fn name(&self) -> &'static str {
        "reject"
    }
}

/// Heavy → `SPECIAL`
///
/// Registered after [`RejectRule`], so in practice it only sees packages that
/// are heavy but not bulky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialHeavyRule {
    heavy_mass: f64,
}

impl Default for SpecialHeavyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecialHeavyRule {
    /// Rule using the default thresholds
    pub const fn new() -> Self {
        Self { heavy_mass: DEFAULT_HEAVY_MASS_THRESHOLD }
    }

    /// Rule using the matching fields of `thresholds`
    pub fn from_thresholds(thresholds: &RuleThresholds) -> Self {
        Self { heavy_mass: thresholds.heavy_mass }
    }

    /// Override the heavy mass threshold (kg)
    #[must_use]
    pub fn with_heavy_mass(mut self, threshold: f64) -> Self {
        self.heavy_mass = threshold;
        self
    }
}

impl ClassificationRule for SpecialHeavyRule {
    fn applies(&self, measurement: &Measurement) -> bool {
        measurement.is_heavy(self.heavy_mass)
    }

    fn classify(&self) -> Category {
        Category::SPECIAL
    }

    fn name(&self) -> &'static str {
        "special_heavy"
    }
}

/// Bulky → `SPECIAL`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialBulkyRule {
    bulky_volume: f64,
    bulky_dimension: f64,
}

impl Default for SpecialBulkyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecialBulkyRule {
    /// Rule using the default thresholds
    pub const fn new() -> Self {
        Self {
            bulky_volume: DEFAULT_BULKY_VOLUME_THRESHOLD,
            bulky_dimension: DEFAULT_BULKY_DIMENSION_THRESHOLD,
        }
    }

    /// Rule using the matching fields of `thresholds`
    pub fn from_thresholds(thresholds: &RuleThresholds) -> Self {
        Self {
            bulky_volume: thresholds.bulky_volume,
            bulky_dimension: thresholds.bulky_dimension,
        }
    }

    /// Override the bulky volume threshold (cm³)
    #[must_use]
    pub fn with_bulky_volume(mut self, threshold: f64) -> Self {
        self.bulky_volume = threshold;
        self
    }

    /// Override the bulky single-dimension threshold (cm)
    #[must_use]
    pub fn with_bulky_dimension(mut self, threshold: f64) -> Self {
        self.bulky_dimension = threshold;
        self
    }
}

impl ClassificationRule for SpecialBulkyRule {
    fn applies(&self, measurement: &Measurement) -> bool {
        measurement.is_bulky(self.bulky_volume, self.bulky_dimension)
    }

    fn classify(&self) -> Category {
        Category::SPECIAL
    }

    fn name(&self) -> &'static str {
        "special_bulky"
    }
}

/// Low density → `FRAGILE` (opt-in)
///
/// Density is `mass / volume * 1000`. A zero volume never matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragileRule {
    density_threshold: f64,
}

impl Default for FragileRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FragileRule {
    /// Rule using the default thresholds
    pub const fn new() -> Self {
        Self { density_threshold: DEFAULT_FRAGILE_DENSITY_THRESHOLD }
    }

    /// Rule using the matching fields of `thresholds`
    pub fn from_thresholds(thresholds: &RuleThresholds) -> Self {
        Self { density_threshold: thresholds.fragile_density }
    }

    /// Override the maximum density (kg per 1000 cm³)
    #[must_use]
    pub fn with_density_threshold(mut self, threshold: f64) -> Self {
        self.density_threshold = threshold;
        self
    }
}

impl ClassificationRule for FragileRule {
    fn applies(&self, measurement: &Measurement) -> bool {
        measurement.density().is_some_and(|density| density <= self.density_threshold)
    }

    fn classify(&self) -> Category {
        Category::FRAGILE
    }

    fn name(&self) -> &'static str {
        "fragile"
    }
}

/// Small and light → `EXPRESS` (opt-in)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpressRule {
    max_volume: f64,
    max_mass: f64,
}

impl Default for ExpressRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressRule {
    /// Rule using the default thresholds
    pub const fn new() -> Self {
        Self { max_volume: DEFAULT_EXPRESS_MAX_VOLUME, max_mass: DEFAULT_EXPRESS_MAX_MASS }
    }

    /// Rule using the matching fields of `thresholds`
    pub fn from_thresholds(thresholds: &RuleThresholds) -> Self {
        Self { max_volume: thresholds.express_max_volume, max_mass: thresholds.express_max_mass }
    }

    /// Override the maximum volume (cm³)
    #[must_use]
    pub fn with_max_volume(mut self, max_volume: f64) -> Self {
        self.max_volume = max_volume;
        self
    }

    /// Override the maximum mass (kg)
    #[must_use]
    pub fn with_max_mass(mut self, max_mass: f64) -> Self {
        self.max_mass = max_mass;
        self
    }
}

impl ClassificationRule for ExpressRule {
    fn applies(&self, measurement: &Measurement) -> bool {
        measurement.volume() <= self.max_volume && measurement.mass <= self.max_mass
    }

    fn classify(&self) -> Category {
        Category::EXPRESS
    }

    fn name(&self) -> &'static str {
        "express"
    }
}
