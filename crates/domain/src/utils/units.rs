//! Unit conversion for package measurements
//!
//! Measurements are expressed in centimetres and kilograms. These helpers
//! bring other inputs into those units before classification.

use crate::impl_str_conversions;

/// Supported measurement units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Length, 0.1 cm
    Millimeter,
    /// Length, base unit
    Centimeter,
    /// Length, 100 cm
    Meter,
    /// Mass, 0.001 kg
    Gram,
    /// Mass, base unit
    Kilogram,
}

impl_str_conversions!(Unit {
    Millimeter => "mm",
    Centimeter => "cm",
    Meter => "m",
    Gram => "g",
    Kilogram => "kg",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantity {
    Length,
    Mass,
}

impl Unit {
    fn quantity(self) -> Quantity {
        match self {
            Self::Millimeter | Self::Centimeter | Self::Meter => Quantity::Length,
            Self::Gram | Self::Kilogram => Quantity::Mass,
        }
    }

    /// Factor to the base unit of the quantity (cm or kg)
    fn to_base(self) -> f64 {
        match self {
            Self::Millimeter => 0.1,
            Self::Centimeter | Self::Kilogram => 1.0,
            Self::Meter => 100.0,
            Self::Gram => 0.001,
        }
    }
}

/// Convert `value` between two units of the same quantity
///
/// Returns `None` when the units measure different quantities (e.g. `cm` to
/// `kg`).
pub fn convert(value: f64, from: Unit, to: Unit) -> Option<f64> {
    if from.quantity() != to.quantity() {
        return None;
    }
    if from == to {
        return Some(value);
    }
    Some(value * from.to_base() / to.to_base())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_length_conversions() {
        assert!(approx(convert(150.0, Unit::Centimeter, Unit::Meter).unwrap(), 1.5));
        assert!(approx(convert(2.0, Unit::Meter, Unit::Centimeter).unwrap(), 200.0));
        assert!(approx(convert(25.0, Unit::Millimeter, Unit::Centimeter).unwrap(), 2.5));
    }

    #[test]
    fn test_mass_conversions() {
        assert!(approx(convert(20.0, Unit::Kilogram, Unit::Gram).unwrap(), 20_000.0));
        assert!(approx(convert(500.0, Unit::Gram, Unit::Kilogram).unwrap(), 0.5));
    }

    #[test]
    fn test_identity_and_mismatch() {
        assert_eq!(convert(7.0, Unit::Gram, Unit::Gram), Some(7.0));
        assert_eq!(convert(7.0, Unit::Centimeter, Unit::Kilogram), None);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Unit::from_str("CM").unwrap(), Unit::Centimeter);
        assert_eq!(Unit::from_str("kg").unwrap(), Unit::Kilogram);
        assert_eq!(Unit::Meter.to_string(), "m");
        assert!(Unit::from_str("lb").is_err());
    }
}
