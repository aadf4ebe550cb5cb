//! Macro for implementing Display and FromStr for token enums
//!
//! Used for small closed vocabularies such as measurement units, where the
//! textual form is a short lowercase token (`"cm"`, `"kg"`).
//!
//! # Example
//!
//! ```rust
//! use parcelsort_domain::impl_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Axis {
//!     Width,
//!     Height,
//!     Length,
//! }
//!
//! impl_str_conversions!(Axis {
//!     Width => "width",
//!     Height => "height",
//!     Length => "length",
//! });
//!
//! assert_eq!(Axis::Height.to_string(), "height");
//! assert_eq!("LENGTH".parse::<Axis>().unwrap(), Axis::Length);
//! ```

/// Implements Display and FromStr traits for token enums
///
/// - Display writes the mapped token verbatim
/// - FromStr lowercases the input before matching, so tokens must be
///   lowercase
/// - Unknown input yields `"Invalid <Enum>: <input>"`
#[macro_export]
macro_rules! impl_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
