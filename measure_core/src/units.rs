//! # Unit Types
//!
//! Plain `f64` wrappers for the quantities calculator formulas work in.
//! A [`Measurement`] is what the user types and reads; these newtypes are what
//! area, volume and slope formulas consume. Conversions in both directions go
//! through total inches.
//!
//! ## Example
//!
//! ```rust
//! use measure_core::units::{Feet, Inches, SqFt};
//! use measure_core::parse;
//!
//! let width = parse("12' 6\"").unwrap();
//! let length = parse("10'").unwrap();
//!
//! let span: Feet = width.into();
//! assert_eq!(span.0, 12.5);
//!
//! let floor = SqFt::from_dimensions(width, length);
//! assert_eq!(floor.0, 125.0);
//!
//! let back: measure_core::Measurement = Inches(40.5).into();
//! assert_eq!(back.to_fraction_string(), "3' 4-1/2\"");
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::measurement::Measurement;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl From<Measurement> for Inches {
    fn from(m: Measurement) -> Self {
        Inches(m.to_total_inches())
    }
}

impl From<Measurement> for Feet {
    fn from(m: Measurement) -> Self {
        Feet(m.to_total_feet())
    }
}

/// Snaps to the nearest sixteenth
impl From<Inches> for Measurement {
    fn from(inches: Inches) -> Self {
        Measurement::from_decimal_inches(inches.0)
    }
}

/// Snaps to the nearest sixteenth
impl From<Feet> for Measurement {
    fn from(ft: Feet) -> Self {
        Measurement::from_decimal_inches(Inches::from(ft).0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqFt> for SqIn {
    fn from(sqft: SqFt) -> Self {
        SqIn(sqft.0 * 144.0)
    }
}

impl From<SqIn> for SqFt {
    fn from(sqin: SqIn) -> Self {
        SqFt(sqin.0 / 144.0)
    }
}

impl SqIn {
    /// Area of a rectangle with the given sides
    pub fn from_dimensions(width: Measurement, length: Measurement) -> Self {
        SqIn(width.to_total_inches() * length.to_total_inches())
    }
}

impl SqFt {
    /// Area of a rectangle with the given sides
    pub fn from_dimensions(width: Measurement, length: Measurement) -> Self {
        SqIn::from_dimensions(width, length).into()
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);
impl_arithmetic!(SqFt);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_to_units() {
        let m = Measurement::new(3, 4, 1, 2);
        assert_eq!(Inches::from(m).0, 40.5);
        assert_eq!(Feet::from(m).0, 40.5 / 12.0);
    }

    #[test]
    fn test_units_to_measurement() {
        assert_eq!(Measurement::from(Feet(8.5)).to_fraction_string(), "8' 6\"");
        assert_eq!(Measurement::from(Inches(-4.5)).to_fraction_string(), "-4-1/2\"");
        // 2.03 in snaps to 2"
        assert_eq!(Measurement::from(Inches(2.03)), Measurement::from_feet_inches(0, 2));
    }

    #[test]
    fn test_area_from_dimensions() {
        let width = Measurement::from_feet_inches(1, 0);
        let length = Measurement::new(0, 6, 0, 16);
        assert_eq!(SqIn::from_dimensions(width, length).0, 72.0);
        assert_eq!(SqFt::from_dimensions(width, length).0, 0.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Feet(10.0);
        let b = Feet(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).value(), 5.0);
        assert_eq!(SqIn::from(SqFt::new(2.0)).0, 288.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Feet = serde_json::from_str(&json).unwrap();
        assert_eq!(ft, roundtrip);
    }
}
