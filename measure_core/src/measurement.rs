//! # Imperial Measurement
//!
//! [`Measurement`] is a signed length held as feet, whole inches and a proper
//! fraction of an inch. Every value is kept in canonical form:
//!
//! - `0 < denominator`, and the fraction is fully reduced
//! - `0 <= numerator < denominator`
//! - `0 <= inches < 12`
//! - a negative value carries its sign in `feet`; the value is always
//!   `feet * 12 + inches + numerator / denominator`
//!
//! Fields are private. The only ways to obtain a value are the normalizing
//! constructors ([`Measurement::new`], [`Measurement::from_decimal_inches`]),
//! parsing, and deserialization (which goes through `new`).
//!
//! Arithmetic converts to total inches, operates in `f64`, and snaps the result
//! back to sixteenths. That is accurate to construction tolerance, not exact
//! rational arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use measure_core::Measurement;
//!
//! let wall = Measurement::from_feet_inches(8, 1);
//! let trim = Measurement::new(0, 3, 1, 2);
//!
//! let total = wall + trim;
//! assert_eq!(total.to_fraction_string(), "8' 4-1/2\"");
//! assert_eq!(total.to_total_inches(), 100.5);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{MeasureError, MeasureResult};

/// Denominator used when none is given, and by every arithmetic result
pub const DEFAULT_DENOMINATOR: i64 = 16;

/// Inches in one foot
pub const INCHES_PER_FOOT: i64 = 12;

/// Largest magnitude (in inches) accepted by [`Measurement::from_decimal_inches`]
/// and by the parser.
///
/// Well inside the range where the `f64 -> i64` casts are lossless. Only
/// totals beyond it (including infinities) are clamped; text beyond it is a
/// parse error.
pub const MAX_TOTAL_INCHES: f64 = 1.0e17;

/// A signed imperial length in canonical feet-inches-fraction form.
///
/// ## JSON Example
///
/// ```json
/// { "feet": 3, "inches": 4, "numerator": 1, "denominator": 2 }
/// ```
///
/// Deserialized values are re-normalized, so `{"feet": 0, "inches": 13}`
/// reads back as `1' 1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMeasurement")]
pub struct Measurement {
    feet: i64,
    inches: i64,
    numerator: i64,
    denominator: i64,
}

/// Unvalidated field set accepted from JSON
#[derive(Deserialize)]
struct RawMeasurement {
    #[serde(default)]
    feet: i64,
    #[serde(default)]
    inches: i64,
    #[serde(default)]
    numerator: i64,
    #[serde(default = "default_denominator")]
    denominator: i64,
}

fn default_denominator() -> i64 {
    DEFAULT_DENOMINATOR
}

impl From<RawMeasurement> for Measurement {
    fn from(raw: RawMeasurement) -> Self {
        Measurement::new(raw.feet, raw.inches, raw.numerator, raw.denominator)
    }
}

impl Measurement {
    /// Create a measurement and bring it into canonical form.
    ///
    /// A zero denominator is read as 16. Fraction overflow carries into
    /// inches and inch overflow carries into feet, in both directions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use measure_core::Measurement;
    ///
    /// let m = Measurement::new(0, 13, 0, 16);
    /// assert_eq!(m.feet(), 1);
    /// assert_eq!(m.inches(), 1);
    /// assert_eq!(m.to_fraction_string(), "1' 1\"");
    /// ```
    pub fn new(feet: i64, inches: i64, numerator: i64, denominator: i64) -> Self {
        let mut measurement = Measurement {
            feet,
            inches,
            numerator,
            denominator,
        };
        measurement.normalize();
        measurement
    }

    /// Create a whole feet-and-inches measurement (no fraction)
    pub fn from_feet_inches(feet: i64, inches: i64) -> Self {
        Self::new(feet, inches, 0, DEFAULT_DENOMINATOR)
    }

    /// The zero length
    pub fn zero() -> Self {
        Self::new(0, 0, 0, DEFAULT_DENOMINATOR)
    }

    /// Convert a total in inches to the nearest sixteenth.
    ///
    /// Feet and inches are taken by truncation toward zero; for negative
    /// totals the normalization borrows repair the representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use measure_core::Measurement;
    ///
    /// assert_eq!(Measurement::from_decimal_inches(100.0).to_fraction_string(), "8' 4\"");
    ///
    /// let negative = Measurement::from_decimal_inches(-4.5);
    /// assert_eq!((negative.feet(), negative.inches()), (-1, 7));
    /// assert_eq!(negative.to_total_inches(), -4.5);
    /// ```
    pub fn from_decimal_inches(total_inches: f64) -> Self {
        Self::from_decimal_inches_with_denominator(total_inches, DEFAULT_DENOMINATOR)
    }

    /// Convert a total in inches, rounding the fraction to `denominator` parts.
    ///
    /// A non-positive denominator falls back to 16.
    pub fn from_decimal_inches_with_denominator(total_inches: f64, denominator: i64) -> Self {
        let denominator = if denominator <= 0 {
            DEFAULT_DENOMINATOR
        } else {
            denominator
        };
        let total = clamp_total(total_inches);

        let feet = (total / INCHES_PER_FOOT as f64).trunc();
        let remaining = total - feet * INCHES_PER_FOOT as f64;
        let inches = remaining.trunc();
        let fraction = remaining - inches;
        let numerator = (fraction * denominator as f64).round();

        Self::new(feet as i64, inches as i64, numerator as i64, denominator)
    }

    /// Restore the canonical-form invariant.
    fn normalize(&mut self) {
        if self.denominator == 0 {
            self.denominator = DEFAULT_DENOMINATOR;
        }
        if self.denominator < 0 {
            self.denominator = self.denominator.saturating_neg();
            self.numerator = self.numerator.saturating_neg();
        }

        let divisor = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        if divisor > 1 {
            // divisor <= denominator <= i64::MAX
            self.numerator /= divisor as i64;
            self.denominator /= divisor as i64;
        }

        let carry = self.numerator.div_euclid(self.denominator);
        self.numerator = self.numerator.rem_euclid(self.denominator);
        self.inches = self.inches.saturating_add(carry);

        let carry = self.inches.div_euclid(INCHES_PER_FOOT);
        self.inches = self.inches.rem_euclid(INCHES_PER_FOOT);
        self.feet = self.feet.saturating_add(carry);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whole feet (negative for negative lengths)
    pub fn feet(&self) -> i64 {
        self.feet
    }

    /// Whole inches, 0 through 11
    pub fn inches(&self) -> i64 {
        self.inches
    }

    /// Fraction numerator, `0 <= numerator < denominator`
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Fraction denominator, always positive
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Flatten to `feet * 12 + inches + numerator / denominator`
    pub fn to_total_inches(&self) -> f64 {
        self.feet as f64 * INCHES_PER_FOOT as f64
            + self.inches as f64
            + self.numerator as f64 / self.denominator as f64
    }

    /// Total length in decimal feet
    pub fn to_total_feet(&self) -> f64 {
        self.to_total_inches() / INCHES_PER_FOOT as f64
    }

    /// Re-snap to the nearest `1/denominator` of an inch
    pub fn round_to(&self, denominator: i64) -> Self {
        Self::from_decimal_inches_with_denominator(self.to_total_inches(), denominator)
    }

    /// True for lengths below zero
    pub fn is_negative(&self) -> bool {
        self.feet < 0
    }

    /// True for the zero length
    pub fn is_zero(&self) -> bool {
        self.feet == 0 && self.inches == 0 && self.numerator == 0
    }

    /// Magnitude of the length
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Sum of two lengths, snapped to sixteenths
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Measurement) -> Self {
        Self::from_decimal_inches(self.to_total_inches() + other.to_total_inches())
    }

    /// Difference of two lengths, snapped to sixteenths
    pub fn subtract(self, other: Measurement) -> Self {
        Self::from_decimal_inches(self.to_total_inches() - other.to_total_inches())
    }

    /// Multiply the length by a plain number
    pub fn scale(self, factor: f64) -> Self {
        Self::from_decimal_inches(self.to_total_inches() * factor)
    }

    /// Divide the length by a plain number.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::DivisionByZero`] when `divisor` is zero.
    pub fn divide(self, divisor: f64) -> MeasureResult<Self> {
        if divisor == 0.0 {
            return Err(MeasureError::division_by_zero("divide"));
        }
        Ok(Self::from_decimal_inches(self.to_total_inches() / divisor))
    }

    /// Ratio of two lengths (e.g. rise over run).
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::DivisionByZero`] when `other` is zero length.
    pub fn ratio(self, other: Measurement) -> MeasureResult<f64> {
        if other.is_zero() {
            return Err(MeasureError::division_by_zero("ratio"));
        }
        Ok(self.to_total_inches() / other.to_total_inches())
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render in architectural notation, e.g. `3' 4-1/2"`, `8'`, `0"`.
    ///
    /// Negative lengths render their magnitude (snapped to sixteenths)
    /// behind a leading `-`.
    pub fn to_fraction_string(&self) -> String {
        let total = self.to_total_inches();
        if total < 0.0 {
            return format!("-{}", Self::from_decimal_inches(-total).to_fraction_string());
        }

        let mut out = String::new();
        if self.feet != 0 {
            out.push_str(&format!("{}'", self.feet.abs()));
        }

        let has_inch_part = self.inches != 0 || self.numerator != 0;
        if has_inch_part || self.feet == 0 {
            if self.feet != 0 {
                out.push(' ');
            }
            out.push_str(&self.inches.abs().to_string());
            if self.numerator != 0 {
                out.push_str(&format!("-{}/{}", self.numerator, self.denominator));
            }
            out.push('"');
        }

        out.trim().to_string()
    }

    /// Total inches with four decimal places
    pub fn to_decimal_string(&self) -> String {
        format!("{:.4}", self.to_total_inches())
    }
}

/// Clamp a total to the representable range, mapping NaN to zero.
fn clamp_total(total_inches: f64) -> f64 {
    if total_inches.is_nan() {
        warn!("NaN length treated as zero");
        return 0.0;
    }
    if total_inches.abs() > MAX_TOTAL_INCHES {
        warn!(
            "length {} in exceeds +/-{} in and was clamped",
            total_inches, MAX_TOTAL_INCHES
        );
        return total_inches.clamp(-MAX_TOTAL_INCHES, MAX_TOTAL_INCHES);
    }
    total_inches
}

/// Greatest common divisor (Euclid)
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Default for Measurement {
    fn default() -> Self {
        Measurement::zero()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fraction_string())
    }
}

impl Ord for Measurement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form: inches in 0..12 and fraction in [0, 1)
        self.feet
            .cmp(&other.feet)
            .then(self.inches.cmp(&other.inches))
            .then_with(|| {
                let lhs = self.numerator as i128 * other.denominator as i128;
                let rhs = other.numerator as i128 * self.denominator as i128;
                lhs.cmp(&rhs)
            })
    }
}

impl PartialOrd for Measurement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for Measurement {
    type Output = Measurement;
    fn add(self, rhs: Self) -> Self::Output {
        Measurement::add(self, rhs)
    }
}

impl Sub for Measurement {
    type Output = Measurement;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Measurement {
    type Output = Measurement;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

/// Division can fail, so `m / x` yields a result rather than a value.
impl Div<f64> for Measurement {
    type Output = MeasureResult<Measurement>;
    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

/// Exact negation: no re-snapping to sixteenths.
impl Neg for Measurement {
    type Output = Measurement;
    fn neg(self) -> Self::Output {
        Measurement::new(
            self.feet.saturating_neg(),
            self.inches.saturating_neg(),
            self.numerator.saturating_neg(),
            self.denominator,
        )
    }
}

impl Sum for Measurement {
    fn sum<I: Iterator<Item = Measurement>>(iter: I) -> Self {
        iter.fold(Measurement::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Measurement> for Measurement {
    fn sum<I: Iterator<Item = &'a Measurement>>(iter: I) -> Self {
        iter.fold(Measurement::zero(), |acc, m| acc + *m)
    }
}
