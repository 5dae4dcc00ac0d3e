//! # Measurement Parsing
//!
//! Turns hand-typed dimensions into a [`Measurement`]. Accepted notations:
//!
//! | Input          | Meaning                      |
//! |----------------|------------------------------|
//! | `3' 4-1/2"`    | feet, inches and a fraction  |
//! | `3'4"`, `3 4`  | feet and inches              |
//! | `4-1/2"`       | inches and a fraction        |
//! | `12'`          | feet                         |
//! | `5/8`          | a bare fraction of an inch   |
//! | `4.5`          | decimal inches               |
//!
//! Hyphens are overloaded: a leading `-` is always a sign, and any other `-`
//! means "and" (`4-1/2` is four and a half inches, not a subtraction).
//! Typographic primes, curly quotes and long dashes are accepted in place of
//! their ASCII forms. A negative may be parenthesized: `-(3' 4")`.
//!
//! ## Example
//!
//! ```rust
//! use measure_core::parse;
//!
//! let m = parse("3' 4-1/2\"").unwrap();
//! assert_eq!(m.to_total_inches(), 40.5);
//!
//! let m: measure_core::Measurement = "-4-1/2\"".parse().unwrap();
//! assert_eq!(m.to_fraction_string(), "-4-1/2\"");
//!
//! assert!(parse("").is_err());
//! ```

use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::{MeasureError, MeasureResult};
use crate::measurement::{Measurement, DEFAULT_DENOMINATOR, MAX_TOTAL_INCHES};

/// `feet inches`, optionally followed by a space- or hyphen-joined fraction
static FEET_INCHES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\s+([0-9]+)(?:(?:\s*-\s*|\s+)([0-9]+)/([0-9]+))?$").expect("valid feet-inches pattern")
});

/// A single whole number, optionally followed by a joined fraction
static SINGLE_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)(?:(?:\s*-\s*|\s+)([0-9]+)/([0-9]+))?$").expect("valid single-value pattern")
});

/// `num/den`
static BARE_FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\s*/\s*([0-9]+)$").expect("valid fraction pattern"));

/// Unsigned decimal: `4`, `4.5`, `4.`, `.5`
static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("valid decimal pattern"));

/// Parse a measurement from text.
///
/// # Errors
///
/// Returns [`MeasureError::ParseError`] for empty text, text matching none
/// of the accepted notations, or a length beyond [`MAX_TOTAL_INCHES`].
/// The message lists the accepted formats.
pub fn parse(text: &str) -> MeasureResult<Measurement> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MeasureError::parse_error(text, "Measurement is empty"));
    }

    let normalized = normalize_symbols(trimmed);
    let (negative, body) = split_sign(&normalized);

    let has_foot_marker = body.contains('\'');
    let cleaned = body.replace('"', "").replace('\'', " ");
    let parsed = parse_unsigned(cleaned.trim(), has_foot_marker, text)?;
    if parsed.to_total_inches() > MAX_TOTAL_INCHES {
        return Err(MeasureError::parse_error(
            text,
            format!("Length exceeds the largest supported value ({} in)", MAX_TOTAL_INCHES),
        ));
    }

    if negative {
        // Sign applies to the whole length, not to individual fields
        Ok(Measurement::from_decimal_inches(-parsed.to_total_inches()))
    } else {
        Ok(parsed)
    }
}

/// Map typographic marks to their ASCII equivalents.
fn normalize_symbols(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2032}' | '\u{2018}' | '\u{2019}' => '\'',
            '\u{2033}' | '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// Strip a leading sign and any parentheses wrapping the rest.
fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => {
            let rest = rest.trim();
            let rest = rest
                .strip_prefix('(')
                .and_then(|inner| inner.strip_suffix(')'))
                .unwrap_or(rest);
            (true, rest.trim())
        }
        None => (false, text),
    }
}

fn parse_unsigned(cleaned: &str, has_foot_marker: bool, input: &str) -> MeasureResult<Measurement> {
    if let Some(caps) = FEET_INCHES.captures(cleaned) {
        let feet = whole_number(&caps[1], input)?;
        let inches = whole_number(&caps[2], input)?;
        let (numerator, denominator) = fraction_parts(&caps, 3, input)?;
        debug!("'{}' parsed as feet-inches", input);
        return Ok(Measurement::new(feet, inches, numerator, denominator));
    }

    if let Some(caps) = SINGLE_VALUE.captures(cleaned) {
        let value = whole_number(&caps[1], input)?;
        let (numerator, denominator) = fraction_parts(&caps, 2, input)?;
        return Ok(if has_foot_marker {
            debug!("'{}' parsed as feet", input);
            Measurement::new(value, 0, numerator, denominator)
        } else {
            debug!("'{}' parsed as inches", input);
            Measurement::new(0, value, numerator, denominator)
        });
    }

    if let Some(caps) = BARE_FRACTION.captures(cleaned) {
        let numerator = whole_number(&caps[1], input)?;
        let denominator = whole_number(&caps[2], input)?;
        debug!("'{}' parsed as bare fraction", input);
        return Ok(Measurement::new(0, 0, numerator, denominator));
    }

    if DECIMAL.is_match(cleaned) {
        if let Ok(total_inches) = cleaned.parse::<f64>() {
            debug!("'{}' parsed as decimal inches", input);
            return Ok(Measurement::from_decimal_inches(total_inches));
        }
    }

    Err(MeasureError::parse_error(input, "Unrecognized measurement"))
}

fn whole_number(digits: &str, input: &str) -> MeasureResult<i64> {
    digits
        .parse::<i64>()
        .map_err(|_| MeasureError::parse_error(input, format!("'{}' is too large", digits)))
}

/// Optional `num/den` captured at groups `first` and `first + 1`; 0/16 when absent.
fn fraction_parts(caps: &Captures<'_>, first: usize, input: &str) -> MeasureResult<(i64, i64)> {
    match (caps.get(first), caps.get(first + 1)) {
        (Some(numerator), Some(denominator)) => Ok((
            whole_number(numerator.as_str(), input)?,
            whole_number(denominator.as_str(), input)?,
        )),
        _ => Ok((0, DEFAULT_DENOMINATOR)),
    }
}

impl FromStr for Measurement {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inches(text: &str) -> f64 {
        parse(text).unwrap().to_total_inches()
    }

    #[test]
    fn test_feet_inches_fraction() {
        assert_eq!(inches("3' 4-1/2\""), 40.5);
        assert_eq!(inches("3'4\""), 40.0);
        assert_eq!(inches("3 4"), 40.0);
        assert_eq!(inches("3' 4 1/2\""), 40.5);
        assert_eq!(inches("  3' 4 - 3/8\"  "), 40.375);
    }

    #[test]
    fn test_single_value_uses_foot_marker() {
        assert_eq!(inches("12'"), 144.0);
        assert_eq!(inches("12"), 12.0);
        assert_eq!(inches("12\""), 12.0);
        assert_eq!(inches("4-1/2\""), 4.5);
        assert_eq!(inches("4 1/2"), 4.5);
        assert_eq!(inches("2'-1/2"), 24.5);
    }

    #[test]
    fn test_bare_fraction() {
        let m = parse("5/8\"").unwrap();
        assert_eq!(m.to_total_inches(), 0.625);
        assert_eq!(m.to_fraction_string(), "0-5/8\"");
        assert_eq!(inches("19/16"), 1.1875);
    }

    #[test]
    fn test_decimal_inches() {
        assert_eq!(inches("4.5"), 4.5);
        assert_eq!(inches(".25"), 0.25);
        assert_eq!(inches("7."), 7.0);
        // Decimal values are always inches, snapped to sixteenths
        assert_eq!(inches("4.5'"), 4.5);
        assert_eq!(inches("0.1"), 0.125);
    }

    #[test]
    fn test_negative() {
        let m = parse("-4-1/2\"").unwrap();
        assert_eq!(m.to_fraction_string(), "-4-1/2\"");
        assert_eq!(m.to_total_inches(), -4.5);

        assert_eq!(inches("-(3' 4\")"), -40.0);
        assert_eq!(inches("- 2'"), -24.0);
        assert_eq!(inches("-4.5"), -4.5);
        assert_eq!(parse("-(3' 4\")").unwrap().to_fraction_string(), "-3' 4\"");
    }

    #[test]
    fn test_typographic_marks() {
        assert_eq!(inches("3\u{2032} 4\u{2013}1/2\u{2033}"), 40.5);
        assert_eq!(inches("3\u{2019} 4\u{201D}"), 40.0);
        assert_eq!(inches("\u{2212}4\u{2014}1/2\u{201C}"), -4.5);
    }

    #[test]
    fn test_zero_denominator_reads_as_sixteenths() {
        assert_eq!(inches("1/0"), 0.0625);
    }

    #[test]
    fn test_from_str() {
        let m: Measurement = "8' 4\"".parse().unwrap();
        assert_eq!(m, Measurement::from_decimal_inches(100.0));
        assert!("nope".parse::<Measurement>().is_err());
    }

    #[test]
    fn test_errors() {
        for text in ["", "   ", "abc", "3 - 4", "--5", "1e5", "inf", "NaN", "3' 4.5\"", "-", "4-1/2-3"] {
            match parse(text) {
                Err(MeasureError::ParseError { message, .. }) => {
                    assert!(message.contains("3' 4-1/2\""), "{}", message);
                    assert!(message.contains("4.5"), "{}", message);
                }
                other => panic!("expected parse error for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_sign_negates_large_values() {
        let positive = parse("2000000000000").unwrap();
        let negative = parse("-2000000000000").unwrap();
        assert_eq!(negative, -positive);
        assert_eq!(negative.to_total_inches(), -2.0e12);
        assert_eq!(negative.to_fraction_string(), format!("-{}", positive));
    }

    #[test]
    fn test_length_beyond_limit_is_error() {
        for text in ["200000000000000000", "-200000000000000000", "20000000000000000'"] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.error_code(), "PARSE_ERROR", "{}", text);
        }
    }

    #[test]
    fn test_non_ascii_digits_are_unrecognized() {
        for text in ["\u{0663}", "\u{0663}' 4\"", "\u{0664}-1/2"] {
            match parse(text) {
                Err(MeasureError::ParseError { message, .. }) => {
                    assert!(message.starts_with("Unrecognized measurement"), "{}", message);
                }
                other => panic!("expected parse error for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_overflowing_component_is_error() {
        let err = parse("99999999999999999999' 1\"").unwrap_err();
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_fraction_string_round_trip() {
        let inputs = [
            "3' 4-1/2\"",
            "0",
            "7/16",
            "1/3",
            "-1/3",
            "-2' 3-3/8\"",
            "-0-1/2\"",
            "100",
            "8'",
            "1 3/4",
            "0.1",
            "15' 11-15/16\"",
            "27.3",
        ];
        for input in inputs {
            let first = parse(input).unwrap();
            let rendered = first.to_fraction_string();
            let second = parse(&rendered).unwrap();
            assert!(
                (first.to_total_inches() - second.to_total_inches()).abs() < 1e-9,
                "{} -> {} -> {}",
                input,
                rendered,
                second
            );
        }
    }
}
