//! # measure_core - Imperial Measurement Engine
//!
//! `measure_core` is the shared core of the Plumb trade calculators. It owns
//! one value type, [`Measurement`], a feet-inches-fraction length such as
//! `3' 4-1/2"`, together with the parser and formatter for the notation
//! tradespeople actually type.
//!
//! ## Design Philosophy
//!
//! - **Canonical**: every value is normalized on construction; fields are never
//!   writable without re-normalizing
//! - **Stateless**: pure functions and `Copy` values, safe from any thread
//! - **Rich Errors**: structured, serializable error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use measure_core::{parse, Measurement};
//!
//! let stud = parse("7' 8-5/8\"").unwrap();
//! let plates = parse("4-1/2\"").unwrap();
//!
//! let wall = stud + plates;
//! assert_eq!(wall.to_fraction_string(), "8' 1-1/8\"");
//! assert_eq!(wall.to_decimal_string(), "97.1250");
//!
//! let half = (wall / 2.0).unwrap();
//! assert_eq!(half, Measurement::new(4, 0, 9, 16));
//! ```
//!
//! ## Modules
//!
//! - [`measurement`] - The measurement type, normalization and arithmetic
//! - [`parse`] - Text parsing
//! - [`units`] - Plain `f64` length and area wrappers
//! - [`settings`] - Precision and display settings
//! - [`errors`] - Structured error types

pub mod errors;
pub mod measurement;
pub mod parse;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{MeasureError, MeasureResult};
pub use measurement::Measurement;
pub use parse::parse;
pub use settings::MeasureSettings;
