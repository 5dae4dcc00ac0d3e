//! # Display Settings
//!
//! Precision and rendering options a calculator applies to its results.
//! The defaults (sixteenths, four decimal places) match the fixed behavior
//! of [`Measurement`] itself, so an absent or empty settings file changes
//! nothing.
//!
//! ## JSON Example
//!
//! ```json
//! { "denominator": 32, "decimal_places": 3 }
//! ```
//!
//! Missing keys take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{MeasureError, MeasureResult};
use crate::measurement::{Measurement, DEFAULT_DENOMINATOR};

/// Upper bound on `decimal_places`; f64 carries no more meaningful digits for lengths
pub const MAX_DECIMAL_PLACES: usize = 10;

/// Rounding and formatting options for rendered measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureSettings {
    /// Fractions are snapped to `1/denominator` of an inch (e.g. 8, 16, 32)
    pub denominator: i64,

    /// Digits after the decimal point in decimal inch and foot output
    pub decimal_places: usize,
}

impl Default for MeasureSettings {
    fn default() -> Self {
        MeasureSettings {
            denominator: DEFAULT_DENOMINATOR,
            decimal_places: 4,
        }
    }
}

impl MeasureSettings {
    /// Parse settings from a JSON string and validate them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use measure_core::settings::MeasureSettings;
    ///
    /// let settings = MeasureSettings::from_json(r#"{ "denominator": 8 }"#).unwrap();
    /// assert_eq!(settings.denominator, 8);
    /// assert_eq!(settings.decimal_places, 4);
    /// ```
    pub fn from_json(json: &str) -> MeasureResult<Self> {
        let settings: MeasureSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> MeasureResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| MeasureError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_json(&json)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> MeasureResult<()> {
        if self.denominator <= 0 {
            return Err(MeasureError::invalid_input(
                "denominator",
                self.denominator.to_string(),
                "Denominator must be positive",
            ));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(MeasureError::invalid_input(
                "decimal_places",
                self.decimal_places.to_string(),
                format!("At most {} decimal places are supported", MAX_DECIMAL_PLACES),
            ));
        }
        Ok(())
    }

    /// Re-snap a measurement to the configured fraction
    pub fn snap(&self, measurement: Measurement) -> Measurement {
        measurement.round_to(self.denominator)
    }

    /// Total inches with the configured number of decimal places
    pub fn format_decimal(&self, measurement: Measurement) -> String {
        format!("{:.*}", self.decimal_places, measurement.to_total_inches())
    }

    /// Total feet with the configured number of decimal places
    pub fn format_feet(&self, measurement: Measurement) -> String {
        format!("{:.*}", self.decimal_places, measurement.to_total_feet())
    }

    /// Snap, then render in architectural notation
    pub fn format_fraction(&self, measurement: Measurement) -> String {
        self.snap(measurement).to_fraction_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_measurement() {
        let settings = MeasureSettings::default();
        let m = Measurement::new(3, 4, 1, 2);
        assert_eq!(settings.format_decimal(m), m.to_decimal_string());
        assert_eq!(settings.format_fraction(m), m.to_fraction_string());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = MeasureSettings::from_json("{}").unwrap();
        assert_eq!(settings, MeasureSettings::default());

        let settings = MeasureSettings::from_json(r#"{"decimal_places": 2}"#).unwrap();
        assert_eq!(settings.denominator, 16);
        assert_eq!(settings.format_decimal(Measurement::new(0, 1, 1, 3)), "1.33");
    }

    #[test]
    fn test_snap_to_configured_denominator() {
        let settings = MeasureSettings {
            denominator: 8,
            decimal_places: 4,
        };
        let m = Measurement::new(0, 2, 5, 16);
        // 2-5/16 is halfway between 2-1/4 and 2-3/8; rounds away from zero
        assert_eq!(settings.format_fraction(m), "2-3/8\"");
    }

    #[test]
    fn test_validation() {
        let err = MeasureSettings::from_json(r#"{"denominator": 0}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = MeasureSettings::from_json(r#"{"decimal_places": 40}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = MeasureSettings::from_json("not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_format_feet() {
        let m = Measurement::new(3, 6, 0, 16);
        assert_eq!(MeasureSettings::default().format_feet(m), "3.5000");
        let settings = MeasureSettings {
            denominator: 16,
            decimal_places: 1,
        };
        assert_eq!(settings.format_feet(m), "3.5");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("plumb_settings_test_{}.json", std::process::id()));
        fs::write(&path, r#"{ "denominator": 32, "decimal_places": 2 }"#).unwrap();

        let loaded = MeasureSettings::load(&path);
        let _ = fs::remove_file(&path);

        let settings = loaded.unwrap();
        assert_eq!(settings.denominator, 32);
        assert_eq!(settings.decimal_places, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = MeasureSettings::load(Path::new("/nonexistent/plumb-settings.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_serialization() {
        let settings = MeasureSettings {
            denominator: 32,
            decimal_places: 3,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let roundtrip: MeasureSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, roundtrip);
    }
}
