//! TOML parameter files.
//!
//! Every field is optional; anything missing falls back to the reference
//! configuration, so a partial file like
//!
//! ```toml
//! [budget]
//! remaining_budget_gt = 120.0
//! ```
//!
//! only overrides the budget figure. Numeric values are not validated beyond
//! being parseable; see [`parameters`](crate::parameters) for the assumptions.

use crate::errors::{ClockError, ClockResult};
use crate::parameters::ClockParameters;
use std::fs;
use std::path::Path;

impl ClockParameters {
    /// Parse parameters from TOML text, defaulting missing fields.
    pub fn from_toml_str(text: &str) -> ClockResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load parameters from a TOML file.
    pub fn from_toml_path(path: &Path) -> ClockResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ClockError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parameters = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded clock parameters");
        Ok(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_file_yields_defaults() {
        let parameters = ClockParameters::from_toml_str("").unwrap();
        assert_eq!(parameters, ClockParameters::default());
    }

    #[test]
    fn test_partial_override() {
        let parameters = ClockParameters::from_toml_str(
            r#"
            [budget]
            remaining_budget_gt = 120.0
            reference_date = "2026-01-01T00:00:00Z"
            "#,
        )
        .unwrap();

        assert_eq!(parameters.budget.remaining_budget_gt, 120.0);
        assert_eq!(
            parameters.budget.reference_date,
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
        );
        // Untouched fields keep their defaults.
        assert_eq!(parameters.budget.annual_emission_rate_gt, 42.2);
        assert_eq!(parameters.warming, ClockParameters::default().warming);
    }

    #[test]
    fn test_round_trip() {
        let parameters = ClockParameters::default();
        let text = toml::to_string(&parameters).unwrap();
        let parsed = ClockParameters::from_toml_str(&text).unwrap();
        assert_eq!(parsed, parameters);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = ClockParameters::from_toml_str("budget = 12").unwrap_err();
        assert!(matches!(err, ClockError::Config(_)));
    }
}
