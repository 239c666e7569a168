//! Climate clock parameters
//!
//! Input constants for the carbon budget countdown and the warming counter.
//! Each struct carries defaults matching the published estimates the clock
//! was last generated from, so a bare `ClockParameters::default()` reproduces
//! the reference configuration.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Tonnes per gigatonne (1 Gt = 1e9 t).
pub const TONNES_PER_GIGATONNE: f64 = 1.0e9;

/// Seconds in an average year (365.25 days, accounting for leap years).
pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;

/// Parameters for the carbon budget depletion estimate.
///
/// The budget figure is only meaningful together with the date it was valid
/// at; depletion since that date is subtracted at the assumed constant rate.
///
/// The rate is assumed positive. It is deliberately not validated: a zero
/// rate propagates as non-finite floats through the derived figures rather
/// than failing, matching the behaviour of the original generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetParameters {
    /// Remaining carbon budget at `reference_date` (GtCO2).
    ///
    /// Default: 130.0 GtCO2, the central estimate for the 1.5°C threshold
    /// as of 2025-01-01 (IPCC AR6 400 GtCO2 from 2020, adjusted for
    /// emissions since).
    pub remaining_budget_gt: f64,

    /// Global CO2 emission rate, fossil plus land use change (GtCO2/yr).
    ///
    /// Default: 42.2 GtCO2/yr
    pub annual_emission_rate_gt: f64,

    /// Instant at which `remaining_budget_gt` was valid (UTC).
    ///
    /// Default: 2025-01-01T00:00:00Z
    pub reference_date: DateTime<Utc>,
}

impl Default for BudgetParameters {
    fn default() -> Self {
        Self {
            remaining_budget_gt: 130.0,
            annual_emission_rate_gt: 42.2,
            reference_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }
}

/// Parameters for the human-induced warming counter.
///
/// Warming is modelled as a linear extrapolation from the level calculated
/// at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarmingParameters {
    /// Warming level above the 1880 baseline at `generated_at` (°C).
    ///
    /// Default: 1.3411 °C
    pub base_warming_degc: f64,

    /// Rate of temperature increase (°C per second).
    ///
    /// Default: 6.34e-9 °C/s (~0.2 °C per decade)
    pub warming_rate_degc_per_sec: f64,

    /// Instant at which `base_warming_degc` was calculated (UTC).
    ///
    /// Default: 2025-12-14T22:40:21Z
    pub generated_at: DateTime<Utc>,
}

impl Default for WarmingParameters {
    fn default() -> Self {
        Self {
            base_warming_degc: 1.3411,
            warming_rate_degc_per_sec: 6.34e-9,
            generated_at: Utc.with_ymd_and_hms(2025, 12, 14, 22, 40, 21).unwrap(),
        }
    }
}

/// Full clock configuration: budget countdown plus warming counter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockParameters {
    pub budget: BudgetParameters,
    pub warming: WarmingParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_configuration() {
        let params = BudgetParameters::default();
        assert_eq!(params.remaining_budget_gt, 130.0);
        assert_eq!(params.annual_emission_rate_gt, 42.2);
        assert_eq!(
            params.reference_date,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_seconds_per_year_accounts_for_leap_years() {
        assert_eq!(SECONDS_PER_YEAR, 31_557_600.0);
    }
}
