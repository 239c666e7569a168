//! Carbon Budget Depletion Estimator
//!
//! Derives how much of the remaining carbon budget is left at a given
//! instant and when it runs out, assuming a constant emission rate.
//!
//! # What This Estimator Does
//!
//! 1. Converts the annual emission rate to a per-second depletion rate
//! 2. Integrates depletion over the time elapsed since the reference date
//! 3. Subtracts the depletion from the reference budget
//! 4. Divides the remaining budget by the rate to get the time remaining
//! 5. Projects the absolute deadline instant
//!
//! # Inputs
//!
//! - Remaining budget at the reference date (GtCO2)
//! - Annual emission rate (GtCO2/yr)
//! - Reference date (UTC)
//! - The instant to evaluate at (UTC), supplied by the caller
//!
//! # Outputs
//!
//! A [`BudgetEstimate`] record with the depletion rate (t/s), depletion since
//! the reference date (t), the current budget (t), the time remaining (s),
//! and the deadline instant.
//!
//! All figures derive from a single instant, so they are mutually consistent.
//! The caller reads the clock once and passes the instant in; the estimator
//! never re-samples mid-computation.

use crate::parameters::{BudgetParameters, SECONDS_PER_YEAR, TONNES_PER_GIGATONNE};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Carbon budget estimator for a fixed parameter set.
///
/// Implements the budget projection:
///
/// $$t_{remaining} = \frac{B_{ref} - r \cdot \Delta t}{r}$$
///
/// where $B_{ref}$ is the reference budget (tonnes), $r$ the depletion rate
/// (tonnes/second), and $\Delta t$ the seconds elapsed since the reference
/// date (signed).
///
/// # Edge cases
///
/// - Evaluating exactly at the reference date returns the reference budget
///   unchanged.
/// - Evaluating before the reference date yields a negative elapsed time and
///   a larger budget; both are reported as-is.
/// - An exhausted budget yields a negative time remaining and a deadline in
///   the past; neither is treated as an error.
/// - A zero emission rate makes the time remaining non-finite (float
///   division by zero); there is no guard, matching the original generator.
///   The deadline then saturates at the representable range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEstimator {
    parameters: BudgetParameters,
}

/// Result of one budget evaluation. Plain data, nothing is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEstimate {
    /// The instant the estimate was evaluated at.
    pub as_of: DateTime<Utc>,
    /// Seconds elapsed since the reference date (signed).
    pub elapsed_seconds: f64,
    /// Budget depletion rate (tonnes/second).
    pub rate_tonnes_per_sec: f64,
    /// Tonnes emitted since the reference date (signed).
    pub depleted_tonnes: f64,
    /// Budget remaining at `as_of` (tonnes).
    pub current_budget_tonnes: f64,
    /// Estimated seconds until the budget reaches zero (negative if already
    /// exhausted).
    pub time_remaining_seconds: f64,
    /// Projected instant at which the budget reaches zero.
    pub deadline: DateTime<Utc>,
}

impl BudgetEstimator {
    /// Create an estimator with the reference configuration.
    pub fn new() -> Self {
        Self::from_parameters(BudgetParameters::default())
    }

    /// Create an estimator from parameters.
    pub fn from_parameters(parameters: BudgetParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &BudgetParameters {
        &self.parameters
    }

    /// Budget depletion rate (tonnes/second).
    ///
    /// $$r = \frac{E_{annual} \cdot 10^9}{365.25 \cdot 86400}$$
    pub fn rate_tonnes_per_sec(&self) -> f64 {
        self.parameters.annual_emission_rate_gt * TONNES_PER_GIGATONNE / SECONDS_PER_YEAR
    }

    /// Evaluate the budget at `now`.
    pub fn estimate(&self, now: DateTime<Utc>) -> BudgetEstimate {
        let elapsed_seconds = signed_seconds(now - self.parameters.reference_date);
        let rate_tonnes_per_sec = self.rate_tonnes_per_sec();
        let depleted_tonnes = rate_tonnes_per_sec * elapsed_seconds;
        let current_budget_tonnes =
            self.parameters.remaining_budget_gt * TONNES_PER_GIGATONNE - depleted_tonnes;
        let time_remaining_seconds = current_budget_tonnes / rate_tonnes_per_sec;

        // Saturating cast: a non-finite time remaining collapses to the
        // representable range instead of panicking on the date addition.
        let offset = Duration::milliseconds((time_remaining_seconds * 1e3) as i64);
        let deadline = now
            .checked_add_signed(offset)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        BudgetEstimate {
            as_of: now,
            elapsed_seconds,
            rate_tonnes_per_sec,
            depleted_tonnes,
            current_budget_tonnes,
            time_remaining_seconds,
            deadline,
        }
    }

    /// Cumulative tonnes emitted since the reference date, clamped at zero.
    ///
    /// This is the "emissions so far" counter; unlike the budget figures it
    /// never goes negative when evaluated before the reference date.
    pub fn emitted_since_reference(&self, now: DateTime<Utc>) -> f64 {
        let elapsed = signed_seconds(now - self.parameters.reference_date);
        (self.rate_tonnes_per_sec() * elapsed).max(0.0)
    }
}

impl Default for BudgetEstimator {
    fn default() -> Self {
        Self::new()
    }
}

fn signed_seconds(delta: Duration) -> f64 {
    delta.num_milliseconds() as f64 / 1e3
}
