//! Presentation of budget estimates as text.
//!
//! Three views over the same [`BudgetEstimate`](crate::BudgetEstimate):
//!
//! - [`Report`]: the full data model report written to stdout
//! - [`WidgetData`]: the generated `data.js` snippet consumed by the web widget
//! - [`Counters`]: the three live counter values the dashboard displays
//!
//! Rendering is pure string formatting; the computation happens in
//! [`budget`](crate::budget) and [`warming`](crate::warming).

use crate::budget::BudgetEstimate;
use crate::countdown::Countdown;
use crate::format::group_thousands;
use crate::parameters::ClockParameters;
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// The full data model report.
///
/// Line structure and number formatting are stable: downstream tooling scrapes
/// the `const` export lines, so the layout is part of the interface.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    parameters: &'a ClockParameters,
    estimate: &'a BudgetEstimate,
}

impl<'a> Report<'a> {
    pub fn new(parameters: &'a ClockParameters, estimate: &'a BudgetEstimate) -> Self {
        Self {
            parameters,
            estimate,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let budget = &self.parameters.budget;
        let estimate = self.estimate;

        writeln!(f, "--- Climate Clock Data Model Output ---")?;
        writeln!(
            f,
            "Current Date: {}",
            estimate.as_of.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(
            f,
            "Reference Budget (GtCO2): {} as of {}",
            budget.remaining_budget_gt,
            budget.reference_date.format("%Y-%m-%d")
        )?;
        writeln!(
            f,
            "Annual Emission Rate (GtCO2/yr): {}",
            budget.annual_emission_rate_gt
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "1. Total Remaining Budget (Tonnes): {} tonnes",
            group_thousands(estimate.current_budget_tonnes, 0)
        )?;
        writeln!(
            f,
            "2. Depletion Rate (Tonnes/sec): {} tonnes/sec",
            group_thousands(estimate.rate_tonnes_per_sec, 3)
        )?;
        writeln!(
            f,
            "3. Time Remaining (Total Seconds): {} seconds",
            group_thousands(estimate.time_remaining_seconds, 0)
        )?;
        writeln!(f)?;
        writeln!(f, "--- JavaScript Widget Export Variables ---")?;
        writeln!(
            f,
            "const REMAINING_SECONDS = {:.0};",
            estimate.time_remaining_seconds
        )?;
        writeln!(
            f,
            "const BUDGET_RATE_PER_SEC = {:.3};",
            estimate.rate_tonnes_per_sec
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Estimated Deadline: {}",
            estimate.deadline.format(TIMESTAMP_FORMAT)
        )
    }
}

/// The generated `data.js` configuration consumed by the web widget.
///
/// `DAILY_SEED` drives the widget's deterministic daily counter selection, so
/// it must be the `YYYYMMDD` of the generation instant shared by every figure
/// in the snippet.
#[derive(Debug, Clone)]
pub struct WidgetData<'a> {
    parameters: &'a ClockParameters,
    estimate: &'a BudgetEstimate,
    warming_degc: f64,
}

impl<'a> WidgetData<'a> {
    pub fn new(
        parameters: &'a ClockParameters,
        estimate: &'a BudgetEstimate,
        warming_degc: f64,
    ) -> Self {
        Self {
            parameters,
            estimate,
            warming_degc,
        }
    }
}

impl fmt::Display for WidgetData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimate = self.estimate;

        writeln!(
            f,
            "// data.js - Generated on {}",
            estimate.as_of.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(f)?;
        writeln!(f, "const CONFIG_DATA = {{")?;
        writeln!(f, "    // --- Daily Randomization Seed ---")?;
        writeln!(
            f,
            "    // YYYYMMDD string ensures the daily random counter selection is consistent for all users."
        )?;
        writeln!(f, "    DAILY_SEED: '{}',", estimate.as_of.format("%Y%m%d"))?;
        writeln!(f)?;
        writeln!(f, "    // --- Carbon Budget (Time Remaining) Counter Data ---")?;
        writeln!(
            f,
            "    // Depletion Rate (Tonnes/sec) calculated from {} GtCO2/year",
            self.parameters.budget.annual_emission_rate_gt
        )?;
        writeln!(
            f,
            "    BUDGET_RATE_PER_SEC: {:.3},",
            estimate.rate_tonnes_per_sec
        )?;
        writeln!(
            f,
            "    // Total seconds remaining until 1.5°C threshold is hit (as of generation time)"
        )?;
        writeln!(
            f,
            "    REMAINING_SECONDS: {:.0},",
            estimate.time_remaining_seconds
        )?;
        writeln!(f)?;
        writeln!(f, "    // --- Global Warming Counter Data ---")?;
        writeln!(
            f,
            "    // Latest calculated human-induced warming level (in °C)"
        )?;
        writeln!(f, "    CURRENT_TEMP: {:.4},", self.warming_degc)?;
        writeln!(f, "    // Rate of temperature increase (in °C per second)")?;
        writeln!(
            f,
            "    TEMP_RATE_PER_SEC: {},",
            self.parameters.warming.warming_rate_degc_per_sec
        )?;
        writeln!(f, "}};")
    }
}

/// The three live counter values the dashboard displays.
#[derive(Debug, Clone)]
pub struct Counters<'a> {
    parameters: &'a ClockParameters,
    estimate: &'a BudgetEstimate,
    warming_degc: f64,
    emitted_tonnes: f64,
}

impl<'a> Counters<'a> {
    pub fn new(
        parameters: &'a ClockParameters,
        estimate: &'a BudgetEstimate,
        warming_degc: f64,
        emitted_tonnes: f64,
    ) -> Self {
        Self {
            parameters,
            estimate,
            warming_degc,
            emitted_tonnes,
        }
    }
}

impl fmt::Display for Counters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let countdown = Countdown::from_seconds(self.estimate.time_remaining_seconds);

        writeln!(f, "Carbon Budget: Time to 1.5°C")?;
        if countdown.is_exhausted() {
            writeln!(f, "  Budget Exhausted")?;
        } else {
            writeln!(f, "  {countdown} (YRS:DAYS:HRS:MIN:SEC)")?;
        }
        writeln!(f)?;
        writeln!(f, "Global Warming Since 1880")?;
        writeln!(f, "  +{:.8}°C", self.warming_degc)?;
        writeln!(f)?;
        writeln!(
            f,
            "Global CO2 Emissions (since {})",
            self.parameters
                .budget
                .reference_date
                .format("%b %-d, %Y")
        )?;
        writeln!(f, "  {} tonnes", group_thousands(self.emitted_tonnes, 0))
    }
}
