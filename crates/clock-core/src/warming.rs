//! Global warming level counter
//!
//! Linear extrapolation of human-induced warming from the level calculated
//! at generation time:
//!
//! $$T(t) = T_{base} + r \cdot (t - t_{gen})$$
//!
//! The rate is small enough (°C per second) that a linear model is exact for
//! the display horizon; the base level is refreshed whenever the clock data
//! is regenerated.

use crate::parameters::WarmingParameters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Warming level counter for a fixed parameter set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarmingCounter {
    parameters: WarmingParameters,
}

impl WarmingCounter {
    /// Create a counter with the reference configuration.
    pub fn new() -> Self {
        Self::from_parameters(WarmingParameters::default())
    }

    /// Create a counter from parameters.
    pub fn from_parameters(parameters: WarmingParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &WarmingParameters {
        &self.parameters
    }

    /// Warming level above the 1880 baseline at `now` (°C).
    pub fn current_warming(&self, now: DateTime<Utc>) -> f64 {
        let elapsed = (now - self.parameters.generated_at).num_milliseconds() as f64 / 1e3;
        self.parameters.base_warming_degc + self.parameters.warming_rate_degc_per_sec * elapsed
    }
}

impl Default for WarmingCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;

    #[test]
    fn test_base_level_at_generation_time() {
        let counter = WarmingCounter::new();
        let generated_at = counter.parameters().generated_at;
        assert_eq!(counter.current_warming(generated_at), 1.3411);
    }

    #[test]
    fn test_warming_is_linear_in_elapsed_time() {
        let counter = WarmingCounter::new();
        let generated_at = counter.parameters().generated_at;
        let rate = counter.parameters().warming_rate_degc_per_sec;

        let one_year_later = generated_at + Duration::seconds(31_557_600);
        assert_relative_eq!(
            counter.current_warming(one_year_later),
            1.3411 + rate * 31_557_600.0
        );
    }
}
