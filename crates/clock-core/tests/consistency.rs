//! Consistency tests for the climate clock.
//!
//! These tests verify the invariants that hold across modules:
//! - the budget depletes monotonically at exactly the per-second rate
//! - the deadline is always the evaluation instant plus the time remaining
//! - evaluation is idempotent for a fixed instant

use approx::assert_relative_eq;
use chrono::{Duration, TimeZone, Utc};
use clock_core::{BudgetEstimator, BudgetParameters, ClockParameters, Countdown, WarmingCounter};

mod budget_consistency {
    use super::*;

    /// The budget at `t + dt` must be exactly `rate * dt` lower than at `t`.
    #[test]
    fn test_budget_depletes_at_the_per_second_rate() {
        let estimator = BudgetEstimator::new();
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let rate = estimator.rate_tonnes_per_sec();

        let mut previous = estimator.estimate(start);
        for hours in 1..=24 {
            let current = estimator.estimate(start + Duration::hours(hours));
            let drop = previous.current_budget_tonnes - current.current_budget_tonnes;
            assert_relative_eq!(drop, rate * 3600.0, max_relative = 1e-9);
            assert!(current.current_budget_tonnes < previous.current_budget_tonnes);
            previous = current;
        }
    }

    /// `deadline - as_of == time_remaining_seconds` for any evaluation instant.
    #[test]
    fn test_deadline_identity_holds_everywhere() {
        let estimator = BudgetEstimator::new();
        let instants = [
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2027, 12, 31, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2035, 1, 1, 0, 0, 0).unwrap(),
        ];

        for now in instants {
            let estimate = estimator.estimate(now);
            let offset = (estimate.deadline - estimate.as_of).num_milliseconds() as f64 / 1e3;
            assert_relative_eq!(offset, estimate.time_remaining_seconds, epsilon = 1e-3);
        }
    }

    /// Two evaluations at the same instant are byte-identical: no hidden
    /// mutable state anywhere in the pipeline.
    #[test]
    fn test_evaluation_is_idempotent() {
        let parameters = ClockParameters::default();
        let estimator = BudgetEstimator::from_parameters(parameters.budget.clone());
        let warming = WarmingCounter::from_parameters(parameters.warming.clone());
        let now = Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap();

        let first = estimator.estimate(now);
        let second = estimator.estimate(now);
        assert_eq!(first, second);
        assert_eq!(warming.current_warming(now), warming.current_warming(now));

        let report_a = clock_core::Report::new(&parameters, &first).to_string();
        let report_b = clock_core::Report::new(&parameters, &second).to_string();
        assert_eq!(report_a, report_b);
    }

    /// The deadline itself is the instant where the remaining time hits zero.
    #[test]
    fn test_budget_is_spent_at_the_deadline() {
        let estimator = BudgetEstimator::new();
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let estimate = estimator.estimate(now);

        let at_deadline = estimator.estimate(estimate.deadline);
        // Within the millisecond resolution of the deadline instant.
        assert!(at_deadline.time_remaining_seconds.abs() < 1e-2);
        assert!(Countdown::from_seconds(at_deadline.time_remaining_seconds - 1.0).is_exhausted());
    }
}

mod parameter_scaling {
    use super::*;

    /// Halving the emission rate doubles the time remaining when evaluated at
    /// the reference date.
    #[test]
    fn test_time_remaining_scales_inversely_with_rate() {
        let base = BudgetParameters::default();
        let slow = BudgetParameters {
            annual_emission_rate_gt: base.annual_emission_rate_gt / 2.0,
            ..base.clone()
        };
        let now = base.reference_date;

        let t_base = BudgetEstimator::from_parameters(base)
            .estimate(now)
            .time_remaining_seconds;
        let t_slow = BudgetEstimator::from_parameters(slow)
            .estimate(now)
            .time_remaining_seconds;

        assert_relative_eq!(t_slow, 2.0 * t_base, max_relative = 1e-12);
    }

    /// Time remaining is linear in the budget at a fixed rate.
    #[test]
    fn test_time_remaining_scales_linearly_with_budget() {
        let base = BudgetParameters::default();
        let doubled = BudgetParameters {
            remaining_budget_gt: base.remaining_budget_gt * 2.0,
            ..base.clone()
        };
        let now = base.reference_date;

        let t_base = BudgetEstimator::from_parameters(base)
            .estimate(now)
            .time_remaining_seconds;
        let t_doubled = BudgetEstimator::from_parameters(doubled)
            .estimate(now)
            .time_remaining_seconds;

        assert_relative_eq!(t_doubled, 2.0 * t_base, max_relative = 1e-12);
    }
}
