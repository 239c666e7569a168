//! Remaining-time breakdown for the countdown display.
//!
//! Splits a remaining-seconds figure into years, days, hours, minutes and
//! seconds, rendered as `YY:DDD:HH:MM:SS`. Years use the 365.25-day average
//! year, consistent with the rate conversion.

use std::fmt;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_AVG_YEAR: f64 = 365.25 * 86_400.0;

/// Countdown components derived from a remaining-seconds figure.
///
/// Negative or non-finite input clamps to zero and marks the countdown as
/// exhausted; the display layer decides what to show in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    exhausted: bool,
}

impl Countdown {
    pub fn from_seconds(total_seconds: f64) -> Self {
        let exhausted = !(total_seconds > 0.0);
        let clamped = total_seconds.max(0.0);
        // f64 keeps whole-second precision well beyond any plausible horizon.
        let years = (clamped / SECONDS_PER_AVG_YEAR).floor();
        let mut remaining = (clamped % SECONDS_PER_AVG_YEAR).floor() as u64;

        let days = remaining / SECONDS_PER_DAY;
        remaining %= SECONDS_PER_DAY;
        let hours = remaining / 3600;
        remaining %= 3600;
        let minutes = remaining / 60;
        let seconds = remaining % 60;

        Self {
            years: years as u64,
            days,
            hours,
            minutes,
            seconds,
            exhausted,
        }
    }

    /// True when the input was zero, negative, or not a number.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:03}:{:02}:{:02}:{:02}",
            self.years, self.days, self.hours, self.minutes, self.seconds
        )
    }
}
