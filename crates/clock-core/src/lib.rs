//! Core calculations and rendering for the climate clock.
//!
//! The clock tracks the remaining global carbon budget: given a published
//! budget estimate (GtCO2 at a reference date) and an assumed constant annual
//! emission rate, it derives the depletion rate, the budget left right now,
//! and the projected instant at which the budget reaches zero.
//!
//! # Module Organisation
//!
//! - `parameters`: input constants as explicit, serde-loadable structs
//! - `budget`: the depletion estimator (the actual arithmetic)
//! - `warming`: the global warming level counter
//! - `countdown`: remaining-time breakdown for display
//! - `format`: thousands-grouped number formatting
//! - `report`: presentation of estimates as text
//! - `config`: TOML parameter files
//!
//! All computations are pure functions of the parameters and a single instant
//! supplied by the caller; nothing in this crate reads the system clock.

pub mod budget;
pub mod config;
pub mod countdown;
pub mod errors;
pub mod format;
pub mod parameters;
pub mod report;
pub mod warming;

pub use budget::{BudgetEstimate, BudgetEstimator};
pub use countdown::Countdown;
pub use errors::{ClockError, ClockResult};
pub use parameters::{BudgetParameters, ClockParameters, WarmingParameters};
pub use report::{Counters, Report, WidgetData};
pub use warming::WarmingCounter;
