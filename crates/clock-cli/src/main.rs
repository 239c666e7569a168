//! Climate clock CLI
//!
//! Computes the estimated time remaining in the global carbon budget and
//! prints it in one of three forms:
//!
//! - `report`: the full data model report (the default)
//! - `counters`: the live counter values the dashboard displays
//! - `export`: the generated `data.js` snippet for the web widget
//!
//! The system clock is read exactly once per run and that instant is threaded
//! through every formula, so all printed figures are mutually consistent.
//! `--now` substitutes a fixed instant for reproducible output.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use clock_core::{BudgetEstimator, ClockParameters, Counters, Report, WarmingCounter, WidgetData};

/// Climate clock: carbon budget depletion estimates
#[derive(Parser, Debug)]
#[command(name = "climate-clock")]
#[command(about = "Estimate the time remaining in the global carbon budget")]
struct Args {
    /// TOML parameter file; built-in reference values are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate at a fixed RFC 3339 instant instead of reading the clock
    #[arg(long, value_name = "RFC3339")]
    now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Print the full data model report
    Report,
    /// Print the live counter values once
    Counters,
    /// Print the generated data.js widget snippet
    Export,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let parameters = match &args.config {
        Some(path) => ClockParameters::from_toml_path(path)?,
        None => ClockParameters::default(),
    };

    // The single clock read; every figure below derives from this instant.
    let now = args.now.unwrap_or_else(Utc::now);
    tracing::debug!(%now, "evaluating clock");

    let estimator = BudgetEstimator::from_parameters(parameters.budget.clone());
    let warming = WarmingCounter::from_parameters(parameters.warming.clone());
    let estimate = estimator.estimate(now);

    match args.command.unwrap_or(Command::Report) {
        Command::Report => print!("{}", Report::new(&parameters, &estimate)),
        Command::Counters => print!(
            "{}",
            Counters::new(
                &parameters,
                &estimate,
                warming.current_warming(now),
                estimator.emitted_since_reference(now),
            )
        ),
        Command::Export => print!(
            "{}",
            WidgetData::new(&parameters, &estimate, warming.current_warming(now))
        ),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Diagnostics go to stderr; stdout carries only the rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
