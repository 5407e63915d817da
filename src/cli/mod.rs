//! Command-line parsing for the project estimator.
//!
//! Argument parsing and command dispatch stay separate from the engine so the
//! library can be driven without a process.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "estimate", version, about = "Project timeline & cost estimator")]
pub struct Cli {
    /// Log filter (e.g. `debug`, `project_estimator=trace`). Overrides ESTIMATOR_LOG.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate one project, print the report, and optionally export it.
    Run(RunArgs),
    /// Estimate every project in a JSON array and print a comparison table.
    Compare(CompareArgs),
    /// Re-print the report for a result saved with `run --export-json`.
    Show(ShowArgs),
    /// Validate and print the knowledge base.
    Tables,
}

/// Options shared by every estimating command.
#[derive(Debug, Parser, Clone)]
pub struct EstimateArgs {
    /// Project configuration JSON.
    #[arg(short = 'c', long, value_name = "JSON")]
    pub config: PathBuf,

    /// Date that stands in for "today" when a project has no start date.
    ///
    /// Falls back to ESTIMATOR_REFERENCE_DATE, then to the local date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub reference_date: Option<NaiveDate>,

    /// Draw extreme-weather days from a seeded model instead of the climatological table.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub estimate: EstimateArgs,

    /// Timeline width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Skip the timeline chart.
    #[arg(long)]
    pub no_timeline: bool,

    /// Export the full result to JSON.
    #[arg(long = "export-json", value_name = "FILE")]
    pub export_json: Option<PathBuf>,

    /// Export phases to CSV.
    #[arg(long = "export-phases", value_name = "FILE")]
    pub export_phases: Option<PathBuf>,

    /// Export the monthly payment schedule to CSV.
    #[arg(long = "export-payments", value_name = "FILE")]
    pub export_payments: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Result JSON written by `run --export-json`.
    #[arg(short = 'r', long, value_name = "JSON")]
    pub result: PathBuf,

    /// Timeline width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Skip the timeline chart.
    #[arg(long)]
    pub no_timeline: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub estimate: EstimateArgs,
}
