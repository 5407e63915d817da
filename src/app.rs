//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs logging
//! - parses CLI arguments
//! - runs single or batch estimates
//! - prints reports/timelines, fresh or from a saved result
//! - writes optional exports

use clap::Parser;
use tracing::warn;

use crate::cli::{Cli, Command, CompareArgs, RunArgs, ShowArgs};
use crate::domain::EstimationResult;
use crate::error::AppError;
use crate::tables::MODEL_VERSION;

pub mod pipeline;

use pipeline::PipelineSettings;

/// Entry point for the `estimate` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    crate::logging::init(cli.log_level.as_deref());

    crate::tables::validate()?;

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Compare(args) => handle_compare(args),
        Command::Show(args) => handle_show(args),
        Command::Tables => handle_tables(),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let settings = PipelineSettings::resolve(args.estimate.reference_date, args.estimate.seed)?;
    let result = pipeline::run_estimate(&args.estimate.config, &settings)?;

    print_report(&result, args.width, args.no_timeline);

    // Optional exports.
    if let Some(path) = &args.export_json {
        crate::io::write_result_json(path, &result)?;
    }
    if let Some(path) = &args.export_phases {
        crate::io::write_phases_csv(path, &result)?;
    }
    if let Some(path) = &args.export_payments {
        crate::io::write_payments_csv(path, &result)?;
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let result = crate::io::read_result_json(&args.result)?;
    if result.model_version != MODEL_VERSION {
        warn!(
            saved = %result.model_version,
            current = MODEL_VERSION,
            "result was computed with a different model version"
        );
    }
    print_report(&result, args.width, args.no_timeline);
    Ok(())
}

fn print_report(result: &EstimationResult, width: usize, no_timeline: bool) {
    println!("{}", crate::report::format_summary(result));
    println!("{}", crate::report::format_factors(result));
    println!("{}", crate::report::format_phases(result));
    if !no_timeline {
        println!(
            "{}",
            crate::plot::render_timeline(
                &result.phases,
                result.duration.most_likely_duration,
                width
            )
        );
    }
    println!("{}", crate::report::format_risks(result));
    println!("{}", crate::report::format_costs(result));
    println!("{}", crate::report::format_optimizations(result));
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let settings = PipelineSettings::resolve(args.estimate.reference_date, args.estimate.seed)?;
    let results = pipeline::run_batch(&args.estimate.config, &settings)?;
    println!("{}", crate::report::format_comparison(&results));
    Ok(())
}

fn handle_tables() -> Result<(), AppError> {
    println!("Knowledge base OK.\n");
    println!("{}", crate::report::format_tables());
    Ok(())
}
