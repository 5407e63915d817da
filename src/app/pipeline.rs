//! Shared estimation pipeline used by `run` and `compare`.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! read config -> resolve reference date -> estimate (one or many)
//!
//! The commands can then focus on presentation and export.

use std::path::Path;

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::info;

use crate::domain::{EstimationResult, ProjectConfiguration};
use crate::engine::{EstimateOptions, WeatherModel};
use crate::error::{AppError, ConfigurationError};

pub const REFERENCE_DATE_ENV: &str = "ESTIMATOR_REFERENCE_DATE";

/// Everything the pipeline needs besides the configurations themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineSettings {
    pub reference_date: Option<NaiveDate>,
    pub options: EstimateOptions,
}

impl PipelineSettings {
    /// Build settings from CLI values, falling back to `ESTIMATOR_REFERENCE_DATE`.
    pub fn resolve(reference_date: Option<NaiveDate>, seed: Option<u64>) -> Result<Self, AppError> {
        let reference_date = match reference_date {
            Some(date) => Some(date),
            None => reference_date_from_env()?,
        };
        let weather = match seed {
            Some(seed) => WeatherModel::Sampled { seed },
            None => WeatherModel::Climatological,
        };
        Ok(Self {
            reference_date,
            options: EstimateOptions { weather },
        })
    }
}

fn reference_date_from_env() -> Result<Option<NaiveDate>, AppError> {
    let Ok(raw) = std::env::var(REFERENCE_DATE_ENV) else {
        return Ok(None);
    };
    parse_reference_date(&raw).map(Some)
}

fn parse_reference_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::new(
            2,
            format!("Invalid {REFERENCE_DATE_ENV} '{raw}' (expected YYYY-MM-DD): {e}"),
        )
    })
}

/// Read and estimate the single project in `path`.
pub fn run_estimate(path: &Path, settings: &PipelineSettings) -> Result<EstimationResult, AppError> {
    let config = crate::io::read_configuration(path)?;
    let result = crate::engine::estimate_with(&config, settings.reference_date, &settings.options)?;
    Ok(result)
}

/// Estimate many projects in parallel. Results come back in input order.
pub fn estimate_batch(
    configs: &[ProjectConfiguration],
    settings: &PipelineSettings,
) -> Vec<Result<EstimationResult, ConfigurationError>> {
    info!(projects = configs.len(), "estimating batch");
    configs
        .par_iter()
        .map(|config| crate::engine::estimate_with(config, settings.reference_date, &settings.options))
        .collect()
}

/// Read every project in `path` and estimate them in parallel.
///
/// Fails on the first (in file order) project with a configuration error,
/// naming its position.
pub fn run_batch(path: &Path, settings: &PipelineSettings) -> Result<Vec<EstimationResult>, AppError> {
    let configs = crate::io::read_configurations(path)?;
    estimate_batch(&configs, settings)
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            r.map_err(|e| AppError::new(2, format!("project #{}: invalid configuration: {e}", i + 1)))
        })
        .collect()
}
