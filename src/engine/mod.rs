//! Estimation engine.
//!
//! `estimate` is the only entry point callers need: it normalizes the
//! configuration, predicts the duration (scanning the season on the way),
//! lays out phases, collects risks, prices the work and suggests
//! optimizations. Every step is a pure function of the normalized
//! configuration; the reference date only matters when `startDate` is unset.

pub mod cost;
pub mod duration;
pub mod normalize;
pub mod optimize;
pub mod phases;
pub mod risk;
pub mod seasonal;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::domain::{EstimationResult, NormalizedConfiguration, ProjectConfiguration};
use crate::error::ConfigurationError;
use crate::tables::MODEL_VERSION;

pub use seasonal::WeatherModel;

/// Knobs that change how an estimate is computed without changing the project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimateOptions {
    pub weather: WeatherModel,
}

/// Estimate with default options. `None` uses today's local date as the reference.
pub fn estimate(
    config: &ProjectConfiguration,
    reference_date: Option<NaiveDate>,
) -> Result<EstimationResult, ConfigurationError> {
    estimate_with(config, reference_date, &EstimateOptions::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(project_type = %config.project_type()))]
pub fn estimate_with(
    config: &ProjectConfiguration,
    reference_date: Option<NaiveDate>,
    options: &EstimateOptions,
) -> Result<EstimationResult, ConfigurationError> {
    let reference_date = reference_date.unwrap_or_else(|| Local::now().date_naive());
    let normalized = normalize::normalize(config, reference_date);

    let assembled = assemble(&normalized, options);

    match &assembled {
        Ok(result) => info!(
            key = %normalized.type_key(),
            most_likely_days = result.duration.most_likely_duration,
            base_cost = result.cost.base_cost,
            "estimate complete"
        ),
        Err(err) => warn!(field = err.field, key = %err.key, "configuration rejected"),
    }
    assembled
}

fn assemble(
    normalized: &NormalizedConfiguration,
    options: &EstimateOptions,
) -> Result<EstimationResult, ConfigurationError> {
    let prediction = duration::predict(normalized, options.weather)?;
    let most_likely = prediction.estimate.most_likely_duration;

    let phases = phases::generate(normalized, most_likely);
    let risks = risk::analyze(normalized, &prediction.seasonal);
    let cost = cost::estimate(normalized, most_likely, &phases)?;
    let optimizations = optimize::suggest(normalized, &prediction.estimate);

    Ok(EstimationResult {
        model_version: MODEL_VERSION.to_string(),
        configuration: normalized.clone(),
        start_date: normalized.start_date,
        completion_date: phases::offset_date(normalized.start_date, most_likely),
        seasonal: prediction.seasonal,
        duration: prediction.estimate,
        phases,
        risks,
        cost,
        optimizations,
    })
}
