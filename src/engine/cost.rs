//! Cost estimator.
//!
//! `baseCost = rate(quality, type, subtype) × area`, a ±band around it, a
//! category split and a front-loaded monthly payment projection. All money is
//! whole rupees; the last month absorbs rounding so the projection sums to
//! the base cost exactly.

use tracing::debug;

use crate::domain::{CostBreakdown, CostCategory, MonthlyPayment, NormalizedConfiguration, Phase};
use crate::error::ConfigurationError;
use crate::math::round_currency;
use crate::tables::constants::{DAYS_PER_BILLING_MONTH, MAX_COST_FACTOR, MIN_COST_FACTOR};
use crate::tables::costs::{PAYMENT_SCHEDULE, categories, payment_milestones, rate_per_sqft};

pub fn estimate(
    config: &NormalizedConfiguration,
    most_likely: u32,
    phases: &[Phase],
) -> Result<CostBreakdown, ConfigurationError> {
    let project_type = config.project_type();
    let rate = rate_per_sqft(project_type, &config.subtype, config.quality_level)?;
    let base_cost = round_currency(rate * config.area_sqft);

    let categories = categories(project_type)
        .iter()
        .map(|&(name, pct)| CostCategory {
            name: name.to_string(),
            amount: round_currency(base_cost * pct / 100.0),
            percent_of_base: pct,
        })
        .collect();

    let monthly_projection = monthly_projection(config, base_cost, most_likely, phases);
    debug!(
        rate,
        base_cost,
        months = monthly_projection.len(),
        "estimated cost"
    );

    Ok(CostBreakdown {
        rate_per_sqft: rate,
        area_sqft: config.area_sqft,
        base_cost,
        min_cost: round_currency(base_cost * MIN_COST_FACTOR),
        max_cost: round_currency(base_cost * MAX_COST_FACTOR),
        categories,
        monthly_projection,
    })
}

/// Number of billing months covering `most_likely` days.
pub fn billing_months(most_likely: u32) -> u32 {
    most_likely.div_ceil(DAYS_PER_BILLING_MONTH).max(1)
}

/// Per-month share of the payment schedule, summing to 1.
///
/// Short projects truncate the schedule; long ones stretch each bucket over
/// the months that map to it (`bucket = floor(m × 8 / months)`).
fn month_weights(months: usize) -> Vec<f64> {
    let buckets = PAYMENT_SCHEDULE.len();
    let raw: Vec<f64> = if months <= buckets {
        PAYMENT_SCHEDULE[..months].to_vec()
    } else {
        let bucket_of = |m: usize| m * buckets / months;
        let mut counts = vec![0usize; buckets];
        for m in 0..months {
            counts[bucket_of(m)] += 1;
        }
        (0..months)
            .map(|m| {
                let b = bucket_of(m);
                PAYMENT_SCHEDULE[b] / counts[b] as f64
            })
            .collect()
    };

    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

fn monthly_projection(
    config: &NormalizedConfiguration,
    base_cost: f64,
    most_likely: u32,
    phases: &[Phase],
) -> Vec<MonthlyPayment> {
    let months = billing_months(most_likely);
    let weights = month_weights(months as usize);
    let labels = payment_milestones(config.project_type());

    let mut allocated = 0.0;
    let mut out = Vec::with_capacity(weights.len());
    for (i, weight) in weights.iter().enumerate() {
        let amount = if i + 1 == weights.len() {
            base_cost - allocated
        } else {
            round_currency(base_cost * weight)
        };
        allocated += amount;

        let month_end = (i as u32 + 1)
            .saturating_mul(DAYS_PER_BILLING_MONTH)
            .min(most_likely);
        out.push(MonthlyPayment {
            month_index: i as u32 + 1,
            amount,
            milestone_label: milestone_label(labels, i, months as usize),
            phase: phase_at(phases, month_end),
        });
    }
    out
}

/// First label for month one, last label for the final month, evenly spread between.
fn milestone_label(labels: &[&str], month: usize, months: usize) -> String {
    let Some(last) = labels.len().checked_sub(1) else {
        return String::new();
    };
    let idx = if months <= 1 {
        last
    } else {
        ((month * last) as f64 / (months - 1) as f64).round() as usize
    };
    labels[idx.min(last)].to_string()
}

/// Name of the phase in progress at `day`.
fn phase_at(phases: &[Phase], day: u32) -> String {
    phases
        .iter()
        .find(|p| p.end_offset_days >= day)
        .or(phases.last())
        .map(|p| p.name.clone())
        .unwrap_or_default()
}
