//! The estimator's knowledge base.
//!
//! Historical durations, rates, phase templates and calendar tables are
//! immutable data keyed by `(type, subtype[, quality])`. `validate` checks the
//! tables against each other so a gap is caught at startup rather than as a
//! lookup miss in the middle of an estimate.

pub mod calendar;
pub mod constants;
pub mod costs;
pub mod durations;
pub mod phases;

use crate::domain::{ProjectType, QualityLevel};
use crate::error::TableError;

/// Identifies the constant set a result was computed with.
pub const MODEL_VERSION: &str = "2025.1";

const SUM_TOLERANCE: f64 = 1e-9;

/// Cross-check all tables. Returns every problem found, not just the first.
pub fn validate() -> Result<(), Vec<TableError>> {
    let mut errors = Vec::new();

    for b in durations::BASELINES {
        for quality in QualityLevel::ALL {
            if costs::rate_per_sqft(b.project_type, b.subtype, quality).is_err() {
                errors.push(TableError::MissingRate {
                    key: format!("{}/{}/{}", quality.as_str(), b.project_type, b.subtype),
                });
            }
        }
    }
    for r in costs::RATES {
        if durations::baseline_days(r.project_type, r.subtype).is_err() {
            errors.push(TableError::OrphanRate {
                key: format!("{}/{}/{}", r.quality.as_str(), r.project_type, r.subtype),
            });
        }
    }

    for project_type in ProjectType::ALL {
        validate_phases(project_type, &mut errors);

        let sum: f64 = costs::categories(project_type).iter().map(|(_, pct)| pct).sum();
        if (sum - 100.0).abs() > SUM_TOLERANCE {
            errors.push(TableError::CategoryPercentages { project_type, sum });
        }

        if costs::payment_milestones(project_type).is_empty() {
            errors.push(TableError::MissingMilestoneLabels { project_type });
        }
    }

    let sum: f64 = costs::PAYMENT_SCHEDULE.iter().sum();
    if (sum - 100.0).abs() > SUM_TOLERANCE {
        errors.push(TableError::PaymentSchedule { sum });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_phases(project_type: ProjectType, errors: &mut Vec<TableError>) {
    let templates = phases::templates(project_type);

    let sum: f64 = templates.iter().map(|t| t.proportion).sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        errors.push(TableError::PhaseProportions { project_type, sum });
    }

    for (i, t) in templates.iter().enumerate() {
        if i == 0 && t.overlap.is_some() {
            errors.push(TableError::LeadingOverlap {
                project_type,
                phase: t.name,
            });
        }
        for &dependency in t.dependencies {
            if !templates[..i].iter().any(|p| p.name == dependency) {
                errors.push(TableError::DanglingDependency {
                    project_type,
                    phase: t.name,
                    dependency,
                });
            }
        }
    }
}
