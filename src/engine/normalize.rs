//! Configuration normalizer.
//!
//! Fills every unset field with its documented default and clamps
//! out-of-range values. Never fails: absent or unusable data is absorbed.
//! Whether the resulting `(type, subtype)` is known is the lookup tables'
//! concern, not this module's.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{CommonOptions, NormalizedConfiguration, ProjectConfiguration, ProjectScope, ProjectType};
use crate::tables::constants::{reference_area, DEFAULT_ROOMS};

/// Resolve a partial configuration. `reference_date` stands in for the start date when unset.
pub fn normalize(config: &ProjectConfiguration, reference_date: NaiveDate) -> NormalizedConfiguration {
    let project_type = config.project_type();

    let scope = match config {
        ProjectConfiguration::Construction(c) => ProjectScope::Construction {
            floors: at_least_one(c.floors, 1, "floors"),
        },
        ProjectConfiguration::Interior(c) => ProjectScope::Interior {
            rooms: at_least_one(c.rooms, DEFAULT_ROOMS, "rooms"),
        },
        ProjectConfiguration::Renovation(_) => ProjectScope::Renovation,
    };

    let subtype = match config.subtype().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_ascii_lowercase(),
        _ => {
            debug!(project_type = %project_type, "subtype unset; using default");
            project_type.default_subtype().to_string()
        }
    };

    let area_sqft = resolve_area(config.area(), project_type);
    let common = config.common();

    NormalizedConfiguration {
        scope,
        subtype,
        area_sqft,
        quality_level: common.quality_level.unwrap_or_default(),
        sustainability: common.sustainability.unwrap_or(false),
        smart_home: common.smart_home.unwrap_or(false),
        fast_track: common.fast_track.unwrap_or(false),
        include_rainy: common.include_rainy.unwrap_or(true),
        custom_work: resolve_custom_work(common),
        start_date: common.start_date.unwrap_or(reference_date),
        working_schedule: common.working_schedule.unwrap_or_default(),
    }
}

fn resolve_area(area: Option<f64>, project_type: ProjectType) -> f64 {
    match area {
        Some(a) if a.is_finite() && a > 0.0 => a,
        Some(a) => {
            debug!(area = a, "unusable area; using reference area");
            reference_area(project_type)
        }
        None => reference_area(project_type),
    }
}

fn resolve_custom_work(common: &CommonOptions) -> f64 {
    match common.custom_work {
        Some(pct) if pct.is_finite() => pct.clamp(0.0, 100.0),
        _ => 0.0,
    }
}

fn at_least_one(value: Option<i64>, default: u32, field: &'static str) -> u32 {
    match value {
        Some(v) if v >= 1 => u32::try_from(v).unwrap_or(u32::MAX),
        Some(v) => {
            debug!(field, value = v, "below 1; clamping");
            1
        }
        None => default,
    }
}
