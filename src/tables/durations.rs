//! Historical average durations keyed by `(type, subtype)`.

use crate::domain::ProjectType;
use crate::error::{ConfigurationError, LookupTable};

#[derive(Debug, Clone, Copy)]
pub struct BaselineEntry {
    pub project_type: ProjectType,
    pub subtype: &'static str,
    pub days: f64,
}

const fn entry(project_type: ProjectType, subtype: &'static str, days: f64) -> BaselineEntry {
    BaselineEntry {
        project_type,
        subtype,
        days,
    }
}

pub const BASELINES: &[BaselineEntry] = &[
    entry(ProjectType::Construction, "residential", 180.0),
    entry(ProjectType::Construction, "villa", 240.0),
    entry(ProjectType::Construction, "apartment", 300.0),
    entry(ProjectType::Construction, "commercial", 270.0),
    entry(ProjectType::Interior, "apartment", 60.0),
    entry(ProjectType::Interior, "villa", 90.0),
    entry(ProjectType::Interior, "office", 75.0),
    entry(ProjectType::Interior, "retail", 45.0),
    entry(ProjectType::Renovation, "kitchen", 30.0),
    entry(ProjectType::Renovation, "bathroom", 21.0),
    entry(ProjectType::Renovation, "full_home", 90.0),
    entry(ProjectType::Renovation, "office", 60.0),
];

/// Historical average duration in days.
pub fn baseline_days(project_type: ProjectType, subtype: &str) -> Result<f64, ConfigurationError> {
    BASELINES
        .iter()
        .find(|e| e.project_type == project_type && e.subtype == subtype)
        .map(|e| e.days)
        .ok_or_else(|| {
            ConfigurationError::new(
                "subtype",
                format!("{project_type}/{subtype}"),
                LookupTable::Baseline,
            )
        })
}

/// Known subtypes for a project type, in table order.
pub fn subtypes(project_type: ProjectType) -> impl Iterator<Item = &'static str> {
    BASELINES
        .iter()
        .filter(move |e| e.project_type == project_type)
        .map(|e| e.subtype)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_residential_construction() {
        assert_eq!(baseline_days(ProjectType::Construction, "residential").unwrap(), 180.0);
        assert_eq!(baseline_days(ProjectType::Interior, "apartment").unwrap(), 60.0);
    }

    #[test]
    fn unknown_subtype_names_the_field() {
        let err = baseline_days(ProjectType::Construction, "warehouse").unwrap_err();
        assert_eq!(err.field, "subtype");
        assert_eq!(err.key, "construction/warehouse");
        assert_eq!(err.table, LookupTable::Baseline);
    }

    #[test]
    fn default_subtypes_are_listed() {
        for t in ProjectType::ALL {
            assert!(subtypes(t).any(|s| s == t.default_subtype()));
        }
    }
}
