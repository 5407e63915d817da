//! Project configuration: the raw (partial) input and its normalized form.
//!
//! The raw form is what a wizard or a JSON file supplies. Every field is
//! optional; the normalizer in `engine::normalize` fills the gaps. The shape
//! differs per project type, so both forms are sum types tagged by `type`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level kind of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Construction,
    Interior,
    Renovation,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::Construction,
        ProjectType::Interior,
        ProjectType::Renovation,
    ];

    /// Lowercase key used in lookup tables and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Construction => "construction",
            ProjectType::Interior => "interior",
            ProjectType::Renovation => "renovation",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProjectType::Construction => "Construction",
            ProjectType::Interior => "Interior",
            ProjectType::Renovation => "Renovation",
        }
    }

    /// Subtype used when the configuration leaves it unset.
    pub fn default_subtype(self) -> &'static str {
        match self {
            ProjectType::Construction => "residential",
            ProjectType::Interior => "apartment",
            ProjectType::Renovation => "kitchen",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finish tier. Ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    #[default]
    Standard,
    Premium,
    Luxury,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 3] = [
        QualityLevel::Standard,
        QualityLevel::Premium,
        QualityLevel::Luxury,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::Standard => "standard",
            QualityLevel::Premium => "premium",
            QualityLevel::Luxury => "luxury",
        }
    }
}

/// Site working hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkingSchedule {
    #[default]
    Standard,
    Extended,
    #[serde(rename = "24x7")]
    RoundTheClock,
}

impl WorkingSchedule {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkingSchedule::Standard => "standard",
            WorkingSchedule::Extended => "extended",
            WorkingSchedule::RoundTheClock => "24x7",
        }
    }
}

/// Options shared by every project type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_level: Option<QualityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_home: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_track: Option<bool>,
    /// Count monsoon exposure in the duration. Defaults to `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_rainy: Option<bool>,
    /// Share of bespoke work, in percent (0–100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_work: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_schedule: Option<WorkingSchedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstructionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_up_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floors: Option<i64>,
    #[serde(flatten)]
    pub common: CommonOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteriorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carpet_area: Option<f64>,
    /// Total rooms in scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<i64>,
    #[serde(flatten)]
    pub common: CommonOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenovationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carpet_area: Option<f64>,
    #[serde(flatten)]
    pub common: CommonOptions,
}

/// A partially populated project description, as collected from a user.
///
/// ```json
/// { "type": "construction", "subtype": "villa", "builtUpArea": 3200, "floors": 3,
///   "qualityLevel": "premium", "startDate": "2025-01-15" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectConfiguration {
    Construction(ConstructionConfig),
    Interior(InteriorConfig),
    Renovation(RenovationConfig),
}

impl ProjectConfiguration {
    /// An empty configuration of the given type (everything defaulted).
    pub fn new(project_type: ProjectType) -> Self {
        match project_type {
            ProjectType::Construction => Self::Construction(ConstructionConfig::default()),
            ProjectType::Interior => Self::Interior(InteriorConfig::default()),
            ProjectType::Renovation => Self::Renovation(RenovationConfig::default()),
        }
    }

    pub fn project_type(&self) -> ProjectType {
        match self {
            Self::Construction(_) => ProjectType::Construction,
            Self::Interior(_) => ProjectType::Interior,
            Self::Renovation(_) => ProjectType::Renovation,
        }
    }

    pub fn subtype(&self) -> Option<&str> {
        match self {
            Self::Construction(c) => c.subtype.as_deref(),
            Self::Interior(c) => c.subtype.as_deref(),
            Self::Renovation(c) => c.subtype.as_deref(),
        }
    }

    /// Built-up area for construction, carpet area otherwise.
    pub fn area(&self) -> Option<f64> {
        match self {
            Self::Construction(c) => c.built_up_area,
            Self::Interior(c) => c.carpet_area,
            Self::Renovation(c) => c.carpet_area,
        }
    }

    pub fn common(&self) -> &CommonOptions {
        match self {
            Self::Construction(c) => &c.common,
            Self::Interior(c) => &c.common,
            Self::Renovation(c) => &c.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonOptions {
        match self {
            Self::Construction(c) => &mut c.common,
            Self::Interior(c) => &mut c.common,
            Self::Renovation(c) => &mut c.common,
        }
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        let subtype = Some(subtype.into());
        match &mut self {
            Self::Construction(c) => c.subtype = subtype,
            Self::Interior(c) => c.subtype = subtype,
            Self::Renovation(c) => c.subtype = subtype,
        }
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        match &mut self {
            Self::Construction(c) => c.built_up_area = Some(area),
            Self::Interior(c) => c.carpet_area = Some(area),
            Self::Renovation(c) => c.carpet_area = Some(area),
        }
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.common_mut().start_date = Some(date);
        self
    }

    pub fn with_quality(mut self, quality: QualityLevel) -> Self {
        self.common_mut().quality_level = Some(quality);
        self
    }
}

/// Type-specific part of a normalized configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectScope {
    Construction { floors: u32 },
    Interior { rooms: u32 },
    Renovation,
}

impl ProjectScope {
    pub fn project_type(self) -> ProjectType {
        match self {
            ProjectScope::Construction { .. } => ProjectType::Construction,
            ProjectScope::Interior { .. } => ProjectType::Interior,
            ProjectScope::Renovation => ProjectType::Renovation,
        }
    }
}

/// A configuration with every field resolved. Produced by `engine::normalize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedConfiguration {
    #[serde(flatten)]
    pub scope: ProjectScope,
    pub subtype: String,
    /// Built-up area (construction) or carpet area, in sq ft.
    pub area_sqft: f64,
    pub quality_level: QualityLevel,
    pub sustainability: bool,
    pub smart_home: bool,
    pub fast_track: bool,
    pub include_rainy: bool,
    pub custom_work: f64,
    pub start_date: NaiveDate,
    pub working_schedule: WorkingSchedule,
}

impl NormalizedConfiguration {
    pub fn project_type(&self) -> ProjectType {
        self.scope.project_type()
    }

    /// `type/subtype` lookup key.
    pub fn type_key(&self) -> String {
        format!("{}/{}", self.project_type(), self.subtype)
    }
}
