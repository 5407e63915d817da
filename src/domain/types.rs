//! Estimation outputs.
//!
//! Every record here is created fresh by `engine::estimate` and never mutated
//! afterwards. All of them serialize (camelCase) so the export layer can write
//! the whole `EstimationResult` as one JSON document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::NormalizedConfiguration;

/// One multiplicative adjustment in the duration chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationFactorKind {
    Size,
    Floors,
    Rooms,
    Quality,
    Seasonal,
    Festival,
    FastTrack,
    Customization,
    AdvancedFeatures,
    WorkingSchedule,
}

impl DurationFactorKind {
    pub fn display_name(self) -> &'static str {
        match self {
            DurationFactorKind::Size => "Project size",
            DurationFactorKind::Floors => "Multi-floor",
            DurationFactorKind::Rooms => "Room count",
            DurationFactorKind::Quality => "Quality level",
            DurationFactorKind::Seasonal => "Monsoon exposure",
            DurationFactorKind::Festival => "Festival season",
            DurationFactorKind::FastTrack => "Fast-track",
            DurationFactorKind::Customization => "Custom work",
            DurationFactorKind::AdvancedFeatures => "Advanced features",
            DurationFactorKind::WorkingSchedule => "Working schedule",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationFactor {
    pub factor: DurationFactorKind,
    pub multiplier: f64,
    /// `(multiplier - 1) × 100`, signed.
    pub impact_percent: f64,
    pub description: String,
}

/// Three-point duration estimate, in days.
///
/// Invariant: `optimistic ≤ most_likely ≤ pessimistic`, all ≥ 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationEstimate {
    /// Historical average for the `(type, subtype)` pair.
    pub historical_baseline_days: u32,
    /// Baseline after size, floor, room and quality factors; before monsoon,
    /// festival and schedule effects.
    pub base_duration: u32,
    pub optimistic_duration: u32,
    pub most_likely_duration: u32,
    pub pessimistic_duration: u32,
    /// 0–100.
    pub confidence: u8,
    /// Applied factors, largest absolute impact first.
    pub factors: Vec<DurationFactor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalRisk {
    LowRisk,
    ModerateRisk,
    HighRisk,
}

impl SeasonalRisk {
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonalRisk::LowRisk => "low_risk",
            SeasonalRisk::ModerateRisk => "moderate_risk",
            SeasonalRisk::HighRisk => "high_risk",
        }
    }
}

/// Calendar exposure of the tentative project span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalAnalysis {
    pub span_start: NaiveDate,
    pub span_end: NaiveDate,
    pub span_weeks: u32,
    /// Sum of average rain days over the monsoon months touched.
    pub monsoon_impact: u32,
    pub extreme_weather_days: u32,
    pub risk: SeasonalRisk,
    /// First day of every monsoon month touched by the span.
    pub monsoon_months: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub role: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Offset from project start, in days.
    pub offset_days: u32,
    pub label: String,
}

/// One block of the execution plan. Offsets are days from project start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub name: String,
    /// `end - start`. An overlapping phase starts early, so its duration
    /// exceeds its proportional slot and phase durations can sum past the total.
    pub duration_days: u32,
    pub start_offset_days: u32,
    pub end_offset_days: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub dependencies: Vec<String>,
    pub critical_path: bool,
    pub resources: Vec<Resource>,
    pub weather_sensitive: bool,
    pub subtasks: Vec<String>,
    pub progress_milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Weather,
    MaterialImport,
    PermitApproval,
    LaborShortage,
    IntegrationComplexity,
    CostEscalation,
}

impl RiskCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            RiskCategory::Weather => "Weather",
            RiskCategory::MaterialImport => "Material import",
            RiskCategory::PermitApproval => "Permit approval",
            RiskCategory::LaborShortage => "Labor shortage",
            RiskCategory::IntegrationComplexity => "Integration",
            RiskCategory::CostEscalation => "Cost escalation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn as_str(self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub category: RiskCategory,
    pub description: String,
    pub probability_percent: u8,
    pub impact: Impact,
    pub mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCategory {
    pub name: String,
    pub amount: f64,
    pub percent_of_base: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayment {
    /// 1-based month number.
    pub month_index: u32,
    pub amount: f64,
    pub milestone_label: String,
    /// Phase in progress at the end of the month.
    pub phase: String,
}

/// Cost estimate in INR.
///
/// Invariants: `min_cost ≤ base_cost ≤ max_cost`; category percentages sum to
/// 100; monthly amounts sum to `base_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub rate_per_sqft: f64,
    pub area_sqft: f64,
    pub base_cost: f64,
    pub min_cost: f64,
    pub max_cost: f64,
    pub categories: Vec<CostCategory>,
    pub monthly_projection: Vec<MonthlyPayment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub title: String,
    pub description: String,
    pub estimated_time_saved_percent: f64,
    pub estimated_time_saved_days: u32,
    pub estimated_cost_impact: String,
    pub difficulty: Difficulty,
}

/// Everything `engine::estimate` produces for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub model_version: String,
    pub configuration: NormalizedConfiguration,
    pub start_date: NaiveDate,
    pub completion_date: NaiveDate,
    pub seasonal: SeasonalAnalysis,
    pub duration: DurationEstimate,
    pub phases: Vec<Phase>,
    pub risks: Vec<Risk>,
    pub cost: CostBreakdown,
    pub optimizations: Vec<Optimization>,
}
