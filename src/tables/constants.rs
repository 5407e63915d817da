//! Tunable multipliers and thresholds.
//!
//! Every number the engine multiplies by lives here, so one `MODEL_VERSION`
//! bump covers any recalibration.

use crate::domain::{ProjectType, QualityLevel, WorkingSchedule};

/// Multi-floor penalty applies above this many floors (construction only).
pub const FLOOR_PENALTY_THRESHOLD: u32 = 2;
pub const FLOOR_PENALTY_PER_FLOOR: f64 = 0.15;

/// Room count that maps to a neutral room factor (interior only).
pub const REFERENCE_ROOMS: f64 = 5.0;

/// `monsoonImpact / MONSOON_PENALTY_DIVISOR` is the seasonal penalty fraction.
pub const MONSOON_PENALTY_DIVISOR: f64 = 200.0;
pub const SEASONAL_LOW_RISK_MAX: f64 = 15.0;
pub const SEASONAL_MODERATE_RISK_MAX: f64 = 30.0;

/// Labor availability drop when work starts in a festival month.
pub const FESTIVAL_AVAILABILITY_DROP: f64 = 0.30;

/// Single fast-track multiplier. Older call sites used 0.85; 0.80 is canonical.
pub const FAST_TRACK_MULTIPLIER: f64 = 0.80;
/// Crew scale-up when fast-track runs parallel work streams.
pub const FAST_TRACK_CREW_MULTIPLIER: f64 = 1.5;

pub const CUSTOM_WORK_THRESHOLD: f64 = 30.0;
pub const CUSTOM_WORK_DIVISOR: f64 = 200.0;

/// Smart-home or sustainability packages.
pub const ADVANCED_FEATURE_MULTIPLIER: f64 = 1.15;

pub const CONFIDENCE_BASE: i32 = 85;
pub const CONFIDENCE_PENALTY_HEAVY_CUSTOM: i32 = 10;
pub const CONFIDENCE_HEAVY_CUSTOM_THRESHOLD: f64 = 50.0;
pub const CONFIDENCE_PENALTY_LUXURY: i32 = 5;
pub const CONFIDENCE_PENALTY_HIGH_SEASONAL: i32 = 10;
pub const CONFIDENCE_PENALTY_TALL_BUILDING: i32 = 5;
pub const CONFIDENCE_TALL_BUILDING_FLOORS: u32 = 3;

pub const MIN_COST_FACTOR: f64 = 0.90;
pub const MAX_COST_FACTOR: f64 = 1.15;

pub const DAYS_PER_BILLING_MONTH: u32 = 30;

/// Ceiling on the base and most-likely durations (ten years).
///
/// Areas far outside the reference tables would otherwise scale the chain
/// without bound; the seasonal scan, phase plan and payment projection are
/// all sized from these values.
pub const MAX_DURATION_DAYS: u32 = 3650;

/// Progress milestones as fractions of a phase's own duration.
pub const MILESTONES: [(f64, &str); 4] = [
    (0.20, "Mobilisation"),
    (0.50, "Midpoint review"),
    (0.80, "Snag list"),
    (1.00, "Sign-off"),
];

/// Default room count for interior projects.
pub const DEFAULT_ROOMS: u32 = 5;

/// Reference area (sq ft) that maps to a neutral size factor.
///
/// Also the area assumed when a configuration leaves it unset.
pub fn reference_area(project_type: ProjectType) -> f64 {
    match project_type {
        ProjectType::Construction => 2000.0,
        ProjectType::Interior => 1200.0,
        ProjectType::Renovation => 1000.0,
    }
}

pub fn quality_multiplier(quality: QualityLevel) -> f64 {
    match quality {
        QualityLevel::Standard => 1.0,
        QualityLevel::Premium => 1.25,
        QualityLevel::Luxury => 1.5,
    }
}

pub fn schedule_multiplier(schedule: WorkingSchedule) -> f64 {
    match schedule {
        WorkingSchedule::Standard => 1.0,
        WorkingSchedule::Extended => 0.90,
        WorkingSchedule::RoundTheClock => 0.80,
    }
}

/// Half-width of the optimistic/pessimistic band around the most-likely duration.
pub fn duration_variance(project_type: ProjectType) -> f64 {
    match project_type {
        ProjectType::Construction => 0.20,
        ProjectType::Interior | ProjectType::Renovation => 0.15,
    }
}
