//! Duration predictor.
//!
//! Starts from the historical baseline for `(type, subtype)` and applies a
//! fixed chain of multiplicative factors:
//!
//! 1. size (`area / reference area`)
//! 2. multi-floor penalty (construction, above two floors)
//! 3. room count (interior)
//! 4. quality tier
//! 5. monsoon exposure (`1 + monsoonImpact / 200`, when `includeRainy`)
//! 6. festival-season start (`1 + 0.30`)
//! 7. fast-track (`0.80`)
//! 8. custom work above 30% (`1 + customWork / 200`)
//! 9. smart-home / sustainability packages (`1.15`)
//! 10. working schedule
//!
//! Steps 1–4 give the pre-seasonal duration, which sizes the calendar window
//! the seasonal scan looks at.

use chrono::Datelike;
use tracing::{debug, warn};

use crate::domain::{
    DurationEstimate, DurationFactor, DurationFactorKind, NormalizedConfiguration, ProjectScope,
    QualityLevel, SeasonalAnalysis, SeasonalRisk,
};
use crate::engine::seasonal::{self, WeatherModel};
use crate::error::ConfigurationError;
use crate::math::ceil_days;
use crate::tables::calendar::is_festival_month;
use crate::tables::constants::*;
use crate::tables::durations::baseline_days;

/// Duration estimate plus the seasonal scan it was computed with.
#[derive(Debug, Clone)]
pub struct DurationPrediction {
    pub estimate: DurationEstimate,
    pub seasonal: SeasonalAnalysis,
}

/// Running product of the factor chain.
#[derive(Debug)]
struct FactorChain {
    value: f64,
    factors: Vec<DurationFactor>,
}

impl FactorChain {
    fn new(baseline: f64) -> Self {
        Self {
            value: baseline,
            factors: Vec::new(),
        }
    }

    /// Multiply in one factor; neutral multipliers are not recorded.
    fn apply(&mut self, factor: DurationFactorKind, multiplier: f64, description: String) {
        if !multiplier.is_finite() || (multiplier - 1.0).abs() < 1e-12 {
            return;
        }
        self.value *= multiplier;
        let impact_percent = (multiplier - 1.0) * 100.0;
        debug!(
            factor = factor.display_name(),
            multiplier,
            running_days = self.value,
            "applied duration factor"
        );
        self.factors.push(DurationFactor {
            factor,
            multiplier,
            impact_percent,
            description,
        });
    }

    /// Clamp the running value to `limit` days; recorded factors are kept as applied.
    fn cap(&mut self, limit: u32, stage: &'static str) {
        let limit = f64::from(limit);
        if self.value > limit {
            warn!(stage, days = self.value, limit, "duration capped");
            self.value = limit;
        }
    }

    /// Factors sorted by absolute impact, largest first. Ties keep chain order.
    fn into_sorted_factors(mut self) -> Vec<DurationFactor> {
        self.factors.sort_by(|a, b| {
            b.impact_percent
                .abs()
                .partial_cmp(&a.impact_percent.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.factors
    }
}

/// Predict the three-point duration for a normalized configuration.
pub fn predict(
    config: &NormalizedConfiguration,
    weather: WeatherModel,
) -> Result<DurationPrediction, ConfigurationError> {
    let project_type = config.project_type();
    let baseline = baseline_days(project_type, &config.subtype)?;
    let mut chain = FactorChain::new(baseline);

    let reference = reference_area(project_type);
    chain.apply(
        DurationFactorKind::Size,
        config.area_sqft / reference,
        format!("{:.0} sq ft against a {reference:.0} sq ft reference", config.area_sqft),
    );

    match config.scope {
        ProjectScope::Construction { floors } if floors > FLOOR_PENALTY_THRESHOLD => {
            let extra = floors - FLOOR_PENALTY_THRESHOLD;
            chain.apply(
                DurationFactorKind::Floors,
                1.0 + f64::from(extra) * FLOOR_PENALTY_PER_FLOOR,
                format!("{floors} floors; {extra} above the two-floor norm"),
            );
        }
        ProjectScope::Interior { rooms } => {
            chain.apply(
                DurationFactorKind::Rooms,
                f64::from(rooms) / REFERENCE_ROOMS,
                format!("{rooms} rooms against a {REFERENCE_ROOMS:.0}-room reference"),
            );
        }
        _ => {}
    }

    chain.apply(
        DurationFactorKind::Quality,
        quality_multiplier(config.quality_level),
        format!("{} finishes", config.quality_level.as_str()),
    );

    chain.cap(MAX_DURATION_DAYS, "base");
    let pre_seasonal = chain.value;
    let tentative_weeks = ceil_days(pre_seasonal).div_ceil(7);
    let seasonal = seasonal::analyze(config.start_date, tentative_weeks, weather);

    if config.include_rainy && seasonal.monsoon_impact > 0 {
        chain.apply(
            DurationFactorKind::Seasonal,
            1.0 + f64::from(seasonal.monsoon_impact) / MONSOON_PENALTY_DIVISOR,
            format!(
                "{} rain days across {} monsoon month(s)",
                seasonal.monsoon_impact,
                seasonal.monsoon_months.len()
            ),
        );
    }

    let start_month0 = config.start_date.month0();
    if is_festival_month(start_month0) {
        chain.apply(
            DurationFactorKind::Festival,
            1.0 + FESTIVAL_AVAILABILITY_DROP,
            format!(
                "Starts in {}; labor availability drops during festivals",
                config.start_date.format("%B")
            ),
        );
    }

    if config.fast_track {
        chain.apply(
            DurationFactorKind::FastTrack,
            FAST_TRACK_MULTIPLIER,
            "Parallel work streams".to_string(),
        );
    }

    if config.custom_work > CUSTOM_WORK_THRESHOLD {
        chain.apply(
            DurationFactorKind::Customization,
            1.0 + config.custom_work / CUSTOM_WORK_DIVISOR,
            format!("{:.0}% bespoke work", config.custom_work),
        );
    }

    if config.smart_home || config.sustainability {
        let label = match (config.smart_home, config.sustainability) {
            (true, true) => "Smart-home and sustainability packages",
            (true, false) => "Smart-home package",
            _ => "Sustainability package",
        };
        chain.apply(
            DurationFactorKind::AdvancedFeatures,
            ADVANCED_FEATURE_MULTIPLIER,
            label.to_string(),
        );
    }

    chain.apply(
        DurationFactorKind::WorkingSchedule,
        schedule_multiplier(config.working_schedule),
        format!("{} working hours", config.working_schedule.as_str()),
    );

    chain.cap(MAX_DURATION_DAYS, "most_likely");
    let most_likely = ceil_days(chain.value).max(1);
    let variance = duration_variance(project_type);
    let optimistic = ceil_days(f64::from(most_likely) * (1.0 - variance)).clamp(1, most_likely);
    let pessimistic = ceil_days(f64::from(most_likely) * (1.0 + variance)).max(most_likely);

    let estimate = DurationEstimate {
        historical_baseline_days: ceil_days(baseline),
        base_duration: ceil_days(pre_seasonal).max(1),
        optimistic_duration: optimistic,
        most_likely_duration: most_likely,
        pessimistic_duration: pessimistic,
        confidence: confidence(config, seasonal.risk),
        factors: chain.into_sorted_factors(),
    };

    Ok(DurationPrediction { estimate, seasonal })
}

fn confidence(config: &NormalizedConfiguration, seasonal_risk: SeasonalRisk) -> u8 {
    let mut score = CONFIDENCE_BASE;
    if config.custom_work > CONFIDENCE_HEAVY_CUSTOM_THRESHOLD {
        score -= CONFIDENCE_PENALTY_HEAVY_CUSTOM;
    }
    if config.quality_level == QualityLevel::Luxury {
        score -= CONFIDENCE_PENALTY_LUXURY;
    }
    if seasonal_risk == SeasonalRisk::HighRisk {
        score -= CONFIDENCE_PENALTY_HIGH_SEASONAL;
    }
    if let ProjectScope::Construction { floors } = config.scope {
        if floors > CONFIDENCE_TALL_BUILDING_FLOORS {
            score -= CONFIDENCE_PENALTY_TALL_BUILDING;
        }
    }
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProjectConfiguration, ProjectType, WorkingSchedule};
    use crate::engine::normalize::normalize;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// December start, monsoon excluded: only the factors under test apply, and
    /// spans up to about seven months touch no more than June.
    fn quiet(project_type: ProjectType) -> NormalizedConfiguration {
        let mut n = normalize(&ProjectConfiguration::new(project_type), date(2025, 12, 1));
        n.include_rainy = false;
        n
    }

    fn factor(estimate: &DurationEstimate, kind: DurationFactorKind) -> Option<&DurationFactor> {
        estimate.factors.iter().find(|f| f.factor == kind)
    }

    #[test]
    fn neutral_configuration_matches_baseline() {
        let p = predict(&quiet(ProjectType::Construction), WeatherModel::Climatological).unwrap();
        assert_eq!(p.estimate.historical_baseline_days, 180);
        assert_eq!(p.estimate.base_duration, 180);
        assert_eq!(p.estimate.most_likely_duration, 180);
        assert_eq!(p.estimate.optimistic_duration, 144);
        assert_eq!(p.estimate.pessimistic_duration, 216);
        assert!(p.estimate.factors.is_empty());
        assert_eq!(p.estimate.confidence, 85);
    }

    #[test]
    fn three_floors_add_fifteen_percent() {
        let mut n = quiet(ProjectType::Construction);
        n.scope = ProjectScope::Construction { floors: 3 };
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.estimate.historical_baseline_days, 180);
        assert_eq!(p.estimate.base_duration, 207);
        assert_eq!(p.estimate.most_likely_duration, 207);
        let f = factor(&p.estimate, DurationFactorKind::Floors).unwrap();
        assert!((f.impact_percent - 15.0).abs() < 1e-9);
    }

    #[test]
    fn more_than_three_floors_cost_confidence() {
        // October start keeps both spans clear of June.
        let mut n = quiet(ProjectType::Construction);
        n.start_date = date(2025, 10, 1);

        n.scope = ProjectScope::Construction { floors: 3 };
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.seasonal.risk, SeasonalRisk::LowRisk);
        assert_eq!(p.estimate.confidence, 85);

        n.scope = ProjectScope::Construction { floors: 4 };
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.estimate.base_duration, 234);
        assert_eq!(p.seasonal.risk, SeasonalRisk::LowRisk);
        assert_eq!(p.estimate.confidence, 80);
    }

    #[test]
    fn sustainability_alone_triggers_the_package_factor() {
        let mut n = quiet(ProjectType::Construction);
        n.sustainability = true;
        n.smart_home = false;
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        let f = factor(&p.estimate, DurationFactorKind::AdvancedFeatures).unwrap();
        assert!((f.multiplier - 1.15).abs() < 1e-12);
        assert_eq!(f.description, "Sustainability package");
        assert_eq!(p.estimate.most_likely_duration, 207);
    }

    #[test]
    fn oversized_area_is_capped() {
        let mut n = quiet(ProjectType::Construction);
        n.include_rainy = true;
        n.area_sqft = 2.0e8;
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.estimate.base_duration, MAX_DURATION_DAYS);
        assert_eq!(p.estimate.most_likely_duration, MAX_DURATION_DAYS);
        assert_eq!(p.seasonal.span_weeks, MAX_DURATION_DAYS.div_ceil(7));
        assert!(p.estimate.pessimistic_duration <= MAX_DURATION_DAYS * 2);
    }

    #[test]
    fn luxury_fast_track_compounds() {
        let mut n = quiet(ProjectType::Construction);
        n.quality_level = QualityLevel::Luxury;
        n.fast_track = true;
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.estimate.most_likely_duration, 216);
        // Luxury costs five points; its 270-day span reaches August for ten more.
        assert_eq!(p.estimate.confidence, 70);
        // +50% sorts ahead of -20%.
        assert_eq!(p.estimate.factors[0].factor, DurationFactorKind::Quality);
        assert_eq!(p.estimate.factors[1].factor, DurationFactorKind::FastTrack);
    }

    #[test]
    fn interior_room_count_scales_duration() {
        let mut n = quiet(ProjectType::Interior);
        n.scope = ProjectScope::Interior { rooms: 10 };
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.estimate.most_likely_duration, 120);
        assert_eq!(p.estimate.optimistic_duration, 102);
        assert_eq!(p.estimate.pessimistic_duration, 138);
    }

    #[test]
    fn monsoon_start_adds_penalty_and_lowers_confidence() {
        let mut n = quiet(ProjectType::Construction);
        n.include_rainy = true;
        n.start_date = date(2025, 6, 1);
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        // 180 days from June 1 touches June..November: 73 rain days.
        assert_eq!(p.seasonal.monsoon_impact, 73);
        assert_eq!(p.seasonal.risk, SeasonalRisk::HighRisk);
        let f = factor(&p.estimate, DurationFactorKind::Seasonal).unwrap();
        assert!((f.multiplier - 1.365).abs() < 1e-9);
        assert_eq!(p.estimate.most_likely_duration, 246);
        assert_eq!(p.estimate.confidence, 75);
    }

    #[test]
    fn excluded_monsoon_still_reports_exposure() {
        let mut n = quiet(ProjectType::Construction);
        n.start_date = date(2025, 6, 1);
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.seasonal.monsoon_impact, 73);
        assert!(factor(&p.estimate, DurationFactorKind::Seasonal).is_none());
        assert_eq!(p.estimate.most_likely_duration, 180);
    }

    #[test]
    fn festival_start_adds_thirty_percent() {
        let mut n = quiet(ProjectType::Renovation);
        n.start_date = date(2025, 10, 20);
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.estimate.most_likely_duration, 39);
        assert!(factor(&p.estimate, DurationFactorKind::Festival).is_some());
    }

    #[test]
    fn customization_advanced_features_and_schedule() {
        let mut n = quiet(ProjectType::Construction);
        n.custom_work = 60.0;
        n.smart_home = true;
        n.working_schedule = WorkingSchedule::Extended;
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        // 180 × 1.30 × 1.15 × 0.90 = 242.19
        assert_eq!(p.estimate.most_likely_duration, 243);
        assert_eq!(p.estimate.confidence, 75);
        assert_eq!(p.estimate.factors.len(), 3);
    }

    #[test]
    fn custom_work_at_threshold_is_ignored() {
        let mut n = quiet(ProjectType::Construction);
        n.custom_work = 30.0;
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert!(factor(&p.estimate, DurationFactorKind::Customization).is_none());
    }

    #[test]
    fn unknown_subtype_is_a_configuration_error() {
        let mut n = quiet(ProjectType::Construction);
        n.subtype = "warehouse".to_string();
        let err = predict(&n, WeatherModel::Climatological).unwrap_err();
        assert_eq!(err.field, "subtype");
    }

    #[test]
    fn tiny_projects_never_drop_below_one_day() {
        let mut n = quiet(ProjectType::Renovation);
        n.subtype = "bathroom".to_string();
        n.area_sqft = 1.0;
        let p = predict(&n, WeatherModel::Climatological).unwrap();
        assert_eq!(p.estimate.most_likely_duration, 1);
        assert_eq!(p.estimate.optimistic_duration, 1);
        assert!(p.estimate.pessimistic_duration >= 1);
    }
}
