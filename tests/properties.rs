//! Property tests over randomly generated configurations.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use project_estimator::domain::{
    CommonOptions, ConstructionConfig, EstimationResult, InteriorConfig, ProjectConfiguration,
    ProjectType, QualityLevel, RenovationConfig, WorkingSchedule,
};
use project_estimator::engine::{EstimateOptions, WeatherModel, estimate, estimate_with};
use project_estimator::tables::durations::subtypes;

#[derive(Debug, Clone)]
struct Shape {
    project_type: ProjectType,
    subtype_idx: usize,
    area: f64,
    floors: i64,
    rooms: i64,
    common: CommonOptions,
}

impl Shape {
    fn build(&self, area: f64) -> ProjectConfiguration {
        let names: Vec<&str> = subtypes(self.project_type).collect();
        let subtype = Some(names[self.subtype_idx % names.len()].to_string());
        let common = self.common.clone();
        match self.project_type {
            ProjectType::Construction => ProjectConfiguration::Construction(ConstructionConfig {
                subtype,
                built_up_area: Some(area),
                floors: Some(self.floors),
                common,
            }),
            ProjectType::Interior => ProjectConfiguration::Interior(InteriorConfig {
                subtype,
                carpet_area: Some(area),
                rooms: Some(self.rooms),
                common,
            }),
            ProjectType::Renovation => ProjectConfiguration::Renovation(RenovationConfig {
                subtype,
                carpet_area: Some(area),
                common,
            }),
        }
    }

    fn config(&self) -> ProjectConfiguration {
        self.build(self.area)
    }
}

fn quality() -> impl Strategy<Value = QualityLevel> {
    prop::sample::select(QualityLevel::ALL.to_vec())
}

fn schedule() -> impl Strategy<Value = WorkingSchedule> {
    prop::sample::select(vec![
        WorkingSchedule::Standard,
        WorkingSchedule::Extended,
        WorkingSchedule::RoundTheClock,
    ])
}

fn start_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..1100).prop_map(|d| {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(d))
            .unwrap()
    })
}

fn common() -> impl Strategy<Value = CommonOptions> {
    (
        quality(),
        any::<[bool; 4]>(),
        0.0f64..100.0,
        start_date(),
        schedule(),
    )
        .prop_map(|(q, flags, custom, start, sched)| CommonOptions {
            quality_level: Some(q),
            sustainability: Some(flags[0]),
            smart_home: Some(flags[1]),
            fast_track: Some(flags[2]),
            include_rainy: Some(flags[3]),
            custom_work: Some(custom),
            start_date: Some(start),
            working_schedule: Some(sched),
        })
}

fn shape() -> impl Strategy<Value = Shape> {
    (
        prop::sample::select(ProjectType::ALL.to_vec()),
        0usize..4,
        50.0f64..5_000.0,
        1i64..7,
        1i64..16,
        common(),
    )
        .prop_map(|(project_type, subtype_idx, area, floors, rooms, common)| Shape {
            project_type,
            subtype_idx,
            area,
            floors,
            rooms,
            common,
        })
}

fn run(config: &ProjectConfiguration) -> EstimationResult {
    estimate(config, NaiveDate::from_ymd_opt(2025, 1, 6)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn durations_and_costs_are_ordered(s in shape()) {
        let r = run(&s.config());
        let d = &r.duration;
        prop_assert!(d.optimistic_duration >= 1);
        prop_assert!(d.optimistic_duration <= d.most_likely_duration);
        prop_assert!(d.most_likely_duration <= d.pessimistic_duration);
        prop_assert!(d.confidence <= 100);
        prop_assert!(r.cost.min_cost <= r.cost.base_cost);
        prop_assert!(r.cost.base_cost <= r.cost.max_cost);
    }

    #[test]
    fn sums_hold(s in shape()) {
        let r = run(&s.config());
        let pct: f64 = r.cost.categories.iter().map(|c| c.percent_of_base).sum();
        prop_assert!((pct - 100.0).abs() <= 0.01);

        let monthly: f64 = r.cost.monthly_projection.iter().map(|m| m.amount).sum();
        prop_assert!((monthly - r.cost.base_cost).abs() < 1e-6);
        prop_assert!(r.cost.monthly_projection.iter().all(|m| m.amount >= 0.0));

        let months = r.duration.most_likely_duration.div_ceil(30).max(1) as usize;
        prop_assert_eq!(r.cost.monthly_projection.len(), months);
    }

    #[test]
    fn phases_cover_the_whole_duration(s in shape()) {
        let r = run(&s.config());
        let last = r.phases.last().unwrap();
        prop_assert_eq!(last.end_offset_days, r.duration.most_likely_duration);
        prop_assert_eq!(last.end_date, r.completion_date);
        prop_assert_eq!(r.phases[0].start_offset_days, 0);
        for (i, p) in r.phases.iter().enumerate() {
            prop_assert!(p.start_offset_days <= p.end_offset_days);
            prop_assert_eq!(p.duration_days, p.end_offset_days - p.start_offset_days);
            for dep in &p.dependencies {
                prop_assert!(r.phases[..i].iter().any(|q| &q.name == dep));
            }
            if p.critical_path && i > 0 {
                prop_assert_eq!(p.start_offset_days, r.phases[i - 1].end_offset_days);
            }
        }
    }

    #[test]
    fn larger_area_never_shortens_or_cheapens(s in shape(), extra in 0.0f64..5_000.0) {
        let small = run(&s.build(s.area));
        let large = run(&s.build(s.area + extra));
        prop_assert!(large.duration.most_likely_duration >= small.duration.most_likely_duration);
        prop_assert!(large.cost.base_cost >= small.cost.base_cost);
    }

    #[test]
    fn estimates_are_deterministic(s in shape(), seed in any::<u64>()) {
        let config = s.config();
        prop_assert_eq!(run(&config), run(&config));

        let options = EstimateOptions { weather: WeatherModel::Sampled { seed } };
        let reference = NaiveDate::from_ymd_opt(2025, 1, 6);
        let a = estimate_with(&config, reference, &options).unwrap();
        let b = estimate_with(&config, reference, &options).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn sampled_weather_only_changes_extreme_days(s in shape(), seed in any::<u64>()) {
        let config = s.config();
        let reference = NaiveDate::from_ymd_opt(2025, 1, 6);
        let base = run(&config);
        let options = EstimateOptions { weather: WeatherModel::Sampled { seed } };
        let sampled = estimate_with(&config, reference, &options).unwrap();
        prop_assert_eq!(base.duration, sampled.duration);
        prop_assert_eq!(base.cost, sampled.cost);
        prop_assert_eq!(base.seasonal.monsoon_impact, sampled.seasonal.monsoon_impact);
    }
}
