//! Optimization advisor: independent, conditional schedule suggestions.

use chrono::Datelike;

use crate::domain::{Difficulty, DurationEstimate, NormalizedConfiguration, Optimization, ProjectType};
use crate::math::round_days;
use crate::tables::calendar::is_monsoon_month;

pub fn suggest(config: &NormalizedConfiguration, duration: &DurationEstimate) -> Vec<Optimization> {
    let most_likely = duration.most_likely_duration;
    let mut out = Vec::new();

    if !config.fast_track {
        out.push(optimization(
            most_likely,
            "Enable fast-track",
            "Run parallel work streams with larger crews",
            20.0,
            "+8–12% labor cost",
            Difficulty::Medium,
        ));
    }

    if config.project_type() == ProjectType::Construction {
        out.push(optimization(
            most_likely,
            "Use prefabricated components",
            "Precast slabs, staircases and boundary panels cut on-site casting and curing",
            15.0,
            "+3–5% material cost",
            Difficulty::Medium,
        ));
    }

    out.push(optimization(
        most_likely,
        "Bulk material procurement",
        "Order cement, steel and tiles upfront to avoid supply gaps",
        5.0,
        "2–4% material savings",
        Difficulty::Easy,
    ));

    if !config.smart_home {
        out.push(optimization(
            most_likely,
            "Coordinated 3D planning",
            "Resolve clashes between trades in a shared model before site work",
            10.0,
            "Reduces rework cost",
            Difficulty::Easy,
        ));
    }

    if is_monsoon_month(config.start_date.month0()) {
        out.push(optimization(
            most_likely,
            "Defer start by ~2 months",
            "Begin after the monsoon so foundation and structure run in dry weather",
            12.0,
            "No direct cost; avoids weather delays",
            Difficulty::Easy,
        ));
    }

    out
}

fn optimization(
    most_likely: u32,
    title: &str,
    description: &str,
    percent: f64,
    cost_impact: &str,
    difficulty: Difficulty,
) -> Optimization {
    Optimization {
        title: title.to_string(),
        description: description.to_string(),
        estimated_time_saved_percent: percent,
        estimated_time_saved_days: round_days(f64::from(most_likely) * percent / 100.0),
        estimated_cost_impact: cost_impact.to_string(),
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectConfiguration;
    use crate::engine::normalize::normalize;
    use chrono::NaiveDate;

    fn estimate_of(days: u32) -> DurationEstimate {
        DurationEstimate {
            historical_baseline_days: days,
            base_duration: days,
            optimistic_duration: days,
            most_likely_duration: days,
            pessimistic_duration: days,
            confidence: 85,
            factors: Vec::new(),
        }
    }

    fn titles(opts: &[Optimization]) -> Vec<&str> {
        opts.iter().map(|o| o.title.as_str()).collect()
    }

    #[test]
    fn default_construction_gets_four_suggestions() {
        let c = normalize(
            &ProjectConfiguration::new(ProjectType::Construction),
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
        );
        let opts = suggest(&c, &estimate_of(180));
        assert_eq!(
            titles(&opts),
            vec![
                "Enable fast-track",
                "Use prefabricated components",
                "Bulk material procurement",
                "Coordinated 3D planning",
            ]
        );
        assert_eq!(opts[0].estimated_time_saved_days, 36);
        assert_eq!(opts[1].estimated_time_saved_days, 27);
        assert_eq!(opts[2].estimated_time_saved_days, 9);
    }

    #[test]
    fn monsoon_start_suggests_deferral() {
        let mut c = normalize(
            &ProjectConfiguration::new(ProjectType::Interior),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        );
        c.fast_track = true;
        c.smart_home = true;
        let opts = suggest(&c, &estimate_of(60));
        assert_eq!(
            titles(&opts),
            vec!["Bulk material procurement", "Defer start by ~2 months"]
        );
        assert_eq!(opts[1].difficulty, Difficulty::Easy);
    }
}
