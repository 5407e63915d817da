//! Seasonal adjuster.
//!
//! Walks the calendar months touched by a tentative project span and sums
//! monsoon rain days and extreme-weather days. The result feeds both the
//! duration chain (as a proportional penalty) and the risk register.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, Days, Months, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{SeasonalAnalysis, SeasonalRisk};
use crate::tables::calendar::{expected_extreme_weather_days, is_monsoon_month, rain_days};
use crate::tables::constants::{SEASONAL_LOW_RISK_MAX, SEASONAL_MODERATE_RISK_MAX};

/// Source of extreme-weather day counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeatherModel {
    /// Expected days from the climatological table.
    #[default]
    Climatological,
    /// Normal draw around the climatological mean, reproducible for a given seed.
    Sampled { seed: u64 },
}

/// Scan `tentative_weeks` weeks from `start`.
pub fn analyze(start: NaiveDate, tentative_weeks: u32, weather: WeatherModel) -> SeasonalAnalysis {
    let span_days = u64::from(tentative_weeks) * 7;
    let span_end = start.checked_add_days(Days::new(span_days)).unwrap_or(NaiveDate::MAX);

    let months = months_touched(start, span_end);
    let mut sampler = WeatherSampler::new(weather, start);

    let mut monsoon_impact = 0.0;
    let mut extreme_weather_days = 0.0;
    let mut monsoon_months = Vec::new();

    for month in &months {
        let m0 = month.month0();
        if is_monsoon_month(m0) {
            monsoon_impact += rain_days(m0);
            monsoon_months.push(*month);
        }
        extreme_weather_days += sampler.days_for(m0);
    }

    SeasonalAnalysis {
        span_start: start,
        span_end,
        span_weeks: tentative_weeks,
        monsoon_impact: monsoon_impact as u32,
        extreme_weather_days: extreme_weather_days as u32,
        risk: classify(monsoon_impact),
        monsoon_months,
    }
}

pub fn classify(monsoon_impact: f64) -> SeasonalRisk {
    if monsoon_impact <= SEASONAL_LOW_RISK_MAX {
        SeasonalRisk::LowRisk
    } else if monsoon_impact <= SEASONAL_MODERATE_RISK_MAX {
        SeasonalRisk::ModerateRisk
    } else {
        SeasonalRisk::HighRisk
    }
}

/// First day of every month from `start`'s month through `end`'s month, inclusive.
fn months_touched(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut cursor) = start.with_day(1) else {
        return out;
    };
    let last = (end.year(), end.month());

    while (cursor.year(), cursor.month()) <= last {
        out.push(cursor);
        let Some(next) = cursor.checked_add_months(Months::new(1)) else {
            break;
        };
        cursor = next;
    }
    out
}

struct WeatherSampler {
    rng: Option<StdRng>,
}

impl WeatherSampler {
    fn new(model: WeatherModel, start: NaiveDate) -> Self {
        let rng = match model {
            WeatherModel::Climatological => None,
            WeatherModel::Sampled { seed } => Some(StdRng::seed_from_u64(mix_seed(seed, start))),
        };
        Self { rng }
    }

    fn days_for(&mut self, month0: u32) -> f64 {
        let mean = expected_extreme_weather_days(month0);
        let Some(rng) = self.rng.as_mut() else {
            return mean;
        };
        if mean <= 0.0 {
            return 0.0;
        }
        match Normal::new(mean, mean.sqrt()) {
            Ok(normal) => normal.sample(rng).max(0.0).round(),
            Err(_) => mean,
        }
    }
}

/// Combine the caller's seed with the start date so two projects sharing a
/// seed but starting in different months do not draw identical sequences.
fn mix_seed(seed: u64, start: NaiveDate) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    start.num_days_from_ce().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn winter_span_has_no_monsoon_exposure() {
        // Nov 1 + 12 weeks = Jan 24: November, December, January.
        let s = analyze(date(2025, 11, 1), 12, WeatherModel::Climatological);
        assert_eq!(s.monsoon_impact, 0);
        assert!(s.monsoon_months.is_empty());
        assert_eq!(s.risk, SeasonalRisk::LowRisk);
        assert_eq!(s.extreme_weather_days, 0);
    }

    #[test]
    fn full_monsoon_is_high_risk() {
        // May 15 + 30 weeks = Dec 11: May through December.
        let s = analyze(date(2025, 5, 15), 30, WeatherModel::Climatological);
        assert_eq!(s.monsoon_impact, 14 + 21 + 19 + 13 + 6);
        assert_eq!(s.monsoon_months.len(), 5);
        assert_eq!(s.risk, SeasonalRisk::HighRisk);
        // May..Dec extreme days: 2+2+3+3+2+1+0+0
        assert_eq!(s.extreme_weather_days, 13);
    }

    #[test]
    fn classification_thresholds_are_inclusive() {
        assert_eq!(classify(15.0), SeasonalRisk::LowRisk);
        assert_eq!(classify(15.5), SeasonalRisk::ModerateRisk);
        assert_eq!(classify(30.0), SeasonalRisk::ModerateRisk);
        assert_eq!(classify(31.0), SeasonalRisk::HighRisk);
    }

    #[test]
    fn months_touched_crosses_year_boundary() {
        let months = months_touched(date(2025, 12, 20), date(2026, 2, 3));
        assert_eq!(months, vec![date(2025, 12, 1), date(2026, 1, 1), date(2026, 2, 1)]);
    }

    #[test]
    fn sampled_weather_is_reproducible() {
        let model = WeatherModel::Sampled { seed: 7 };
        let a = analyze(date(2025, 4, 1), 40, model);
        let b = analyze(date(2025, 4, 1), 40, model);
        assert_eq!(a, b);
        assert_eq!(a.monsoon_impact, 73);
    }
}
