//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the engine stays free of presentation concerns
//! - output changes are localized
//!
//! Money is always printed through `format_inr` (whole rupees, Indian grouping).

use crate::domain::{EstimationResult, ProjectType, QualityLevel};
use crate::math::format_inr;
use crate::tables;

/// Header block: project, dates, three-point duration, confidence and cost band.
pub fn format_summary(result: &EstimationResult) -> String {
    let mut out = String::new();
    let c = &result.configuration;
    let d = &result.duration;
    let cost = &result.cost;

    out.push_str("=== estimate - Project Timeline & Cost ===\n");
    out.push_str(&format!(
        "Project: {} / {} | {:.0} sq ft | {} quality\n",
        c.project_type().display_name(),
        c.subtype,
        c.area_sqft,
        c.quality_level.as_str()
    ));
    out.push_str(&format!(
        "Start: {} | Completion: {} | Model: {}\n",
        result.start_date, result.completion_date, result.model_version
    ));
    out.push_str(&format!(
        "Duration: {} days (optimistic {} / pessimistic {}) | base {} (historical {}) | confidence {}%\n",
        d.most_likely_duration,
        d.optimistic_duration,
        d.pessimistic_duration,
        d.base_duration,
        d.historical_baseline_days,
        d.confidence
    ));
    out.push_str(&format!(
        "Season: {} | {} rain days | {} extreme-weather days\n",
        result.seasonal.risk.as_str(),
        result.seasonal.monsoon_impact,
        result.seasonal.extreme_weather_days
    ));
    out.push_str(&format!(
        "Cost: {} (range {} - {}) @ {}/sq ft\n",
        format_inr(cost.base_cost),
        format_inr(cost.min_cost),
        format_inr(cost.max_cost),
        format_inr(cost.rate_per_sqft)
    ));

    out
}

/// Applied duration factors, largest impact first.
pub fn format_factors(result: &EstimationResult) -> String {
    let mut out = String::new();
    out.push_str("Duration factors:\n");
    if result.duration.factors.is_empty() {
        out.push_str("  (none; baseline applies unchanged)\n");
        return out;
    }
    for f in &result.duration.factors {
        out.push_str(&format!(
            "  {:<22} {:>+7.1}%  {}\n",
            f.factor.display_name(),
            f.impact_percent,
            f.description
        ));
    }
    out
}

pub fn format_phases(result: &EstimationResult) -> String {
    let mut out = String::new();
    out.push_str("Phases:\n");
    push_row(
        &mut out,
        format!(
            "{:<30} {:>6} {:>6} {:>6} {:<10} {:<10} {:<4}",
            "phase", "start", "end", "days", "from", "to", "flag"
        ),
    );
    push_row(
        &mut out,
        format!(
            "{:-<30} {:-<6} {:-<6} {:-<6} {:-<10} {:-<10} {:-<4}",
            "", "", "", "", "", "", ""
        ),
    );
    for p in &result.phases {
        let mut flags = String::new();
        if p.critical_path {
            flags.push('C');
        }
        if p.weather_sensitive {
            flags.push('W');
        }
        push_row(
            &mut out,
            format!(
                "{:<30} {:>6} {:>6} {:>6} {:<10} {:<10} {:<4}",
                truncate(&p.name, 30),
                p.start_offset_days,
                p.end_offset_days,
                p.duration_days,
                p.start_date,
                p.end_date,
                flags
            ),
        );
    }
    out.push_str("  C = critical path, W = weather-sensitive\n");
    out
}

pub fn format_risks(result: &EstimationResult) -> String {
    let mut out = String::new();
    out.push_str("Risks:\n");
    for r in &result.risks {
        out.push_str(&format!(
            "  [{:>3}% {:<6}] {}: {}\n",
            r.probability_percent,
            r.impact.as_str(),
            r.category.display_name(),
            r.description
        ));
        out.push_str(&format!("               mitigation: {}\n", r.mitigation));
    }
    out
}

/// Category breakdown and monthly payment schedule.
pub fn format_costs(result: &EstimationResult) -> String {
    let cost = &result.cost;
    let mut out = String::new();

    out.push_str("Cost breakdown:\n");
    for c in &cost.categories {
        push_row(
            &mut out,
            format!(
                "  {:<24} {:>5.1}% {:>14}",
                truncate(&c.name, 24),
                c.percent_of_base,
                format_inr(c.amount)
            ),
        );
    }

    out.push_str("\nPayment schedule:\n");
    push_row(
        &mut out,
        format!("  {:>5} {:>14} {:<24} {:<30}", "month", "amount", "milestone", "phase"),
    );
    for m in &cost.monthly_projection {
        push_row(
            &mut out,
            format!(
                "  {:>5} {:>14} {:<24} {:<30}",
                m.month_index,
                format_inr(m.amount),
                truncate(&m.milestone_label, 24),
                truncate(&m.phase, 30)
            ),
        );
    }
    out
}

pub fn format_optimizations(result: &EstimationResult) -> String {
    let mut out = String::new();
    out.push_str("Optimizations:\n");
    for o in &result.optimizations {
        out.push_str(&format!(
            "  - {} (~{} days, {:.0}%; {}; {})\n",
            o.title,
            o.estimated_time_saved_days,
            o.estimated_time_saved_percent,
            o.estimated_cost_impact,
            o.difficulty.as_str()
        ));
        out.push_str(&format!("    {}\n", o.description));
    }
    out
}

/// One line per project, in input order.
pub fn format_comparison(results: &[EstimationResult]) -> String {
    let mut out = String::new();
    push_row(
        &mut out,
        format!(
            "{:>3} {:<26} {:>8} {:>6} {:>6} {:>6} {:>5} {:>14} {:<13}",
            "#", "project", "area", "opt", "likely", "pess", "conf", "base cost", "season"
        ),
    );
    push_row(
        &mut out,
        format!(
            "{:-<3} {:-<26} {:-<8} {:-<6} {:-<6} {:-<6} {:-<5} {:-<14} {:-<13}",
            "", "", "", "", "", "", "", "", ""
        ),
    );
    for (i, r) in results.iter().enumerate() {
        let d = &r.duration;
        push_row(
            &mut out,
            format!(
                "{:>3} {:<26} {:>8.0} {:>6} {:>6} {:>6} {:>4}% {:>14} {:<13}",
                i + 1,
                truncate(
                    &format!("{} ({})", r.configuration.type_key(), r.configuration.quality_level.as_str()),
                    26
                ),
                r.configuration.area_sqft,
                d.optimistic_duration,
                d.most_likely_duration,
                d.pessimistic_duration,
                d.confidence,
                format_inr(r.cost.base_cost),
                r.seasonal.risk.as_str()
            ),
        );
    }
    out
}

/// Knowledge-base listing for `estimate tables`.
pub fn format_tables() -> String {
    let mut out = String::new();
    out.push_str(&format!("Model version: {}\n\n", tables::MODEL_VERSION));

    out.push_str("Baselines and rates (days; INR/sq ft standard / premium / luxury):\n");
    for b in tables::durations::BASELINES {
        let rates: Vec<String> = QualityLevel::ALL
            .iter()
            .map(|&q| {
                tables::costs::rate_per_sqft(b.project_type, b.subtype, q)
                    .map(format_inr)
                    .unwrap_or_else(|_| "-".to_string())
            })
            .collect();
        push_row(
            &mut out,
            format!(
                "  {:<13} {:<12} {:>4}  {}",
                b.project_type.as_str(),
                b.subtype,
                b.days,
                rates.join(" / ")
            ),
        );
    }

    for t in ProjectType::ALL {
        out.push_str(&format!("\n{} phases:\n", t.display_name()));
        for p in tables::phases::templates(t) {
            let overlap = p
                .overlap
                .map(|o| format!(" (overlaps {:.0}%)", o * 100.0))
                .unwrap_or_default();
            out.push_str(&format!("  {:>4.0}% {}{overlap}\n", p.proportion * 100.0, p.name));
        }
    }

    out
}

fn push_row(out: &mut String, row: String) {
    out.push_str(row.trim_end());
    out.push('\n');
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectConfiguration;
    use chrono::NaiveDate;

    fn result() -> EstimationResult {
        let config = ProjectConfiguration::new(ProjectType::Construction);
        crate::engine::estimate(&config, NaiveDate::from_ymd_opt(2025, 1, 6)).unwrap()
    }

    #[test]
    fn summary_shows_grouped_rupees() {
        let r = result();
        let s = format_summary(&r);
        assert!(s.contains("36,00,000"), "{s}");
        assert!(s.contains("32,40,000"));
        assert!(s.contains("41,40,000"));
        assert!(s.contains(&format!("{} days", r.duration.most_likely_duration)));
    }

    #[test]
    fn phases_table_lists_every_phase() {
        let r = result();
        let s = format_phases(&r);
        for p in &r.phases {
            assert!(s.contains(&truncate(&p.name, 30)));
        }
        assert!(s.lines().all(|l| l == l.trim_end()));
    }

    #[test]
    fn comparison_has_one_row_per_project() {
        let r = result();
        let s = format_comparison(&[r.clone(), r]);
        assert_eq!(s.lines().count(), 4);
        assert!(s.contains("construction/residential"));
    }

    #[test]
    fn tables_listing_covers_all_types() {
        let s = format_tables();
        assert!(s.contains("Construction phases:"));
        assert!(s.contains("Renovation phases:"));
        assert!(s.contains("full_home"));
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("Site Preparation & Foundation", 10), "Site Prep.");
        assert_eq!(truncate("short", 10), "short");
    }
}
