//! Phase generator.
//!
//! Lays the type's phase templates end to end across `mostLikelyDuration`.
//! Slot boundaries are cumulative (`ceil(cumulativeProportion × total)`), so
//! per-phase rounding never drifts the final end offset away from the total.
//! Templates with an `overlap` fraction pull their start back into the tail
//! of the preceding phase and leave the critical path.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::domain::{Milestone, NormalizedConfiguration, Phase, Resource};
use crate::math::{ceil_days, round_days};
use crate::tables::constants::{FAST_TRACK_CREW_MULTIPLIER, MILESTONES};
use crate::tables::phases::{PhaseTemplate, templates};

/// Calendar date `days` after `start`; saturates at the end of the calendar.
pub fn offset_date(start: NaiveDate, days: u32) -> NaiveDate {
    start
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Build the ordered phase list for `most_likely` days of work.
pub fn generate(config: &NormalizedConfiguration, most_likely: u32) -> Vec<Phase> {
    let templates = templates(config.project_type());
    let mut phases: Vec<Phase> = Vec::with_capacity(templates.len());

    let mut cumulative = 0.0;
    let mut slot_start = 0u32;

    for (i, template) in templates.iter().enumerate() {
        cumulative += template.proportion;
        let slot_end = if i + 1 == templates.len() {
            most_likely
        } else {
            ceil_days(cumulative * f64::from(most_likely)).clamp(slot_start, most_likely)
        };

        let (start, critical_path) = match (template.overlap, phases.last()) {
            (Some(fraction), Some(previous)) => {
                let pull_back = round_days(fraction * f64::from(previous.duration_days));
                (slot_start.saturating_sub(pull_back).max(previous.start_offset_days), false)
            }
            _ => (slot_start, true),
        };

        debug!(
            phase = template.name,
            start,
            end = slot_end,
            critical_path,
            "allocated phase"
        );

        phases.push(build_phase(config, template, start, slot_end, critical_path));
        slot_start = slot_end;
    }

    phases
}

fn build_phase(
    config: &NormalizedConfiguration,
    template: &PhaseTemplate,
    start: u32,
    end: u32,
    critical_path: bool,
) -> Phase {
    let duration = end - start;

    let resources = template
        .resources
        .iter()
        .map(|&(role, count)| Resource {
            role: role.to_string(),
            count: crew_size(count, config.fast_track),
        })
        .collect();

    let progress_milestones = MILESTONES
        .iter()
        .map(|&(fraction, label)| Milestone {
            offset_days: start + round_days(fraction * f64::from(duration)).min(duration),
            label: label.to_string(),
        })
        .collect();

    Phase {
        name: template.name.to_string(),
        duration_days: duration,
        start_offset_days: start,
        end_offset_days: end,
        start_date: offset_date(config.start_date, start),
        end_date: offset_date(config.start_date, end),
        description: template.description.to_string(),
        dependencies: template.dependencies.iter().map(|d| d.to_string()).collect(),
        critical_path,
        resources,
        weather_sensitive: template.weather_sensitive,
        subtasks: template.subtasks.iter().map(|s| s.to_string()).collect(),
        progress_milestones,
    }
}

fn crew_size(count: u32, fast_track: bool) -> u32 {
    if fast_track {
        ceil_days(f64::from(count) * FAST_TRACK_CREW_MULTIPLIER)
    } else {
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProjectConfiguration, ProjectType};
    use crate::engine::normalize::normalize;

    fn config(project_type: ProjectType) -> NormalizedConfiguration {
        normalize(
            &ProjectConfiguration::new(project_type),
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
        )
    }

    #[test]
    fn construction_slots_follow_cumulative_proportions() {
        let phases = generate(&config(ProjectType::Construction), 180);
        let ends: Vec<u32> = phases.iter().map(|p| p.end_offset_days).collect();
        assert_eq!(ends, vec![27, 81, 108, 153, 171, 180]);

        assert_eq!(phases[0].start_offset_days, 0);
        assert_eq!(phases[1].start_offset_days, 27);
        // MEP pulls back half of Structural Work (54 days).
        assert_eq!(phases[2].start_offset_days, 54);
        assert_eq!(phases[2].duration_days, 54);
        assert!(!phases[2].critical_path);
        // External Development pulls back 30% of Finishing (45 days).
        assert!((139..=140).contains(&phases[4].start_offset_days));
        assert_eq!(phases[4].end_offset_days, 171);
        assert!(!phases[4].critical_path);
        assert!(phases[5].critical_path);

        // Overlaps lengthen their phases, so durations sum past the total.
        let total: u32 = phases.iter().map(|p| p.duration_days).sum();
        assert!(total > 180);
    }

    #[test]
    fn final_phase_ends_at_total_for_odd_totals() {
        for total in [1, 7, 37, 101, 243, 999] {
            for t in ProjectType::ALL {
                let phases = generate(&config(t), total);
                assert_eq!(phases.last().unwrap().end_offset_days, total, "{t} {total}");
                for p in &phases {
                    assert!(p.start_offset_days <= p.end_offset_days);
                    assert_eq!(p.duration_days, p.end_offset_days - p.start_offset_days);
                }
            }
        }
    }

    #[test]
    fn dependencies_precede_their_dependents() {
        for t in ProjectType::ALL {
            let phases = generate(&config(t), 120);
            for (i, p) in phases.iter().enumerate() {
                for d in &p.dependencies {
                    assert!(phases[..i].iter().any(|q| &q.name == d), "{} -> {d}", p.name);
                }
            }
        }
    }

    #[test]
    fn milestones_sit_inside_their_phase() {
        let phases = generate(&config(ProjectType::Interior), 60);
        for p in &phases {
            assert_eq!(p.progress_milestones.len(), 4);
            assert_eq!(p.progress_milestones[3].label, "Sign-off");
            assert_eq!(p.progress_milestones[3].offset_days, p.end_offset_days);
            for m in &p.progress_milestones {
                assert!(m.offset_days >= p.start_offset_days && m.offset_days <= p.end_offset_days);
            }
        }
    }

    #[test]
    fn fast_track_scales_crews() {
        let mut c = config(ProjectType::Construction);
        c.fast_track = true;
        let phases = generate(&c, 180);
        let masons = phases[0].resources.iter().find(|r| r.role == "Mason").unwrap();
        assert_eq!(masons.count, 6);
        let engineer = phases[0].resources.iter().find(|r| r.role == "Site engineer").unwrap();
        assert_eq!(engineer.count, 2);
    }

    #[test]
    fn calendar_dates_follow_offsets() {
        let phases = generate(&config(ProjectType::Renovation), 30);
        let first = &phases[0];
        assert_eq!(first.start_date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(first.end_date, NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
        assert_eq!(phases.last().unwrap().end_date, NaiveDate::from_ymd_opt(2025, 2, 5).unwrap());
    }
}
