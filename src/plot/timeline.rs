//! ASCII timeline (Gantt) for a phase plan.
//!
//! Fixed-width grid, deterministic output. Plot elements:
//! - critical-path phase: `#`
//! - phase overlapping its predecessor: `=`
//! - billing-month boundaries on the axis: `|`

use crate::domain::Phase;
use crate::tables::constants::DAYS_PER_BILLING_MONTH;

const LABEL_WIDTH: usize = 26;

/// Render one row per phase across `total_days`, `width` columns wide.
pub fn render_timeline(phases: &[Phase], total_days: u32, width: usize) -> String {
    let width = width.max(10);
    let total = total_days.max(1);

    let mut out = String::new();
    out.push_str(&format!(
        "Timeline: {total} days | # critical, = parallel, | month boundary\n"
    ));

    for p in phases {
        let mut row = vec![' '; width];
        let x0 = map_x(p.start_offset_days, total, width);
        let x1 = map_x(p.end_offset_days, total, width).max(x0 + 1).min(width);
        let ch = if p.critical_path { '#' } else { '=' };
        for cell in row.iter_mut().take(x1).skip(x0) {
            *cell = ch;
        }
        let line = format!(
            "{:<LABEL_WIDTH$} {}",
            label(&p.name),
            row.into_iter().collect::<String>()
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!("{:<LABEL_WIDTH$} {}\n", "", axis(total, width)));
    out
}

/// Column of day `day` on a `width`-column axis spanning `total` days.
fn map_x(day: u32, total: u32, width: usize) -> usize {
    let u = (f64::from(day) / f64::from(total)).clamp(0.0, 1.0);
    (u * width as f64).round() as usize
}

fn axis(total: u32, width: usize) -> String {
    let mut cells = vec!['-'; width];
    let mut day = DAYS_PER_BILLING_MONTH;
    while day < total {
        let x = map_x(day, total, width).min(width - 1);
        cells[x] = '|';
        day = match day.checked_add(DAYS_PER_BILLING_MONTH) {
            Some(next) => next,
            None => break,
        };
    }
    cells.into_iter().collect()
}

fn label(name: &str) -> String {
    if name.chars().count() <= LABEL_WIDTH {
        return name.to_string();
    }
    let mut out: String = name.chars().take(LABEL_WIDTH - 1).collect();
    out.push('.');
    out
}
