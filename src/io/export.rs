//! Export phases and the payment schedule to CSV.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts. Amounts are whole rupees.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::EstimationResult;
use crate::error::AppError;
use crate::math::round_currency;

/// Write one row per phase.
pub fn write_phases_csv(path: &Path, result: &EstimationResult) -> Result<(), AppError> {
    let mut file = create(path, "phases")?;

    writeln!(
        file,
        "phase,start_offset_days,end_offset_days,duration_days,start_date,end_date,critical_path,weather_sensitive,dependencies"
    )
    .map_err(|e| AppError::new(3, format!("Failed to write phases CSV header: {e}")))?;

    for p in &result.phases {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{}",
            quote(&p.name),
            p.start_offset_days,
            p.end_offset_days,
            p.duration_days,
            p.start_date,
            p.end_date,
            p.critical_path,
            p.weather_sensitive,
            quote(&p.dependencies.join(";")),
        )
        .map_err(|e| AppError::new(3, format!("Failed to write phases CSV row: {e}")))?;
    }

    file.flush()
        .map_err(|e| AppError::new(3, format!("Failed to write phases CSV: {e}")))
}

/// Write one row per billing month.
pub fn write_payments_csv(path: &Path, result: &EstimationResult) -> Result<(), AppError> {
    let mut file = create(path, "payment schedule")?;

    writeln!(file, "month,amount_inr,milestone,phase")
        .map_err(|e| AppError::new(3, format!("Failed to write payment schedule CSV header: {e}")))?;

    for m in &result.cost.monthly_projection {
        writeln!(
            file,
            "{},{:.0},{},{}",
            m.month_index,
            round_currency(m.amount),
            quote(&m.milestone_label),
            quote(&m.phase),
        )
        .map_err(|e| AppError::new(3, format!("Failed to write payment schedule CSV row: {e}")))?;
    }

    file.flush()
        .map_err(|e| AppError::new(3, format!("Failed to write payment schedule CSV: {e}")))
}

fn create(path: &Path, what: &str) -> Result<BufWriter<File>, AppError> {
    File::create(path).map(BufWriter::new).map_err(|e| {
        AppError::new(3, format!("Failed to create {what} CSV '{}': {e}", path.display()))
    })
}

/// Quote a field when it contains a delimiter, quote or newline.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
