//! Read/write result JSON files.
//!
//! Result JSON is the full `EstimationResult` in camelCase, including the
//! normalized configuration and model version it was computed with.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::domain::EstimationResult;
use crate::error::AppError;

/// Write one result as pretty-printed JSON.
pub fn write_result_json(path: &Path, result: &EstimationResult) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(3, format!("Failed to create result JSON '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, result)
        .map_err(|e| AppError::new(3, format!("Failed to write result JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(3, format!("Failed to write result JSON: {e}")))?;

    Ok(())
}

/// Read a result JSON file.
pub fn read_result_json(path: &Path) -> Result<EstimationResult, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open result JSON '{}': {e}", path.display())))?;
    let result: EstimationResult = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid result JSON: {e}")))?;
    Ok(result)
}
