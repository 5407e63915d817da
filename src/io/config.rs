//! Read project configurations from JSON.
//!
//! A file holds either one configuration object or an array of them:
//!
//! ```json
//! { "type": "construction", "subtype": "villa", "builtUpArea": 3200 }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::domain::ProjectConfiguration;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Many(Vec<ProjectConfiguration>),
    One(Box<ProjectConfiguration>),
}

/// Read every configuration in `path`, in file order.
pub fn read_configurations(path: &Path) -> Result<Vec<ProjectConfiguration>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open config '{}': {e}", path.display())))?;
    let parsed: ConfigFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::new(2, format!("Invalid config JSON '{}': {e}", path.display()))
    })?;

    let configs = match parsed {
        ConfigFile::Many(list) => list,
        ConfigFile::One(one) => vec![*one],
    };
    if configs.is_empty() {
        return Err(AppError::new(
            2,
            format!("Config '{}' contains no projects", path.display()),
        ));
    }
    Ok(configs)
}

/// Read exactly one configuration.
pub fn read_configuration(path: &Path) -> Result<ProjectConfiguration, AppError> {
    let mut configs = read_configurations(path)?;
    if configs.len() != 1 {
        return Err(AppError::new(
            2,
            format!(
                "Config '{}' holds {} projects; use `estimate compare` for batches",
                path.display(),
                configs.len()
            ),
        ));
    }
    Ok(configs.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectType;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_single_object() {
        let f = write_temp(r#"{"type":"renovation","subtype":"bathroom","carpetArea":80}"#);
        let config = read_configuration(f.path()).unwrap();
        assert_eq!(config.project_type(), ProjectType::Renovation);
        assert_eq!(config.area(), Some(80.0));
    }

    #[test]
    fn reads_array_in_order() {
        let f = write_temp(r#"[{"type":"interior"},{"type":"construction","floors":4}]"#);
        let configs = read_configurations(f.path()).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].project_type(), ProjectType::Interior);
        assert_eq!(configs[1].project_type(), ProjectType::Construction);
    }

    #[test]
    fn batch_is_rejected_for_single_run() {
        let f = write_temp(r#"[{"type":"interior"},{"type":"interior"}]"#);
        let err = read_configuration(f.path()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_json_is_input_error() {
        let f = write_temp(r#"{"type":"spaceship"}"#);
        assert_eq!(read_configurations(f.path()).unwrap_err().exit_code(), 2);

        let empty = write_temp("[]");
        assert_eq!(read_configurations(empty.path()).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_configurations(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
