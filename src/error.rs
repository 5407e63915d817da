use crate::domain::ProjectType;

/// Error surfaced by the `estimate` binary: a message plus the process exit code.
///
/// Exit codes:
/// - `2`: invalid input (unreadable config file, malformed JSON, unmatched table key)
/// - `3`: failed to write an export
/// - `4`: internal inconsistency in the knowledge base
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ConfigurationError> for AppError {
    fn from(err: ConfigurationError) -> Self {
        AppError::new(2, format!("invalid configuration: {err}"))
    }
}

impl From<Vec<TableError>> for AppError {
    fn from(errors: Vec<TableError>) -> Self {
        let lines: Vec<String> = errors.iter().map(|e| format!("- {e}")).collect();
        AppError::new(4, format!("knowledge base is inconsistent:\n{}", lines.join("\n")))
    }
}

/// Lookup table the engine failed to match a configuration against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    Baseline,
    Rate,
}

impl std::fmt::Display for LookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupTable::Baseline => f.write_str("duration baseline"),
            LookupTable::Rate => f.write_str("rate"),
        }
    }
}

/// A normalized configuration that has no entry in one of the lookup tables.
///
/// `field` is the camelCase name of the configuration field a caller should
/// point the user at; `key` is the full lookup key that was missed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field '{field}' has no {table} table entry for '{key}'")]
pub struct ConfigurationError {
    pub field: &'static str,
    pub key: String,
    pub table: LookupTable,
}

impl ConfigurationError {
    pub fn new(field: &'static str, key: impl Into<String>, table: LookupTable) -> Self {
        Self {
            field,
            key: key.into(),
            table,
        }
    }
}

/// Problems found by `tables::validate`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("missing rate for {key}")]
    MissingRate { key: String },

    #[error("rate {key} has no matching duration baseline")]
    OrphanRate { key: String },

    #[error("{project_type} phase proportions sum to {sum}, expected 1.0")]
    PhaseProportions { project_type: ProjectType, sum: f64 },

    #[error("{project_type} phase '{phase}' depends on '{dependency}', which does not precede it")]
    DanglingDependency {
        project_type: ProjectType,
        phase: &'static str,
        dependency: &'static str,
    },

    #[error("{project_type} phase '{phase}' overlaps but is the first phase")]
    LeadingOverlap { project_type: ProjectType, phase: &'static str },

    #[error("{project_type} cost categories sum to {sum}%, expected 100%")]
    CategoryPercentages { project_type: ProjectType, sum: f64 },

    #[error("payment schedule sums to {sum}%, expected 100%")]
    PaymentSchedule { sum: f64 },

    #[error("{project_type} has no payment milestone labels")]
    MissingMilestoneLabels { project_type: ProjectType },
}
