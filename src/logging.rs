//! Tracing setup for the `estimate` binary.
//!
//! Filter precedence: `--log-level`, then `ESTIMATOR_LOG`, then `warn`.
//! Output goes to stderr so reports and exports on stdout stay clean.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "ESTIMATOR_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Resolve the filter directive without installing anything.
pub fn resolve_filter(cli_level: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        if let Ok(filter) = EnvFilter::try_new(level) {
            return filter;
        }
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(cli_level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(resolve_filter(cli_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_wins() {
        assert_eq!(resolve_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(Some("error"));
        init(Some("error"));
    }
}
