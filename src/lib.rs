//! `project-estimator` library crate.
//!
//! Project timeline and cost estimation for construction, interior and
//! renovation work. The binary (`estimate`) is a thin wrapper around this
//! library so that:
//!
//! - the engine is testable without spawning processes
//! - the engine can be embedded behind other front-ends
//!
//! Most callers only need [`engine::estimate`]:
//!
//! ```
//! use chrono::NaiveDate;
//! use project_estimator::domain::{ProjectConfiguration, ProjectType};
//!
//! let config = ProjectConfiguration::new(ProjectType::Construction).with_area(2000.0);
//! let result = project_estimator::engine::estimate(&config, NaiveDate::from_ymd_opt(2025, 1, 6)).unwrap();
//! assert_eq!(result.cost.base_cost, 3_600_000.0);
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod tables;
