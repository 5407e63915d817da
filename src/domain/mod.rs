//! Domain types used throughout the estimator.
//!
//! This module defines:
//!
//! - the input configuration (`ProjectConfiguration`) and its normalized form
//! - the estimation outputs (`DurationEstimate`, `Phase`, `Risk`, `CostBreakdown`, ...)

pub mod config;
pub mod types;

pub use config::*;
pub use types::*;
