//! Input/output helpers.
//!
//! - configuration JSON reading (`config`)
//! - full result JSON read/write (`result`)
//! - phase and payment CSV exports (`export`)

pub mod config;
pub mod export;
pub mod result;

pub use config::*;
pub use export::*;
pub use result::*;
