//! Terminal reports for single estimates, batch comparisons and the knowledge base.

pub mod format;

pub use format::*;
