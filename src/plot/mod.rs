//! Terminal charts.

pub mod timeline;

pub use timeline::*;
