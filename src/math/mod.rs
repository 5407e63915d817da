//! Numeric helpers: day and currency rounding.

pub mod rounding;

pub use rounding::*;
