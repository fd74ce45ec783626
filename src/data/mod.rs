//! Data structures shared across the statistics helpers.

mod frame;
mod interval;

pub use frame::{DataFrame, Value};
pub use interval::ConfidenceInterval;
