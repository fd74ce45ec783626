//! Interval result type shared by the estimation helpers.

use serde::{Deserialize, Serialize};

/// A two-sided interval `[lower, upper]` around a population parameter.
///
/// For valid statistical inputs the bounds satisfy `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Create an interval from its bounds.
    pub fn new(lower: f64, upper: f64) -> Self {
        ConfidenceInterval { lower, upper }
    }

    /// Interval width, `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Interval midpoint.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Check if `value` lies inside the interval, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl std::fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.lower, self.upper)
    }
}
