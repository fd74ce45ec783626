//! Interquartile-range outlier bounds and sign flagging.

use serde::{Deserialize, Serialize};

/// Multiplier applied to the IQR when the caller has no preference.
pub const DEFAULT_IQR_FACTOR: f64 = 1.5;

/// Acceptance range derived from quartiles by the IQR rule.
///
/// Values inside `[min, max]` (bounds included) are regular; values strictly
/// outside are outliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierRange {
    /// Lower acceptance bound, `q1 - iqr * factor`.
    pub min: f64,
    /// Upper acceptance bound, `q3 + iqr * factor`.
    pub max: f64,
}

impl OutlierRange {
    /// Build the range from a quartile triple.
    ///
    /// The caller is responsible for `q3 >= q1` and `iqr = q3 - q1`; nothing
    /// is verified here. A negative `factor` narrows the range below the
    /// quartiles without error.
    pub fn from_quartiles(q1: f64, q3: f64, iqr: f64, factor: f64) -> Self {
        OutlierRange {
            min: q1 - iqr * factor,
            max: q3 + iqr * factor,
        }
    }

    /// Check if `value` lies strictly outside the range.
    ///
    /// Values equal to either bound are not outliers.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }

    /// Check if `value` lies inside the range, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        !self.is_outlier(value)
    }

    /// Range width, `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl std::fmt::Display for OutlierRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.min, self.max)
    }
}

/// Map a value's sign to a binary flag: 1 for positive, 0 otherwise.
///
/// Zero and negative values (and NaN) map to 0. Used to binarize indicator
/// columns before tallying them with
/// [`profile_flags`](crate::profile::profile_flags).
pub fn flag_positive(value: f64) -> u8 {
    if value > 0.0 {
        1
    } else {
        0
    }
}
