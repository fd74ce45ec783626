//! Descriptive summary statistics for numeric data.

use crate::data::DataFrame;
use crate::error::{EdaError, Result};
use crate::outlier::OutlierRange;
use serde::{Deserialize, Serialize};

/// Five-number summary plus moments for one set of observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of valid (non-missing) observations.
    pub n: usize,
    /// Number of missing observations.
    pub n_missing: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n-1 divisor); NaN when n = 1.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Largest observation.
    pub max: f64,
}

impl SummaryStats {
    /// Interquartile range, `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// IQR acceptance range for these quartiles.
    pub fn outlier_range(&self, factor: f64) -> OutlierRange {
        OutlierRange::from_quartiles(self.q1, self.q3, self.iqr(), factor)
    }
}

impl std::fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Summary Statistics:")?;
        writeln!(f, "  N:           {}", self.n)?;
        writeln!(f, "  Missing:     {}", self.n_missing)?;
        writeln!(f, "  Mean:        {:.4}", self.mean)?;
        writeln!(f, "  Std dev:     {:.4}", self.std_dev)?;
        writeln!(f, "  Min:         {:.4}", self.min)?;
        writeln!(f, "  Q1:          {:.4}", self.q1)?;
        writeln!(f, "  Median:      {:.4}", self.median)?;
        writeln!(f, "  Q3:          {:.4}", self.q3)?;
        writeln!(f, "  Max:         {:.4}", self.max)
    }
}

/// Summarize a slice of observations.
///
/// Quartiles use linear interpolation between order statistics. The slice
/// must be non-empty and free of NaN (quantiles need a total order); the
/// `n_missing` field of the result is always 0 here.
///
/// # Errors
/// Returns an error if `values` is empty or contains NaN.
pub fn describe(values: &[f64]) -> Result<SummaryStats> {
    if values.is_empty() {
        return Err(EdaError::EmptyData(
            "no observations to summarize".to_string(),
        ));
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(EdaError::InvalidParameter(
            "observations must not contain NaN".to_string(),
        ));
    }

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std_dev = if n > 1 {
        let ss: f64 = values
            .iter()
            .map(|&v| {
                let d = v - mean;
                d * d
            })
            .sum();
        (ss / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    Ok(SummaryStats {
        n,
        n_missing: 0,
        mean,
        std_dev,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[n - 1],
    })
}

/// Summarize a named numeric column, excluding missing values.
///
/// # Errors
/// Returns an error if the column is absent, non-numeric, or has no valid
/// observations.
pub fn describe_column(df: &DataFrame, column: &str) -> Result<SummaryStats> {
    let values = df.numeric_values(column)?;
    if values.is_empty() {
        return Err(EdaError::EmptyData(format!(
            "column '{}' has no valid observations",
            column
        )));
    }

    let mut stats = describe(&values)?;
    stats.n_missing = df.null_count(column)?;
    Ok(stats)
}

/// Linear-interpolation quantile of pre-sorted values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64)
}
