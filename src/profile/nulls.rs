//! Missing-value profiling for data frames.

use crate::data::DataFrame;
use crate::error::{EdaError, Result};
use serde::{Deserialize, Serialize};

/// Missing-value tally for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NullCount {
    /// Column name.
    pub column: String,
    /// Number of missing cells.
    pub count_nulls: usize,
    /// Percentage of missing cells, rounded to one decimal.
    pub pct_nulls: f64,
}

/// Per-column missing-value report for a data frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NullProfile {
    /// One entry per column, in column order.
    pub counts: Vec<NullCount>,
    /// Row count the percentages are relative to.
    pub n_rows: usize,
}

impl NullProfile {
    /// Number of profiled columns.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entry for a specific column.
    pub fn get(&self, column: &str) -> Option<&NullCount> {
        self.counts.iter().find(|c| c.column == column)
    }

    /// Total missing cells across all columns.
    pub fn total_nulls(&self) -> usize {
        self.counts.iter().map(|c| c.count_nulls).sum()
    }

    /// Names of columns with at least one missing cell.
    pub fn columns_with_nulls(&self) -> Vec<&str> {
        self.counts
            .iter()
            .filter(|c| c.count_nulls > 0)
            .map(|c| c.column.as_str())
            .collect()
    }
}

impl std::fmt::Display for NullProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Null Profile ({} rows):", self.n_rows)?;
        for count in &self.counts {
            writeln!(
                f,
                "  {:<20} {:>8} {:>6.1}%",
                count.column, count.count_nulls, count.pct_nulls
            )?;
        }
        Ok(())
    }
}

/// Count missing cells per column, with percentages of the row count.
///
/// Entries come back in column order; percentages are rounded to one
/// decimal place.
///
/// # Errors
/// Returns an error for a zero-row frame, where the percentage denominator
/// would be zero.
pub fn profile_nulls(df: &DataFrame) -> Result<NullProfile> {
    let n_rows = df.n_rows();
    if n_rows == 0 {
        return Err(EdaError::EmptyData(
            "cannot profile nulls of a zero-row frame".to_string(),
        ));
    }

    let counts = df
        .iter()
        .map(|(name, cells)| {
            let count = cells.iter().filter(|v| v.is_missing()).count();
            let pct = (count as f64 / n_rows as f64 * 1000.0).round() / 10.0;
            NullCount {
                column: name.to_string(),
                count_nulls: count,
                pct_nulls: pct,
            }
        })
        .collect();

    Ok(NullProfile { counts, n_rows })
}
