//! Binary-flag tallying for data frames.

use crate::data::{DataFrame, Value};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Tally of literal 1 and 0 cells in a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagCount {
    /// Column name.
    pub column: String,
    /// Number of cells equal to 1.
    pub n_ones: usize,
    /// Number of cells equal to 0.
    pub n_zeros: usize,
}

/// Per-column binary-flag report for a data frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagProfile {
    /// One entry per column, in column order.
    pub counts: Vec<FlagCount>,
}

impl FlagProfile {
    /// Number of profiled columns.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entry for a specific column.
    pub fn get(&self, column: &str) -> Option<&FlagCount> {
        self.counts.iter().find(|c| c.column == column)
    }

    /// Render the report as a three-column frame.
    ///
    /// `column_names` supplies the headers for the name, ones, and zeros
    /// columns, in that order.
    pub fn to_frame(&self, column_names: [&str; 3]) -> Result<DataFrame> {
        let mut frame = DataFrame::new();
        frame.add_column(
            column_names[0].to_string(),
            self.counts
                .iter()
                .map(|c| Value::Text(c.column.clone()))
                .collect(),
        )?;
        frame.add_column(
            column_names[1].to_string(),
            self.counts
                .iter()
                .map(|c| Value::Number(c.n_ones as f64))
                .collect(),
        )?;
        frame.add_column(
            column_names[2].to_string(),
            self.counts
                .iter()
                .map(|c| Value::Number(c.n_zeros as f64))
                .collect(),
        )?;
        Ok(frame)
    }
}

impl std::fmt::Display for FlagProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Flag Profile:")?;
        for count in &self.counts {
            writeln!(
                f,
                "  {:<20} ones: {:>6}  zeros: {:>6}",
                count.column, count.n_ones, count.n_zeros
            )?;
        }
        Ok(())
    }
}

/// Tally cells equal to the literal numbers 1 and 0 in every column.
///
/// Any other cell (other numbers, text, missing) is ignored; a column
/// containing neither value reports 0/0. Entries come back in column order.
pub fn profile_flags(df: &DataFrame) -> FlagProfile {
    let counts = df
        .iter()
        .map(|(name, cells)| {
            let mut n_ones = 0;
            let mut n_zeros = 0;
            for cell in cells {
                match cell.as_number() {
                    Some(v) if v == 1.0 => n_ones += 1,
                    Some(v) if v == 0.0 => n_zeros += 1,
                    _ => {}
                }
            }
            tracing::debug!("column '{}': {} ones, {} zeros", name, n_ones, n_zeros);
            FlagCount {
                column: name.to_string(),
                n_ones,
                n_zeros,
            }
        })
        .collect();

    FlagProfile { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_frame() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_numeric_column(
            "flagged".to_string(),
            vec![Some(1.0), Some(1.0), Some(0.0), Some(0.0), Some(0.0)],
        )
        .unwrap();
        df.add_column(
            "mixed".to_string(),
            vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Text("0".to_string()),
                Value::Missing,
                Value::Number(0.0),
            ],
        )
        .unwrap();
        df
    }

    #[test]
    fn test_profile_flags_counts() {
        let profile = profile_flags(&create_test_frame());

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.counts[0].column, "flagged");
        assert_eq!(profile.counts[0].n_ones, 2);
        assert_eq!(profile.counts[0].n_zeros, 3);
    }

    #[test]
    fn test_profile_flags_ignores_non_binary_cells() {
        let profile = profile_flags(&create_test_frame());

        // 2.0, the text "0", and the missing cell are all skipped.
        let mixed = profile.get("mixed").unwrap();
        assert_eq!(mixed.n_ones, 1);
        assert_eq!(mixed.n_zeros, 1);
    }

    #[test]
    fn test_profile_flags_column_without_flags() {
        let mut df = DataFrame::new();
        df.add_numeric_column("reading".to_string(), vec![Some(3.5), Some(7.2)])
            .unwrap();

        let profile = profile_flags(&df);
        assert_eq!(profile.counts[0].n_ones, 0);
        assert_eq!(profile.counts[0].n_zeros, 0);
    }

    #[test]
    fn test_to_frame_uses_caller_names() {
        let profile = profile_flags(&create_test_frame());
        let frame = profile.to_frame(["column", "outliers", "regular"]).unwrap();

        assert_eq!(frame.column_names(), &["column", "outliers", "regular"]);
        assert_eq!(frame.n_rows(), 2);
        assert_eq!(
            frame.column("column").unwrap()[0],
            Value::Text("flagged".to_string())
        );
        assert_eq!(frame.column("outliers").unwrap()[0], Value::Number(2.0));
        assert_eq!(frame.column("regular").unwrap()[0], Value::Number(3.0));
    }

    #[test]
    fn test_get_by_column_name() {
        let profile = profile_flags(&create_test_frame());
        assert!(profile.get("flagged").is_some());
        assert!(profile.get("absent").is_none());
        assert!(!profile.is_empty());
    }
}
