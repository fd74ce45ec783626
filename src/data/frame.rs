//! Column-major tabular data with explicit missing values.

use crate::error::{EdaError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cell spellings treated as missing when loading delimited text.
const MISSING_MARKERS: [&str; 6] = ["NA", "na", "NaN", "nan", "null", "NULL"];

/// A single cell in a [`DataFrame`] column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Numeric value.
    Number(f64),
    /// Free-form text value.
    Text(String),
    /// Explicit missing-value marker.
    Missing,
}

impl Value {
    /// Check if this is a missing value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Try to get as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Value::Number(v),
            None => Value::Missing,
        }
    }
}

/// Table of named, equal-length columns.
///
/// Columns are stored column-major so per-column scans (the access pattern of
/// every profiling and summary helper in this crate) touch contiguous memory.
#[derive(Debug, Clone)]
pub struct DataFrame {
    column_names: Vec<String>,
    columns: Vec<Vec<Value>>,
    n_rows: usize,
}

impl DataFrame {
    /// Create an empty data frame.
    pub fn new() -> Self {
        DataFrame {
            column_names: Vec::new(),
            columns: Vec::new(),
            n_rows: 0,
        }
    }

    /// Append a named column.
    ///
    /// The first column fixes the row count; every later column must match it.
    pub fn add_column(&mut self, name: String, values: Vec<Value>) -> Result<()> {
        if self.columns.is_empty() {
            self.n_rows = values.len();
        } else if values.len() != self.n_rows {
            return Err(EdaError::DimensionMismatch {
                expected: self.n_rows,
                actual: values.len(),
            });
        }
        self.column_names.push(name);
        self.columns.push(values);
        Ok(())
    }

    /// Append a numeric column, mapping `None` to [`Value::Missing`].
    pub fn add_numeric_column(&mut self, name: String, values: Vec<Option<f64>>) -> Result<()> {
        self.add_column(name, values.into_iter().map(Value::from).collect())
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check if the frame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names, in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Check whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|n| n == name)
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|n| n == name)
    }

    /// Cells of a column by name.
    pub fn column(&self, name: &str) -> Result<&[Value]> {
        self.column_index(name)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| EdaError::MissingColumn(name.to_string()))
    }

    /// Iterate over `(name, cells)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.column_names
            .iter()
            .map(|n| n.as_str())
            .zip(self.columns.iter().map(|c| c.as_slice()))
    }

    /// Number of missing cells in a column.
    pub fn null_count(&self, name: &str) -> Result<usize> {
        Ok(self.column(name)?.iter().filter(|v| v.is_missing()).count())
    }

    /// Non-missing numeric cells of a column, in row order.
    ///
    /// Missing cells are skipped; a text cell makes the whole column
    /// non-numeric and is an error.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        let mut values = Vec::new();
        for cell in self.column(name)? {
            match cell {
                Value::Number(v) => values.push(*v),
                Value::Missing => {}
                Value::Text(_) => {
                    return Err(EdaError::NonNumericColumn(name.to_string()));
                }
            }
        }
        Ok(values)
    }

    /// New frame containing the given columns, in the given order.
    pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
        let mut selected = DataFrame::new();
        for &name in names {
            let idx = self
                .column_index(name)
                .ok_or_else(|| EdaError::MissingColumn(name.to_string()))?;
            selected.add_column(self.column_names[idx].clone(), self.columns[idx].clone())?;
        }
        Ok(selected)
    }

    /// Load a data frame from a comma-separated file with a header row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), b',')
    }

    /// Load a data frame from a tab-separated file with a header row.
    pub fn from_tsv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), b'\t')
    }

    /// Parse delimited text with a header row into a data frame.
    ///
    /// Column types are inferred in two passes: a column where every present,
    /// non-missing cell parses as a number becomes numeric, otherwise text.
    /// Empty cells and the spellings `NA`, `na`, `NaN`, `nan`, `null`, `NULL`
    /// become [`Value::Missing`], as do cells absent from short records.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column_names: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        if column_names.is_empty() {
            return Err(EdaError::EmptyData("no columns in header".to_string()));
        }

        let mut records = Vec::new();
        for record in csv_reader.records() {
            records.push(record?);
        }

        // First pass: a column is numeric only if no present cell refutes it.
        let mut numeric = vec![true; column_names.len()];
        for record in &records {
            for (idx, is_numeric) in numeric.iter_mut().enumerate() {
                if !*is_numeric {
                    continue;
                }
                if let Some(cell) = record.get(idx) {
                    let cell = cell.trim();
                    if cell.is_empty() || MISSING_MARKERS.contains(&cell) {
                        continue;
                    }
                    if cell.parse::<f64>().is_err() {
                        *is_numeric = false;
                    }
                }
            }
        }

        // Second pass: materialize cells under the inferred types.
        let mut frame = DataFrame::new();
        for (idx, name) in column_names.iter().enumerate() {
            let mut cells = Vec::with_capacity(records.len());
            for record in &records {
                let cell = record.get(idx).map(str::trim).unwrap_or("");
                let value = if cell.is_empty() || MISSING_MARKERS.contains(&cell) {
                    Value::Missing
                } else if numeric[idx] {
                    cell.parse::<f64>().map(Value::Number).unwrap_or(Value::Missing)
                } else {
                    Value::Text(cell.to_string())
                };
                cells.push(value);
            }
            frame.add_column(name.clone(), cells)?;
        }

        tracing::debug!(
            "loaded table with {} rows and {} columns",
            frame.n_rows(),
            frame.n_columns()
        );
        Ok(frame)
    }
}

impl Default for DataFrame {
    fn default() -> Self {
        Self::new()
    }
}
