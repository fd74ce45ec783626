//! Statistics and Data-Quality Helpers for Exploratory Data Analysis
//!
//! This library provides small, stateless building blocks for EDA scripts:
//! outlier bounds by the interquartile-range rule, per-column missing-value
//! and binary-flag reports, and confidence intervals for a population mean,
//! variance, and standard deviation.
//!
//! # Overview
//!
//! The library is organized into independent modules:
//!
//! - **data**: Core data structures (DataFrame, Value, ConfidenceInterval)
//! - **describe**: Per-column descriptive statistics (mean, std, quartiles)
//! - **outlier**: IQR outlier ranges and sign flagging
//! - **profile**: Data-quality reports (missing values, binary flags)
//! - **interval**: Confidence intervals (mean, variance, standard deviation)
//!
//! # Example
//!
//! ```no_run
//! use eda_stats::prelude::*;
//!
//! // Load data
//! let df = DataFrame::from_csv_path("measurements.csv").unwrap();
//!
//! // Data quality at a glance
//! let nulls = profile_nulls(&df).unwrap();
//! println!("{}", nulls);
//!
//! // Outlier screen on one column
//! let stats = describe_column(&df, "temperature").unwrap();
//! let range = stats.outlier_range(DEFAULT_IQR_FACTOR);
//! let n_outliers = df
//!     .numeric_values("temperature")
//!     .unwrap()
//!     .iter()
//!     .filter(|&&v| range.is_outlier(v))
//!     .count();
//!
//! // Interval estimate for the mean
//! let ci = ci_mean_t(stats.mean, stats.std_dev, stats.n, 0.95).unwrap();
//! println!("mean in {} ({} outliers)", ci, n_outliers);
//! ```

pub mod data;
pub mod describe;
pub mod error;
pub mod interval;
pub mod outlier;
pub mod profile;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{ConfidenceInterval, DataFrame, Value};
    pub use crate::describe::{describe, describe_column, SummaryStats};
    pub use crate::error::{EdaError, Result};
    pub use crate::interval::{
        ci_mean, ci_mean_t, ci_mean_z, ci_std, ci_variance, Sigma, DEFAULT_CONFIDENCE_LEVEL,
    };
    pub use crate::outlier::{flag_positive, OutlierRange, DEFAULT_IQR_FACTOR};
    pub use crate::profile::{
        profile_flags, profile_nulls, FlagCount, FlagProfile, NullCount, NullProfile,
    };
}
