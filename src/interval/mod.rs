//! Confidence-interval estimation for mean, variance, and standard deviation.

mod dispersion;
mod mean;

pub use dispersion::{ci_std, ci_variance};
pub use mean::{ci_mean, ci_mean_t, ci_mean_z, Sigma, DEFAULT_CONFIDENCE_LEVEL};
