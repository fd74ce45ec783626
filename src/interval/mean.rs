//! Confidence intervals for a population mean.

use crate::data::ConfidenceInterval;
use crate::error::{EdaError, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Conventional confidence level for interval estimates.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Which standard deviation the caller supplies for a mean interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sigma {
    /// The population standard deviation is known; the critical value comes
    /// from the standard normal distribution.
    Population,
    /// The standard deviation is estimated from the sample; the critical
    /// value comes from the Student-t distribution with `n - 1` degrees of
    /// freedom.
    Sample,
}

/// Two-sided confidence interval for a population mean.
///
/// The margin of error is `crit * std_dev / sqrt(n)`, with the critical
/// value taken at probability `(1 + level) / 2` from the distribution
/// selected by `sigma`.
///
/// # Arguments
/// * `mean` - Sample mean
/// * `std_dev` - Population or sample standard deviation, per `sigma`
/// * `n` - Sample size
/// * `level` - Confidence level, strictly between 0 and 1
/// * `sigma` - Which standard deviation `std_dev` is
///
/// # Errors
/// Returns an error when `n <= 1` or `level` is outside (0, 1).
pub fn ci_mean(
    mean: f64,
    std_dev: f64,
    n: usize,
    level: f64,
    sigma: Sigma,
) -> Result<ConfidenceInterval> {
    validate(n, level)?;

    let p = (1.0 + level) / 2.0;
    let crit = match sigma {
        Sigma::Population => Normal::new(0.0, 1.0)?.inverse_cdf(p),
        Sigma::Sample => StudentsT::new(0.0, 1.0, (n - 1) as f64)?.inverse_cdf(p),
    };

    let margin = crit * std_dev / (n as f64).sqrt();
    Ok(ConfidenceInterval::new(mean - margin, mean + margin))
}

/// Mean interval when the population standard deviation is known (z interval).
pub fn ci_mean_z(
    mean: f64,
    population_std: f64,
    n: usize,
    level: f64,
) -> Result<ConfidenceInterval> {
    ci_mean(mean, population_std, n, level, Sigma::Population)
}

/// Mean interval when the standard deviation is estimated from the sample
/// (t interval).
pub fn ci_mean_t(mean: f64, sample_std: f64, n: usize, level: f64) -> Result<ConfidenceInterval> {
    ci_mean(mean, sample_std, n, level, Sigma::Sample)
}

/// Reject sample sizes and levels the quantile evaluators cannot accept.
fn validate(n: usize, level: f64) -> Result<()> {
    if n <= 1 {
        return Err(EdaError::InvalidParameter(format!(
            "need at least 2 observations, got {}",
            n
        )));
    }
    if !(0.0 < level && level < 1.0) {
        return Err(EdaError::InvalidParameter(format!(
            "confidence level must be in (0, 1), got {}",
            level
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_z_interval_reference_values() {
        // Known-sigma interval for mean 10, sigma 2, n 30 at 95%.
        let ci = ci_mean_z(10.0, 2.0, 30, 0.95).unwrap();
        assert_relative_eq!(ci.lower, 9.284322342513137, epsilon = 1e-6);
        assert_relative_eq!(ci.upper, 10.715677657486863, epsilon = 1e-6);
    }

    #[test]
    fn test_z_interval_margins_by_level() {
        // Margins from the two-sided z table: 1.6449, 1.9600, 2.5758
        // scaled by 2 / sqrt(30).
        let expected = [
            (0.90, 0.6006156235170056),
            (0.95, 0.7156776574868630),
            (0.99, 0.9405598758910357),
        ];
        for (level, margin) in expected {
            let ci = ci_mean_z(10.0, 2.0, 30, level).unwrap();
            assert_relative_eq!(ci.upper - 10.0, margin, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_t_interval_reference_values() {
        // t(29) at 0.975 is 2.0452; t(9) is 2.2622.
        let ci = ci_mean_t(10.0, 2.0, 30, 0.95).unwrap();
        assert_relative_eq!(ci.lower, 9.253187726483802, epsilon = 1e-3);
        assert_relative_eq!(ci.upper, 10.746812273516198, epsilon = 1e-3);

        let ci_small = ci_mean_t(10.0, 2.0, 10, 0.95).unwrap();
        assert_relative_eq!(ci_small.lower, 8.569286188058673, epsilon = 1e-3);
        assert_relative_eq!(ci_small.upper, 11.430713811941327, epsilon = 1e-3);
    }

    #[test]
    fn test_named_entry_points_match_parameterized_form() {
        let z = ci_mean(10.0, 2.0, 30, 0.95, Sigma::Population).unwrap();
        let z_named = ci_mean_z(10.0, 2.0, 30, 0.95).unwrap();
        assert_relative_eq!(z.lower, z_named.lower, epsilon = 1e-12);
        assert_relative_eq!(z.upper, z_named.upper, epsilon = 1e-12);

        let t = ci_mean(10.0, 2.0, 30, 0.95, Sigma::Sample).unwrap();
        let t_named = ci_mean_t(10.0, 2.0, 30, 0.95).unwrap();
        assert_relative_eq!(t.lower, t_named.lower, epsilon = 1e-12);
        assert_relative_eq!(t.upper, t_named.upper, epsilon = 1e-12);
    }

    #[test]
    fn test_interval_is_centered_on_mean() {
        let ci = ci_mean_t(42.0, 3.0, 25, DEFAULT_CONFIDENCE_LEVEL).unwrap();
        assert_relative_eq!(ci.midpoint(), 42.0, epsilon = 1e-10);
        assert!(ci.contains(42.0));
    }

    #[test]
    fn test_t_interval_wider_than_z() {
        // The t distribution has heavier tails than the normal at any
        // finite degrees of freedom.
        let z = ci_mean_z(10.0, 2.0, 12, 0.95).unwrap();
        let t = ci_mean_t(10.0, 2.0, 12, 0.95).unwrap();
        assert!(t.width() > z.width());
    }

    #[test]
    fn test_higher_level_widens_interval() {
        for sigma in [Sigma::Population, Sigma::Sample] {
            let narrow = ci_mean(10.0, 2.0, 30, 0.90, sigma).unwrap();
            let middle = ci_mean(10.0, 2.0, 30, 0.95, sigma).unwrap();
            let wide = ci_mean(10.0, 2.0, 30, 0.99, sigma).unwrap();
            assert!(narrow.width() < middle.width());
            assert!(middle.width() < wide.width());
        }
    }

    #[test]
    fn test_larger_sample_narrows_interval() {
        let small = ci_mean_z(10.0, 2.0, 10, 0.95).unwrap();
        let large = ci_mean_z(10.0, 2.0, 1000, 0.95).unwrap();
        assert!(large.width() < small.width());
    }

    #[test]
    fn test_rejects_small_samples() {
        assert!(matches!(
            ci_mean_z(10.0, 2.0, 0, 0.95),
            Err(EdaError::InvalidParameter(_))
        ));
        assert!(matches!(
            ci_mean_t(10.0, 2.0, 1, 0.95),
            Err(EdaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_levels() {
        for level in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            assert!(matches!(
                ci_mean_z(10.0, 2.0, 30, level),
                Err(EdaError::InvalidParameter(_))
            ));
        }
    }
}
