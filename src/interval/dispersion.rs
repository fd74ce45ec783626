//! Confidence intervals for a population variance and standard deviation.

use crate::data::ConfidenceInterval;
use crate::error::{EdaError, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Two-sided confidence interval for a population variance.
///
/// Chi-squared interval with `n - 1` degrees of freedom and a two-tailed
/// alpha split: `(n-1) * s^2 / chi2_upper <= var <= (n-1) * s^2 / chi2_lower`.
/// The chi-squared distribution is asymmetric, so the upper-tail quantile
/// bounds the variance from below and the lower-tail quantile from above.
///
/// # Arguments
/// * `sample_std` - Sample standard deviation
/// * `n` - Sample size
/// * `level` - Confidence level, strictly between 0 and 1
///
/// # Errors
/// Returns an error when `n <= 1` or `level` is outside (0, 1).
pub fn ci_variance(sample_std: f64, n: usize, level: f64) -> Result<ConfidenceInterval> {
    validate(n, level)?;

    let df = (n - 1) as f64;
    let alpha = 1.0 - level;
    let chi2 = ChiSquared::new(df)?;
    let chi2_lower = chi2.inverse_cdf(alpha / 2.0);
    let chi2_upper = chi2.inverse_cdf(1.0 - alpha / 2.0);

    let scaled = df * sample_std * sample_std;
    Ok(ConfidenceInterval::new(
        scaled / chi2_upper,
        scaled / chi2_lower,
    ))
}

/// Two-sided confidence interval for a population standard deviation.
///
/// Elementwise square root of the variance interval bounds.
///
/// # Errors
/// Returns an error when `n <= 1` or `level` is outside (0, 1).
pub fn ci_std(sample_std: f64, n: usize, level: f64) -> Result<ConfidenceInterval> {
    let variance = ci_variance(sample_std, n, level)?;
    Ok(ConfidenceInterval::new(
        variance.lower.sqrt(),
        variance.upper.sqrt(),
    ))
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
    fn test_variance_interval_reference_values() {
        // s 2, n 10 at 95%: chi-squared(9) tails 2.7004 and 19.0228,
        // so the variance lies in [36/19.0228, 36/2.7004].
        let ci = ci_variance(2.0, 10, 0.95).unwrap();
        assert_relative_eq!(ci.lower, 1.8924690865737575, epsilon = 1e-2);
        assert_relative_eq!(ci.upper, 13.331410154076604, epsilon = 1e-2);
    }

    #[test]
    fn test_variance_interval_is_asymmetric() {
        // The chi-squared quantiles are not symmetric around the point
        // estimate, so neither are the bounds around s^2.
        let ci = ci_variance(2.0, 10, 0.95).unwrap();
        let s2 = 4.0;
        assert!(ci.contains(s2));
        assert!(ci.upper - s2 > s2 - ci.lower);
    }

    #[test]
    fn test_std_interval_reference_values() {
        let ci = ci_std(2.0, 10, 0.95).unwrap();
        assert_relative_eq!(ci.lower, 1.3756704134980, epsilon = 1e-2);
        assert_relative_eq!(ci.upper, 3.6512203650391473, epsilon = 1e-2);
    }

    #[test]
    fn test_std_is_sqrt_of_variance_bounds() {
        let variance = ci_variance(3.0, 25, 0.95).unwrap();
        let std = ci_std(3.0, 25, 0.95).unwrap();
        assert_relative_eq!(std.lower, variance.lower.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(std.upper, variance.upper.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_std_interval_brackets_sample_std() {
        let ci = ci_std(2.0, 10, 0.95).unwrap();
        assert!(ci.contains(2.0));
        assert!(ci.lower > 0.0);
    }

    #[test]
    fn test_higher_level_widens_interval() {
        let narrow = ci_variance(2.0, 10, 0.90).unwrap();
        let middle = ci_variance(2.0, 10, 0.95).unwrap();
        let wide = ci_variance(2.0, 10, 0.99).unwrap();
        assert!(narrow.width() < middle.width());
        assert!(middle.width() < wide.width());

        let narrow_std = ci_std(2.0, 10, 0.90).unwrap();
        let wide_std = ci_std(2.0, 10, 0.99).unwrap();
        assert!(narrow_std.width() < wide_std.width());
    }

    #[test]
    fn test_larger_sample_narrows_interval() {
        let small = ci_variance(2.0, 10, 0.95).unwrap();
        let large = ci_variance(2.0, 200, 0.95).unwrap();
        assert!(large.width() < small.width());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            ci_variance(2.0, 1, 0.95),
            Err(EdaError::InvalidParameter(_))
        ));
        assert!(matches!(
            ci_std(2.0, 10, 1.0),
            Err(EdaError::InvalidParameter(_))
        ));
        assert!(matches!(
            ci_std(2.0, 10, 0.0),
            Err(EdaError::InvalidParameter(_))
        ));
    }
}
