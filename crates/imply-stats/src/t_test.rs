//! Two-sample Student's t-test
//!
//! Independent, unpaired, two-sided, with the pooled (equal-variance)
//! variance estimate. Welch's correction is not applied; the pooled
//! form is the conventional default for this comparison.

use crate::error::{ComputationError, ComputationResult};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Result of a two-sample t-test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTest {
    /// The t statistic
    pub statistic: f64,

    /// Two-sided p-value in [0, 1]
    pub p_value: f64,

    /// Degrees of freedom, n1 + n2 - 2
    pub degrees_of_freedom: u64,
}

/// Run an independent two-sample Student's t-test
///
/// Each group needs at least two observations; a zero pooled variance
/// leaves the statistic undefined and fails instead of producing NaN.
pub fn t_test_independent(
    group1: &[f64],
    group2: &[f64],
    name1: &str,
    name2: &str,
) -> ComputationResult<TTest> {
    require_observations(group1, name1, 2)?;
    require_observations(group2, name2, 2)?;

    let n1 = group1.len() as f64;
    let n2 = group2.len() as f64;

    let mean1 = group1.iter().sum::<f64>() / n1;
    let mean2 = group2.iter().sum::<f64>() / n2;

    // Sample variances (n - 1 denominator)
    let var1 = group1.iter().map(|x| (x - mean1).powi(2)).sum::<f64>() / (n1 - 1.0);
    let var2 = group2.iter().map(|x| (x - mean2).powi(2)).sum::<f64>() / (n2 - 1.0);

    let dof = n1 + n2 - 2.0;
    let pooled_var = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / dof;

    if pooled_var == 0.0 {
        return Err(ComputationError::ZeroVariance);
    }

    let statistic = (mean1 - mean2) / (pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt();
    let p_value = two_sided_t_pvalue(statistic, dof)?;

    Ok(TTest {
        statistic,
        p_value,
        degrees_of_freedom: dof as u64,
    })
}

fn require_observations(group: &[f64], name: &str, required: usize) -> ComputationResult<()> {
    if group.len() < required {
        return Err(ComputationError::InsufficientObservations {
            group: name.to_string(),
            required,
            actual: group.len(),
        });
    }
    Ok(())
}

/// Two-sided p-value from the t distribution, clamped to [0, 1]
fn two_sided_t_pvalue(statistic: f64, dof: f64) -> ComputationResult<f64> {
    let dist = StudentsT::new(0.0, 1.0, dof).map_err(|e| ComputationError::Distribution {
        message: e.to_string(),
    })?;
    Ok((2.0 * (1.0 - dist.cdf(statistic.abs()))).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_groups() {
        let group = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = t_test_independent(&group, &group, "a", "b").unwrap();

        assert!(result.statistic.abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-9);
        assert_eq!(result.degrees_of_freedom, 8);
    }

    #[test]
    fn test_separated_groups_significant() {
        let group1 = [1.0, 2.0, 3.0, 2.0, 1.5];
        let group2 = [10.0, 11.0, 12.0, 10.5, 11.5];
        let result = t_test_independent(&group1, &group2, "a", "b").unwrap();

        assert!(result.statistic < 0.0);
        assert!(result.p_value < 0.001);
    }

    #[test]
    fn test_known_statistic() {
        // Equal sizes, equal variances: t = (m1 - m2) / sqrt(2 * sp^2 / n)
        let group1 = [1.0, 2.0, 3.0];
        let group2 = [2.0, 3.0, 4.0];
        let result = t_test_independent(&group1, &group2, "a", "b").unwrap();

        // sp^2 = 1, t = -1 / sqrt(2/3)
        let expected = -1.0 / (2.0f64 / 3.0).sqrt();
        assert!((result.statistic - expected).abs() < 1e-9);
        assert_eq!(result.degrees_of_freedom, 4);
    }

    #[test]
    fn test_too_few_observations() {
        assert!(matches!(
            t_test_independent(&[1.0], &[1.0, 2.0], "a", "b"),
            Err(ComputationError::InsufficientObservations { .. })
        ));
    }

    #[test]
    fn test_zero_variance() {
        assert!(matches!(
            t_test_independent(&[2.0, 2.0, 2.0], &[2.0, 2.0], "a", "b"),
            Err(ComputationError::ZeroVariance)
        ));
    }
}
