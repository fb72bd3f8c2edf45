//! Mann-Whitney U rank-sum test
//!
//! Two-sided, unpaired, using the tie-corrected normal approximation.
//! No continuity correction is applied. The reported statistic is U of
//! the first group.

use crate::error::{ComputationError, ComputationResult};
use crate::rank::{midranks, tie_term};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Result of a Mann-Whitney U test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MannWhitneyTest {
    /// U statistic of the first group
    pub statistic: f64,

    /// Two-sided p-value in [0, 1]
    pub p_value: f64,
}

/// Run a two-sided Mann-Whitney U test
///
/// Both groups need at least one observation. When every combined value
/// is tied the rank-sum variance vanishes and the test fails rather
/// than dividing by zero.
pub fn mann_whitney_u(
    group1: &[f64],
    group2: &[f64],
    name1: &str,
    name2: &str,
) -> ComputationResult<MannWhitneyTest> {
    if group1.is_empty() {
        return Err(ComputationError::NoObservations {
            group: name1.to_string(),
        });
    }
    if group2.is_empty() {
        return Err(ComputationError::NoObservations {
            group: name2.to_string(),
        });
    }

    let n1 = group1.len() as f64;
    let n2 = group2.len() as f64;
    let n = n1 + n2;

    let combined: Vec<f64> = group1.iter().chain(group2.iter()).copied().collect();
    let ranked = midranks(&combined);

    let rank_sum1: f64 = ranked.ranks[..group1.len()].iter().sum();
    let u1 = rank_sum1 - n1 * (n1 + 1.0) / 2.0;

    let mean_u = n1 * n2 / 2.0;
    let tie_adjustment = tie_term(&ranked.tie_sizes) / (n * (n - 1.0));
    let variance_u = n1 * n2 / 12.0 * ((n + 1.0) - tie_adjustment);

    if variance_u <= 0.0 {
        return Err(ComputationError::AllTied);
    }

    let z = (u1 - mean_u) / variance_u.sqrt();
    let p_value = two_sided_normal_pvalue(z)?;

    Ok(MannWhitneyTest {
        statistic: u1,
        p_value,
    })
}

/// Two-sided p-value from the standard normal, clamped to [0, 1]
fn two_sided_normal_pvalue(z: f64) -> ComputationResult<f64> {
    let dist = Normal::new(0.0, 1.0).map_err(|e| ComputationError::Distribution {
        message: e.to_string(),
    })?;
    Ok((2.0 * (1.0 - dist.cdf(z.abs()))).clamp(0.0, 1.0))
}
