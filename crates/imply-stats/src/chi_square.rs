//! Pearson's chi-square test of independence
//!
//! Computes the chi-square statistic over a contingency table,
//! degrees of freedom (rows-1)(cols-1), the expected-frequency matrix
//! under the independence null, and the upper-tail p-value from the
//! chi-squared distribution. No Yates continuity correction is applied.

use crate::contingency::ContingencyTable;
use crate::error::{ComputationError, ComputationResult};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Result of a chi-square test of independence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChiSquareTest {
    /// Pearson's chi-square statistic
    pub statistic: f64,

    /// Two-sided (upper-tail) p-value in [0, 1]
    pub p_value: f64,

    /// Degrees of freedom, (rows - 1) * (cols - 1)
    pub degrees_of_freedom: u64,

    /// Expected cell frequencies under independence
    pub expected: Vec<Vec<f64>>,
}

/// Run Pearson's chi-square test of independence on a contingency table
///
/// Fails when the table is empty or a marginal collapses to zero. A
/// single-row or single-column table has zero degrees of freedom and
/// carries no evidence against independence: statistic 0, p-value 1.
pub fn chi_square_independence(table: &ContingencyTable) -> ComputationResult<ChiSquareTest> {
    let expected = table.expected_frequencies()?;

    let rows = table.num_rows();
    let cols = table.num_cols();
    let dof = (rows.saturating_sub(1) * cols.saturating_sub(1)) as u64;

    if dof == 0 {
        return Ok(ChiSquareTest {
            statistic: 0.0,
            p_value: 1.0,
            degrees_of_freedom: 0,
            expected,
        });
    }

    let mut statistic = 0.0;
    for i in 0..rows {
        for j in 0..cols {
            let o = table.counts[i][j] as f64;
            let e = expected[i][j];
            let d = o - e;
            statistic += d * d / e;
        }
    }

    let p_value = chi_square_sf(statistic, dof as f64)?;

    Ok(ChiSquareTest {
        statistic,
        p_value,
        degrees_of_freedom: dof,
        expected,
    })
}

/// Survival function of the chi-squared distribution, clamped to [0, 1]
fn chi_square_sf(stat: f64, dof: f64) -> ComputationResult<f64> {
    let dist = ChiSquared::new(dof).map_err(|e| ComputationError::Distribution {
        message: e.to_string(),
    })?;
    Ok((1.0 - dist.cdf(stat)).clamp(0.0, 1.0))
}
