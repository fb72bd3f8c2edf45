//! Significance verdicts
//!
//! A verdict is a pure threshold comparison: significant iff the
//! p-value is strictly below the significance level. The level is an
//! explicit, validated value passed in by the caller rather than a
//! hidden constant; 0.05 is the default.

use crate::error::{ImplyError, ImplyResult};
use crate::runner::TestResult;
use serde::{Deserialize, Serialize};

/// A validated significance level (alpha)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    /// The conventional 0.05 level
    pub const DEFAULT_ALPHA: f64 = 0.05;

    /// Create a level; alpha must lie in the open interval (0, 1)
    pub fn new(alpha: f64) -> ImplyResult<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(ImplyError::InvalidConfig(format!(
                "significance level must be in (0, 1), got {}",
                alpha
            )));
        }
        Ok(Self(alpha))
    }

    /// The alpha value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for SignificanceLevel {
    fn default() -> Self {
        Self(Self::DEFAULT_ALPHA)
    }
}

/// Binary significance verdict for a test result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether p < alpha, strictly
    pub significant: bool,

    /// The p-value the verdict was derived from
    pub p_value: f64,

    /// The significance level used
    pub alpha: f64,
}

/// Interpret a test result against a significance level
///
/// Strict less-than: p-value exactly equal to alpha is not significant.
pub fn interpret(result: &TestResult, level: SignificanceLevel) -> Verdict {
    Verdict {
        significant: result.p_value < level.value(),
        p_value: result.p_value,
        alpha: level.value(),
    }
}
