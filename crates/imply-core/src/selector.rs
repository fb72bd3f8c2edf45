//! Hypothesis test selection
//!
//! Routes a pair of column classifications to a test: any categorical
//! involvement short-circuits to chi-square (the only implemented test
//! that handles categorical association), while a numeric/numeric pair
//! defers to the analyst's explicit choice between the parametric
//! t-test and the non-parametric Mann-Whitney U. No distributional
//! assumptions are checked before offering either.

use crate::classify::Classification;
use crate::error::SelectionError;
use serde::{Deserialize, Serialize};

/// The hypothesis test to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum TestKind {
    /// Pearson's chi-square test of independence
    ChiSquare,

    /// Two-sample Student's t-test
    TTest,

    /// Mann-Whitney U rank-sum test
    MannWhitney,
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestKind::ChiSquare => write!(f, "chi-square"),
            TestKind::TTest => write!(f, "t-test"),
            TestKind::MannWhitney => write!(f, "mann-whitney"),
        }
    }
}

/// The analyst's choice for a numeric/numeric pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum NumericTest {
    /// Parametric comparison
    TTest,

    /// Non-parametric comparison
    MannWhitney,
}

impl From<NumericTest> for TestKind {
    fn from(choice: NumericTest) -> Self {
        match choice {
            NumericTest::TTest => TestKind::TTest,
            NumericTest::MannWhitney => TestKind::MannWhitney,
        }
    }
}

/// Pick the test for a pair of classified columns
///
/// Commutative in the classifications. The numeric/numeric case has no
/// implicit default: a missing `choice` is a `SelectionError`.
pub fn select_test(
    first: Classification,
    second: Classification,
    choice: Option<NumericTest>,
) -> Result<TestKind, SelectionError> {
    if first.is_categorical() || second.is_categorical() {
        return Ok(TestKind::ChiSquare);
    }

    choice
        .map(TestKind::from)
        .ok_or(SelectionError::MissingTestChoice)
}
