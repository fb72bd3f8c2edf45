//! Error types for statistical computations
//!
//! A test that cannot produce a valid p-value fails with a
//! `ComputationError` carrying the underlying cause. Failures are
//! ordinary return values, never panics.

use thiserror::Error;

/// Errors from hypothesis test computations
#[derive(Debug, Error)]
pub enum ComputationError {
    /// A group has fewer observations than the test requires
    #[error("Group '{group}' has {actual} usable observations, needs at least {required}")]
    InsufficientObservations {
        group: String,
        required: usize,
        actual: usize,
    },

    /// A group has no usable observations at all
    #[error("Group '{group}' has no usable observations")]
    NoObservations { group: String },

    /// Pooled variance is zero, the t statistic is undefined
    #[error("Pooled variance is zero; t statistic is undefined")]
    ZeroVariance,

    /// Every combined value is tied, the rank-sum variance is zero
    #[error("All values are tied; rank-sum variance is zero")]
    AllTied,

    /// A contingency table margin sums to zero
    #[error("Contingency table {margin} '{label}' sums to zero; expected frequencies are undefined")]
    ZeroMarginal { margin: Margin, label: String },

    /// The contingency table has no observations
    #[error("Contingency table is empty")]
    EmptyTable,

    /// Mismatched table dimensions
    #[error("Contingency table shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// A distribution could not be constructed
    #[error("Distribution error: {message}")]
    Distribution { message: String },
}

/// Which margin of a contingency table collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Margin {
    Row,
    Column,
}

impl std::fmt::Display for Margin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Margin::Row => write!(f, "row"),
            Margin::Column => write!(f, "column"),
        }
    }
}

/// Result type for statistical computations
pub type ComputationResult<T> = Result<T, ComputationError>;
