//! Error types for imply-core
//!
//! Taxonomy:
//! - `DatasetError` - structural problems with a dataset or a column lookup
//! - `SelectionError` - the user's column/test selection is unusable
//! - `ImplyError` - umbrella over the above plus I/O and computation
//!
//! None of these are fatal to a session: every failure is reported for
//! the attempted comparison and the session stays ready for a new
//! selection.

use imply_io::IoError;
use imply_stats::ComputationError;
use thiserror::Error;

/// Main error type for imply operations
#[derive(Debug, Error)]
pub enum ImplyError {
    /// Data loading errors
    #[error("Failed to load data: {0}")]
    Io(#[from] IoError),

    /// Dataset structure errors
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Column/test selection errors
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// Statistical computation errors
    #[error("Computation failed: {0}")]
    Computation(#[from] ComputationError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors related to dataset structure and column access
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Column name not present in the dataset
    #[error("Column '{name}' not found in dataset")]
    ColumnNotFound { name: String },

    /// Two columns share a name
    #[error("Duplicate column name: '{name}'")]
    DuplicateColumn { name: String },

    /// Columns are not all the same length
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A column's type does not fit the requested operation
    #[error("Type mismatch for column '{column}': expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },

    /// Dataset has no columns
    #[error("Dataset has no columns")]
    Empty,
}

/// Errors related to the user's selection
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The same column was picked for both sides
    #[error("Column '{name}' selected twice; pick two distinct columns")]
    IdenticalColumns { name: String },

    /// Numeric/numeric pair without an explicit test choice
    #[error("Both columns are numeric; choose between the t-test and the Mann-Whitney U test")]
    MissingTestChoice,
}

/// Result type alias for imply operations
pub type ImplyResult<T> = Result<T, ImplyError>;

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::ColumnNotFound {
            name: "age".to_string(),
        };
        assert!(err.to_string().contains("age"));

        let err = SelectionError::IdenticalColumns {
            name: "height".to_string(),
        };
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_conversion_into_umbrella() {
        let err: ImplyError = DatasetError::Empty.into();
        assert!(matches!(err, ImplyError::Dataset(_)));

        let err: ImplyError = SelectionError::MissingTestChoice.into();
        assert!(matches!(err, ImplyError::Selection(_)));

        let err: ImplyError = ComputationError::ZeroVariance.into();
        assert!(matches!(err, ImplyError::Computation(_)));
    }
}
