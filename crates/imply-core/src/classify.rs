//! Column classification
//!
//! Every column is either categorical (free-form labels, analyzed by
//! frequency) or numeric (analyzed by distributional statistics). The
//! classification is derived once from the column's declared type and
//! passed explicitly through the pipeline.

use imply_io::{ColumnType, DataColumn};
use serde::{Deserialize, Serialize};

/// Semantic classification of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Classification {
    /// Discrete labels, compared via counts
    Categorical,

    /// Numbers, compared via distributional statistics
    Numeric,
}

impl Classification {
    /// Classify from a column type tag
    ///
    /// Textual columns are categorical; ints, floats, and bools are
    /// numeric (bools enter calculations as 0/1).
    pub fn of_type(dtype: ColumnType) -> Self {
        match dtype {
            ColumnType::String => Classification::Categorical,
            ColumnType::Float64 | ColumnType::Int64 | ColumnType::Bool => Classification::Numeric,
        }
    }

    /// Classify a column from its storage
    pub fn of_column(column: &DataColumn) -> Self {
        Self::of_type(column.dtype())
    }

    /// Is this column categorical?
    pub fn is_categorical(&self) -> bool {
        matches!(self, Classification::Categorical)
    }

    /// Is this column numeric?
    pub fn is_numeric(&self) -> bool {
        matches!(self, Classification::Numeric)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Categorical => write!(f, "categorical"),
            Classification::Numeric => write!(f, "numeric"),
        }
    }
}
