//! Analysis sessions
//!
//! A session owns one dataset for its lifetime and drives the full
//! comparison pipeline per user interaction: selection check,
//! classification, chart specs, test routing, execution, verdict. The
//! dataset is never shared across sessions; every comparison is
//! computed fresh and its report discarded after rendering.

use crate::chart::{present, ChartSpec};
use crate::classify::Classification;
use crate::dataset::Dataset;
use crate::error::{ImplyResult, SelectionError};
use crate::runner::{run_test, TestResult};
use crate::selector::{select_test, NumericTest};
use crate::verdict::{interpret, SignificanceLevel, Verdict};
use serde::{Deserialize, Serialize};

/// A user session holding one dataset
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    /// Unique session identifier
    pub id: String,

    /// Session creation timestamp (RFC 3339)
    pub created_at: String,

    dataset: Dataset,
    level: SignificanceLevel,
}

impl AnalysisSession {
    /// Create a session around a dataset, at the default 0.05 level
    pub fn new(dataset: Dataset) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            dataset,
            level: SignificanceLevel::default(),
        }
    }

    /// Override the significance level for this session
    pub fn with_significance_level(mut self, level: SignificanceLevel) -> Self {
        self.level = level;
        self
    }

    /// The session's dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The session's significance level
    pub fn significance_level(&self) -> SignificanceLevel {
        self.level
    }

    /// Compare two columns
    ///
    /// `choice` is required when both columns are numeric and ignored
    /// otherwise. Fails before computing anything when the two names
    /// are identical. Errors abort only this comparison; the session
    /// stays usable.
    pub fn compare(
        &self,
        first_name: &str,
        second_name: &str,
        choice: Option<NumericTest>,
    ) -> ImplyResult<ComparisonReport> {
        if first_name == second_name {
            return Err(SelectionError::IdenticalColumns {
                name: first_name.to_string(),
            }
            .into());
        }

        let first = self.dataset.column(first_name)?;
        let second = self.dataset.column(second_name)?;

        let first_class = Classification::of_column(&first.data);
        let second_class = Classification::of_column(&second.data);

        let kind = select_test(first_class, second_class, choice)?;
        let test = run_test(kind, first, second)?;
        let verdict = interpret(&test, self.level);

        Ok(ComparisonReport {
            first: ColumnSummary {
                name: first.name.clone(),
                classification: first_class,
                chart: present(first, first_class),
            },
            second: ColumnSummary {
                name: second.name.clone(),
                classification: second_class,
                chart: present(second, second_class),
            },
            test,
            verdict,
        })
    }
}

/// Everything the presentation layer needs to render one comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Summary of the first selected column
    pub first: ColumnSummary,

    /// Summary of the second selected column
    pub second: ColumnSummary,

    /// The executed hypothesis test
    pub test: TestResult,

    /// Significance verdict for the test
    pub verdict: Verdict,
}

/// Per-column piece of a comparison report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,

    /// Categorical or numeric
    pub classification: Classification,

    /// Distribution chart spec
    pub chart: ChartSpec,
}
