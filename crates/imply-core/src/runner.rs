//! Hypothesis test execution
//!
//! `run_test` dispatches a selected test against two columns and
//! assembles the structured `TestResult`. Missing values are dropped
//! before testing: the chi-square path drops rows where either label is
//! missing, the numeric paths drop non-finite values per group. A
//! failed computation surfaces as an error, never a NaN result.

use crate::dataset::NamedColumn;
use crate::error::{DatasetError, ImplyError, ImplyResult};
use crate::selector::TestKind;
use imply_stats::{
    chi_square_independence, mann_whitney_u, t_test_independent, ContingencyTable,
};
use serde::{Deserialize, Serialize};

/// Structured outcome of a hypothesis test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Which test produced this result
    pub kind: TestKind,

    /// Primary test statistic (chi-square, t, or U)
    pub statistic: f64,

    /// Two-sided p-value in [0, 1], always finite
    pub p_value: f64,

    /// Chi-square extras; `None` for the numeric tests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chi_square: Option<ChiSquareDetails>,
}

/// Secondary fields only the chi-square test produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChiSquareDetails {
    /// Degrees of freedom, (rows - 1) * (cols - 1)
    pub degrees_of_freedom: u64,

    /// Expected cell frequencies under independence
    pub expected: Vec<Vec<f64>>,

    /// Distinct labels of the first column (table rows)
    pub row_labels: Vec<String>,

    /// Distinct labels of the second column (table columns)
    pub col_labels: Vec<String>,
}

/// Execute `kind` against two columns
pub fn run_test(kind: TestKind, first: &NamedColumn, second: &NamedColumn) -> ImplyResult<TestResult> {
    match kind {
        TestKind::ChiSquare => run_chi_square(first, second),
        TestKind::TTest => {
            let group1 = numeric_values(first)?;
            let group2 = numeric_values(second)?;
            let test = t_test_independent(&group1, &group2, &first.name, &second.name)?;
            Ok(TestResult {
                kind,
                statistic: test.statistic,
                p_value: test.p_value,
                chi_square: None,
            })
        }
        TestKind::MannWhitney => {
            let group1 = numeric_values(first)?;
            let group2 = numeric_values(second)?;
            let test = mann_whitney_u(&group1, &group2, &first.name, &second.name)?;
            Ok(TestResult {
                kind,
                statistic: test.statistic,
                p_value: test.p_value,
                chi_square: None,
            })
        }
    }
}

fn run_chi_square(first: &NamedColumn, second: &NamedColumn) -> ImplyResult<TestResult> {
    // Pair labels row by row, dropping rows missing on either side
    let pairs: Vec<(String, String)> = first
        .data
        .labels()
        .into_iter()
        .zip(second.data.labels())
        .filter_map(|(a, b)| Some((a?, b?)))
        .collect();

    let table = ContingencyTable::from_pairs(&pairs);
    let test = chi_square_independence(&table)?;

    Ok(TestResult {
        kind: TestKind::ChiSquare,
        statistic: test.statistic,
        p_value: test.p_value,
        chi_square: Some(ChiSquareDetails {
            degrees_of_freedom: test.degrees_of_freedom,
            expected: test.expected,
            row_labels: table.row_labels,
            col_labels: table.col_labels,
        }),
    })
}

/// Finite numeric view of a column; text columns are a type mismatch
fn numeric_values(column: &NamedColumn) -> ImplyResult<Vec<f64>> {
    let values = column.data.to_f64().ok_or_else(|| {
        ImplyError::from(DatasetError::TypeMismatch {
            column: column.name.clone(),
            expected: "numeric".to_string(),
            actual: format!("{:?}", column.data.dtype()),
        })
    })?;
    Ok(values.into_iter().filter(|x| x.is_finite()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use imply_io::DataColumn;

    fn text_column(name: &str, values: &[&str]) -> NamedColumn {
        NamedColumn::new(
            name,
            DataColumn::String(values.iter().map(|s| s.to_string()).collect()),
        )
    }

    #[test]
    fn test_chi_square_carries_details() {
        let first = text_column("pet", &["cat", "cat", "dog", "dog"]);
        let second = text_column("home", &["flat", "house", "flat", "house"]);

        let result = run_test(TestKind::ChiSquare, &first, &second).unwrap();

        assert_eq!(result.kind, TestKind::ChiSquare);
        assert_eq!(result.statistic, 0.0);
        assert_eq!(result.p_value, 1.0);

        let details = result.chi_square.unwrap();
        assert_eq!(details.degrees_of_freedom, 1);
        assert_eq!(details.row_labels, vec!["cat", "dog"]);
        assert_eq!(details.col_labels, vec!["flat", "house"]);
        assert_eq!(details.expected.len(), 2);
    }

    #[test]
    fn test_chi_square_drops_rows_with_missing_labels() {
        let first = text_column("pet", &["cat", "", "dog", "cat"]);
        let second = text_column("home", &["flat", "house", "", "house"]);

        // Only rows 0 and 3 survive: a 1x2 table, degenerate but valid
        let result = run_test(TestKind::ChiSquare, &first, &second).unwrap();
        let details = result.chi_square.unwrap();
        assert_eq!(details.row_labels, vec!["cat"]);
        assert_eq!(details.degrees_of_freedom, 0);
    }

    #[test]
    fn test_t_test_has_no_chi_square_details() {
        let first = NamedColumn::new("a", DataColumn::Float64(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
        let second = NamedColumn::new("b", DataColumn::Float64(vec![1.0, 2.0, 3.0, 4.0, 5.0]));

        let result = run_test(TestKind::TTest, &first, &second).unwrap();
        assert_eq!(result.kind, TestKind::TTest);
        assert!(result.chi_square.is_none());
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_tests_skip_non_finite_values() {
        let first = NamedColumn::new(
            "a",
            DataColumn::Float64(vec![1.0, f64::NAN, 2.0, 3.0, 4.0, 5.0]),
        );
        let second = NamedColumn::new("b", DataColumn::Float64(vec![1.0, 2.0, 3.0, 4.0, 5.0]));

        let result = run_test(TestKind::TTest, &first, &second).unwrap();
        assert!(result.p_value.is_finite());
        assert!((result.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_mann_whitney_separated_groups() {
        let first = NamedColumn::new("a", DataColumn::Int64(vec![1, 2, 3]));
        let second = NamedColumn::new("b", DataColumn::Int64(vec![10, 11, 12]));

        let result = run_test(TestKind::MannWhitney, &first, &second).unwrap();
        assert_eq!(result.kind, TestKind::MannWhitney);
        assert!(result.p_value < 0.05);
    }

    #[test]
    fn test_numeric_test_on_text_column_is_type_mismatch() {
        let first = text_column("pet", &["cat", "dog"]);
        let second = NamedColumn::new("b", DataColumn::Int64(vec![1, 2]));

        assert!(matches!(
            run_test(TestKind::TTest, &first, &second),
            Err(ImplyError::Dataset(DatasetError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_degenerate_numeric_input_is_computation_error() {
        let first = NamedColumn::new("a", DataColumn::Float64(vec![2.0, 2.0, 2.0]));
        let second = NamedColumn::new("b", DataColumn::Float64(vec![2.0, 2.0]));

        assert!(matches!(
            run_test(TestKind::TTest, &first, &second),
            Err(ImplyError::Computation(_))
        ));
    }
}
