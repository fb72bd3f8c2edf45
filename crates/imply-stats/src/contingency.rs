//! Contingency tables
//!
//! A contingency table cross-tabulates co-occurrence counts between two
//! categorical variables: rows are the distinct labels of the first
//! variable, columns the distinct labels of the second, each cell the
//! number of rows where both labels occur together.

use crate::error::{ComputationError, ComputationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cross-tabulation of two categorical variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContingencyTable {
    /// Distinct labels of the first variable, sorted
    pub row_labels: Vec<String>,

    /// Distinct labels of the second variable, sorted
    pub col_labels: Vec<String>,

    /// Co-occurrence counts, `counts[i][j]` for (row i, column j)
    pub counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Build a table from observed (first, second) label pairs
    ///
    /// Labels are sorted so the table layout is deterministic.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut cells: BTreeMap<(String, String), u64> = BTreeMap::new();
        let mut rows: BTreeMap<String, ()> = BTreeMap::new();
        let mut cols: BTreeMap<String, ()> = BTreeMap::new();

        for (a, b) in pairs {
            rows.insert(a.clone(), ());
            cols.insert(b.clone(), ());
            *cells.entry((a.clone(), b.clone())).or_insert(0) += 1;
        }

        let row_labels: Vec<String> = rows.into_keys().collect();
        let col_labels: Vec<String> = cols.into_keys().collect();

        let counts: Vec<Vec<u64>> = row_labels
            .iter()
            .map(|r| {
                col_labels
                    .iter()
                    .map(|c| {
                        cells
                            .get(&(r.clone(), c.clone()))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();

        Self {
            row_labels,
            col_labels,
            counts,
        }
    }

    /// Build a table from pre-counted cells
    pub fn from_counts(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        counts: Vec<Vec<u64>>,
    ) -> ComputationResult<Self> {
        if counts.len() != row_labels.len() {
            return Err(ComputationError::ShapeMismatch {
                message: format!(
                    "{} rows of counts for {} row labels",
                    counts.len(),
                    row_labels.len()
                ),
            });
        }
        for row in &counts {
            if row.len() != col_labels.len() {
                return Err(ComputationError::ShapeMismatch {
                    message: format!(
                        "{} cells in a row for {} column labels",
                        row.len(),
                        col_labels.len()
                    ),
                });
            }
        }

        Ok(Self {
            row_labels,
            col_labels,
            counts,
        })
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Per-row marginal totals
    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Per-column marginal totals
    pub fn col_totals(&self) -> Vec<u64> {
        (0..self.num_cols())
            .map(|j| self.counts.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Grand total of all cells
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Expected cell frequencies under the independence null hypothesis
    ///
    /// `expected[i][j] = row_total[i] * col_total[j] / total`. Fails when
    /// any marginal is zero, which leaves a cell's expectation undefined
    /// for the chi-square statistic.
    pub fn expected_frequencies(&self) -> ComputationResult<Vec<Vec<f64>>> {
        let total = self.total();
        if total == 0 || self.num_rows() == 0 || self.num_cols() == 0 {
            return Err(ComputationError::EmptyTable);
        }

        let row_totals = self.row_totals();
        let col_totals = self.col_totals();

        if let Some(i) = row_totals.iter().position(|&t| t == 0) {
            return Err(ComputationError::ZeroMarginal {
                margin: crate::error::Margin::Row,
                label: self.row_labels[i].clone(),
            });
        }
        if let Some(j) = col_totals.iter().position(|&t| t == 0) {
            return Err(ComputationError::ZeroMarginal {
                margin: crate::error::Margin::Column,
                label: self.col_labels[j].clone(),
            });
        }

        let total = total as f64;
        Ok(row_totals
            .iter()
            .map(|&r| {
                col_totals
                    .iter()
                    .map(|&c| (r as f64) * (c as f64) / total)
                    .collect()
            })
            .collect())
    }
}
