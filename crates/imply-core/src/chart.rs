//! Distribution chart specs
//!
//! A `ChartSpec` is the structured summary the rendering layer draws:
//! a category share breakdown (pie) for categorical columns, a binned
//! frequency summary (histogram) for numeric columns. Building a spec
//! is a pure transformation; no drawing happens here.

use crate::classify::Classification;
use crate::dataset::NamedColumn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of histogram bins regardless of the bin rule
const MAX_BINS: usize = 512;

/// Distribution summary for one column
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    /// Category share breakdown, one slice per distinct label
    Pie { slices: Vec<PieSlice> },

    /// Binned frequency summary
    Histogram { bins: Vec<HistogramBin> },
}

/// One slice of a pie chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSlice {
    /// Category label
    pub label: String,

    /// Number of rows with this label
    pub count: u64,

    /// Share of non-missing rows, in [0, 1]
    pub fraction: f64,
}

/// One bin of a histogram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,

    /// Upper edge (inclusive for the last bin)
    pub upper: f64,

    /// Number of values in the bin
    pub count: u64,
}

/// Build the distribution chart spec for a column
///
/// The histogram bin count follows the Freedman-Diaconis rule with a
/// Sturges fallback; see `present_with_bins` to override it.
pub fn present(column: &NamedColumn, classification: Classification) -> ChartSpec {
    present_with_bins(column, classification, None)
}

/// Build a chart spec with an explicit histogram bin count
///
/// Missing values (empty labels, non-finite numbers) are skipped. A
/// single-distinct-value column yields one degenerate slice or bin; an
/// all-missing column yields an empty spec, not an error.
pub fn present_with_bins(
    column: &NamedColumn,
    classification: Classification,
    bin_count: Option<usize>,
) -> ChartSpec {
    match classification {
        Classification::Categorical => ChartSpec::Pie {
            slices: pie_slices(column),
        },
        Classification::Numeric => ChartSpec::Histogram {
            bins: histogram_bins(column, bin_count),
        },
    }
}

fn pie_slices(column: &NamedColumn) -> Vec<PieSlice> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for label in column.data.labels().into_iter().flatten() {
        *counts.entry(label).or_insert(0) += 1;
    }

    let total: u64 = counts.values().sum();
    counts
        .into_iter()
        .map(|(label, count)| PieSlice {
            label,
            count,
            fraction: if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            },
        })
        .collect()
}

fn histogram_bins(column: &NamedColumn, bin_count: Option<usize>) -> Vec<HistogramBin> {
    let values: Vec<f64> = column
        .data
        .to_f64()
        .unwrap_or_default()
        .into_iter()
        .filter(|x| x.is_finite())
        .collect();

    if values.is_empty() {
        return Vec::new();
    }

    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if min == max {
        // Single distinct value: one degenerate bin
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len() as u64,
        }];
    }

    let num_bins = bin_count
        .unwrap_or_else(|| auto_bin_count(&sorted, max - min))
        .clamp(1, MAX_BINS);
    let width = (max - min) / num_bins as f64;

    let mut counts = vec![0u64; num_bins];
    for &x in &values {
        let idx = (((x - min) / width) as usize).min(num_bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Freedman-Diaconis bin count with a Sturges fallback
///
/// FD: width = 2 * IQR / n^(1/3). Falls back to Sturges
/// (ceil(log2 n) + 1) when the IQR is zero.
fn auto_bin_count(sorted: &[f64], range: f64) -> usize {
    let n = sorted.len();
    let iqr = quantile(sorted, 0.75) - quantile(sorted, 0.25);
    let fd_width = 2.0 * iqr / (n as f64).cbrt();

    if fd_width > 0.0 {
        (range / fd_width).ceil() as usize
    } else {
        (n as f64).log2().ceil() as usize + 1
    }
}

/// Linear-interpolated quantile of sorted data
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
