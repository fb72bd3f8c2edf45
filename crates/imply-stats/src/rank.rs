//! Midrank assignment
//!
//! Rank-based tests need ranks with ties resolved by the average-rank
//! method: each run of equal values receives the mean of the positions
//! it occupies. Tie group sizes are kept for variance corrections.

/// Ranks of a sample with tie bookkeeping
#[derive(Debug, Clone)]
pub struct Ranked {
    /// Midrank of each value, in input order (1-based)
    pub ranks: Vec<f64>,

    /// Size of each group of tied values (singletons included)
    pub tie_sizes: Vec<usize>,
}

/// Assign midranks to `values`
///
/// Non-finite values must be filtered out by the caller; comparison
/// assumes a total order.
pub fn midranks(values: &[f64]) -> Ranked {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut tie_sizes = Vec::new();

    let mut i = 0;
    while i < n {
        // Extend over the run of values equal to values[order[i]]
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }

        // Positions i+1 ..= j hold the same value; average them
        let midrank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = midrank;
        }
        tie_sizes.push(j - i);
        i = j;
    }

    Ranked { ranks, tie_sizes }
}

/// Tie correction term for the rank-sum variance
///
/// Returns `sum(t^3 - t)` over tie groups; zero when all values are
/// distinct.
pub fn tie_term(tie_sizes: &[usize]) -> f64 {
    tie_sizes
        .iter()
        .map(|&t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum()
}
