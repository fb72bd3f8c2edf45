//! imply-stats - Hypothesis tests for two-column comparison
//!
//! This crate provides the statistical primitives imply routes column
//! pairs to:
//!
//! - **Chi-square**: Pearson's test of independence on a contingency table
//! - **T-test**: two-sample Student's t-test (equal variance, two-sided)
//! - **Mann-Whitney U**: two-sided rank-sum test
//!
//! # Design
//!
//! Every test returns a `Result`: degenerate inputs (empty groups, zero
//! variance, collapsed contingency margins) surface as typed
//! `ComputationError` values rather than NaN statistics. p-values are
//! always finite and clamped to [0, 1].

pub mod chi_square;
pub mod contingency;
pub mod error;
pub mod mann_whitney;
pub mod rank;
pub mod t_test;

pub use chi_square::*;
pub use contingency::*;
pub use error::*;
pub use mann_whitney::*;
pub use rank::*;
pub use t_test::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
