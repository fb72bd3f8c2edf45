//! imply-core - Automated two-column statistical comparison
//!
//! Given a tabular dataset and two selected columns, imply:
//!
//! 1. Classifies each column as categorical or numeric
//! 2. Builds a distribution chart spec per column (pie or histogram)
//! 3. Routes the pair to the appropriate hypothesis test
//!    (chi-square / t-test / Mann-Whitney U)
//! 4. Interprets the p-value into a significance verdict
//!
//! # Design
//!
//! The pipeline is pure and synchronous: a `Dataset` is read-only after
//! construction, every derived value (classification, chart spec, test
//! result, verdict) is transient, and failures travel as typed `Result`
//! values. `AnalysisSession::compare` drives the whole flow.

pub mod chart;
pub mod classify;
pub mod dataset;
pub mod error;
pub mod runner;
pub mod selector;
pub mod session;
pub mod verdict;

pub use chart::*;
pub use classify::*;
pub use dataset::*;
pub use error::*;
pub use runner::*;
pub use selector::*;
pub use session::*;
pub use verdict::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
