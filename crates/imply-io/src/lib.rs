//! imply-io - Tabular data loading for imply
//!
//! This crate turns delimited text into typed columns:
//!
//! - **CSV/TSV**: comma- or tab-separated values with type inference
//!
//! # Design
//!
//! All readers implement the `TableReader` trait for uniform access.
//! Column types are inferred from a sample of rows; columns are parsed
//! on demand when requested by name.

pub mod reader;
pub mod schema;

#[cfg(feature = "csv")]
pub mod csv_reader;

#[cfg(feature = "csv")]
pub use csv_reader::CsvReader;

pub use reader::*;
pub use schema::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
