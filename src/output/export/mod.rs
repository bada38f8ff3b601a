//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file and leaves existing ones untouched.
//!
//! # Available formats
//!
//! | Format  | Module      |
//! |---------|-------------|
//! | CSV     | [`csv`]     |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use diffusion_rs::output::export::{CsvConfig, CsvExporter, Exporter};
//! use diffusion_rs::solver::solve;
//!
//! let field = solve(0.1, 0.1, 0.01)?;
//!
//! let exporter = CsvExporter::new(CsvConfig::european());
//! exporter.export(&field, 10, "diffusion.csv")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod csv;

pub use csv::{export_field_csv, write_field_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata};

use crate::physics::ConcentrationField;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the caller
/// can react precisely to the error kind.
///
/// # Parameter `every`
///
/// Only time columns `0, every, 2 * every, ...` are exported. `every == 0`
/// is an error.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports the selected time columns of `field` to `path`.
    fn export(
        &self,
        field: &ConcentrationField,
        every: usize,
        path: &str,
    ) -> Result<(), Self::Error>;
}
