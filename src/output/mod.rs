//! Output module for simulation results
//!
//! This module provides tools to output a [`ConcentrationField`](crate::physics::ConcentrationField):
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file (shared labels)
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── chart.rs
//! │   ├── profiles.rs
//! │   └── history.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use diffusion_rs::output::{export_field_csv, plot_snapshots};
//! use diffusion_rs::solver::solve;
//!
//! let field = solve(0.1, 0.1, 0.01)?;
//!
//! // every 10th time column, as in the reference notebook
//! plot_snapshots(&field, 10, "diffusion.png", None)?;
//! export_field_csv(&field, 10, "diffusion.csv", None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Both sub-modules select time columns with
//! [`ConcentrationField::snapshots`](crate::physics::ConcentrationField::snapshots)
//! and name them with [`snapshot_label`].

pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use visualization::{plot_history, plot_profiles, plot_snapshots, PlotConfig};

pub use export::{export_field_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata, Exporter};

/// Label of a time column: `t=` followed by the shortest representation of
/// `time` that reads back to the same `f64`
///
/// Integral values keep a trailing `.0`.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::snapshot_label;
///
/// assert_eq!(snapshot_label(0.0), "t=0.0");
/// assert_eq!(snapshot_label(1.0), "t=1.0");
/// assert_eq!(snapshot_label(30.0 * 0.1), "t=3.0000000000000004");
/// ```
pub fn snapshot_label(time: f64) -> String {
    format!("t={:?}", time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_labels_for_notebook_times() {
        let labels: Vec<String> = (0..100)
            .step_by(10)
            .map(|n| snapshot_label(n as f64 * 0.1))
            .collect();

        assert_eq!(labels[0], "t=0.0");
        assert_eq!(labels[1], "t=1.0");
        assert_eq!(labels[2], "t=2.0");
        assert_eq!(labels[3], "t=3.0000000000000004");
        assert_eq!(labels[9], "t=9.0");
    }

    #[test]
    fn test_snapshot_label_fraction() {
        assert_eq!(snapshot_label(0.25), "t=0.25");
    }
}
