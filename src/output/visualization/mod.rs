//! Visualization module for diffusion results
//!
//! This module provides tools to visualize a concentration field using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **chart**: Backend selection and line-chart drawing (crate-internal)
//! - **profiles**: Spatial plots (concentration vs position)
//! - **history**: Temporal plots (concentration vs time at fixed points)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use diffusion_rs::output::visualization::{plot_snapshots, PlotConfig};
//! use diffusion_rs::solver::solve;
//!
//! let field = solve(0.1, 0.1, 0.01)?;
//!
//! // Default config: axes fixed to [0, 1] x [0, 1]
//! plot_snapshots(&field, 10, "diffusion.png", None)?;
//!
//! // Or with custom config
//! let mut config = PlotConfig::snapshots("D = 0.1");
//! config.y_range = None;
//! plot_snapshots(&field, 10, "diffusion.svg", Some(&config))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Every k-th time column | `profiles` | `plot_snapshots` |
//! | Profile at the last time | `profiles` | `plot_final_profile` |
//! | Compare profiles of several runs | `profiles` | `plot_profiles` |
//! | Concentration vs time at a few points | `history` | `plot_history` |
//!
//! Text (caption, tick labels, legend) needs a system font. [`PlotConfig::bare`]
//! draws curves only.

pub mod config;
mod chart;
pub mod profiles;
pub mod history;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use profiles::{plot_final_profile, plot_profiles, plot_snapshots};

pub use history::plot_history;
