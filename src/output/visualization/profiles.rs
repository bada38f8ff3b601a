//! Spatial profile plotting
//!
//! Concentration against position, one curve per selected time column.
//!
//! # Usage
//!
//! ```rust,no_run
//! use diffusion_rs::output::visualization::plot_snapshots;
//! use diffusion_rs::solver::solve;
//!
//! let field = solve(0.1, 0.1, 0.01)?;
//! plot_snapshots(&field, 10, "snapshots.png", None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::error::Error;

use crate::output::snapshot_label;
use crate::physics::ConcentrationField;
use super::chart::{render, Curve};
use super::config::{PlotConfig, NO_TITLE};

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot every `every`-th time column of the field against the grid
///
/// Columns `0, every, 2 * every, ...` are drawn as separate curves labelled
/// `t=<time>`. With the default configuration both axes span `[0, 1]`.
///
/// # Arguments
///
/// * `field` - Solver output
/// * `every` - Column stride (the reference notebook uses 10)
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration (default: [`PlotConfig::snapshots`])
///
/// # Errors
///
/// - `every == 0`
/// - invalid configuration
/// - file or drawing errors
pub fn plot_snapshots(
    field: &ConcentrationField,
    every: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if every == 0 {
        return Err("Snapshot interval must be at least 1".into());
    }

    let default_config = PlotConfig::snapshots(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let x = field.grid().coordinates();

    let curves: Vec<Curve<'_>> = field
        .snapshots(every)
        .map(|snapshot| Curve {
            label: snapshot_label(snapshot.time),
            x: &x,
            y: snapshot.profile,
        })
        .collect();

    render(&curves, output_path, config)
}

/// Plot the single profile at the last time column
///
/// # Example
///
/// ```rust,no_run
/// use diffusion_rs::output::visualization::plot_final_profile;
/// use diffusion_rs::solver::solve;
///
/// let field = solve(0.1, 0.1, 0.01)?;
/// plot_final_profile(&field, "final.svg", None)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plot_final_profile(
    field: &ConcentrationField,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let last = field.nt() - 1;
    let x = field.grid().coordinates();

    let curves = [Curve {
        label: snapshot_label(field.timeline().coordinate(last)),
        x: &x,
        y: field.profile(last),
    }];

    render(&curves, output_path, config)
}

/// Plot arbitrary spatial profiles for comparison
///
/// Overlays several `(label, x, C)` curves on the same axes, e.g. the final
/// profiles of runs with different `D`.
///
/// # Example
///
/// ```rust,no_run
/// use diffusion_rs::output::visualization::plot_profiles;
/// use diffusion_rs::solver::solve;
///
/// let slow = solve(0.05, 0.1, 0.01)?;
/// let fast = solve(0.1, 0.1, 0.01)?;
/// let x = slow.grid().coordinates();
///
/// plot_profiles(
///     &[
///         ("D=0.05", x.as_slice(), slow.profile(99)),
///         ("D=0.1", x.as_slice(), fast.profile(99)),
///     ],
///     "comparison.png",
///     None,
/// )?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plot_profiles(
    profiles: &[(&str, &[f64], &[f64])],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let curves: Vec<Curve<'_>> = profiles
        .iter()
        .map(|&(label, x, y)| Curve { label: label.to_string(), x, y })
        .collect();

    render(&curves, output_path, config)
}

// =================================================================================================
// Tests
// =================================================================================================
