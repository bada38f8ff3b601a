//! Concentration history at fixed grid points
//!
//! Temporal counterpart of the profile plots: `C(x_i, t)` against `t` for a
//! few chosen spatial indices, e.g. to watch the front reach a probe.

use std::error::Error;

use crate::physics::ConcentrationField;
use super::chart::{render, Curve};
use super::config::{PlotConfig, NO_TITLE};

/// Plot the time series of the given spatial indices
///
/// Each curve is labelled `x=<position>`.
///
/// # Errors
///
/// - no index given
/// - an index `>= Nx`
/// - invalid configuration, file or drawing errors
///
/// # Example
///
/// ```rust,no_run
/// use diffusion_rs::output::visualization::plot_history;
/// use diffusion_rs::solver::solve;
///
/// let field = solve(0.1, 0.1, 0.01)?;
/// plot_history(&field, &[1, 5, 10], "history.png", None)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plot_history(
    field: &ConcentrationField,
    indices: &[usize],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if indices.is_empty() {
        return Err("No grid index provided".into());
    }

    if let Some(&index) = indices.iter().find(|&&i| i >= field.nx()) {
        return Err(format!(
            "Grid index {} out of range (Nx = {})",
            index,
            field.nx()
        )
        .into());
    }

    let default_config = PlotConfig::history(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let t = field.timeline().coordinates();
    let series: Vec<(usize, Vec<f64>)> = indices
        .iter()
        .map(|&i| (i, field.time_series(i)))
        .collect();

    let curves: Vec<Curve<'_>> = series
        .iter()
        .map(|(i, values)| Curve {
            label: format!("x={:?}", field.grid().coordinate(*i)),
            x: &t,
            y: values,
        })
        .collect();

    render(&curves, output_path, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve_with;

    #[test]
    fn test_plot_history() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("history.svg");

        let field = solve_with(0.1, 0.1, 0.05, 1.0, 2.0, 1.0, 0.0).unwrap();
        let config = PlotConfig::bare();
        plot_history(&field, &[1, 2], path.to_str().unwrap(), Some(&config)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("<polyline").count(), 2);
    }

    #[test]
    fn test_plot_history_bad_index() {
        let field = solve_with(0.1, 0.1, 0.05, 1.0, 2.0, 1.0, 0.0).unwrap();

        let error = plot_history(&field, &[1, 20], "unused.png", None).unwrap_err();
        assert!(error.to_string().contains("out of range"));

        assert!(plot_history(&field, &[], "unused.png", None).is_err());
    }
}
