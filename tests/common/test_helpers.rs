//! Helper functions for integration tests

#![allow(dead_code)]

use diffusion_rs::solver::{Scenario, SolverConfiguration};

/// Time step of the reference notebook run
pub const NOTEBOOK_DT: f64 = 0.1;

/// Grid spacing of the reference notebook run
pub const NOTEBOOK_DX: f64 = 0.01;

/// `D = 0.1`, `dt = 0.1`, `dx = 0.01`, default extents and boundaries
pub fn notebook_scenario() -> (Scenario, SolverConfiguration) {
    (
        Scenario::with_default_boundaries(0.1),
        SolverConfiguration::new(NOTEBOOK_DT, NOTEBOOK_DX),
    )
}

/// Straightforward nested-loop version of the scheme, indexed `[i][n]`
///
/// Written independently of the library so the two can be compared value
/// for value.
pub fn reference_stencil(
    d: f64,
    dt: f64,
    dx: f64,
    nx: usize,
    nt: usize,
    left: f64,
    right: f64,
) -> Vec<Vec<f64>> {
    let coefficient = (d * dt) / (4.0 * dx);
    let mut field = vec![vec![0.0; nt]; nx];

    for n in 0..nt.saturating_sub(1) {
        for i in 1..nx - 1 {
            field[i][n + 1] = field[i][n]
                + coefficient * (field[i + 1][n] - 2.0 * field[i][n] + field[i - 1][n]);
        }
        field[0][n + 1] = left;
        field[nx - 1][n + 1] = right;
    }

    field
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_reference_first_column_is_zero() {
        let field = reference_stencil(0.1, 0.1, 0.01, 5, 3, 1.0, 0.0);
        assert!(field.iter().all(|row| row[0] == 0.0));
        assert_eq!(field[0][1], 1.0);
    }
}
