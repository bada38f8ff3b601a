//! Integration tests: solver output against the properties of the scheme
//!
//! These tests drive the public API only and compare the field with an
//! independent nested-loop evaluation of the same update.

use approx::assert_relative_eq;

use diffusion_rs::error::SolverError;
use diffusion_rs::solver::{
    solve, solve_with, DirichletBoundaries, ExplicitStencilSolver, Scenario, Solver,
    SolverConfiguration,
};

mod common;
use common::{notebook_scenario, reference_stencil, relative_error, NOTEBOOK_DT, NOTEBOOK_DX};

// =================================================================================================
// Agreement with the reference loop
// =================================================================================================

#[test]
fn test_notebook_run_matches_reference_loop() {
    let (scenario, config) = notebook_scenario();
    let field = ExplicitStencilSolver::new().solve(&scenario, &config).unwrap();

    let reference = reference_stencil(0.1, NOTEBOOK_DT, NOTEBOOK_DX, 100, 100, 1.0, 0.0);

    for (i, row) in reference.iter().enumerate() {
        for (n, expected) in row.iter().enumerate() {
            assert_eq!(field[(i, n)], *expected, "C[{i}, {n}]");
        }
    }
}

#[test]
fn test_various_parameters_match_reference_loop() {
    let cases = [
        // (D, dt, dx, x_extent, t_extent, left, right)
        (0.5, 0.05, 0.1, 1.0, 3.0, 2.0, -1.0),
        (0.0, 0.1, 0.2, 1.0, 1.0, 1.0, 1.0),
        (1.0, 0.01, 0.02, 0.5, 0.5, 0.3, 0.7),
        (3.0, 0.2, 0.05, 2.0, 4.0, 1.0, 0.0),
    ];

    for (d, dt, dx, x_extent, t_extent, left, right) in cases {
        let field = solve_with(d, dt, dx, x_extent, t_extent, left, right).unwrap();
        let (nx, nt) = field.shape();
        let reference = reference_stencil(d, dt, dx, nx, nt, left, right);

        for i in 0..nx {
            assert_eq!(field.time_series(i), reference[i], "row {i} for D = {d}");
        }
    }
}

// =================================================================================================
// Invariants
// =================================================================================================

#[test]
fn test_shape_is_floor_of_ratios() {
    let cases = [
        (0.01, 1.0, 0.1, 10.0, (100, 100)),
        (0.3, 1.0, 0.3, 1.0, (3, 3)),
        (0.03, 1.0, 0.7, 10.0, (33, 14)),
        (0.25, 2.0, 1.0, 1.0, (8, 1)),
    ];

    for (dx, x_extent, dt, t_extent, expected) in cases {
        let field = solve_with(0.1, dt, dx, x_extent, t_extent, 1.0, 0.0).unwrap();
        assert_eq!(field.shape(), expected, "dx = {dx}, dt = {dt}");
    }
}

#[test]
fn test_edges_hold_boundary_values_after_first_step() {
    let scenario = Scenario::new(0.2, DirichletBoundaries::new(0.75, 0.125));
    let config = SolverConfiguration::new(0.05, 0.02).with_time_extent(2.0);

    let field = ExplicitStencilSolver::new().solve(&scenario, &config).unwrap();
    let last = field.nx() - 1;

    assert_eq!(field[(0, 0)], 0.0);
    assert_eq!(field[(last, 0)], 0.0);

    for n in 1..field.nt() {
        assert_eq!(field[(0, n)], 0.75);
        assert_eq!(field[(last, n)], 0.125);
    }
}

#[test]
fn test_initial_column_all_zero() {
    let field = solve(0.1, 0.1, 0.01).unwrap();
    assert!(field.profile(0).iter().all(|c| *c == 0.0));
}

#[test]
fn test_deterministic() {
    let first = solve(0.1, 0.1, 0.01).unwrap();
    let second = solve(0.1, 0.1, 0.01).unwrap();
    assert_eq!(first.as_matrix(), second.as_matrix());
}

#[test]
fn test_notebook_concrete_values() {
    let field = solve(0.1, 0.1, 0.01).unwrap();

    assert_eq!(field.shape(), (100, 100));
    assert_eq!(field[(1, 1)], 0.0);
    assert_eq!(field[(0, 1)], 1.0);
    assert_eq!(field[(98, 1)], 0.0);
    assert_eq!(field[(99, 1)], 0.0);
}

#[test]
fn test_front_moves_inward_monotonically() {
    let field = solve(0.1, 0.1, 0.01).unwrap();

    let near_source = field.time_series(1);
    let late = near_source[field.nt() - 1];
    assert!(late > 0.0 && late < 1.0);

    for pair in near_source.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-12);
    }

    // further from the source, lower concentration at the last time
    let profile = field.profile(field.nt() - 1);
    assert!(profile[1] > profile[5]);
    assert!(profile[5] > profile[20]);
}

#[test]
fn test_long_run_approaches_linear_profile() {
    // 10 points, coefficient 0.025, 20 000 steps
    let field = solve_with(0.1, 0.1, 0.1, 1.0, 2000.0, 1.0, 0.0).unwrap();
    let profile = field.profile(field.nt() - 1);

    for (i, c) in profile.iter().enumerate() {
        let expected = 1.0 - i as f64 / 9.0;
        assert!(
            relative_error(*c, expected) < 1e-6,
            "C[{i}] = {c}, expected {expected}"
        );
    }
}

#[test]
fn test_minimal_grid_single_interior_point() {
    let field = solve_with(0.1, 0.5, 0.25, 0.75, 2.0, 1.0, 0.0).unwrap();
    assert_eq!(field.nx(), 3);

    // C[1, n+1] = C[1, n] + 0.05 * (0 - 2 C[1, n] + 1)
    assert_eq!(field[(1, 1)], 0.0);
    assert_relative_eq!(field[(1, 2)], 0.05, epsilon = 1e-12);
    assert_relative_eq!(field[(1, 3)], 0.095, epsilon = 1e-12);
}

#[test]
fn test_unstable_run_is_returned() {
    let field = solve_with(10.0, 0.1, 0.01, 1.0, 2.0, 1.0, 0.0).unwrap();
    assert_eq!(field.shape(), (100, 20));

    let (low, high) = field.value_range();
    assert!(low < -1.0 || high > 1.0, "range [{low}, {high}]");
}

// =================================================================================================
// Rejected parameters
// =================================================================================================

#[test]
fn test_zero_steps_rejected() {
    let error = solve(0.1, 0.0, 0.01).unwrap_err();
    assert!(matches!(error, SolverError::InvalidParameter { parameter: "dt", .. }));

    let error = solve(0.1, 0.1, 0.0).unwrap_err();
    assert!(matches!(error, SolverError::InvalidParameter { parameter: "dx", .. }));
}

#[test]
fn test_negative_diffusion_rejected() {
    let error = solve(-1e-9, 0.1, 0.01).unwrap_err();
    assert!(matches!(error, SolverError::InvalidParameter { parameter: "D", .. }));
    assert!(error.is_invalid_parameter());
}

#[test]
fn test_grid_without_interior_rejected() {
    let error = solve(0.1, 0.1, 0.5).unwrap_err();
    assert_eq!(error, SolverError::GridTooSmall { points: 2 });
    assert!(error.to_string().contains("2 points"));
}

#[test]
fn test_empty_timeline_rejected() {
    let error = solve_with(0.1, 0.1, 0.01, 1.0, 0.0, 1.0, 0.0).unwrap_err();
    assert!(matches!(error, SolverError::EmptyTimeline { .. }));
}

#[test]
fn test_oversized_grid_rejected_before_allocation() {
    // dx = 1e-19 gives about 1e19 points, more bytes than isize::MAX
    let error = solve_with(0.1, 1.0, 1e-19, 1.0, 1.0, 1.0, 0.0).unwrap_err();

    assert!(matches!(error, SolverError::FieldTooLarge { nt: 1, .. }));
    assert!(error.is_invalid_parameter());
}

#[test]
fn test_non_finite_inputs_rejected() {
    assert!(solve(f64::NAN, 0.1, 0.01).is_err());
    assert!(solve(0.1, f64::NAN, 0.01).is_err());
    assert!(solve(0.1, 0.1, f64::INFINITY).is_err());
    assert!(solve_with(0.1, 0.1, 0.01, f64::INFINITY, 10.0, 1.0, 0.0).is_err());
    assert!(solve_with(0.1, 0.1, 0.01, 1.0, 10.0, 1.0, f64::NAN).is_err());
}

// =================================================================================================
// Parallel sweep
// =================================================================================================

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_sweep_matches_reference_loop() {
    use diffusion_rs::solver::{parallel_threshold, set_parallel_threshold};

    let previous = parallel_threshold();
    set_parallel_threshold(16);

    let field = solve_with(0.1, 0.1, 0.001, 1.0, 1.0, 1.0, 0.0);
    set_parallel_threshold(previous);

    let field = field.unwrap();
    let reference = reference_stencil(0.1, 0.1, 0.001, 1000, 10, 1.0, 0.0);

    for (i, row) in reference.iter().enumerate() {
        assert_eq!(field.time_series(i), *row, "row {i}");
    }
}
