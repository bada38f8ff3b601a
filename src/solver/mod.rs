//! Numerical solvers
//!
//! This module turns a diffusion problem into a [`ConcentrationField`].
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Diffusion coefficient `D`
//!    - Dirichlet values at both edges
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to discretise
//!    - Time step `dt` and grid spacing `dx`
//!    - Spatial and temporal extents
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Validates everything before allocating
//!    - Returns the full space-time field
//!
//! # Quick Start Example
//!
//! ```rust
//! use diffusion_rs::solver::{
//!     DirichletBoundaries, ExplicitStencilSolver, Scenario, Solver, SolverConfiguration,
//! };
//!
//! // 1. Scenario (WHAT to solve)
//! let scenario = Scenario::new(0.1, DirichletBoundaries::new(1.0, 0.0));
//!
//! // 2. Configuration (HOW to discretise)
//! let config = SolverConfiguration::new(0.1, 0.01).with_time_extent(10.0);
//!
//! // 3. Solve
//! let field = ExplicitStencilSolver::new().solve(&scenario, &config).unwrap();
//! assert_eq!(field.shape(), (100, 100));
//! ```
//!
//! The [`solve`] and [`solve_with`] shortcuts build the scenario and the
//! configuration from plain scalars.
//!
//! # Error Handling
//!
//! Every failure is reported before any computation as a [`SolverError`]:
//!
//! ```rust
//! use diffusion_rs::solver::solve;
//!
//! match solve(0.1, 0.0, 0.01) {
//!     Ok(field) => println!("{} computed", field),
//!     Err(e) => assert!(e.is_invalid_parameter()),
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod boundary;
mod scenario;
mod methods;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding when to hand the interior sweep to Rayon is an execution concern,
// not a physics one, so it lives here rather than in the stencil itself.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (benchmarks and tests) without a mutex on every solve. Relaxed
// ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of interior points above which the sweep runs on Rayon.
///
/// Below that point the thread-pool dispatch costs more than the three
/// multiply-adds per point it would spread.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The explicit solver sweeps sequentially when the grid has at most this
/// many interior points, and switches to Rayon above it, but only when the
/// crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(4096);
/// assert_eq!(parallel_threshold(), 4096);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serialises unit tests that change the threshold.
#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Holds [`THRESHOLD_LOCK`] for its whole lifetime. Only compiled in test
/// builds.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Solver, SolverConfiguration};

pub use boundary::DirichletBoundaries;
pub use scenario::Scenario;

pub use methods::ExplicitStencilSolver;

pub use crate::error::SolverError;

use crate::physics::ConcentrationField;

// =================================================================================================
// Shortcuts
// =================================================================================================

/// Solve with the default extents (`x in [0, 1)`, `t in [0, 10)`) and the
/// default boundaries (`left = 1`, `right = 0`)
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::solve;
///
/// let field = solve(0.1, 0.1, 0.01).unwrap();
/// assert_eq!(field.shape(), (100, 100));
/// assert_eq!(field[(0, 1)], 1.0);
/// ```
pub fn solve(
    diffusion: f64,
    time_step: f64,
    space_step: f64,
) -> Result<ConcentrationField, SolverError> {
    solve_with(
        diffusion,
        time_step,
        space_step,
        SolverConfiguration::DEFAULT_SPACE_EXTENT,
        SolverConfiguration::DEFAULT_TIME_EXTENT,
        DirichletBoundaries::DEFAULT_LEFT,
        DirichletBoundaries::DEFAULT_RIGHT,
    )
}

/// Solve with every parameter spelled out
///
/// # Errors
///
/// - `dt <= 0`, `dx <= 0` or `D < 0`
/// - fewer than 3 grid points or no time point
/// - a field too large to allocate
/// - any non-finite input. This covers the boundary values too: a NaN or
///   infinite `left_boundary` or `right_boundary` is rejected up front
///   instead of being written into the edge rows.
///
/// Values that grow without bound during the run are not errors.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::error::SolverError;
/// use diffusion_rs::solver::solve_with;
///
/// let field = solve_with(0.1, 0.1, 0.01, 0.5, 2.0, 0.0, 1.0).unwrap();
/// assert_eq!(field.shape(), (50, 20));
/// assert_eq!(field[(49, 1)], 1.0);
///
/// let error = solve_with(0.1, 0.1, 0.01, 1.0, 10.0, f64::INFINITY, 0.0).unwrap_err();
/// assert!(matches!(error, SolverError::InvalidParameter { parameter: "left_boundary", .. }));
/// ```
pub fn solve_with(
    diffusion: f64,
    time_step: f64,
    space_step: f64,
    space_extent: f64,
    time_extent: f64,
    left_boundary: f64,
    right_boundary: f64,
) -> Result<ConcentrationField, SolverError> {
    let scenario = Scenario::new(diffusion, DirichletBoundaries::new(left_boundary, right_boundary));
    let config = SolverConfiguration::new(time_step, space_step)
        .with_space_extent(space_extent)
        .with_time_extent(time_extent);

    ExplicitStencilSolver::new().solve(&scenario, &config)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 999);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let guard = ThresholdGuard::save(42);
        assert_eq!(parallel_threshold(), 42);

        let before = guard.previous;
        drop(guard);

        let check = ThresholdGuard::save(before);
        assert_eq!(check.previous, before);
    }

    #[test]
    fn test_solve_uses_defaults() {
        let field = solve(0.1, 0.1, 0.01).unwrap();
        let explicit = solve_with(0.1, 0.1, 0.01, 1.0, 10.0, 1.0, 0.0).unwrap();
        assert_eq!(field, explicit);
    }

    #[test]
    fn test_solve_with_extents() {
        let field = solve_with(0.1, 0.1, 0.01, 0.5, 2.0, 0.0, 1.0).unwrap();
        assert_eq!(field.shape(), (50, 20));
        assert_eq!(field.grid().extent(), 0.5);
        assert_eq!(field.timeline().step(), 0.1);
    }

    #[test]
    fn test_solve_rejects_bad_input() {
        assert!(solve(0.1, 0.0, 0.01).is_err());
        assert!(solve(0.1, 0.1, 0.0).is_err());
        assert!(solve(-0.1, 0.1, 0.01).is_err());
        assert!(solve_with(0.1, 0.1, 0.01, 1.0, 10.0, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_solve_with_rejects_non_finite_boundaries() {
        let error = solve_with(0.1, 0.1, 0.01, 1.0, 10.0, f64::NAN, 0.0).unwrap_err();
        assert!(matches!(error, SolverError::InvalidParameter { parameter: "left_boundary", .. }));

        let error = solve_with(0.1, 0.1, 0.01, 1.0, 10.0, 1.0, f64::NEG_INFINITY).unwrap_err();
        assert!(matches!(error, SolverError::InvalidParameter { parameter: "right_boundary", .. }));

        // large but finite edge values are written as given
        let field = solve_with(0.1, 0.1, 0.01, 1.0, 1.0, f64::MAX, -f64::MAX).unwrap();
        assert_eq!(field[(0, 1)], f64::MAX);
        assert_eq!(field[(99, 1)], -f64::MAX);
    }
}
