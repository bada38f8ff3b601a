//! Explicit three-point stencil for the one-dimensional diffusion equation
//!
//! # Mathematical Background
//!
//! The field `C(x, t)` evolves under
//!
//! ```text
//! dC/dt = D * d²C/dx²
//! ```
//!
//! Each time column is computed from the previous one only:
//!
//! ```text
//! C[i, n+1] = C[i, n] + (D * dt) / (4 * dx) * (C[i+1, n] - 2 * C[i, n] + C[i-1, n])
//! ```
//!
//! for every interior index `i` in `1 ..= Nx-2`. The edges are then
//! overwritten with the Dirichlet values.
//!
//! # The `4 * dx` coefficient
//!
//! The textbook forward-time centred-space scheme uses `D * dt / dx²`. This
//! solver applies `D * dt / (4 * dx)` exactly as written above, so its output
//! matches reference runs value for value. Do not "fix" it here: a different
//! coefficient is a different solver.
//!
//! # Characteristics
//!
//! - **Cost**: `O(Nx * Nt)` arithmetic, `Nx * Nt * 8` bytes of storage
//! - **Stability**: conditional, and NOT checked. A coefficient above `0.5`
//!   makes the field oscillate and grow; the solver returns it as is.
//! - **Initial column**: never written. Column `0` stays all zero, edges
//!   included.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::solver::{ExplicitStencilSolver, Scenario, Solver, SolverConfiguration};
//!
//! let solver = ExplicitStencilSolver::new();
//! let scenario = Scenario::with_default_boundaries(0.1);
//! let config = SolverConfiguration::new(0.1, 0.01);
//!
//! let field = solver.solve(&scenario, &config).unwrap();
//! assert_eq!(field.shape(), (100, 100));
//! assert_eq!(field[(0, 0)], 0.0);
//! assert_eq!(field[(0, 1)], 1.0);
//! ```

use log::debug;

use crate::error::SolverError;
use crate::physics::ConcentrationField;
use crate::solver::{DirichletBoundaries, Scenario, Solver, SolverConfiguration};

// =================================================================================================
// Explicit Stencil Solver
// =================================================================================================

/// Explicit time-marching solver for 1-D diffusion with Dirichlet edges
///
/// # Algorithm
///
/// 1. Validate configuration and scenario, derive `Nx` and `Nt`
/// 2. Allocate a zero-filled `(Nx, Nt)` field
/// 3. For each `n = 1 .. Nt-1`:
///    - sweep the interior of column `n` from column `n - 1`
///    - write `left` to row `0` and `right` to row `Nx - 1`
/// 4. Return the field
///
/// The solver holds no state and can be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitStencilSolver;

impl ExplicitStencilSolver {
    /// Create a new explicit stencil solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::solver::{ExplicitStencilSolver, Solver};
    ///
    /// let solver = ExplicitStencilSolver::new();
    /// assert_eq!(solver.name(), "Explicit Stencil");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Stencil coefficient `(D * dt) / (4 * dx)`
    pub fn coefficient(diffusion: f64, time_step: f64, space_step: f64) -> f64 {
        (diffusion * time_step) / (4.0 * space_step)
    }
}

impl Solver for ExplicitStencilSolver {

    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<ConcentrationField, SolverError> {

        // ====== Step 1: Validation ======

        let (grid, timeline) = config.axes()?;
        scenario.validate()?;

        // ====== Step 2: Setup ======

        let coefficient =
            Self::coefficient(scenario.diffusion, config.time_step, config.space_step);
        let DirichletBoundaries { left, right } = scenario.boundaries;

        let mut field = ConcentrationField::zeros(grid, timeline)?;
        let (nx, nt) = field.shape();

        let parallel = nx - 2 > crate::solver::parallel_threshold();

        debug!(
            "{}: Nx = {}, Nt = {}, coefficient = {}, parallel sweep = {}",
            self.name(),
            nx,
            nt,
            coefficient,
            parallel
        );

        // ====== Step 3: Time Marching ======

        let values = field.as_mut_slice();

        for n in 1..nt {
            // columns 0..n are final, column n is the one being written
            let (done, pending) = values.split_at_mut(n * nx);
            let previous = &done[(n - 1) * nx..];
            let next = &mut pending[..nx];

            sweep_interior(previous, next, coefficient, parallel);

            next[0] = left;
            next[nx - 1] = right;
        }

        // ====== Step 4: Result ======

        Ok(field)
    }

    fn name(&self) -> &'static str {
        "Explicit Stencil"
    }
}

// =================================================================================================
// Interior Sweep
// =================================================================================================

/// Write the interior of `next` from `previous`
///
/// `previous` and `next` are two time columns of the same length `Nx >= 3`.
/// Edge entries of `next` are left untouched. Both paths evaluate the same
/// expression per point, so they agree bit for bit.
pub(crate) fn sweep_interior(previous: &[f64], next: &mut [f64], coefficient: f64, parallel: bool) {
    debug_assert_eq!(previous.len(), next.len());
    debug_assert!(previous.len() >= 3);

    let interior = &mut next[1..previous.len() - 1];

    if parallel {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            interior
                .par_iter_mut()
                .zip(previous.par_windows(3))
                .for_each(|(value, window)| *value = stencil(window, coefficient));
            return;
        }
    }

    interior
        .iter_mut()
        .zip(previous.windows(3))
        .for_each(|(value, window)| *value = stencil(window, coefficient));
}

/// `[C[i-1], C[i], C[i+1]]` at time `n` to `C[i]` at time `n + 1`
#[inline]
fn stencil(window: &[f64], coefficient: f64) -> f64 {
    window[1] + coefficient * (window[2] - 2.0 * window[1] + window[0])
}

// =================================================================================================
// Tests
// =================================================================================================
