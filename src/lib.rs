//! diffusion-rs: one-dimensional diffusion with an explicit stencil
//!
//! Computes the concentration `C(x, t)` on a uniform grid `x in [0, x_extent)`
//! for every time `t in [0, t_extent)`, with fixed (Dirichlet) values at both
//! edges of the domain, and returns the whole space-time field.
//!
//! # Architecture
//!
//! 1. **Separation of Problem and Numerics**
//!    - A scenario defines the problem (what to solve: `D`, edge values)
//!    - A configuration defines the discretisation (how: `dt`, `dx`, extents)
//!    - A solver applies the numerical scheme to both
//!
//! 2. **Fail before computing**
//!    - Every parameter is validated before the field is allocated
//!    - The time loop itself never fails, even when it diverges
//!
//! # Quick Start
//!
//! ```rust
//! use diffusion_rs::solver::{ExplicitStencilSolver, Scenario, Solver, SolverConfiguration};
//!
//! // 1. Scenario: D = 0.1, C(0) = 1, C(end) = 0
//! let scenario = Scenario::with_default_boundaries(0.1);
//!
//! // 2. Discretisation: dt = 0.1, dx = 0.01 over [0, 1) x [0, 10)
//! let config = SolverConfiguration::new(0.1, 0.01);
//!
//! // 3. Solve
//! let field = ExplicitStencilSolver::new().solve(&scenario, &config).unwrap();
//!
//! // 4. Access results
//! assert_eq!(field.shape(), (100, 100));
//! let near_source = field.time_series(1);
//! assert!(near_source[99] > 0.0 && near_source[99] < 1.0);
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Grid, timeline and the concentration field
//! - [`solver`]: Scenario, configuration and numerical methods
//! - [`output`]: Plotting and CSV export
//! - [`error`]: Solver errors
//!
//! # Features
//!
//! - `parallel`: sweep the interior of each time step with Rayon on large
//!   grids (see [`solver::set_parallel_threshold`])

// Core modules
pub mod error;
pub mod physics;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use diffusion_rs::prelude::*;
    //!
    //! let field: ConcentrationField = solve(0.1, 0.1, 0.01).unwrap();
    //! assert_eq!(field.nx(), 100);
    //! ```
    pub use crate::error::SolverError;
    pub use crate::physics::{ConcentrationField,
                             Grid,
                             Timeline};
    pub use crate::solver::{solve,
                            solve_with,
                            DirichletBoundaries,
                            ExplicitStencilSolver,
                            Scenario,
                            Solver,
                            SolverConfiguration};
}
