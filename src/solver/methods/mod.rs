//! Numerical methods for the diffusion equation
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`ExplicitStencilSolver`]**: explicit three-point stencil with Dirichlet edges
//!   - Cost: one stencil evaluation per interior point and time step
//!   - Stability: conditional, unchecked
//!   - Parallel interior sweep with the `parallel` feature
//!
//! Each solver is stateless and can be reused for any number of scenarios.

pub mod explicit;

pub use explicit::ExplicitStencilSolver;
