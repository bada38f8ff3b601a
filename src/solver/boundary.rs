//! Dirichlet boundary values of the one-dimensional domain
//!
//! The domain has exactly two edges: `x_0` (left) and `x_{Nx-1}` (right).
//! Both are held at fixed values for every time step after the initial one.

use std::fmt;

use crate::error::SolverError;

// =================================================================================================
// Dirichlet Boundaries
// =================================================================================================

/// Fixed concentrations at the two edges of the grid
///
/// # Semantics
///
/// After each interior sweep the solver overwrites row `0` with `left` and
/// row `Nx - 1` with `right`. The initial column (`t = 0`) is left untouched,
/// so the edges read `0.0` there whatever the boundary values are.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::DirichletBoundaries;
///
/// let source_and_sink = DirichletBoundaries::default();
/// assert_eq!((source_and_sink.left, source_and_sink.right), (1.0, 0.0));
///
/// let reversed = DirichletBoundaries::new(0.0, 2.5);
/// assert!(reversed.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirichletBoundaries {
    /// Value held at `x_0`
    pub left: f64,

    /// Value held at `x_{Nx-1}`
    pub right: f64,
}

impl DirichletBoundaries {
    /// Default left value (unit source)
    pub const DEFAULT_LEFT: f64 = 1.0;

    /// Default right value (perfect sink)
    pub const DEFAULT_RIGHT: f64 = 0.0;

    /// Create boundaries from the two edge values
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Both edges held at the same value
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Check that both values are finite
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.left.is_finite() {
            return Err(SolverError::invalid("left_boundary", self.left, "must be finite"));
        }
        if !self.right.is_finite() {
            return Err(SolverError::invalid("right_boundary", self.right, "must be finite"));
        }
        Ok(())
    }
}

impl Default for DirichletBoundaries {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEFT, Self::DEFAULT_RIGHT)
    }
}

impl fmt::Display for DirichletBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C(x_0) = {}, C(x_Nx-1) = {}", self.left, self.right)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
