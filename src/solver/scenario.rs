//! Simulation scenario definition
//!
//! A scenario combines the diffusion coefficient with the boundary values.
use crate::error::SolverError;
use crate::solver::boundary::DirichletBoundaries;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Diffusion coefficient `D`
/// - Dirichlet values at both edges of the domain
///
/// # Design
///
/// The same scenario can be solved on different grids or time steps.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use diffusion_rs::solver::{DirichletBoundaries, ExplicitStencilSolver, Scenario, Solver, SolverConfiguration};
///
/// let scenario = Scenario::new(0.1, DirichletBoundaries::default());
///
/// let coarse = SolverConfiguration::new(0.1, 0.02);
/// let fine = SolverConfiguration::new(0.1, 0.01);
///
/// let solver = ExplicitStencilSolver::new();
/// assert_eq!(solver.solve(&scenario, &coarse).unwrap().nx(), 50);
/// assert_eq!(solver.solve(&scenario, &fine).unwrap().nx(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Diffusion coefficient `D`
    pub diffusion: f64,

    /// Edge values
    pub boundaries: DirichletBoundaries,
}

impl Scenario {

    /// Create a scenario
    pub fn new(diffusion: f64, boundaries: DirichletBoundaries) -> Self {
        Self { diffusion, boundaries }
    }

    /// Scenario with the default source/sink boundaries
    pub fn with_default_boundaries(diffusion: f64) -> Self {
        Self::new(diffusion, DirichletBoundaries::default())
    }

    /// Verifying scenario content
    ///
    /// `D = 0` is accepted (the interior then never changes).
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.diffusion.is_nan() {
            return Err(SolverError::invalid("D", self.diffusion, "must be a number"));
        }
        if self.diffusion < 0.0 {
            return Err(SolverError::invalid("D", self.diffusion, "must not be negative"));
        }
        if self.diffusion.is_infinite() {
            return Err(SolverError::invalid("D", self.diffusion, "must be finite"));
        }
        self.boundaries.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let scenario = Scenario::with_default_boundaries(0.1);
        assert_eq!(scenario.boundaries, DirichletBoundaries::new(1.0, 0.0));
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_zero_diffusion_accepted() {
        assert!(Scenario::with_default_boundaries(0.0).validate().is_ok());
    }

    #[test]
    fn test_negative_diffusion_rejected() {
        let error = Scenario::with_default_boundaries(-0.1).validate().unwrap_err();
        assert_eq!(error, SolverError::invalid("D", -0.1, "must not be negative"));
    }

    #[test]
    fn test_non_finite_diffusion_rejected() {
        for d in [f64::NAN, f64::INFINITY] {
            let error = Scenario::with_default_boundaries(d).validate().unwrap_err();
            assert!(matches!(error, SolverError::InvalidParameter { parameter: "D", .. }));
        }
    }

    #[test]
    fn test_boundaries_are_validated() {
        let scenario = Scenario::new(0.1, DirichletBoundaries::new(f64::NAN, 0.0));
        assert!(scenario.validate().is_err());
    }
}
