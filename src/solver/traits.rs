//! Numerical solver traits and configuration
//!
//! # Design Philosophy
//!
//! - [`Scenario`](crate::solver::Scenario) says WHAT is solved (coefficient
//!   and boundary values)
//! - [`SolverConfiguration`] says HOW it is discretised (steps and extents)
//! - [`Solver`] applies a numerical method to the pair
//!
//! The configuration owns the discretisation checks that can be decided from
//! the steps and extents alone: positive steps, finite extents, at least one
//! interior grid point and at least one time point.

use crate::error::SolverError;
use crate::physics::{ConcentrationField, Grid, Timeline, UniformAxis};
use crate::solver::Scenario;

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Trait for numerical solvers
///
/// # Responsibility
///
/// Turns a scenario and a discretisation into a fully populated
/// [`ConcentrationField`]. Implementations validate every input before
/// allocating the field and never fail once the time loop has started.
pub trait Solver: Send + Sync {
    /// Solve `scenario` on the discretisation described by `config`
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] when a parameter is out of range; no field
    /// is produced in that case.
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<ConcentrationField, SolverError>;

    /// Name of the method (used for display and logging)
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Solver Configuration
// =================================================================================================

/// Spatial and temporal discretisation
///
/// # Defaults
///
/// Only the two step sizes are required. The extents default to the domain
/// `x in [0, 1)` and `t in [0, 10)`.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::new(0.1, 0.01);
/// assert_eq!(config.grid().unwrap().len(), 100);
/// assert_eq!(config.timeline().unwrap().len(), 100);
///
/// let short = config.with_time_extent(1.0);
/// assert_eq!(short.timeline().unwrap().len(), 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Time step `dt`
    pub time_step: f64,

    /// Grid spacing `dx`
    pub space_step: f64,

    /// Upper (excluded) bound of the spatial domain
    pub space_extent: f64,

    /// Upper (excluded) bound of the simulated time
    pub time_extent: f64,
}

impl SolverConfiguration {
    /// Default spatial extent
    pub const DEFAULT_SPACE_EXTENT: f64 = 1.0;

    /// Default simulated time
    pub const DEFAULT_TIME_EXTENT: f64 = 10.0;

    /// Create a configuration with default extents
    pub fn new(time_step: f64, space_step: f64) -> Self {
        Self {
            time_step,
            space_step,
            space_extent: Self::DEFAULT_SPACE_EXTENT,
            time_extent: Self::DEFAULT_TIME_EXTENT,
        }
    }

    /// Builder pattern: set the spatial extent
    pub fn with_space_extent(mut self, space_extent: f64) -> Self {
        self.space_extent = space_extent;
        self
    }

    /// Builder pattern: set the simulated time
    pub fn with_time_extent(mut self, time_extent: f64) -> Self {
        self.time_extent = time_extent;
        self
    }

    /// Spatial grid `x_i = i * dx` over `[0, space_extent)`
    pub fn grid(&self) -> Result<Grid, SolverError> {
        UniformAxis::named(("dx", self.space_step), ("x_extent", self.space_extent))
    }

    /// Timeline `t_n = n * dt` over `[0, time_extent)`
    pub fn timeline(&self) -> Result<Timeline, SolverError> {
        UniformAxis::named(("dt", self.time_step), ("t_extent", self.time_extent))
    }

    /// Validate configuration and return the axes it describes
    ///
    /// Checks, in order: `dt` and `t_extent`, `dx` and `x_extent`, then the
    /// derived point counts (`Nx >= 3`, `Nt >= 1`).
    pub fn axes(&self) -> Result<(Grid, Timeline), SolverError> {
        let timeline = self.timeline()?;
        let grid = self.grid()?;

        if grid.len() < 3 {
            return Err(SolverError::GridTooSmall { points: grid.len() });
        }
        if timeline.is_empty() {
            return Err(SolverError::EmptyTimeline {
                time_extent: self.time_extent,
                time_step: self.time_step,
            });
        }

        Ok((grid, timeline))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SolverError> {
        self.axes().map(|_| ())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
