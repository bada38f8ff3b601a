//! Solver error types
//!
//! Every error is a precondition violation detected before the field is
//! allocated. The stencil pass itself is pure arithmetic and never fails:
//! an unstable parameter set produces a growing field, not an error.

use thiserror::Error;

/// Errors reported by [`Solver::solve`](crate::solver::Solver::solve)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A scalar parameter is out of its admissible range
    #[error("invalid parameter `{parameter}` = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The spatial grid has no interior point
    #[error("spatial grid has {points} points, at least 3 are required (two boundaries and one interior point)")]
    GridTooSmall { points: usize },

    /// The timeline holds no time point at all
    #[error("time extent {time_extent} is shorter than one time step {time_step}")]
    EmptyTimeline { time_extent: f64, time_step: f64 },

    /// `Nx * Nt` values need more than `isize::MAX` bytes
    #[error("field of {nx} x {nt} points cannot be allocated")]
    FieldTooLarge { nx: usize, nt: usize },
}

impl SolverError {
    /// Whether the error belongs to the invalid-parameter family
    ///
    /// All current variants are parameter problems; callers that only care
    /// about "the inputs were wrong" can test this instead of matching.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            SolverError::InvalidParameter { .. }
                | SolverError::GridTooSmall { .. }
                | SolverError::EmptyTimeline { .. }
                | SolverError::FieldTooLarge { .. }
        )
    }

    pub(crate) fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        SolverError::InvalidParameter { parameter, value, reason }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
