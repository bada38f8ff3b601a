//! Uniform coordinate axes
//!
//! Both the spatial grid and the timeline are half-open, uniformly spaced
//! ranges `[0, extent)` sampled every `step`. They are built once from the
//! configuration scalars and never mutated afterwards.

use std::fmt;

use crate::error::SolverError;

/// Uniformly spaced half-open axis `[0, extent)`
///
/// # Point count
///
/// The number of points is `floor(extent / step)`, clamped at zero for
/// negative extents. With `extent = 1.0` and `step = 0.01` this gives 100
/// points `0.00, 0.01, ..., 0.99`.
///
/// # Coordinates
///
/// The coordinate of index `i` is computed directly as `i * step` rather than
/// by accumulating `step`, so the last coordinate carries a single rounding
/// error instead of `len` of them.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::physics::UniformAxis;
///
/// let grid = UniformAxis::new(0.25, 1.0).unwrap();
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid.coordinates(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformAxis {
    step: f64,
    extent: f64,
    len: usize,
}

/// Spatial axis, indexed by `i`
pub type Grid = UniformAxis;

/// Temporal axis, indexed by `n`
pub type Timeline = UniformAxis;

impl UniformAxis {
    /// Create an axis covering `[0, extent)` with spacing `step`
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidParameter`] when `step` is not a finite
    /// strictly positive number or when `extent` is not finite.
    pub fn new(step: f64, extent: f64) -> Result<Self, SolverError> {
        Self::named(("step", step), ("extent", extent))
    }

    /// Same as [`UniformAxis::new`], reporting errors under the given
    /// parameter names (`"dx"`, `"x_extent"`, ...)
    pub(crate) fn named(
        (step_name, step): (&'static str, f64),
        (extent_name, extent): (&'static str, f64),
    ) -> Result<Self, SolverError> {
        if step.is_nan() {
            return Err(SolverError::invalid(step_name, step, "must be a number"));
        }
        if step <= 0.0 {
            return Err(SolverError::invalid(step_name, step, "must be strictly positive"));
        }
        if step.is_infinite() {
            return Err(SolverError::invalid(step_name, step, "must be finite"));
        }
        if !extent.is_finite() {
            return Err(SolverError::invalid(extent_name, extent, "must be finite"));
        }

        Ok(Self {
            step,
            extent,
            len: point_count(extent, step),
        })
    }

    /// Number of points on the axis
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the extent is shorter than one step
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Spacing between consecutive points
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Upper (excluded) bound of the axis
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Coordinate of index `index`
    ///
    /// Indices past the end are extrapolated with the same spacing.
    pub fn coordinate(&self, index: usize) -> f64 {
        index as f64 * self.step
    }

    /// Iterate over all coordinates in increasing order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |index| self.coordinate(index))
    }

    /// All coordinates collected into a vector
    pub fn coordinates(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

impl fmt::Display for UniformAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0, {}) step {} ({} points)", self.extent, self.step, self.len)
    }
}

/// `floor(extent / step)`, never negative
fn point_count(extent: f64, step: f64) -> usize {
    let ratio = (extent / step).floor();
    if ratio <= 0.0 {
        0
    } else {
        // `as` saturates at usize::MAX; oversized fields are rejected at allocation
        ratio as usize
    }
}

// =================================================================================================
// Tests
// =================================================================================================
