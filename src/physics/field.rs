//! Space-time concentration field
//!
//! The field stores `C(x_i, t_n)` for every grid point and every time point.
//! It is created zero-filled by the solver, filled one time column at a time,
//! and handed to the caller read-only.

use std::fmt;
use std::mem;
use std::ops::Index;

use nalgebra::DMatrix;

use crate::error::SolverError;
use crate::physics::axis::{Grid, Timeline};

/// Concentration values indexed `[i, n]` (space, time)
///
/// # Memory Layout
///
/// Backed by a column-major [`DMatrix`] of shape `(Nx, Nt)`: the spatial
/// profile at one time step is a contiguous slice, which is exactly what the
/// explicit scheme reads (column `n`) and writes (column `n + 1`).
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
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationField {
    values: DMatrix<f64>,
    grid: Grid,
    timeline: Timeline,
}

impl ConcentrationField {
    /// Allocate a zero-filled field sized by `grid` and `timeline`
    ///
    /// Fails with [`SolverError::FieldTooLarge`] when the storage would need
    /// more than `isize::MAX` bytes, the largest allocation Rust allows.
    pub(crate) fn zeros(grid: Grid, timeline: Timeline) -> Result<Self, SolverError> {
        let (nx, nt) = (grid.len(), timeline.len());

        let bytes = nx
            .checked_mul(nt)
            .and_then(|count| count.checked_mul(mem::size_of::<f64>()))
            .filter(|&bytes| bytes <= isize::MAX as usize);

        if bytes.is_none() {
            return Err(SolverError::FieldTooLarge { nx, nt });
        }

        Ok(Self {
            values: DMatrix::zeros(nx, nt),
            grid,
            timeline,
        })
    }

    /// Raw column-major storage, for the solver only
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        self.values.as_mut_slice()
    }

    // ========================================== Queries ==========================================

    /// Spatial grid the rows refer to
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Timeline the columns refer to
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Number of spatial points `Nx`
    pub fn nx(&self) -> usize {
        self.values.nrows()
    }

    /// Number of time points `Nt`
    pub fn nt(&self) -> usize {
        self.values.ncols()
    }

    /// `(Nx, Nt)`
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    /// Value at spatial index `i` and time index `n`, if in range
    pub fn get(&self, i: usize, n: usize) -> Option<f64> {
        self.values.get((i, n)).copied()
    }

    /// Smallest and largest value of the whole field
    ///
    /// Returns `(0.0, 0.0)` for an empty field. NaN values are skipped.
    pub fn value_range(&self) -> (f64, f64) {
        let (min, max) = self
            .values
            .iter()
            .filter(|value| !value.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
                (lo.min(value), hi.max(value))
            });

        if min > max {
            (0.0, 0.0)
        } else {
            (min, max)
        }
    }

    // ======================================== Extractions ========================================

    /// Spatial profile at time index `n` (column `n`)
    ///
    /// # Panics
    ///
    /// Panics when `n >= Nt`.
    pub fn profile(&self, n: usize) -> &[f64] {
        assert!(n < self.nt(), "time index {} out of range (Nt = {})", n, self.nt());
        let nx = self.nx();
        &self.values.as_slice()[n * nx..(n + 1) * nx]
    }

    /// Time series at spatial index `i` (row `i`)
    ///
    /// # Panics
    ///
    /// Panics when `i >= Nx`.
    pub fn time_series(&self, i: usize) -> Vec<f64> {
        assert!(i < self.nx(), "spatial index {} out of range (Nx = {})", i, self.nx());
        self.values.row(i).iter().copied().collect()
    }

    /// Every `every`-th time column, starting with `n = 0`
    ///
    /// This is the selection the plotting and export collaborators use.
    ///
    /// # Panics
    ///
    /// Panics when `every == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::solver::solve;
    ///
    /// let field = solve(0.1, 0.1, 0.01).unwrap();
    /// let times: Vec<f64> = field.snapshots(10).map(|s| s.time).collect();
    /// assert_eq!(times.len(), 10);
    /// assert_eq!(times[1], 1.0);
    /// ```
    pub fn snapshots(&self, every: usize) -> impl Iterator<Item = Snapshot<'_>> + '_ {
        assert!(every > 0, "snapshot interval must be at least 1");
        (0..self.nt()).step_by(every).map(move |index| Snapshot {
            index,
            time: self.timeline.coordinate(index),
            profile: self.profile(index),
        })
    }

    /// Borrow the underlying `(Nx, Nt)` matrix
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Consume the field and return the underlying matrix
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.values
    }
}

impl Index<(usize, usize)> for ConcentrationField {
    type Output = f64;

    /// `field[(i, n)]`, panicking when out of range
    fn index(&self, (i, n): (usize, usize)) -> &f64 {
        &self.values[(i, n)]
    }
}

impl fmt::Display for ConcentrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConcentrationField [{} * {}]", self.nx(), self.nt())
    }
}

/// One selected time column of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    /// Time index `n`
    pub index: usize,

    /// Time coordinate `t_n`
    pub time: f64,

    /// Concentration over the grid at `t_n`
    pub profile: &'a [f64],
}

// =================================================================================================
// Tests
// =================================================================================================
