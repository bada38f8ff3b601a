//! Physical domain: coordinates and the concentration field
//!
//! This module holds the data the solver works on, independently of how the
//! field gets computed:
//!
//! - **Grid / Timeline** ([`UniformAxis`]): half-open uniform coordinate
//!   ranges `[0, extent)`, immutable once built
//! - **Concentration field** ([`ConcentrationField`]): the `(Nx, Nt)` array
//!   `C(x_i, t_n)`, read-only once returned by a solver
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::physics::{Grid, Timeline};
//!
//! let grid: Grid = Grid::new(0.01, 1.0).unwrap();
//! let timeline: Timeline = Timeline::new(0.1, 10.0).unwrap();
//!
//! assert_eq!((grid.len(), timeline.len()), (100, 100));
//! ```

pub mod axis;
pub mod field;

pub use axis::{Grid, Timeline, UniformAxis};
pub use field::{ConcentrationField, Snapshot};
