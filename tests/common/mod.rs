//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    notebook_scenario,
    reference_stencil,
    relative_error,
    NOTEBOOK_DT,
    NOTEBOOK_DX,
};
