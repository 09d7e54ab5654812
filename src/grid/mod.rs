//! Structured source-grid representation.
//!
//! Provides the input side of mesh construction:
//! - Dense 2D per-cell fields with `(i, j)` indexing
//! - Separable (1D) and curvilinear (2D) coordinate axes with rank and
//!   shape validation, normalized to dense center-coordinate fields

mod axes;
mod field2d;

pub use axes::{GridAxes, GridError, RawAxis};
pub use field2d::Field2D;
