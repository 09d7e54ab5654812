//! Strongly-typed domain types for safer APIs.
//!
//! Small newtypes that make the mesh-construction APIs self-documenting:
//! grid dimensions carry their derived element/node counts, and coordinate
//! units are a closed label set instead of a free-form string.

mod dims;
mod units;

pub use dims::GridDims;
pub use units::CoordUnits;
