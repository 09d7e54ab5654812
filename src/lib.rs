//! # gridmesh
//!
//! Converts a structured latitude/longitude grid into an unstructured-mesh
//! topology: a deduplicated node list plus, per grid cell, the four node
//! indices that bound it, in the convention expected by ESMF-style
//! unstructured-mesh consumers.
//!
//! This crate provides the building blocks of that conversion:
//! - Separable (1D) and curvilinear (2D) coordinate axes, normalized to
//!   dense center-coordinate fields
//! - Corner derivation by neighbor averaging, with odd-reflection
//!   extrapolation at domain boundaries
//! - Exact-equality node deduplication with a closed-form node-count
//!   invariant
//! - 1-based element connectivity in counter-clockwise NW/SW/SE/NE order
//! - Element masking (artificial or caller-supplied) and area passthrough
//! - NetCDF export of the finished mesh (behind the `netcdf` feature)
//!
//! # Example
//!
//! ```
//! use gridmesh::{GridAxes, MeshBuilder};
//!
//! let axes = GridAxes::separable(
//!     vec![0.0, 10.0, 20.0],
//!     vec![40.0, 50.0, 60.0],
//! ).unwrap();
//!
//! let mesh = MeshBuilder::new(axes).with_name("demo").build().unwrap();
//!
//! assert_eq!(mesh.node_count(), 16);
//! assert_eq!(mesh.element_count(), 9);
//! ```

pub mod diagnostics;
pub mod grid;
pub mod io;
pub mod mesh;
pub mod types;

// Re-export main types for convenience
pub use diagnostics::{ConsoleDiagnostics, DiagnosticSink, SilentDiagnostics};
pub use grid::{Field2D, GridAxes, GridError, RawAxis};
pub use mesh::{
    build_connectivity, extract_nodes, interpolate_corners, CellCorners, ElementMask,
    MaskStatistics, MeshBuilder, MeshError, UnstructuredMesh,
};
pub use types::{CoordUnits, GridDims};

pub use io::{write_esmf_mesh, EsmfError};
