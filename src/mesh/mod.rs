//! Mesh topology construction.
//!
//! Provides the structured-to-unstructured conversion pipeline:
//! - Per-cell corner derivation with odd-reflection boundary extrapolation
//! - Node deduplication with the rectangular-grid node-count invariant
//! - 1-based element-node connectivity (counter-clockwise NW/SW/SE/NE)
//! - Element masking (artificial or supplied)
//! - The assembled unstructured mesh record and its builder

mod connectivity;
mod corners;
mod dedup;
mod error;
mod mask;
mod nodes;
mod unstructured;

pub use connectivity::build_connectivity;
pub use corners::{interpolate_corners, CellCorners};
pub use error::MeshError;
pub use mask::{ElementMask, MaskStatistics};
pub use nodes::extract_nodes;
pub use unstructured::{MeshBuilder, UnstructuredMesh};
