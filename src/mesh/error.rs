//! Error type for mesh construction.

use thiserror::Error;

use crate::grid::GridError;
use crate::types::GridDims;

/// Error type for the mesh-construction pipeline.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid grid axes.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The deduplicated node count does not match the closed-form count
    /// for a non-periodic rectangular grid.
    ///
    /// The mesh cannot be trusted: either the corner computation or the
    /// deduplication is defective, or the input grid degenerates (e.g. a
    /// single-cell grid, whose corner extent is unrecoverable from its one
    /// center). Construction aborts; no partial mesh is returned.
    #[error("the size of unique coordinate pairs is {found} but expected size is {expected}")]
    NodeCountMismatch { found: usize, expected: usize },

    /// The supplied mask is not shaped like the cell grid.
    #[error("mask shape {mask_dims} does not match the grid shape {grid_dims}")]
    MaskShapeMismatch {
        mask_dims: GridDims,
        grid_dims: GridDims,
    },

    /// The supplied per-element area array has the wrong length.
    #[error("area array has {actual} entries but the grid has {expected} elements")]
    AreaLengthMismatch { expected: usize, actual: usize },
}
