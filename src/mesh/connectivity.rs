//! Element connectivity: per-cell node indices.
//!
//! Each element's 4 corners are resolved back to the node ids assigned
//! during deduplication, as 1-based indices in NW, SW, SE, NE order.
//! Group numbering preserves first-occurrence order in the canonical
//! corner stream (the same stream node extraction consumes), so index
//! `k + 1` here refers to node `k` there by construction.

use crate::mesh::corners::CellCorners;
use crate::mesh::dedup::group_pairs;

/// Build the element connectivity table: for element `e`,
/// `connectivity[e]` holds the 1-based node indices of its NW, SW, SE, NE
/// corners. Every entry lies in `[1, node_count]`.
pub fn build_connectivity(corners: &CellCorners) -> Vec<[i32; 4]> {
    let group_ids = group_pairs(corners.pairs()).group_ids;

    // Node counts beyond i32 are far outside this tool's domain; the
    // 1-based i32 convention comes from the mesh-file format.
    group_ids
        .chunks_exact(4)
        .map(|cell| {
            [
                cell[0] as i32 + 1,
                cell[1] as i32 + 1,
                cell[2] as i32 + 1,
                cell[3] as i32 + 1,
            ]
        })
        .collect()
}
