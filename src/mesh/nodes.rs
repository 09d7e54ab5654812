//! Node extraction: collapse shared cell corners into unique mesh nodes.
//!
//! A corner sits at the meeting point of up to 4 adjacent cells and each of
//! those cells carries the identical averaged value, so flattening all
//! per-cell corners and removing exact duplicates yields the global node
//! list. Node `k` is the `k`-th distinct pair in the canonical corner
//! stream (cell-major, corner-minor).

use crate::diagnostics::DiagnosticSink;
use crate::mesh::corners::CellCorners;
use crate::mesh::dedup::group_pairs;
use crate::mesh::error::MeshError;

/// Deduplicate all cell corners into the unique node coordinate list,
/// `[lon, lat]` per node, 0-based ids in first-occurrence order.
///
/// Enforces the rectangular-grid node-count invariant: a non-periodic
/// `nlon × nlat` grid must produce exactly
/// `nlon*nlat + nlon + nlat + 1` unique nodes. A mismatch means the
/// topology computation is defective and the whole construction aborts
/// with [`MeshError::NodeCountMismatch`] after reporting the counts to the
/// diagnostic sink.
pub fn extract_nodes(
    corners: &CellCorners,
    diagnostics: &dyn DiagnosticSink,
) -> Result<Vec<[f64; 2]>, MeshError> {
    let nodes = group_pairs(corners.pairs()).unique;

    let expected = corners.dims().node_count();
    if nodes.len() != expected {
        diagnostics.warn(&format!(
            "the size of unique coordinate pairs is {} but expected size is {}!",
            nodes.len(),
            expected
        ));
        return Err(MeshError::NodeCountMismatch {
            found: nodes.len(),
            expected,
        });
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SilentDiagnostics;
    use crate::grid::GridAxes;
    use crate::mesh::corners::interpolate_corners;

    fn corners_for(lons: &[f64], lats: &[f64]) -> CellCorners {
        let axes = GridAxes::separable(lons.to_vec(), lats.to_vec()).unwrap();
        let (lon2d, lat2d) = axes.center_fields();
        interpolate_corners(&lon2d, &lat2d)
    }

    #[test]
    fn test_node_count_3x3() {
        let corners = corners_for(&[0.0, 10.0, 20.0], &[0.0, 10.0, 20.0]);
        let nodes = extract_nodes(&corners, &SilentDiagnostics).unwrap();
        assert_eq!(nodes.len(), 16);
    }

    #[test]
    fn test_first_node_is_first_corner() {
        let corners = corners_for(&[0.0, 10.0], &[0.0, 10.0]);
        let nodes = extract_nodes(&corners, &SilentDiagnostics).unwrap();
        // Node 0 is element 0's NW corner, the first pair in the stream.
        assert_eq!(nodes[0], [corners.lon[0][0], corners.lat[0][0]]);
    }

    #[test]
    fn test_single_cell_violates_invariant() {
        // A 1x1 grid cannot recover its corner extent: all 4 corners
        // coincide and collapse to one node, while the closed form
        // expects 4.
        let corners = corners_for(&[5.0], &[5.0]);
        let err = extract_nodes(&corners, &SilentDiagnostics).unwrap_err();
        assert!(matches!(
            err,
            MeshError::NodeCountMismatch {
                found: 1,
                expected: 4
            }
        ));
    }
}
