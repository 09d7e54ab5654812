//! Cell corner derivation from neighboring cell centers.
//!
//! Every cell of the center grid gets 4 corner coordinates, one per
//! quadrant, each the arithmetic mean of the cell's own center and its
//! three neighbors in that quadrant. Edge and corner cells are handled by
//! padding the center grid with one ring of odd-reflection values, which
//! linearly extrapolates the coordinate trend past the boundary, so every
//! cell can be treated uniformly as having 4 real or extrapolated
//! neighbors.
//!
//! Corner convention (counter-clockwise around the cell):
//! - Corner 0: north-west
//! - Corner 1: south-west
//! - Corner 2: south-east
//! - Corner 3: north-east
//!
//! This ordering is a hard contract: node extraction, connectivity, and the
//! mesh-file convention all consume it.

use crate::grid::Field2D;
use crate::types::GridDims;

/// Per-cell corner coordinates, in canonical element order.
///
/// `lon[e]` and `lat[e]` hold element `e`'s 4 corner values in
/// NW, SW, SE, NE order.
#[derive(Clone, Debug, PartialEq)]
pub struct CellCorners {
    dims: GridDims,
    /// Corner longitudes per element, NW/SW/SE/NE.
    pub lon: Vec<[f64; 4]>,
    /// Corner latitudes per element, NW/SW/SE/NE.
    pub lat: Vec<[f64; 4]>,
}

impl CellCorners {
    /// Grid dimensions the corners were derived from.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Iterate all corner `[lon, lat]` pairs in cell-major, corner-minor
    /// order: all 4 corners of element 0, then element 1, and so on.
    ///
    /// This is the canonical flattened corner stream; node ids and
    /// connectivity group ids are both assigned from it.
    pub fn pairs(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.lon
            .iter()
            .zip(self.lat.iter())
            .flat_map(|(lon4, lat4)| (0..4).map(move |c| [lon4[c], lat4[c]]))
    }
}

/// Derive the 4 corner coordinates of every cell from the dense center
/// fields, longitude and latitude independently via the identical
/// algorithm.
///
/// # Panics
///
/// Panics if the two fields disagree in shape.
pub fn interpolate_corners(lon2d: &Field2D, lat2d: &Field2D) -> CellCorners {
    assert_eq!(
        lon2d.dims(),
        lat2d.dims(),
        "center fields must share one grid shape"
    );
    let dims = lon2d.dims();
    let padded_lon = pad_odd_reflect(lon2d);
    let padded_lat = pad_odd_reflect(lat2d);
    CellCorners {
        dims,
        lon: corner_field(&padded_lon, dims),
        lat: corner_field(&padded_lat, dims),
    }
}

/// Pad a center field by one ring of odd-reflection values.
///
/// The padded value at distance `d` beyond a boundary is
/// `2*boundary - value at distance d inside`: the local linear trend
/// continues past the edge instead of mirroring the raw value. An axis of
/// length 1 has no interior value to reflect, so the padding degenerates
/// to the boundary value itself.
///
/// Axes are padded sequentially (longitude first), so the 4 padded
/// corner values reflect through the already-padded rows.
fn pad_odd_reflect(field: &Field2D) -> Field2D {
    let (nlon, nlat) = (field.nlon(), field.nlat());
    let mut padded = Field2D::filled(nlon + 2, nlat + 2, 0.0);

    // Interior copy.
    for i in 0..nlon {
        for j in 0..nlat {
            padded.set(i + 1, j + 1, field.get(i, j));
        }
    }

    // Longitude axis: reflect the first interior neighbor through each
    // boundary (clamped for a single-column grid).
    let di = 1.min(nlon - 1);
    for j in 0..nlat {
        let lo = 2.0 * field.get(0, j) - field.get(di, j);
        let hi = 2.0 * field.get(nlon - 1, j) - field.get(nlon - 1 - di, j);
        padded.set(0, j + 1, lo);
        padded.set(nlon + 1, j + 1, hi);
    }

    // Latitude axis, over the already-padded rows.
    let dj = 1.min(nlat - 1);
    for i in 0..nlon + 2 {
        let lo = 2.0 * padded.get(i, 1) - padded.get(i, 1 + dj);
        let hi = 2.0 * padded.get(i, nlat) - padded.get(i, nlat - dj);
        padded.set(i, 0, lo);
        padded.set(i, nlat + 1, hi);
    }

    padded
}

/// Value of the grid node at position `(gi, gj)`, `gi in 0..=nlon`,
/// `gj in 0..=nlat`: the mean of the 4 padded centers surrounding it.
///
/// The operand order is fixed. Every cell that shares this node evaluates
/// the identical expression, so shared corners are bit-identical across
/// cells and downstream deduplication can rely on exact equality.
#[inline]
fn node_value(padded: &Field2D, gi: usize, gj: usize) -> f64 {
    (padded.get(gi, gj)
        + padded.get(gi + 1, gj)
        + padded.get(gi, gj + 1)
        + padded.get(gi + 1, gj + 1))
        / 4.0
}

/// The 4 corners of cell `(i, j)` in NW, SW, SE, NE order.
///
/// Each quadrant corner is the mean of the cell's own center and its
/// three neighbors in that quadrant (e.g. north-east: the cell above, the
/// cell to the right, and the cell diagonally above-right).
#[inline]
fn cell_corners(padded: &Field2D, i: usize, j: usize) -> [f64; 4] {
    [
        node_value(padded, i, j + 1),
        node_value(padded, i, j),
        node_value(padded, i + 1, j),
        node_value(padded, i + 1, j + 1),
    ]
}

#[cfg(not(feature = "parallel"))]
fn corner_field(padded: &Field2D, dims: GridDims) -> Vec<[f64; 4]> {
    let mut corners = Vec::with_capacity(dims.element_count());
    for j in 0..dims.nlat() {
        for i in 0..dims.nlon() {
            corners.push(cell_corners(padded, i, j));
        }
    }
    corners
}

#[cfg(feature = "parallel")]
fn corner_field(padded: &Field2D, dims: GridDims) -> Vec<[f64; 4]> {
    use rayon::prelude::*;

    let nlon = dims.nlon();
    (0..dims.element_count())
        .into_par_iter()
        .map(|e| cell_corners(padded, e % nlon, e / nlon))
        .collect()
}
