//! Structured grid dimension type.

use std::fmt;

/// Dimensions of the structured source grid (number of cells along each axis).
///
/// Provides a strongly-typed way to carry `nlon`/`nlat`, preventing mix-ups
/// between the two counts and other integer parameters, and owns the derived
/// element and node counts.
///
/// # Example
///
/// ```
/// use gridmesh::types::GridDims;
///
/// let dims = GridDims::new(3, 3);
/// assert_eq!(dims.element_count(), 9);
/// assert_eq!(dims.node_count(), 16);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    /// Number of cells in the longitude direction
    nlon: usize,
    /// Number of cells in the latitude direction
    nlat: usize,
}

impl GridDims {
    /// Create a new grid dimension specification.
    ///
    /// # Panics
    ///
    /// Panics if either `nlon` or `nlat` is zero.
    pub fn new(nlon: usize, nlat: usize) -> Self {
        assert!(nlon > 0, "nlon must be positive, got {}", nlon);
        assert!(nlat > 0, "nlat must be positive, got {}", nlat);
        Self { nlon, nlat }
    }

    /// Number of cells in the longitude direction.
    #[inline]
    pub fn nlon(&self) -> usize {
        self.nlon
    }

    /// Number of cells in the latitude direction.
    #[inline]
    pub fn nlat(&self) -> usize {
        self.nlat
    }

    /// Total number of elements (cells).
    #[inline]
    pub fn element_count(&self) -> usize {
        self.nlon * self.nlat
    }

    /// Number of unique mesh nodes for a non-periodic rectangular grid.
    ///
    /// This is the planar grid-graph vertex count
    /// `nlon*nlat + nlon + nlat + 1`, i.e. `(nlon + 1) * (nlat + 1)`:
    /// interior grid points plus one extra row and column of boundary
    /// points. Deduplication must produce exactly this many nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nlon * self.nlat + self.nlon + self.nlat + 1
    }

    /// Total number of per-cell corner instances before deduplication.
    #[inline]
    pub fn corner_count(&self) -> usize {
        4 * self.element_count()
    }

    /// Canonical element index of cell `(i, j)`.
    ///
    /// The canonical traversal is latitude-major with longitude varying
    /// fastest; connectivity, center coordinates, mask, and area all share
    /// this order.
    #[inline]
    pub fn element_index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nlon && j < self.nlat);
        j * self.nlon + i
    }

    /// Return as tuple `(nlon, nlat)`.
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.nlon, self.nlat)
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.nlon, self.nlat)
    }
}

impl From<(usize, usize)> for GridDims {
    fn from((nlon, nlat): (usize, usize)) -> Self {
        Self::new(nlon, nlat)
    }
}

impl From<GridDims> for (usize, usize) {
    fn from(dims: GridDims) -> Self {
        (dims.nlon, dims.nlat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims_creation() {
        let d = GridDims::new(100, 50);
        assert_eq!(d.nlon(), 100);
        assert_eq!(d.nlat(), 50);
    }

    #[test]
    fn test_element_count() {
        let d = GridDims::new(10, 5);
        assert_eq!(d.element_count(), 50);
        assert_eq!(d.corner_count(), 200);
    }

    #[test]
    fn test_node_count_closed_form() {
        // nlon*nlat + nlon + nlat + 1 == (nlon + 1)*(nlat + 1)
        for (nlon, nlat) in [(1, 1), (3, 3), (7, 2), (128, 64)] {
            let d = GridDims::new(nlon, nlat);
            assert_eq!(d.node_count(), (nlon + 1) * (nlat + 1));
        }
    }

    #[test]
    fn test_element_index_order() {
        let d = GridDims::new(3, 2);
        // Longitude varies fastest.
        assert_eq!(d.element_index(0, 0), 0);
        assert_eq!(d.element_index(1, 0), 1);
        assert_eq!(d.element_index(2, 0), 2);
        assert_eq!(d.element_index(0, 1), 3);
        assert_eq!(d.element_index(2, 1), 5);
    }

    #[test]
    fn test_from_tuple() {
        let d: GridDims = (20, 10).into();
        assert_eq!(d.as_tuple(), (20, 10));
    }

    #[test]
    #[should_panic(expected = "nlon must be positive")]
    fn test_zero_nlon() {
        GridDims::new(0, 10);
    }

    #[test]
    #[should_panic(expected = "nlat must be positive")]
    fn test_zero_nlat() {
        GridDims::new(10, 0);
    }
}
