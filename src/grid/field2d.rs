//! Dense 2D fields over the structured grid.

use crate::grid::GridError;
use crate::types::GridDims;

/// Dense `(nlon, nlat)` array of per-cell values.
///
/// Storage is row-major with the longitude index `i` as the slow axis, so
/// `get(i, j)` addresses cell `(i, j)` of the center grid. Coordinate fields
/// are always `f64`; see [`Field2D::from_f32_vec`] for upcasting input data.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2D<T = f64> {
    data: Vec<T>,
    nlon: usize,
    nlat: usize,
}

impl<T: Copy> Field2D<T> {
    /// Create a field with every cell set to `fill`.
    pub fn filled(nlon: usize, nlat: usize, fill: T) -> Self {
        Self {
            data: vec![fill; nlon * nlat],
            nlon,
            nlat,
        }
    }

    /// Create a field from flat data in `(nlon, nlat)` row-major order
    /// (latitude index varying fastest).
    pub fn from_vec(data: Vec<T>, nlon: usize, nlat: usize) -> Result<Self, GridError> {
        if nlon == 0 || nlat == 0 {
            return Err(GridError::Empty);
        }
        if data.len() != nlon * nlat {
            return Err(GridError::FieldSize {
                expected: nlon * nlat,
                actual: data.len(),
            });
        }
        Ok(Self { data, nlon, nlat })
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

    /// Grid dimensions of this field.
    #[inline]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.nlon, self.nlat)
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nlon && j < self.nlat);
        i * self.nlat + j
    }

    /// Value at cell `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[self.idx(i, j)]
    }

    /// Set the value at cell `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let idx = self.idx(i, j);
        self.data[idx] = value;
    }

    /// Flatten into the canonical element traversal order
    /// (latitude-major, longitude varying fastest).
    pub fn flatten_elements(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        for j in 0..self.nlat {
            for i in 0..self.nlon {
                out.push(self.get(i, j));
            }
        }
        out
    }
}

impl Field2D<f64> {
    /// Create an `f64` field from `f32` data, upcasting each value.
    ///
    /// All downstream averaging runs in double precision to avoid
    /// cumulative rounding drift, so single-precision input is widened
    /// here, before any arithmetic.
    pub fn from_f32_vec(data: &[f32], nlon: usize, nlat: usize) -> Result<Self, GridError> {
        Self::from_vec(data.iter().map(|&v| f64::from(v)).collect(), nlon, nlat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_and_get() {
        let f = Field2D::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(f.get(0, 0), 1.0);
        assert_eq!(f.get(0, 2), 3.0);
        assert_eq!(f.get(1, 0), 4.0);
        assert_eq!(f.get(1, 2), 6.0);
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let err = Field2D::from_vec(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            GridError::FieldSize {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_empty_rejected() {
        let err = Field2D::<f64>::from_vec(vec![], 0, 3).unwrap_err();
        assert!(matches!(err, GridError::Empty));
    }

    #[test]
    fn test_flatten_elements_order() {
        // 2x2 grid: flattening is j-major, i fastest.
        let mut f = Field2D::filled(2, 2, 0.0);
        f.set(0, 0, 1.0);
        f.set(1, 0, 2.0);
        f.set(0, 1, 3.0);
        f.set(1, 1, 4.0);
        assert_eq!(f.flatten_elements(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_f32_upcast() {
        let f = Field2D::from_f32_vec(&[1.5f32, 2.5, 3.5, 4.5], 2, 2).unwrap();
        assert_eq!(f.get(1, 1), 4.5);
    }
}
