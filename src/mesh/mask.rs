//! Element land/activity mask.
//!
//! Each element carries a 0/1 mask value for downstream masking of land
//! (or otherwise inactive) cells. When the caller supplies no mask, an
//! artificial all-ones mask covering the whole region is generated.

use std::fmt;

use crate::grid::Field2D;
use crate::types::GridDims;

/// Per-element mask, stored in canonical element order.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementMask {
    values: Vec<i8>,
    dims: GridDims,
}

impl ElementMask {
    /// Artificial mask with every element active.
    pub fn all_active(dims: GridDims) -> Self {
        Self {
            values: vec![1; dims.element_count()],
            dims,
        }
    }

    /// Mask from a `(nlon, nlat)` field, flattened into canonical element
    /// order.
    pub fn from_field(field: &Field2D<i8>) -> Self {
        Self {
            values: field.flatten_elements(),
            dims: field.dims(),
        }
    }

    /// Grid dimensions the mask covers.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Mask values in canonical element order.
    #[inline]
    pub fn values(&self) -> &[i8] {
        &self.values
    }

    /// Check if an element is active.
    #[inline]
    pub fn is_active(&self, e: usize) -> bool {
        self.values[e] != 0
    }

    /// Number of active elements.
    pub fn active_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0).count()
    }

    /// Number of inactive elements.
    pub fn inactive_count(&self) -> usize {
        self.values.len() - self.active_count()
    }

    /// Widen to the `i32` representation used by the output record.
    pub fn to_i32(&self) -> Vec<i32> {
        self.values.iter().map(|&v| i32::from(v)).collect()
    }

    /// Get statistics about the mask.
    pub fn statistics(&self) -> MaskStatistics {
        let active = self.active_count();
        MaskStatistics {
            total_elements: self.values.len(),
            active_elements: active,
            inactive_elements: self.values.len() - active,
        }
    }
}

/// Statistics about an element mask.
#[derive(Debug, Clone)]
pub struct MaskStatistics {
    /// Total number of elements
    pub total_elements: usize,
    /// Number of active elements
    pub active_elements: usize,
    /// Number of inactive (masked-out) elements
    pub inactive_elements: usize,
}

impl fmt::Display for MaskStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Element Mask Statistics:")?;
        writeln!(f, "  Total elements: {}", self.total_elements)?;
        writeln!(
            f,
            "  Active elements: {} ({:.1}%)",
            self.active_elements,
            100.0 * self.active_elements as f64 / self.total_elements as f64
        )?;
        write!(
            f,
            "  Inactive elements: {} ({:.1}%)",
            self.inactive_elements,
            100.0 * self.inactive_elements as f64 / self.total_elements as f64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_active() {
        let mask = ElementMask::all_active(GridDims::new(5, 2));
        assert_eq!(mask.active_count(), 10);
        assert_eq!(mask.inactive_count(), 0);
        assert!(mask.is_active(7));
    }

    #[test]
    fn test_from_field_canonical_order() {
        // Field (i, j) values encode their position; flattening is
        // j-major with i fastest.
        let mut field = Field2D::filled(2, 2, 0i8);
        field.set(0, 0, 1);
        field.set(1, 0, 0);
        field.set(0, 1, 0);
        field.set(1, 1, 1);

        let mask = ElementMask::from_field(&field);
        assert_eq!(mask.values(), &[1, 0, 0, 1]);
        assert_eq!(mask.active_count(), 2);
    }

    #[test]
    fn test_statistics() {
        let mut field = Field2D::filled(2, 2, 1i8);
        field.set(0, 0, 0);
        let stats = ElementMask::from_field(&field).statistics();
        assert_eq!(stats.total_elements, 4);
        assert_eq!(stats.active_elements, 3);
        assert_eq!(stats.inactive_elements, 1);
    }

    #[test]
    fn test_to_i32() {
        let mask = ElementMask::all_active(GridDims::new(2, 1));
        assert_eq!(mask.to_i32(), vec![1, 1]);
    }
}
