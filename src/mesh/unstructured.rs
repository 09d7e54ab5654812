//! Unstructured mesh assembly from a structured coordinate grid.
//!
//! The finished mesh record stores:
//! - Node coordinates (deduplicated, `[lon, lat]` per node)
//! - Element-node connectivity (1-based, counter-clockwise NW/SW/SE/NE)
//! - Per-element center coordinates, mask, and optional area
//!
//! Connectivity, centers, mask, and area all share one canonical element
//! traversal (latitude-major, longitude varying fastest); mixing orders
//! between these arrays is a correctness bug, so the assembly here is the
//! only place they are produced.

use crate::diagnostics::{DiagnosticSink, SilentDiagnostics};
use crate::grid::{Field2D, GridAxes};
use crate::mesh::connectivity::build_connectivity;
use crate::mesh::corners::interpolate_corners;
use crate::mesh::error::MeshError;
use crate::mesh::mask::ElementMask;
use crate::mesh::nodes::extract_nodes;
use crate::types::{CoordUnits, GridDims};

static SILENT: SilentDiagnostics = SilentDiagnostics;

/// Finished unstructured-mesh topology, ready for export.
///
/// Field names, shapes, the 1-based index base, and the NW/SW/SE/NE
/// winding mirror the unstructured mesh-file convention the record feeds;
/// exporters must preserve them exactly.
#[derive(Clone, Debug)]
pub struct UnstructuredMesh {
    /// Mesh name, carried as provenance metadata.
    pub name: Option<String>,
    /// Original structured grid shape `(nlon, nlat)`.
    pub orig_grid_dims: GridDims,
    /// Unique node coordinates: `node_coords[k] = [lon, lat]` of node `k`.
    pub node_coords: Vec<[f64; 2]>,
    /// Element connectivity: 1-based node indices, NW/SW/SE/NE order.
    pub element_conn: Vec<[i32; 4]>,
    /// Nodes per element; always 4 for a quadrilateral grid mesh.
    pub num_element_conn: Vec<i32>,
    /// Element center coordinates, canonical element order.
    pub center_coords: Vec<[f64; 2]>,
    /// Element mask (1 = active), canonical element order.
    pub element_mask: Vec<i32>,
    /// Per-element area, present only when supplied by the caller.
    pub element_area: Option<Vec<f64>>,
    /// Unit label for the coordinate fields.
    pub units: CoordUnits,
}

impl UnstructuredMesh {
    /// Number of unique nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_coords.len()
    }

    /// Number of elements.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.element_conn.len()
    }
}

/// Builder for converting structured coordinate axes into an
/// [`UnstructuredMesh`].
///
/// # Example
///
/// ```
/// use gridmesh::{GridAxes, MeshBuilder};
///
/// let axes = GridAxes::separable(
///     vec![0.0, 10.0, 20.0],
///     vec![0.0, 10.0, 20.0],
/// ).unwrap();
///
/// let mesh = MeshBuilder::new(axes)
///     .with_name("r3x3")
///     .build()
///     .unwrap();
///
/// assert_eq!(mesh.node_count(), 16);
/// assert_eq!(mesh.element_count(), 9);
/// ```
pub struct MeshBuilder<'a> {
    axes: GridAxes,
    name: Option<String>,
    mask: Option<Field2D<i8>>,
    area: Option<Vec<f64>>,
    units: CoordUnits,
    diagnostics: &'a dyn DiagnosticSink,
}

impl MeshBuilder<'static> {
    /// Create a builder for the given (already validated) axes.
    ///
    /// Defaults: no name, artificial all-ones mask, no area, degrees,
    /// silent diagnostics.
    pub fn new(axes: GridAxes) -> Self {
        Self {
            axes,
            name: None,
            mask: None,
            area: None,
            units: CoordUnits::Degrees,
            diagnostics: &SILENT,
        }
    }
}

impl<'a> MeshBuilder<'a> {
    /// Set the mesh name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Supply a `(nlon, nlat)` element mask instead of the artificial
    /// all-ones mask.
    pub fn with_mask(mut self, mask: Field2D<i8>) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Supply per-element areas, in canonical element order. Passed
    /// through to the record unmodified; no areas are computed here.
    pub fn with_area(mut self, area: Vec<f64>) -> Self {
        self.area = Some(area);
        self
    }

    /// Set the unit label attached to the coordinate fields.
    pub fn with_units(mut self, units: CoordUnits) -> Self {
        self.units = units;
        self
    }

    /// Route diagnostics to the given sink.
    pub fn with_diagnostics<'b>(self, sink: &'b dyn DiagnosticSink) -> MeshBuilder<'b> {
        MeshBuilder {
            axes: self.axes,
            name: self.name,
            mask: self.mask,
            area: self.area,
            units: self.units,
            diagnostics: sink,
        }
    }

    /// Run the pipeline: normalize the grid, derive corners, deduplicate
    /// nodes, resolve connectivity, and assemble the mesh record.
    ///
    /// Fails if a supplied mask or area does not match the grid shape, or
    /// if the deduplicated node count violates the rectangular-grid
    /// closed form (in which case no partial mesh is returned).
    pub fn build(self) -> Result<UnstructuredMesh, MeshError> {
        let dims = self.axes.dims();

        if let Some(ref mask) = self.mask {
            if mask.dims() != dims {
                return Err(MeshError::MaskShapeMismatch {
                    mask_dims: mask.dims(),
                    grid_dims: dims,
                });
            }
        }
        if let Some(ref area) = self.area {
            if area.len() != dims.element_count() {
                return Err(MeshError::AreaLengthMismatch {
                    expected: dims.element_count(),
                    actual: area.len(),
                });
            }
        }

        let (lon2d, lat2d) = self.axes.center_fields();
        let corners = interpolate_corners(&lon2d, &lat2d);
        let node_coords = extract_nodes(&corners, self.diagnostics)?;
        let element_conn = build_connectivity(&corners);

        let mask = match self.mask {
            Some(ref field) => ElementMask::from_field(field),
            None => {
                self.diagnostics
                    .info("Creating an artificial mask for this region...");
                ElementMask::all_active(dims)
            }
        };

        let mut center_coords = Vec::with_capacity(dims.element_count());
        for j in 0..dims.nlat() {
            for i in 0..dims.nlon() {
                center_coords.push([lon2d.get(i, j), lat2d.get(i, j)]);
            }
        }

        Ok(UnstructuredMesh {
            name: self.name,
            orig_grid_dims: dims,
            node_coords,
            element_conn,
            num_element_conn: vec![4; dims.element_count()],
            center_coords,
            element_mask: mask.to_i32(),
            element_area: self.area,
            units: self.units,
        })
    }
}
