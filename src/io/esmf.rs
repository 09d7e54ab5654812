//! ESMF unstructured grid file output.
//!
//! Writes an [`UnstructuredMesh`] to the NetCDF container format consumed
//! by ESMF-based regridders: `nodeCoords`, `elementConn` (1-based,
//! counter-clockwise), `numElementConn`, `centerCoords`, `elementMask`,
//! optional `elementArea`, and the original grid shape for provenance.
//!
//! Requires the `netcdf` feature; without it the writer returns
//! [`EsmfError::FeatureDisabled`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gridmesh::{GridAxes, MeshBuilder};
//! use gridmesh::io::write_esmf_mesh;
//!
//! let axes = GridAxes::separable(lons, lats)?;
//! let mesh = MeshBuilder::new(axes).with_name("region").build()?;
//! write_esmf_mesh(Path::new("mesh.nc"), &mesh)?;
//! ```

use std::path::Path;

#[cfg(feature = "netcdf")]
use chrono::Utc;
use thiserror::Error;

use crate::mesh::UnstructuredMesh;

/// Error type for ESMF mesh-file output.
#[derive(Debug, Error)]
pub enum EsmfError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// NetCDF library error
    #[cfg(feature = "netcdf")]
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// Feature not enabled
    #[error("NetCDF feature not enabled")]
    FeatureDisabled,
}

/// Fill value for connectivity entries without a node. Unused in practice
/// here (every element has exactly 4 nodes) but part of the file contract.
pub const CONN_FILL_VALUE: i32 = -1;

/// Fill value for the element mask.
pub const MASK_FILL_VALUE: i32 = -9999;

/// Write an ESMF unstructured grid file.
#[cfg(feature = "netcdf")]
pub fn write_esmf_mesh(path: &Path, mesh: &UnstructuredMesh) -> Result<(), EsmfError> {
    let mut file = netcdf::create(path)?;

    let node_count = mesh.node_count();
    let element_count = mesh.element_count();
    let (nlon, nlat) = mesh.orig_grid_dims.as_tuple();

    // Dimensions
    file.add_dimension("nodeCount", node_count)?;
    file.add_dimension("elementCount", element_count)?;
    file.add_dimension("maxNodePElement", 4)?;
    file.add_dimension("coordDim", 2)?;
    file.add_dimension("origGridRank", 2)?;

    // Original grid shape, for provenance.
    {
        let mut var = file.add_variable::<i32>("origGridDims", &["origGridRank"])?;
        var.put_values(&[nlon as i32, nlat as i32], ..)?;
    }

    // Node coordinates
    {
        let flat: Vec<f64> = mesh.node_coords.iter().flatten().copied().collect();
        let mut var = file.add_variable::<f64>("nodeCoords", &["nodeCount", "coordDim"])?;
        var.put_attribute("units", mesh.units.label())?;
        var.put_values(&flat, ..)?;
    }

    // Element connectivity
    {
        let flat: Vec<i32> = mesh.element_conn.iter().flatten().copied().collect();
        let mut var =
            file.add_variable::<i32>("elementConn", &["elementCount", "maxNodePElement"])?;
        var.put_attribute(
            "long_name",
            "Node indices that define the element connectivity",
        )?;
        var.put_attribute("_FillValue", CONN_FILL_VALUE)?;
        var.put_values(&flat, ..)?;
    }

    // Nodes per element
    {
        let mut var = file.add_variable::<i32>("numElementConn", &["elementCount"])?;
        var.put_attribute("long_name", "Number of nodes per element")?;
        var.put_values(&mesh.num_element_conn, ..)?;
    }

    // Element centers
    {
        let flat: Vec<f64> = mesh.center_coords.iter().flatten().copied().collect();
        let mut var = file.add_variable::<f64>("centerCoords", &["elementCount", "coordDim"])?;
        var.put_attribute("units", mesh.units.label())?;
        var.put_values(&flat, ..)?;
    }

    // Element mask
    {
        let mut var = file.add_variable::<i32>("elementMask", &["elementCount"])?;
        var.put_attribute("units", "unitless")?;
        var.put_attribute("_FillValue", MASK_FILL_VALUE)?;
        var.put_values(&mesh.element_mask, ..)?;
    }

    // Element areas, only if supplied.
    if let Some(ref area) = mesh.element_area {
        let mut var = file.add_variable::<f64>("elementArea", &["elementCount"])?;
        var.put_attribute("units", "radians^2")?;
        var.put_attribute("long_name", "area weights")?;
        var.put_values(area, ..)?;
    }

    // Global attributes
    file.add_attribute("title", "ESMF unstructured grid file")?;
    file.add_attribute("gridType", "unstructured mesh")?;
    file.add_attribute("version", "0.9")?;
    file.add_attribute("conventions", "ESMFMESH")?;
    if let Some(ref name) = mesh.name {
        file.add_attribute("meshName", name.as_str())?;
    }
    file.add_attribute(
        "date_created",
        Utc::now().format("%Y-%m-%d %H:%M:%S").to_string().as_str(),
    )?;

    Ok(())
}

/// Write an ESMF unstructured grid file.
///
/// Always fails: the `netcdf` feature is not enabled.
#[cfg(not(feature = "netcdf"))]
pub fn write_esmf_mesh(_path: &Path, _mesh: &UnstructuredMesh) -> Result<(), EsmfError> {
    Err(EsmfError::FeatureDisabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "netcdf"))]
    #[test]
    fn test_disabled_without_feature() {
        use crate::grid::GridAxes;
        use crate::mesh::MeshBuilder;

        let axes = GridAxes::separable(vec![0.0, 10.0], vec![0.0, 10.0]).unwrap();
        let mesh = MeshBuilder::new(axes).build().unwrap();
        let err = write_esmf_mesh(Path::new("unused.nc"), &mesh).unwrap_err();
        assert!(matches!(err, EsmfError::FeatureDisabled));
    }

    #[cfg(feature = "netcdf")]
    #[test]
    fn test_write_and_reopen() {
        use crate::grid::GridAxes;
        use crate::mesh::MeshBuilder;

        let axes =
            GridAxes::separable(vec![0.0, 10.0, 20.0], vec![0.0, 10.0, 20.0]).unwrap();
        let mesh = MeshBuilder::new(axes)
            .with_name("r3x3")
            .with_area(vec![1.0; 9])
            .build()
            .unwrap();

        let path = std::env::temp_dir().join("gridmesh_esmf_test.nc");
        write_esmf_mesh(&path, &mesh).unwrap();

        let file = netcdf::open(&path).unwrap();
        assert_eq!(file.dimension("nodeCount").unwrap().len(), 16);
        assert_eq!(file.dimension("elementCount").unwrap().len(), 9);
        assert!(file.variable("nodeCoords").is_some());
        assert!(file.variable("elementConn").is_some());
        assert!(file.variable("elementArea").is_some());

        std::fs::remove_file(&path).unwrap();
    }
}
