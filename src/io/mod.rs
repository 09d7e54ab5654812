//! I/O for mesh files.
//!
//! The mesh record is serialized by an exporter kept separate from the
//! topology pipeline:
//! - **ESMF mesh files**: NetCDF output in the ESMF unstructured grid
//!   convention, behind the `netcdf` feature

mod esmf;

pub use esmf::{write_esmf_mesh, EsmfError, CONN_FILL_VALUE, MASK_FILL_VALUE};
