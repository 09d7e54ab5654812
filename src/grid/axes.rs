//! Center-coordinate axes for the structured source grid.
//!
//! A grid is described by a longitude axis and a latitude axis, either
//! *separable* (two 1D arrays implicitly forming an `nlon × nlat` grid by
//! broadcast) or *curvilinear* (two 2D arrays of identical shape, one value
//! per cell). Anything else is a configuration error, rejected here before
//! any corner computation begins.

use thiserror::Error;

use crate::grid::Field2D;
use crate::types::GridDims;

/// Error type for grid axis configuration.
#[derive(Debug, Error)]
pub enum GridError {
    /// Axis rank outside the supported {1, 2}.
    #[error("unrecognized grid: the rank of {axis} should be either 1 or 2 but it is {rank}")]
    UnsupportedRank {
        /// Which axis was malformed ("longitude" or "latitude").
        axis: &'static str,
        /// The declared rank.
        rank: usize,
    },

    /// Longitude and latitude axes disagree in rank.
    #[error("longitude axis has rank {lon_rank} but latitude axis has rank {lat_rank}")]
    RankMismatch { lon_rank: usize, lat_rank: usize },

    /// Curvilinear axes disagree in shape.
    #[error(
        "curvilinear axes disagree in shape: longitude is {lon_dims}, latitude is {lat_dims}"
    )]
    CurvilinearShape {
        lon_dims: GridDims,
        lat_dims: GridDims,
    },

    /// Flat field data does not match its declared shape.
    #[error("field data has {actual} values but the declared shape requires {expected}")]
    FieldSize { expected: usize, actual: usize },

    /// An axis with no values.
    #[error("coordinate axes must not be empty")]
    Empty,
}

/// A coordinate axis as it arrives from an input file: flat values plus the
/// dimension sizes they were stored with. Rank is `shape.len()`.
#[derive(Clone, Debug)]
pub struct RawAxis {
    /// Flat coordinate values, row-major in `shape`.
    pub values: Vec<f64>,
    /// Dimension sizes the values were stored with.
    pub shape: Vec<usize>,
}

impl RawAxis {
    /// A 1D axis.
    pub fn one_dim(values: Vec<f64>) -> Self {
        let n = values.len();
        Self {
            values,
            shape: vec![n],
        }
    }

    /// A 2D axis of shape `(nlon, nlat)`, latitude index varying fastest.
    pub fn two_dim(values: Vec<f64>, nlon: usize, nlat: usize) -> Self {
        Self {
            values,
            shape: vec![nlon, nlat],
        }
    }

    fn rank(&self) -> usize {
        self.shape.len()
    }
}

/// Center-coordinate axes of a structured grid.
#[derive(Clone, Debug)]
pub enum GridAxes {
    /// Two 1D axes; the grid is their outer-product broadcast.
    Separable { lons: Vec<f64>, lats: Vec<f64> },
    /// Two 2D fields of identical `(nlon, nlat)` shape.
    Curvilinear { lons: Field2D, lats: Field2D },
}

impl GridAxes {
    /// Create separable axes from two 1D coordinate arrays.
    pub fn separable(lons: Vec<f64>, lats: Vec<f64>) -> Result<Self, GridError> {
        if lons.is_empty() || lats.is_empty() {
            return Err(GridError::Empty);
        }
        Ok(GridAxes::Separable { lons, lats })
    }

    /// Create curvilinear axes from two 2D coordinate fields.
    pub fn curvilinear(lons: Field2D, lats: Field2D) -> Result<Self, GridError> {
        if lons.dims() != lats.dims() {
            return Err(GridError::CurvilinearShape {
                lon_dims: lons.dims(),
                lat_dims: lats.dims(),
            });
        }
        Ok(GridAxes::Curvilinear { lons, lats })
    }

    /// Create axes from runtime-shaped input, validating rank.
    ///
    /// Both axes must have the same rank, and that rank must be 1
    /// (separable) or 2 (curvilinear). These are hard errors: nothing
    /// downstream can make sense of any other shape.
    pub fn from_raw(lons: RawAxis, lats: RawAxis) -> Result<Self, GridError> {
        if lons.rank() != lats.rank() {
            return Err(GridError::RankMismatch {
                lon_rank: lons.rank(),
                lat_rank: lats.rank(),
            });
        }
        match lons.rank() {
            1 => {
                check_declared_len(&lons)?;
                check_declared_len(&lats)?;
                Self::separable(lons.values, lats.values)
            }
            2 => {
                let lon_field = Field2D::from_vec(lons.values, lons.shape[0], lons.shape[1])?;
                let lat_field = Field2D::from_vec(lats.values, lats.shape[0], lats.shape[1])?;
                Self::curvilinear(lon_field, lat_field)
            }
            rank => Err(GridError::UnsupportedRank {
                axis: "longitude",
                rank,
            }),
        }
    }

    /// Grid dimensions implied by the axes.
    pub fn dims(&self) -> GridDims {
        match self {
            GridAxes::Separable { lons, lats } => GridDims::new(lons.len(), lats.len()),
            GridAxes::Curvilinear { lons, .. } => lons.dims(),
        }
    }

    /// Produce the dense 2D center-coordinate fields `(lon2d, lat2d)`.
    ///
    /// Separable axes are broadcast: the longitude axis across all latitude
    /// rows and the latitude axis across all longitude columns. Curvilinear
    /// fields pass through as-is.
    pub fn center_fields(&self) -> (Field2D, Field2D) {
        match self {
            GridAxes::Separable { lons, lats } => {
                let (nlon, nlat) = (lons.len(), lats.len());
                let mut lon2d = Field2D::filled(nlon, nlat, 0.0);
                let mut lat2d = Field2D::filled(nlon, nlat, 0.0);
                for i in 0..nlon {
                    for j in 0..nlat {
                        lon2d.set(i, j, lons[i]);
                        lat2d.set(i, j, lats[j]);
                    }
                }
                (lon2d, lat2d)
            }
            GridAxes::Curvilinear { lons, lats } => (lons.clone(), lats.clone()),
        }
    }
}

fn check_declared_len(axis: &RawAxis) -> Result<(), GridError> {
    if axis.values.len() != axis.shape[0] {
        return Err(GridError::FieldSize {
            expected: axis.shape[0],
            actual: axis.values.len(),
        });
    }
    Ok(())
}
