//! Dense density grids
//!
//! A grid stores one density per lattice vertex. Its extent counts vertices,
//! so a grid of extent `(nx, ny, nz)` holds `(nx-1)*(ny-1)*(nz-1)` cells.

use crate::cell::CellCoord;
use cubemarch_core::{DensityField, Error, Result};
use itertools::iproduct;
use ndarray::Array3;
use serde::{Deserialize, Serialize};

/// Number of lattice vertices along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridExtent {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl GridExtent {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Cells along each axis; zero for any axis with fewer than 2 vertices
    pub fn cell_dims(&self) -> [usize; 3] {
        [
            self.nx.saturating_sub(1),
            self.ny.saturating_sub(1),
            self.nz.saturating_sub(1),
        ]
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cell_dims().iter().product()
    }

    /// Total number of lattice vertices
    pub fn vertex_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Whether the extent contains no cells at all
    pub fn is_degenerate(&self) -> bool {
        self.cell_count() == 0
    }

    /// Cell at position `index` of the traversal order, if any
    pub fn cell_at(&self, index: usize) -> Option<CellCoord> {
        let [_, cy, cz] = self.cell_dims();
        if index >= self.cell_count() {
            return None;
        }
        Some(CellCoord::new(index / (cy * cz), (index / cz) % cy, index % cz))
    }

    /// Cell coordinates in traversal order: x outermost, z innermost
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let [cx, cy, cz] = self.cell_dims();
        iproduct!(0..cx, 0..cy, 0..cz).map(CellCoord::from)
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }
}

impl From<[usize; 3]> for GridExtent {
    fn from([nx, ny, nz]: [usize; 3]) -> Self {
        Self { nx, ny, nz }
    }
}

/// Densities held in memory for every vertex of a grid, indexed `[x, y, z]`
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    values: Array3<f64>,
}

impl DensityGrid {
    /// Create a grid of zero densities
    pub fn new(extent: GridExtent) -> Self {
        Self {
            values: Array3::zeros(extent.shape()),
        }
    }

    /// Wrap an existing array of densities
    pub fn from_array(values: Array3<f64>) -> Self {
        Self { values }
    }

    /// Create a grid from densities laid out with z varying fastest
    pub fn from_values(extent: GridExtent, values: Vec<f64>) -> Result<Self> {
        let values = Array3::from_shape_vec(extent.shape(), values).map_err(|e| {
            Error::InvalidData(format!(
                "Density values do not fit extent {:?}: {}",
                extent, e
            ))
        })?;
        Ok(Self { values })
    }

    /// Sample `field` at every lattice vertex of `extent`.
    ///
    /// Stops at the first sampling error and returns it.
    pub fn sample_field<F>(extent: GridExtent, field: &F) -> Result<Self>
    where
        F: DensityField + ?Sized,
    {
        log::debug!(
            "Sampling density grid {}x{}x{} ({} vertices)",
            extent.nx,
            extent.ny,
            extent.nz,
            extent.vertex_count()
        );

        let mut values = Vec::with_capacity(extent.vertex_count());
        for (x, y, z) in iproduct!(0..extent.nx, 0..extent.ny, 0..extent.nz) {
            values.push(field.density(x as f64, y as f64, z as f64)?);
        }

        Self::from_values(extent, values)
    }

    /// Vertex extent of the grid
    pub fn extent(&self) -> GridExtent {
        let (nx, ny, nz) = self.values.dim();
        GridExtent { nx, ny, nz }
    }

    /// Underlying density array
    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    /// Get density at grid coordinates (with bounds checking)
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        self.values.get((x, y, z)).copied()
    }

    /// Set density at grid coordinates
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: f64) -> Result<()> {
        let extent = self.extent();
        match self.values.get_mut((x, y, z)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::InvalidArgument(format!(
                "Grid coordinates ({}, {}, {}) out of bounds for extent {:?}",
                x, y, z, extent
            ))),
        }
    }
}

fn lattice_index(v: f64) -> Option<usize> {
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 {
        Some(v as usize)
    } else {
        None
    }
}

impl DensityField for DensityGrid {
    /// Reads the stored density; only lattice vertices inside the grid exist
    fn density(&self, x: f64, y: f64, z: f64) -> Result<f64> {
        let value = match (lattice_index(x), lattice_index(y), lattice_index(z)) {
            (Some(ix), Some(iy), Some(iz)) => self.get(ix, iy, iz),
            _ => None,
        };

        value.ok_or_else(|| {
            Error::InvalidArgument(format!(
                "({}, {}, {}) is not a vertex of grid extent {:?}",
                x,
                y,
                z,
                self.extent()
            ))
        })
    }
}
