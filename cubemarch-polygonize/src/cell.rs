//! Grid cells and the cell builder

use crate::tables::CORNER_OFFSETS;
use cubemarch_core::{DensityField, Error, Point3f, Result};
use serde::{Deserialize, Serialize};

/// Integer coordinate of a cell's minimum corner on the vertex lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl CellCoord {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

impl From<(usize, usize, usize)> for CellCoord {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self { x, y, z }
    }
}

/// One marching cubes cell: 8 corner positions and their densities.
///
/// Corner `i` is always at `CORNER_OFFSETS[i]` relative to the cell origin.
/// Densities keep the full precision of the field so classification against
/// the isolevel sees exactly what was sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub positions: [Point3f; 8],
    pub densities: [f64; 8],
}

impl GridCell {
    /// Create a cell from explicit corner positions and densities
    pub fn new(positions: [Point3f; 8], densities: [f64; 8]) -> Self {
        Self {
            positions,
            densities,
        }
    }

    /// Corner positions of the unit cube at `coord`, in corner order
    pub fn corner_positions(coord: CellCoord) -> [Point3f; 8] {
        CORNER_OFFSETS.map(|[ox, oy, oz]| {
            Point3f::new(
                coord.x as f32 + f32::from(ox),
                coord.y as f32 + f32::from(oy),
                coord.z as f32 + f32::from(oz),
            )
        })
    }

    /// Center of the cell
    pub fn center(&self) -> Point3f {
        let sum = self
            .positions
            .iter()
            .fold(Point3f::origin().coords, |acc, p| acc + p.coords);
        Point3f::from(sum / 8.0)
    }
}

/// Lattice indices of the 8 corners of the cell at `coord`
fn corner_lattice(coord: CellCoord) -> Result<[[usize; 3]; 8]> {
    let mut corners = [[0usize; 3]; 8];
    for (corner, [ox, oy, oz]) in corners.iter_mut().zip(CORNER_OFFSETS) {
        *corner = match (
            coord.x.checked_add(usize::from(ox)),
            coord.y.checked_add(usize::from(oy)),
            coord.z.checked_add(usize::from(oz)),
        ) {
            (Some(x), Some(y), Some(z)) => [x, y, z],
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "Cell {:?} has corners past the end of the lattice",
                    coord
                )))
            }
        };
    }
    Ok(corners)
}

/// Build the cell at `coord` by sampling `field` at its 8 corners.
///
/// The first sampling error is returned as is.
pub fn build_cell<F>(coord: CellCoord, field: &F) -> Result<GridCell>
where
    F: DensityField + ?Sized,
{
    let corners = corner_lattice(coord)?;
    let positions = corners.map(|[x, y, z]| Point3f::new(x as f32, y as f32, z as f32));

    let mut densities = [0.0f64; 8];
    for (density, [x, y, z]) in densities.iter_mut().zip(corners) {
        *density = field.density(x as f64, y as f64, z as f64)?;
    }

    Ok(GridCell::new(positions, densities))
}
