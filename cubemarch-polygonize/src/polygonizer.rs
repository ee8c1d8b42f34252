//! Cell polygonization
//!
//! Classifies the 8 corners of a cell against the isolevel, interpolates the
//! crossed edges and emits triangles in triangle-table order.

use crate::cell::GridCell;
use crate::interpolation::{interpolate, InterpolationMode};
use crate::tables::{triangle_edges, EDGE_CORNERS, EDGE_TABLE};
use cubemarch_core::{Point3f, Triangle};

/// Whether a corner density counts as inside the solid.
///
/// This is the single place the comparison direction is decided. NaN
/// densities are never inside.
#[inline]
pub fn is_inside(density: f64, iso_level: f64) -> bool {
    density >= iso_level
}

/// 8-bit classification of a cell: bit `i` is set when corner `i` is inside
pub fn cube_index(densities: &[f64; 8], iso_level: f64) -> u8 {
    let mut index = 0u8;
    for (i, &density) in densities.iter().enumerate() {
        if is_inside(density, iso_level) {
            index |= 1 << i;
        }
    }
    index
}

/// Polygonize one cell, returning 0 to 5 triangles
pub fn polygonize(cell: &GridCell, iso_level: f64, mode: InterpolationMode) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    polygonize_into(cell, iso_level, mode, &mut triangles);
    triangles
}

/// Polygonize one cell, appending to `triangles`; returns the number added
pub fn polygonize_into(
    cell: &GridCell,
    iso_level: f64,
    mode: InterpolationMode,
    triangles: &mut Vec<Triangle>,
) -> usize {
    let index = cube_index(&cell.densities, iso_level);
    let edge_mask = EDGE_TABLE[index as usize];
    if edge_mask == 0 {
        return 0;
    }

    let mut crossings = [Point3f::origin(); 12];
    for (edge, &(a, b)) in EDGE_CORNERS.iter().enumerate() {
        if edge_mask & (1 << edge) != 0 {
            crossings[edge] = interpolate(
                iso_level,
                cell.positions[a],
                cell.densities[a],
                cell.positions[b],
                cell.densities[b],
                mode,
            );
        }
    }

    let before = triangles.len();
    triangles.extend(
        triangle_edges(index)
            .map(|[e0, e1, e2]| Triangle::new(crossings[e0], crossings[e1], crossings[e2])),
    );
    triangles.len() - before
}
