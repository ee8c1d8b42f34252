//! Marching Cubes facade
//!
//! Bundles the isolevel and interpolation mode into a configuration and
//! exposes cell, grid and mesh extraction on top of it.

use crate::cell::GridCell;
use crate::grid::DensityGrid;
use crate::interpolation::InterpolationMode;
use crate::polygonizer::polygonize;
use crate::walker::{polygonize_grid, polygonize_grid_stepped, SteppedWalk};
use cubemarch_core::{MeshBuffer, Result, Triangle};
use serde::{Deserialize, Serialize};

/// Configuration for Marching Cubes algorithm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarchingCubesConfig {
    /// Isosurface level (density threshold)
    pub iso_level: f64,
    /// Placement of vertices along crossed edges
    pub interpolation: InterpolationMode,
}

impl Default for MarchingCubesConfig {
    fn default() -> Self {
        Self {
            iso_level: 0.5,
            interpolation: InterpolationMode::Linear,
        }
    }
}

impl MarchingCubesConfig {
    /// Set the isolevel
    pub fn with_iso_level(mut self, iso_level: f64) -> Self {
        self.iso_level = iso_level;
        self
    }

    /// Set the interpolation mode
    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }
}

/// Marching Cubes implementation
#[derive(Debug, Clone, Default)]
pub struct MarchingCubes {
    config: MarchingCubesConfig,
}

impl MarchingCubes {
    /// Create a new Marching Cubes instance
    pub fn new(config: MarchingCubesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarchingCubesConfig {
        &self.config
    }

    /// Triangles for a single cell
    pub fn polygonize_cell(&self, cell: &GridCell) -> Vec<Triangle> {
        polygonize(cell, self.config.iso_level, self.config.interpolation)
    }

    /// Triangles for every cell of the grid, in traversal order
    pub fn polygonize_grid(&self, grid: &DensityGrid) -> Result<Vec<Triangle>> {
        polygonize_grid(grid, self.config.iso_level, self.config.interpolation)
    }

    /// Cell-by-cell walk over the grid
    pub fn polygonize_grid_stepped<'g>(&self, grid: &'g DensityGrid) -> SteppedWalk<'g> {
        polygonize_grid_stepped(grid, self.config.iso_level, self.config.interpolation)
    }

    /// Extract the isosurface as a flat mesh buffer
    pub fn extract_mesh(&self, grid: &DensityGrid) -> Result<MeshBuffer> {
        let triangles = self.polygonize_grid(grid)?;
        MeshBuffer::from_triangles(&triangles)
    }
}

/// Convenience function for basic marching cubes
pub fn marching_cubes(grid: &DensityGrid, iso_level: f64) -> Result<MeshBuffer> {
    let config = MarchingCubesConfig::default().with_iso_level(iso_level);
    MarchingCubes::new(config).extract_mesh(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellCoord;
    use crate::grid::GridExtent;
    use cubemarch_core::from_fn;

    fn slab_grid() -> DensityGrid {
        // Dense below z = 1.5, empty above
        DensityGrid::sample_field(
            GridExtent::new(3, 3, 4),
            &from_fn(|_, _, z| if z < 1.5 { 1.0 } else { 0.0 }),
        )
        .unwrap()
    }

    #[test]
    fn test_marching_cubes_config_default() {
        let config = MarchingCubesConfig::default();
        assert_eq!(config.iso_level, 0.5);
        assert_eq!(config.interpolation, InterpolationMode::Linear);
    }

    #[test]
    fn test_config_builders() {
        let config = MarchingCubesConfig::default()
            .with_iso_level(0.25)
            .with_interpolation(InterpolationMode::Midpoint);
        assert_eq!(config.iso_level, 0.25);
        assert_eq!(config.interpolation, InterpolationMode::Midpoint);
    }

    #[test]
    fn test_extract_mesh_of_slab() {
        let mesh = marching_cubes(&slab_grid(), 0.5).unwrap();

        // 2x2 cells straddle the surface, 2 triangles each
        assert_eq!(mesh.face_count(), 8);
        assert_eq!(mesh.vertex_count(), 24);
        assert!(mesh.vertices.iter().all(|v| (v.z - 1.5).abs() < 1e-6));
    }

    #[test]
    fn test_facade_matches_free_functions() {
        let grid = slab_grid();
        let mc = MarchingCubes::new(MarchingCubesConfig::default());

        let eager = mc.polygonize_grid(&grid).unwrap();
        let stepped = mc.polygonize_grid_stepped(&grid).finish().unwrap();
        assert_eq!(eager, stepped);
        assert_eq!(eager, polygonize_grid(&grid, 0.5, InterpolationMode::Linear).unwrap());
    }

    #[test]
    fn test_polygonize_cell_uses_config() {
        let mut densities = [0.0; 8];
        densities[0] = 1.0;
        let cell = GridCell::new(GridCell::corner_positions(CellCoord::new(0, 0, 0)), densities);

        let mc = MarchingCubes::new(MarchingCubesConfig::default().with_iso_level(2.0));
        assert!(mc.polygonize_cell(&cell).is_empty());

        let mc = MarchingCubes::new(MarchingCubesConfig::default());
        assert_eq!(mc.polygonize_cell(&cell).len(), 1);
    }
}
