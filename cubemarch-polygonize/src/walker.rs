//! Grid walking
//!
//! Both entry points visit cells in the same order (x outermost, then y,
//! then z) and share the same per-cell work, so their outputs are identical.
//! The stepped walk is a plain pull-based iterator: it does nothing between
//! calls to `next` and can be dropped at any point.

use crate::cell::{build_cell, CellCoord, GridCell};
use crate::grid::{DensityGrid, GridExtent};
use crate::interpolation::InterpolationMode;
use crate::polygonizer::polygonize_into;
use cubemarch_core::{Result, Triangle};

/// Polygonize every cell of `grid`, returning triangles in traversal order
pub fn polygonize_grid(
    grid: &DensityGrid,
    iso_level: f64,
    mode: InterpolationMode,
) -> Result<Vec<Triangle>> {
    let extent = grid.extent();
    log::debug!(
        "Polygonizing {} cells of grid {:?} at isolevel {} ({:?})",
        extent.cell_count(),
        extent,
        iso_level,
        mode
    );

    let triangles = polygonize_grid_stepped(grid, iso_level, mode).finish()?;

    log::debug!("Extracted {} triangles", triangles.len());
    Ok(triangles)
}

/// Start a walk that polygonizes one cell per call to `next`
pub fn polygonize_grid_stepped(
    grid: &DensityGrid,
    iso_level: f64,
    mode: InterpolationMode,
) -> SteppedWalk<'_> {
    SteppedWalk::new(grid, iso_level, mode)
}

/// Result of one walk step.
///
/// A step carries only the triangles of its own cell. The cumulative list
/// lives on the walk: read it with [`SteppedWalk::triangles`] between steps
/// (drive the walk with `while let Some(step) = walk.next()` rather than
/// `for`, which borrows the walk for the whole loop), or take it at the end
/// with [`SteppedWalk::into_triangles`]. Concatenating the batches of every
/// step gives the same list.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStep {
    /// Cell just processed
    pub coord: CellCoord,
    /// Corner positions and sampled densities of that cell
    pub cell: GridCell,
    /// Triangles emitted by this cell alone
    pub triangles: Vec<Triangle>,
    /// Length of the cumulative triangle list after this step
    pub total_triangles: usize,
}

/// Incremental grid walk; see [`polygonize_grid_stepped`]
#[derive(Debug, Clone)]
pub struct SteppedWalk<'g> {
    grid: &'g DensityGrid,
    extent: GridExtent,
    iso_level: f64,
    mode: InterpolationMode,
    cursor: usize,
    failed: bool,
    triangles: Vec<Triangle>,
}

impl<'g> SteppedWalk<'g> {
    pub fn new(grid: &'g DensityGrid, iso_level: f64, mode: InterpolationMode) -> Self {
        Self {
            grid,
            extent: grid.extent(),
            iso_level,
            mode,
            cursor: 0,
            failed: false,
            triangles: Vec::new(),
        }
    }

    /// Triangles accumulated so far
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Give up the walk, keeping what has been accumulated
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Number of cells processed so far
    pub fn cells_visited(&self) -> usize {
        self.cursor
    }

    /// Total number of cells the walk will visit
    pub fn cell_count(&self) -> usize {
        self.extent.cell_count()
    }

    /// Whether no further steps will be produced
    pub fn is_finished(&self) -> bool {
        self.failed || self.cursor >= self.extent.cell_count()
    }

    /// Run the remaining steps and return the full triangle list
    pub fn finish(mut self) -> Result<Vec<Triangle>> {
        while let Some(step) = self.next() {
            step?;
        }
        Ok(self.triangles)
    }

    fn step(&mut self, coord: CellCoord) -> Result<CellStep> {
        let cell = build_cell(coord, self.grid)?;

        let start = self.triangles.len();
        let added = polygonize_into(&cell, self.iso_level, self.mode, &mut self.triangles);
        log::trace!("Cell {:?} emitted {} triangles", coord, added);

        Ok(CellStep {
            coord,
            cell,
            triangles: self.triangles[start..].to_vec(),
            total_triangles: self.triangles.len(),
        })
    }
}

impl Iterator for SteppedWalk<'_> {
    type Item = Result<CellStep>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let coord = self.extent.cell_at(self.cursor)?;
        self.cursor += 1;

        let step = self.step(coord);
        if step.is_err() {
            self.failed = true;
        }
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.extent.cell_count().saturating_sub(self.cursor);
        (0, Some(remaining))
    }
}
