//! Interactive single-cell mode
//!
//! One unit cell whose corners are switched between an "off" and an "on"
//! density. Every switch re-polygonizes the cell with the regular cell
//! polygonizer and then notifies the registered observers.

use crate::cell::{build_cell, CellCoord, GridCell};
use crate::interpolation::InterpolationMode;
use crate::polygonizer::{cube_index, polygonize_into};
use cubemarch_core::{from_fn, Error, Result, Triangle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Densities and threshold used by [`InteractiveCell`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractiveConfig {
    pub iso_level: f64,
    /// Density of a corner that is switched off
    pub off_density: f64,
    /// Density of a corner that is switched on
    pub on_density: f64,
    pub interpolation: InterpolationMode,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            iso_level: 0.5,
            off_density: 0.0,
            on_density: 100.0,
            interpolation: InterpolationMode::Linear,
        }
    }
}

impl InteractiveConfig {
    /// Check that the isolevel lies strictly between the two sentinels
    pub fn validate(&self) -> Result<()> {
        if self.off_density < self.iso_level && self.iso_level < self.on_density {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "isolevel {} must lie strictly between off density {} and on density {}",
                self.iso_level, self.off_density, self.on_density
            )))
        }
    }
}

/// State published to observers after every change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellUpdate<'a> {
    pub cell: &'a GridCell,
    pub corner_states: [bool; 8],
    pub cube_index: u8,
    pub triangles: &'a [Triangle],
}

impl CellUpdate<'_> {
    /// Owned copy of the update
    pub fn to_snapshot(&self) -> CellSnapshot {
        CellSnapshot {
            cell: *self.cell,
            corner_states: self.corner_states,
            cube_index: self.cube_index,
            triangles: self.triangles.to_vec(),
        }
    }
}

/// Owned form of [`CellUpdate`], suitable for sending across channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub cell: GridCell,
    pub corner_states: [bool; 8],
    pub cube_index: u8,
    pub triangles: Vec<Triangle>,
}

/// Receives cell updates synchronously, in order
pub trait CellObserver {
    fn on_cell_updated(&mut self, update: &CellUpdate<'_>);
}

impl<F> CellObserver for F
where
    F: FnMut(&CellUpdate<'_>),
{
    fn on_cell_updated(&mut self, update: &CellUpdate<'_>) {
        self(update)
    }
}

impl CellObserver for flume::Sender<CellSnapshot> {
    fn on_cell_updated(&mut self, update: &CellUpdate<'_>) {
        if self.send(update.to_snapshot()).is_err() {
            log::debug!("Cell update receiver dropped");
        }
    }
}

/// A single cell with switchable corners
pub struct InteractiveCell {
    config: InteractiveConfig,
    cell: GridCell,
    corner_states: [bool; 8],
    triangles: Vec<Triangle>,
    observers: Vec<Box<dyn CellObserver>>,
}

impl InteractiveCell {
    /// Create a cell at the origin with every corner switched off
    pub fn new(config: InteractiveConfig) -> Result<Self> {
        Self::with_observers(config, Vec::new())
    }

    /// Create a cell that notifies `observers` on every change
    pub fn with_observers(
        config: InteractiveConfig,
        observers: Vec<Box<dyn CellObserver>>,
    ) -> Result<Self> {
        config.validate()?;

        let off = config.off_density;
        let cell = build_cell(CellCoord::default(), &from_fn(move |_, _, _| off))?;

        let mut triangles = Vec::new();
        polygonize_into(&cell, config.iso_level, config.interpolation, &mut triangles);

        Ok(Self {
            config,
            cell,
            corner_states: [false; 8],
            triangles,
            observers,
        })
    }

    /// Register another observer
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: CellObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Flip corner `vertex_index` and re-polygonize
    pub fn toggle(&mut self, vertex_index: usize) -> Result<GridCell> {
        let on = !self.corner_state(vertex_index)?;
        self.set_corner(vertex_index, on)
    }

    /// Switch corner `vertex_index` on or off and re-polygonize
    pub fn set_corner(&mut self, vertex_index: usize, on: bool) -> Result<GridCell> {
        self.corner_state(vertex_index)?;

        self.corner_states[vertex_index] = on;
        self.cell.densities[vertex_index] = if on {
            self.config.on_density
        } else {
            self.config.off_density
        };

        self.triangles.clear();
        polygonize_into(
            &self.cell,
            self.config.iso_level,
            self.config.interpolation,
            &mut self.triangles,
        );

        log::debug!(
            "Corner {} switched {}, cube index {:#010b}, {} triangles",
            vertex_index,
            if on { "on" } else { "off" },
            self.cube_index(),
            self.triangles.len()
        );

        let update = CellUpdate {
            cell: &self.cell,
            corner_states: self.corner_states,
            cube_index: cube_index(&self.cell.densities, self.config.iso_level),
            triangles: &self.triangles,
        };
        for observer in &mut self.observers {
            observer.on_cell_updated(&update);
        }

        Ok(self.cell)
    }

    fn corner_state(&self, vertex_index: usize) -> Result<bool> {
        self.corner_states
            .get(vertex_index)
            .copied()
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "vertex index {} out of range 0..8",
                    vertex_index
                ))
            })
    }

    pub fn cell(&self) -> &GridCell {
        &self.cell
    }

    pub fn corner_states(&self) -> [bool; 8] {
        self.corner_states
    }

    /// Triangles of the current corner configuration
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn cube_index(&self) -> u8 {
        cube_index(&self.cell.densities, self.config.iso_level)
    }

    pub fn config(&self) -> &InteractiveConfig {
        &self.config
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for InteractiveCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveCell")
            .field("config", &self.config)
            .field("cell", &self.cell)
            .field("corner_states", &self.corner_states)
            .field("triangles", &self.triangles.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
