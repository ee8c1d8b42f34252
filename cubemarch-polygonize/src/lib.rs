//! # cubemarch Polygonize
//!
//! Marching cubes isosurface extraction over dense density grids.
//!
//! The crate is organised leaf-first: static case tables, the grid cell
//! builder, edge interpolation, the cell polygonizer, the grid walker with
//! eager and stepped entry points, and an interactive single-cell mode that
//! reuses the same polygonizer.

pub mod tables;
pub mod cell;
pub mod interpolation;
pub mod polygonizer;
pub mod grid;
pub mod walker;
pub mod interactive;
pub mod marching_cubes;

// Re-export commonly used items
pub use cell::*;
pub use interpolation::*;
pub use polygonizer::*;
pub use grid::*;
pub use walker::*;
pub use interactive::*;
pub use marching_cubes::*;
