//! # cubemarch
//!
//! Marching cubes isosurface extraction for Rust.
//!
//! This is the umbrella crate that provides convenient access to all cubemarch
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: points, triangles, mesh buffers, the density field trait
//! - **Polygonize**: case tables, cell polygonizer, grid walker, interactive cell
//! - **Fields**: Perlin, sphere and constant density fields
//!
//! ## Quick Start
//!
//! ```rust
//! use cubemarch::prelude::*;
//!
//! let field = SphereField::new(Point3d::new(4.0, 4.0, 4.0), 2.5);
//! let grid = DensityGrid::sample_field(GridExtent::new(9, 9, 9), &field)?;
//!
//! let mc = MarchingCubes::new(MarchingCubesConfig::default().with_iso_level(0.0));
//! let mesh = mc.extract_mesh(&grid)?;
//! assert!(!mesh.is_empty());
//! # Ok::<(), cubemarch::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core, polygonize and fields
//! - `polygonize`: Marching cubes polygonization
//! - `fields`: Ready-made density fields
//! - `all`: Enables all features

// Re-export core functionality
pub use cubemarch_core::*;

#[cfg(feature = "polygonize")]
pub use cubemarch_polygonize as polygonize;

#[cfg(feature = "fields")]
pub use cubemarch_fields as fields;

/// Commonly used types in one import
pub mod prelude {
    pub use cubemarch_core::{
        from_fn, DensityField, Error, MeshBuffer, Point3d, Point3f, Result, Triangle,
    };

    #[cfg(feature = "polygonize")]
    pub use cubemarch_polygonize::{
        build_cell, marching_cubes, polygonize, polygonize_grid, polygonize_grid_stepped,
        CellCoord, CellObserver, CellUpdate, DensityGrid, GridCell, GridExtent, InteractiveCell,
        InteractiveConfig, InterpolationMode, MarchingCubes, MarchingCubesConfig,
    };

    #[cfg(feature = "fields")]
    pub use cubemarch_fields::{ConstantField, PerlinField, SphereField};
}
