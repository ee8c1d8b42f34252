//! Core data structures and traits for cubemarch
//! 
//! This crate provides the fundamental types shared by the isosurface
//! extraction crates: points, triangles, flat mesh buffers, the density
//! field abstraction and the common error type.

pub mod point;
pub mod triangle;
pub mod mesh;
pub mod traits;
pub mod error;

pub use point::*;
pub use triangle::*;
pub use mesh::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};

// Type aliases for easier imports
pub type Point = Point3f;
pub type Mesh = MeshBuffer;
