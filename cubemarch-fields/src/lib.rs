//! Density fields for cubemarch
//!
//! Ready-made [`DensityField`] implementations: layered Perlin noise, an
//! analytic sphere and a constant field. Closures can be used directly, see
//! [`from_fn`].

pub mod perlin;
pub mod analytic;

pub use perlin::*;
pub use analytic::*;

pub use cubemarch_core::{from_fn, DensityField, FnField};
