//! Core traits for cubemarch

use crate::error::Result;

/// A scalar density sampled at world coordinates.
///
/// Implementations must be deterministic for identical inputs within one
/// polygonization pass. Errors are passed through to the caller untouched.
pub trait DensityField {
    /// Sample the density at the given world position
    fn density(&self, x: f64, y: f64, z: f64) -> Result<f64>;
}

impl<F> DensityField for F
where
    F: Fn(f64, f64, f64) -> Result<f64>,
{
    fn density(&self, x: f64, y: f64, z: f64) -> Result<f64> {
        self(x, y, z)
    }
}

/// Adapter turning an infallible closure into a [`DensityField`]
#[derive(Debug, Clone, Copy)]
pub struct FnField<F>(pub F);

impl<F> DensityField for FnField<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn density(&self, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok((self.0)(x, y, z))
    }
}

/// Wrap an infallible closure as a density field
pub fn from_fn<F>(f: F) -> FnField<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    FnField(f)
}
