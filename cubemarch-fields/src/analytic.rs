//! Analytic density fields

use cubemarch_core::{DensityField, Point3d, Result};
use serde::{Deserialize, Serialize};

/// Solid ball: density is `radius - distance`, positive inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereField {
    pub center: Point3d,
    pub radius: f64,
}

impl SphereField {
    pub fn new(center: Point3d, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl DensityField for SphereField {
    fn density(&self, x: f64, y: f64, z: f64) -> Result<f64> {
        Ok(self.radius - (Point3d::new(x, y, z) - self.center).norm())
    }
}

/// Same density everywhere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantField(pub f64);

impl DensityField for ConstantField {
    fn density(&self, _x: f64, _y: f64, _z: f64) -> Result<f64> {
        Ok(self.0)
    }
}
