//! Layered Perlin noise density

use cubemarch_core::{DensityField, Error, Result, Vector3d};
use noise::{NoiseFn, Perlin};

/// Default divisor applied to world coordinates before sampling
pub const DEFAULT_NOISE_SCALE: f64 = 3.51337;

/// Density in [0, 1] from six 2-D Perlin samples.
///
/// The scaled position `(p + offset) / scale` is projected on the planes
/// xy, xz, yz, yx, zx and zy; the six samples, each mapped to [0, 1], are
/// averaged.
#[derive(Debug, Clone)]
pub struct PerlinField {
    scale: f64,
    offset: Vector3d,
    seed: u32,
    perlin: Perlin,
}

impl PerlinField {
    /// Create a field; `scale` must be positive and finite
    pub fn new(scale: f64, offset: Vector3d, seed: u32) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "noise scale must be positive and finite, got {}",
                scale
            )));
        }

        Ok(Self {
            scale,
            offset,
            seed,
            perlin: Perlin::new(seed),
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vector3d {
        self.offset
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn sample_plane(&self, a: f64, b: f64) -> f64 {
        (self.perlin.get([a, b]) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

impl Default for PerlinField {
    fn default() -> Self {
        Self {
            scale: DEFAULT_NOISE_SCALE,
            offset: Vector3d::zeros(),
            seed: 0,
            perlin: Perlin::new(0),
        }
    }
}

impl DensityField for PerlinField {
    fn density(&self, x: f64, y: f64, z: f64) -> Result<f64> {
        let sx = (x + self.offset.x) / self.scale;
        let sy = (y + self.offset.y) / self.scale;
        let sz = (z + self.offset.z) / self.scale;

        let sum = self.sample_plane(sx, sy)
            + self.sample_plane(sx, sz)
            + self.sample_plane(sy, sz)
            + self.sample_plane(sy, sx)
            + self.sample_plane(sz, sx)
            + self.sample_plane(sz, sy);

        Ok(sum / 6.0)
    }
}
