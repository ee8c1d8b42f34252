//! Edge interpolation between two cell corners

use cubemarch_core::{Error, Point3f};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Density differences at or below this are treated as a flat edge
pub const DEGENERATE_EDGE_EPSILON: f64 = 1e-5;

/// How the crossing point on a cell edge is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InterpolationMode {
    /// Place the vertex where the linear density ramp meets the isolevel
    #[default]
    Linear,
    /// Always use the edge midpoint, giving a blocky surface
    Midpoint,
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationMode::Linear => write!(f, "linear"),
            InterpolationMode::Midpoint => write!(f, "midpoint"),
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(InterpolationMode::Linear),
            "midpoint" => Ok(InterpolationMode::Midpoint),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown interpolation mode '{}', expected 'linear' or 'midpoint'",
                s
            ))),
        }
    }
}

/// Position where the isosurface crosses the edge `p1`-`p2`.
///
/// In linear mode `t` is not clamped, so inconsistent inputs can land off
/// the segment. A flat edge (`|d1 - d2| <= DEGENERATE_EDGE_EPSILON`)
/// returns `p1`.
pub fn interpolate(
    iso_level: f64,
    p1: Point3f,
    d1: f64,
    p2: Point3f,
    d2: f64,
    mode: InterpolationMode,
) -> Point3f {
    match mode {
        InterpolationMode::Linear => {
            if (d1 - d2).abs() > DEGENERATE_EDGE_EPSILON {
                let t = ((iso_level - d1) / (d2 - d1)) as f32;
                Point3f::new(
                    p1.x + t * (p2.x - p1.x),
                    p1.y + t * (p2.y - p1.y),
                    p1.z + t * (p2.z - p1.z),
                )
            } else {
                p1
            }
        }
        InterpolationMode::Midpoint => nalgebra::center(&p1, &p2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_halfway() {
        let p = interpolate(
            0.5,
            Point3f::new(0.0, 0.0, 0.0),
            0.0,
            Point3f::new(1.0, 0.0, 0.0),
            1.0,
            InterpolationMode::Linear,
        );
        assert_eq!(p, Point3f::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_linear_weighted() {
        let p = interpolate(
            0.25,
            Point3f::new(0.0, 2.0, 0.0),
            0.0,
            Point3f::new(0.0, 2.0, 4.0),
            1.0,
            InterpolationMode::Linear,
        );
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_equal_densities_return_first_point() {
        let p1 = Point3f::new(1.0, 2.0, 3.0);
        let p2 = Point3f::new(4.0, 5.0, 6.0);

        for d in [-3.0, 0.0, 0.5, 100.0] {
            assert_eq!(interpolate(0.5, p1, d, p2, d, InterpolationMode::Linear), p1);
        }
    }

    #[test]
    fn test_near_equal_densities_return_first_point() {
        let p1 = Point3f::new(0.0, 0.0, 0.0);
        let p2 = Point3f::new(1.0, 0.0, 0.0);

        let p = interpolate(0.5, p1, 0.5, p2, 0.500001, InterpolationMode::Linear);
        assert_eq!(p, p1);
    }

    #[test]
    fn test_linear_is_unclamped() {
        let p = interpolate(
            2.0,
            Point3f::new(0.0, 0.0, 0.0),
            0.0,
            Point3f::new(1.0, 0.0, 0.0),
            1.0,
            InterpolationMode::Linear,
        );
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_midpoint_ignores_densities() {
        let p1 = Point3f::new(0.0, 0.0, 0.0);
        let p2 = Point3f::new(2.0, 0.0, 0.0);

        for (d1, d2) in [(0.0, 1.0), (0.9, 0.1), (5.0, 5.0), (-1.0, 100.0)] {
            let p = interpolate(0.5, p1, d1, p2, d2, InterpolationMode::Midpoint);
            assert_eq!(p, Point3f::new(1.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_linear_uses_full_density_precision() {
        // Crossing a millionth of the way along a long edge
        let p = interpolate(
            0.5,
            Point3f::new(0.0, 0.0, 0.0),
            0.499_999,
            Point3f::new(1000.0, 0.0, 0.0),
            1.499_999,
            InterpolationMode::Linear,
        );
        assert_relative_eq!(p.x, 0.001, epsilon = 1e-6);
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("linear".parse::<InterpolationMode>(), Ok(InterpolationMode::Linear));
        assert_eq!("Midpoint".parse::<InterpolationMode>(), Ok(InterpolationMode::Midpoint));
        assert!(matches!(
            "cubic".parse::<InterpolationMode>(),
            Err(Error::InvalidArgument(_))
        ));

        for mode in [InterpolationMode::Linear, InterpolationMode::Midpoint] {
            assert_eq!(mode.to_string().parse::<InterpolationMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_default_mode_is_linear() {
        assert_eq!(InterpolationMode::default(), InterpolationMode::Linear);
    }
}
