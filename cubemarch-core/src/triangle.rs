//! Triangle type emitted by isosurface extraction

use crate::point::*;
use serde::{Deserialize, Serialize};

/// A triangle with three independently owned corner points.
///
/// Corner order is the winding order; triangles never share vertex
/// identity with their neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub points: [Point3f; 3],
}

impl Triangle {
    /// Create a triangle from its three corners in winding order
    pub fn new(p0: Point3f, p1: Point3f, p2: Point3f) -> Self {
        Self { points: [p0, p1, p2] }
    }

    /// Unnormalized face normal following the right-hand rule over the winding
    pub fn cross(&self) -> Vector3f {
        let [p0, p1, p2] = self.points;
        (p1 - p0).cross(&(p2 - p0))
    }

    /// Area of the triangle
    pub fn area(&self) -> f32 {
        self.cross().norm() * 0.5
    }

    /// Centroid of the three corners
    pub fn centroid(&self) -> Point3f {
        let [p0, p1, p2] = self.points;
        Point3f::from((p0.coords + p1.coords + p2.coords) / 3.0)
    }
}

impl From<[Point3f; 3]> for Triangle {
    fn from(points: [Point3f; 3]) -> Self {
        Self { points }
    }
}
