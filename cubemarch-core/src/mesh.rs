//! Flat mesh buffers built from triangle lists

use crate::error::{Error, Result};
use crate::point::*;
use crate::triangle::Triangle;
use serde::{Deserialize, Serialize};

/// Largest vertex count whose indices all fit in a `u32`
pub const MAX_VERTICES: u64 = u32::MAX as u64 + 1;

/// Number of vertices `triangle_count` triangles flatten to, if addressable
fn vertex_count_for(triangle_count: usize) -> Result<usize> {
    let vertex_count = (triangle_count as u64).saturating_mul(3);
    if vertex_count > MAX_VERTICES {
        return Err(Error::InvalidData(format!(
            "{} triangles need {} vertices, more than the {} a u32 index buffer can address",
            triangle_count, vertex_count, MAX_VERTICES
        )));
    }
    Ok(vertex_count as usize)
}

/// A flat vertex buffer with a parallel buffer of index triples.
///
/// Every triangle contributes three fresh vertices; no welding is done.
/// Normals and GPU upload are left to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffer {
    pub vertices: Vec<Point3f>,
    pub indices: Vec<[u32; 3]>,
}

impl MeshBuffer {
    /// Create a new empty mesh buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a triangle list into a vertex and index buffer
    pub fn from_triangles(triangles: &[Triangle]) -> Result<Self> {
        let mut buffer = Self::new();
        buffer.rebuild(triangles)?;
        Ok(buffer)
    }

    /// Replace the whole buffer contents with the given triangles.
    ///
    /// Fails without touching the buffer when the vertices would not all be
    /// addressable by `u32` indices.
    pub fn rebuild(&mut self, triangles: &[Triangle]) -> Result<()> {
        let vertex_count = vertex_count_for(triangles.len())?;

        self.clear();
        self.vertices.reserve(vertex_count);
        self.indices.reserve(triangles.len());

        for triangle in triangles {
            let base = self.vertices.len() as u32;
            self.vertices.extend_from_slice(&triangle.points);
            self.indices.push([base, base + 1, base + 2]);
        }
        Ok(())
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.indices.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Iterate the faces back as triangles
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |face| {
            Triangle::new(
                self.vertices[face[0] as usize],
                self.vertices[face[1] as usize],
                self.vertices[face[2] as usize],
            )
        })
    }

    /// Raw vertex data, three `f32` per vertex
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index data, three `u32` per face
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_triangles() -> Vec<Triangle> {
        vec![
            Triangle::new(
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ),
            Triangle::new(
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(1.0, 1.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ),
        ]
    }

    #[test]
    fn test_from_triangles_layout() {
        let mesh = MeshBuffer::from_triangles(&sample_triangles()).unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.indices, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mesh.vertices[3], Point3f::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_triangles_round_out_in_order() {
        let triangles = sample_triangles();
        let mesh = MeshBuffer::from_triangles(&triangles).unwrap();

        let back: Vec<Triangle> = mesh.triangles().collect();
        assert_eq!(back, triangles);
    }

    #[test]
    fn test_rebuild_replaces_contents() {
        let mut mesh = MeshBuffer::from_triangles(&sample_triangles()).unwrap();
        mesh.rebuild(&sample_triangles()[..1]).unwrap();

        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);

        mesh.rebuild(&[]).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_vertex_count_limit() {
        let max_triangles = (MAX_VERTICES / 3) as usize;

        assert_eq!(vertex_count_for(0), Ok(0));
        assert_eq!(vertex_count_for(2), Ok(6));
        assert_eq!(vertex_count_for(max_triangles), Ok(max_triangles * 3));
        // The last index of the last face is u32::MAX - 1
        assert_eq!((max_triangles * 3 - 1) as u64, u32::MAX as u64 - 1);

        assert!(matches!(
            vertex_count_for(max_triangles + 1),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(vertex_count_for(usize::MAX), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_byte_views() {
        let mesh = MeshBuffer::from_triangles(&sample_triangles()).unwrap();

        assert_eq!(mesh.vertex_bytes().len(), 6 * 3 * 4);
        assert_eq!(mesh.index_bytes().len(), 2 * 3 * 4);
    }
}
