use tracing::debug;

use crate::error::Result;
use crate::mesh::Mesh;

/// Reverses the winding of every face in a mesh.
///
/// Stored face and vertex normals are negated to match. Edges are
/// undirected, so the edge index is unaffected.
pub struct FlipFaces;

impl FlipFaces {
    /// Creates a new `FlipFaces` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, modifying the mesh in-place.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        for face in mesh.faces_mut() {
            face.vertices.reverse();
            face.normal = -face.normal;
        }
        for vertex in mesh.vertices_mut() {
            vertex.normal = -vertex.normal;
        }
        debug!(faces = mesh.face_count(), "flipped face winding");
        Ok(())
    }
}

impl Default for FlipFaces {
    fn default() -> Self {
        Self::new()
    }
}
