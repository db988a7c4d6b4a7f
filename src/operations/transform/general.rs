use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::transform::{normal_matrix, transform_point};
use crate::math::{Matrix4, VectorExt};
use crate::mesh::Mesh;

/// Applies an arbitrary 4x4 transformation matrix to a mesh.
pub struct GeneralTransform {
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// Executes the transformation, modifying the mesh in-place.
    ///
    /// Vertex positions go through the full matrix, including the
    /// perspective divide. Stored vertex and face normals go through the
    /// inverse-transpose of the linear part and are re-normalized; unset
    /// normals stay zero. If the linear part mirrors space (negative
    /// determinant) every face's winding is reversed so that normals
    /// computed later still agree with the transformed ones.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the linear part of the
    /// matrix is singular. The mesh is unchanged on error.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        let normals = normal_matrix(&self.matrix).ok_or_else(|| {
            GeometryError::Degenerate("transform linear part is not invertible".into())
        })?;
        let determinant = self.matrix.fixed_view::<3, 3>(0, 0).determinant();

        for vertex in mesh.vertices_mut() {
            vertex.position = transform_point(&self.matrix, &vertex.position);
            if vertex.has_normal() {
                vertex.normal = (normals * vertex.normal).normalize_or_zero();
            }
        }

        let mirrored = determinant < 0.0;
        for face in mesh.faces_mut() {
            if face.has_normal() {
                face.normal = (normals * face.normal).normalize_or_zero();
            }
            if mirrored {
                face.vertices.reverse();
            }
        }

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            mirrored,
            "applied transform"
        );
        Ok(())
    }
}
