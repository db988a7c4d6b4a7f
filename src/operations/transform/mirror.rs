use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, VectorExt};
use crate::mesh::Mesh;

use super::GeneralTransform;

/// Mirrors a mesh across a plane defined by a point and normal.
pub struct Mirror {
    plane_origin: Point3,
    plane_normal: Vector3,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(plane_origin: Point3, plane_normal: Vector3) -> Self {
        Self {
            plane_origin,
            plane_normal,
        }
    }

    /// Executes the mirror, modifying the mesh in-place.
    ///
    /// Face windings are reversed so a closed mesh stays outward-facing.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane normal is zero-length.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        let n = self.plane_normal.normalize_or_zero();
        if n == Vector3::zeros() {
            return Err(GeometryError::ZeroVector.into());
        }

        // Householder reflection about the plane through the origin,
        // shifted so the plane passes through `plane_origin`.
        let reflection = nalgebra::Matrix3::<f64>::identity() - 2.0 * n * n.transpose();
        let offset = 2.0 * n.dot(&self.plane_origin.coords) * n;
        let mut matrix = reflection.to_homogeneous();
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&offset);

        GeneralTransform::new(matrix).execute(mesh)
    }
}
