use crate::error::Result;
use crate::math::transform::{rotation_axis, translation};
use crate::math::{Point3, Vector3};
use crate::mesh::Mesh;

use super::GeneralTransform;

/// Rotates a mesh around an axis.
pub struct Rotate {
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians, counter-clockwise looking
    ///   down the axis direction.
    #[must_use]
    pub fn new(axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, modifying the mesh in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        // Translate to origin, rotate, translate back.
        let rotation = rotation_axis(&self.axis_direction, self.angle)?;
        let matrix = translation(&self.axis_origin.coords)
            * rotation
            * translation(&(-self.axis_origin.coords));
        GeneralTransform::new(matrix).execute(mesh)
    }
}
