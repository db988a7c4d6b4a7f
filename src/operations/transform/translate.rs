use crate::error::Result;
use crate::math::transform::translation;
use crate::math::Vector3;
use crate::mesh::Mesh;

use super::GeneralTransform;

/// Translates a mesh by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, modifying the mesh in-place.
    ///
    /// # Errors
    ///
    /// Never fails for finite displacements; see [`GeneralTransform`].
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        GeneralTransform::new(translation(&self.displacement)).execute(mesh)
    }
}
