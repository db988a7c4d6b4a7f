use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh;

use super::ensure_positive;

/// Creates a single rectangular quad face in the XY plane, centred on the
/// origin and facing +Z.
pub struct MakeQuad {
    width: f64,
    height: f64,
}

impl MakeQuad {
    /// Creates a new `MakeQuad` operation.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the width or height is not positive.
    pub fn execute(&self) -> Result<Mesh> {
        ensure_positive(self.width, "quad width")?;
        ensure_positive(self.height, "quad height")?;

        let hw = self.width * 0.5;
        let hh = self.height * 0.5;

        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(-hw, -hh, 0.0));
        let b = mesh.add_vertex(Point3::new(hw, -hh, 0.0));
        let c = mesh.add_vertex(Point3::new(hw, hh, 0.0));
        let d = mesh.add_vertex(Point3::new(-hw, hh, 0.0));
        mesh.add_quad(a, b, c, d)?;
        mesh.compute_normals();

        debug!(width = self.width, height = self.height, "built quad");
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use approx::assert_relative_eq;

    #[test]
    fn quad_is_one_face_with_four_boundary_edges() {
        let mesh = MakeQuad::new(2.0, 3.0).execute().unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.faces()[0].is_quad());
        assert_eq!(mesh.boundary_edges().count(), 4);

        assert_relative_eq!(mesh.faces()[0].normal, Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(mesh.surface_area(), 6.0, epsilon = 1e-12);
        for v in mesh.vertices() {
            assert_relative_eq!(v.normal, Vector3::z(), epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_height_is_rejected() {
        assert!(MakeQuad::new(1.0, 0.0).execute().is_err());
    }
}
