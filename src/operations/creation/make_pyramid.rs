use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh;

use super::ensure_positive;

/// Creates a square pyramid with its base on the XZ plane, centred on
/// the origin, and its apex on +Y.
pub struct MakePyramid {
    base: f64,
    height: f64,
}

impl MakePyramid {
    /// Creates a new `MakePyramid` operation.
    ///
    /// * `base` - Side length of the square base.
    /// * `height` - Distance from the base to the apex.
    #[must_use]
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the base or height is not positive.
    pub fn execute(&self) -> Result<Mesh> {
        ensure_positive(self.base, "pyramid base")?;
        ensure_positive(self.height, "pyramid height")?;

        let b = self.base * 0.5;
        let mut mesh = Mesh::new();
        let v0 = mesh.add_vertex(Point3::new(-b, 0.0, -b));
        let v1 = mesh.add_vertex(Point3::new(b, 0.0, -b));
        let v2 = mesh.add_vertex(Point3::new(b, 0.0, b));
        let v3 = mesh.add_vertex(Point3::new(-b, 0.0, b));
        let apex = mesh.add_vertex(Point3::new(0.0, self.height, 0.0));

        // Base, facing -Y.
        mesh.add_triangle(v0, v1, v2)?;
        mesh.add_triangle(v0, v2, v3)?;

        mesh.add_triangle(v0, apex, v1)?;
        mesh.add_triangle(v1, apex, v2)?;
        mesh.add_triangle(v2, apex, v3)?;
        mesh.add_triangle(v3, apex, v0)?;
        mesh.compute_normals();

        debug!(base = self.base, height = self.height, "built pyramid");
        Ok(mesh)
    }
}
