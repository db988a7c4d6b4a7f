use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh;

use super::ensure_positive;

/// Creates a single equilateral triangle in the XY plane, centred on the
/// origin and facing +Z.
pub struct MakeTriangle {
    side: f64,
}

impl MakeTriangle {
    /// Creates a new `MakeTriangle` operation.
    ///
    /// * `side` - Edge length.
    #[must_use]
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the side length is not positive.
    pub fn execute(&self) -> Result<Mesh> {
        ensure_positive(self.side, "triangle side")?;

        let half = self.side * 0.5;
        let height = self.side * 3.0_f64.sqrt() * 0.5;

        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(-half, -height / 3.0, 0.0));
        let b = mesh.add_vertex(Point3::new(half, -height / 3.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, height * 2.0 / 3.0, 0.0));
        mesh.add_triangle(a, b, c)?;
        mesh.compute_normals();

        debug!(side = self.side, "built triangle");
        Ok(mesh)
    }
}
