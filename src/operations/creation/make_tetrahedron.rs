use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh;

use super::ensure_positive;

/// Creates a regular tetrahedron centred on the origin.
///
/// Corners sit on alternate corners of a cube, so every edge has the
/// requested length.
pub struct MakeTetrahedron {
    edge_length: f64,
}

impl MakeTetrahedron {
    /// Creates a new `MakeTetrahedron` operation.
    #[must_use]
    pub fn new(edge_length: f64) -> Self {
        Self { edge_length }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge length is not positive.
    pub fn execute(&self) -> Result<Mesh> {
        ensure_positive(self.edge_length, "tetrahedron edge length")?;

        // Alternate cube corners are 2 * sqrt(2) apart.
        let s = self.edge_length / (2.0 * std::f64::consts::SQRT_2);

        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(s, s, s));
        let b = mesh.add_vertex(Point3::new(s, -s, -s));
        let c = mesh.add_vertex(Point3::new(-s, s, -s));
        let d = mesh.add_vertex(Point3::new(-s, -s, s));

        mesh.add_triangle(a, b, c)?;
        mesh.add_triangle(a, d, b)?;
        mesh.add_triangle(a, c, d)?;
        mesh.add_triangle(b, d, c)?;
        mesh.compute_normals();

        debug!(edge_length = self.edge_length, "built tetrahedron");
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn regular_tetrahedron_measures() {
        let edge = 2.0_f64;
        let mesh = MakeTetrahedron::new(edge).execute().unwrap();

        for e in mesh.edges() {
            let a = mesh.vertex(e.v1).unwrap().position;
            let b = mesh.vertex(e.v2).unwrap().position;
            assert_relative_eq!((b - a).norm(), edge, epsilon = 1e-12);
        }
        assert_eq!(mesh.edge_count(), 6);
        assert!(mesh.validate().is_watertight());

        assert!(mesh.signed_volume() > 0.0);
        assert_relative_eq!(
            mesh.volume(),
            edge.powi(3) / (6.0 * std::f64::consts::SQRT_2),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            mesh.surface_area(),
            3.0_f64.sqrt() * edge * edge,
            epsilon = 1e-12
        );
    }

    #[test]
    fn centred_on_origin() {
        let mesh = MakeTetrahedron::new(1.0).execute().unwrap();
        assert_relative_eq!(mesh.bounding_box().center(), Point3::origin(), epsilon = 1e-12);
    }
}
