use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh;
use crate::topology::VertexId;

use super::ensure_positive;

/// Corner signs, bottom ring (z < 0) then top ring, counter-clockwise
/// seen from +Z.
const CORNERS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Two outward-wound triangles per side: -Z, +Z, -Y, +Y, -X, +X.
const TRIANGLES: [[usize; 3]; 12] = [
    [0, 3, 2],
    [0, 2, 1],
    [4, 5, 6],
    [4, 6, 7],
    [0, 1, 5],
    [0, 5, 4],
    [3, 7, 6],
    [3, 6, 2],
    [0, 4, 7],
    [0, 7, 3],
    [1, 2, 6],
    [1, 6, 5],
];

/// Creates an axis-aligned cube centred on the origin.
///
/// The cube has 8 shared corner vertices and 12 triangles, so vertex
/// normals are averaged across the three sides meeting at each corner.
pub struct MakeCube {
    size: f64,
}

impl MakeCube {
    /// Creates a new `MakeCube` operation.
    ///
    /// * `size` - Edge length.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not positive.
    pub fn execute(&self) -> Result<Mesh> {
        ensure_positive(self.size, "cube size")?;

        let half = self.size * 0.5;
        let mut mesh = Mesh::new();
        mesh.reserve_vertices(CORNERS.len());
        mesh.reserve_faces(TRIANGLES.len());

        for [x, y, z] in CORNERS {
            mesh.add_vertex(Point3::new(x * half, y * half, z * half));
        }
        for [a, b, c] in TRIANGLES {
            mesh.add_triangle(VertexId::new(a), VertexId::new(b), VertexId::new(c))?;
        }
        mesh.compute_normals();

        debug!(
            size = self.size,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "built cube"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cube_is_closed_and_outward() {
        let mesh = MakeCube::new(2.0).execute().unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        assert_eq!(mesh.edge_count(), 18);

        let report = mesh.validate();
        assert!(report.is_watertight(), "{report}");
        assert!(mesh.signed_volume() > 0.0);
        assert_relative_eq!(mesh.volume(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.surface_area(), 24.0, epsilon = 1e-12);
    }

    #[test]
    fn normals_are_computed() {
        let mesh = MakeCube::new(1.0).execute().unwrap();
        assert!(mesh.faces().iter().all(|f| f.has_normal()));
        for v in mesh.vertices() {
            assert!(v.normal.dot(&v.position.coords) > 0.0);
        }
    }

    #[test]
    fn bounding_box_matches_size() {
        let bbox = MakeCube::new(3.0).execute().unwrap().bounding_box();
        assert_relative_eq!(bbox.min, Point3::new(-1.5, -1.5, -1.5));
        assert_relative_eq!(bbox.max, Point3::new(1.5, 1.5, 1.5));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(MakeCube::new(0.0).execute().is_err());
    }
}
