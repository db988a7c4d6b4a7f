use std::f64::consts::{PI, TAU};

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector2, Vector3};
use crate::mesh::Mesh;
use crate::topology::{Vertex, VertexId};

use super::ensure_positive;

/// Creates a latitude/longitude sphere centred on the origin with its
/// poles on the Z axis.
///
/// The poles are single vertices joined to the nearest ring by
/// triangles; the bands between rings are quads. Vertex normals point
/// radially outward and texture coordinates map longitude to `u` and
/// latitude (north to south) to `v`.
pub struct MakeUvSphere {
    radius: f64,
    segments: usize,
    rings: usize,
}

impl MakeUvSphere {
    /// Creates a new `MakeUvSphere` operation.
    ///
    /// * `segments` - Number of divisions around the Z axis (at least 3).
    /// * `rings` - Number of divisions from pole to pole (at least 2).
    #[must_use]
    pub fn new(radius: f64, segments: usize, rings: usize) -> Self {
        Self {
            radius,
            segments,
            rings,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or there are too
    /// few segments or rings.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Mesh> {
        ensure_positive(self.radius, "sphere radius")?;
        if self.segments < 3 || self.rings < 2 {
            return Err(OperationError::InvalidInput(format!(
                "sphere needs at least 3 segments and 2 rings, got {} and {}",
                self.segments, self.rings
            ))
            .into());
        }

        let (segments, rings) = (self.segments, self.rings);
        let mut mesh = Mesh::new();
        mesh.reserve_vertices(segments * (rings - 1) + 2);
        mesh.reserve_faces(segments * rings);

        let north = mesh.add_vertex(self.surface_vertex(Vector3::z(), Vector2::new(0.5, 0.0)));
        for i in 1..rings {
            let theta = PI * i as f64 / rings as f64;
            for j in 0..segments {
                let phi = TAU * j as f64 / segments as f64;
                let direction = Vector3::new(
                    theta.sin() * phi.cos(),
                    theta.sin() * phi.sin(),
                    theta.cos(),
                );
                let uv = Vector2::new(j as f64 / segments as f64, i as f64 / rings as f64);
                mesh.add_vertex(self.surface_vertex(direction, uv));
            }
        }
        let south = mesh.add_vertex(self.surface_vertex(-Vector3::z(), Vector2::new(0.5, 1.0)));

        // Ring vertices wrap around at the seam.
        let ring = |i: usize, j: usize| VertexId::new(1 + (i - 1) * segments + j % segments);

        for j in 0..segments {
            mesh.add_triangle(north, ring(1, j), ring(1, j + 1))?;
        }
        for i in 1..rings - 1 {
            for j in 0..segments {
                mesh.add_quad(ring(i, j), ring(i + 1, j), ring(i + 1, j + 1), ring(i, j + 1))?;
            }
        }
        let last = rings - 1;
        for j in 0..segments {
            mesh.add_triangle(ring(last, j), south, ring(last, j + 1))?;
        }
        mesh.compute_face_normals();

        debug!(
            radius = self.radius,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "built uv sphere"
        );
        Ok(mesh)
    }

    fn surface_vertex(&self, direction: Vector3, uv: Vector2) -> Vertex {
        Vertex::new(Point3::from(direction * self.radius))
            .with_normal(direction)
            .with_uv(uv)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn counts_follow_resolution() {
        let (segments, rings) = (12, 6);
        let mesh = MakeUvSphere::new(1.0, segments, rings).execute().unwrap();
        assert_eq!(mesh.vertex_count(), segments * (rings - 1) + 2);
        assert_eq!(mesh.face_count(), segments * rings);
        assert_eq!(mesh.edge_count(), segments * (2 * rings - 1));
        assert!(mesh.validate().is_watertight());
    }

    #[test]
    fn approaches_analytic_sphere() {
        let r = 2.0_f64;
        let mesh = MakeUvSphere::new(r, 64, 32).execute().unwrap();
        assert!(mesh.signed_volume() > 0.0);

        let volume = 4.0 / 3.0 * PI * r.powi(3);
        let area = 4.0 * PI * r * r;
        assert!((mesh.volume() - volume).abs() / volume < 0.02);
        assert!((mesh.surface_area() - area).abs() / area < 0.02);
        assert!(mesh.volume() < volume);
    }

    #[test]
    fn vertices_lie_on_sphere_with_radial_normals() {
        let mesh = MakeUvSphere::new(3.0, 8, 4).execute().unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.position.coords.norm(), 3.0, epsilon = 1e-12);
            assert_relative_eq!(v.normal, v.position.coords / 3.0, epsilon = 1e-12);
        }
        let bbox = mesh.bounding_box();
        assert_relative_eq!(bbox.max.z, 3.0);
        assert_relative_eq!(bbox.min.z, -3.0);
    }

    #[test]
    fn two_rings_is_a_closed_bipyramid() {
        let mesh = MakeUvSphere::new(1.0, 3, 2).execute().unwrap();
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.validate().is_watertight());
    }

    #[test]
    fn low_resolution_is_rejected() {
        assert!(MakeUvSphere::new(1.0, 2, 4).execute().is_err());
        assert!(MakeUvSphere::new(1.0, 8, 1).execute().is_err());
    }
}
