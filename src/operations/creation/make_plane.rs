use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector2};
use crate::mesh::Mesh;
use crate::topology::{Vertex, VertexId};

use super::ensure_positive;

/// Creates a flat grid of quads in the XY plane, centred on the origin
/// and facing +Z.
///
/// Vertices carry texture coordinates running from `(0, 0)` at the
/// minimum corner to `(1, 1)` at the maximum corner.
pub struct MakePlane {
    width: f64,
    height: f64,
    segments_x: usize,
    segments_y: usize,
}

impl MakePlane {
    /// Creates a new `MakePlane` operation with a single quad.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            segments_x: 1,
            segments_y: 1,
        }
    }

    /// Sets the number of grid cells along X and Y.
    #[must_use]
    pub fn with_segments(mut self, segments_x: usize, segments_y: usize) -> Self {
        self.segments_x = segments_x;
        self.segments_y = segments_y;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the width or height is not positive, or if
    /// either segment count is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Mesh> {
        ensure_positive(self.width, "plane width")?;
        ensure_positive(self.height, "plane height")?;
        if self.segments_x == 0 || self.segments_y == 0 {
            return Err(OperationError::InvalidInput(format!(
                "plane needs at least one segment per axis, got {}x{}",
                self.segments_x, self.segments_y
            ))
            .into());
        }

        let (sx, sy) = (self.segments_x, self.segments_y);
        let columns = sx + 1;
        let mut mesh = Mesh::new();
        mesh.reserve_vertices(columns * (sy + 1));
        mesh.reserve_faces(sx * sy);

        for j in 0..=sy {
            let v = j as f64 / sy as f64;
            for i in 0..=sx {
                let u = i as f64 / sx as f64;
                let position = Point3::new((u - 0.5) * self.width, (v - 0.5) * self.height, 0.0);
                mesh.add_vertex(Vertex::new(position).with_uv(Vector2::new(u, v)));
            }
        }

        let at = |i: usize, j: usize| VertexId::new(j * columns + i);
        for j in 0..sy {
            for i in 0..sx {
                mesh.add_quad(at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1))?;
            }
        }
        mesh.compute_normals();

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "built plane"
        );
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
    fn grid_counts() {
        let mesh = MakePlane::new(4.0, 2.0)
            .with_segments(4, 3)
            .execute()
            .unwrap();
        assert_eq!(mesh.vertex_count(), 5 * 4);
        assert_eq!(mesh.face_count(), 12);
        assert!(mesh.faces().iter().all(|f| f.is_quad()));
        assert_eq!(mesh.boundary_edges().count(), 2 * (4 + 3));
        assert!(mesh.validate_topology());
        assert!(!mesh.validate().is_watertight());
    }

    #[test]
    fn flat_area_and_zero_volume() {
        let mesh = MakePlane::new(4.0, 2.0)
            .with_segments(2, 2)
            .execute()
            .unwrap();
        assert_relative_eq!(mesh.surface_area(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.signed_volume(), 0.0, epsilon = 1e-12);
        for v in mesh.vertices() {
            assert_relative_eq!(v.normal, Vector3::z(), epsilon = 1e-12);
        }
    }

    #[test]
    fn uv_spans_unit_square() {
        let mesh = MakePlane::new(1.0, 1.0).with_segments(2, 2).execute().unwrap();
        let first = mesh.vertices().first().unwrap();
        let last = mesh.vertices().last().unwrap();
        assert_eq!(first.uv, Vector2::new(0.0, 0.0));
        assert_eq!(last.uv, Vector2::new(1.0, 1.0));
        assert!(last.has_uv());
    }

    #[test]
    fn zero_segments_are_rejected() {
        assert!(MakePlane::new(1.0, 1.0).with_segments(0, 2).execute().is_err());
    }
}
