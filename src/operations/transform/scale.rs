use crate::error::Result;
use crate::math::transform::{scaling, translation};
use crate::math::{Point3, Vector3};
use crate::mesh::Mesh;

use super::GeneralTransform;

/// Scales a mesh about a center point, independently along each axis.
pub struct Scale {
    center: Point3,
    factors: Vector3,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(center: Point3, factors: Vector3) -> Self {
        Self { center, factors }
    }

    /// Creates a `Scale` operation with the same factor on every axis.
    #[must_use]
    pub fn uniform(center: Point3, factor: f64) -> Self {
        Self::new(center, Vector3::repeat(factor))
    }

    /// Executes the scaling, modifying the mesh in-place.
    ///
    /// Negative factors mirror the mesh; face windings are reversed for
    /// an odd number of them.
    ///
    /// # Errors
    ///
    /// Returns an error if any factor is zero.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        let matrix = translation(&self.center.coords)
            * scaling(&self.factors)
            * translation(&(-self.center.coords));
        GeneralTransform::new(matrix).execute(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::VectorExt;
    use crate::operations::creation::{MakeCube, MakeUvSphere};
    use approx::assert_relative_eq;

    #[test]
    fn uniform_scale_about_corner() {
        let mut mesh = MakeCube::new(2.0).execute().unwrap();
        Scale::uniform(Point3::new(-1.0, -1.0, -1.0), 3.0)
            .execute(&mut mesh)
            .unwrap();

        let bbox = mesh.bounding_box();
        assert_relative_eq!(bbox.min, Point3::new(-1.0, -1.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(bbox.max, Point3::new(5.0, 5.0, 5.0), epsilon = 1e-12);
        assert_relative_eq!(mesh.volume(), 216.0, epsilon = 1e-9);
        assert_relative_eq!(mesh.surface_area(), 216.0, epsilon = 1e-9);
    }

    #[test]
    fn volume_scales_by_product_of_factors() {
        let mut mesh = MakeUvSphere::new(1.0, 16, 8).execute().unwrap();
        let before = mesh.volume();
        Scale::new(Point3::origin(), Vector3::new(2.0, 0.5, 3.0))
            .execute(&mut mesh)
            .unwrap();
        assert_relative_eq!(mesh.volume(), before * 3.0, epsilon = 1e-9);
    }

    #[test]
    fn tiny_uniform_factor_is_accepted() {
        let mut mesh = MakeCube::new(1.0).execute().unwrap();
        Scale::uniform(Point3::origin(), 1e-4)
            .execute(&mut mesh)
            .unwrap();
        assert_relative_eq!(mesh.volume(), 1e-12, max_relative = 1e-9);
        assert!(mesh.signed_volume() > 0.0);
        assert!(mesh.faces().iter().all(|f| f.normal.is_normalized_within(1e-12)));
    }

    #[test]
    fn zero_factor_is_rejected() {
        let mut mesh = MakeCube::new(1.0).execute().unwrap();
        assert!(Scale::uniform(Point3::origin(), 0.0)
            .execute(&mut mesh)
            .is_err());
    }
}
