mod make_cube;
mod make_plane;
mod make_pyramid;
mod make_quad;
mod make_tetrahedron;
mod make_triangle;
mod make_uv_sphere;

pub use make_cube::MakeCube;
pub use make_plane::MakePlane;
pub use make_pyramid::MakePyramid;
pub use make_quad::MakeQuad;
pub use make_tetrahedron::MakeTetrahedron;
pub use make_triangle::MakeTriangle;
pub use make_uv_sphere::MakeUvSphere;

use crate::error::{OperationError, Result};
use crate::math::TOLERANCE;

/// Rejects sizes that are not strictly positive (including NaN).
fn ensure_positive(value: f64, what: &str) -> Result<()> {
    if value >= TOLERANCE {
        Ok(())
    } else {
        Err(OperationError::InvalidInput(format!("{what} must be positive, got {value}")).into())
    }
}
