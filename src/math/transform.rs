use nalgebra::{Matrix3, Unit};

use crate::error::GeometryError;

use super::{Matrix4, Point3, Vector3, VectorExt, TOLERANCE};

/// Builds a translation matrix.
#[must_use]
pub fn translation(offset: &Vector3) -> Matrix4 {
    Matrix4::new_translation(offset)
}

/// Builds a per-axis scaling matrix.
#[must_use]
pub fn scaling(factors: &Vector3) -> Matrix4 {
    Matrix4::new_nonuniform_scaling(factors)
}

/// Builds a uniform scaling matrix.
#[must_use]
pub fn uniform_scaling(factor: f64) -> Matrix4 {
    Matrix4::new_scaling(factor)
}

/// Rotation about the X axis by `angle` radians (right-handed).
#[must_use]
pub fn rotation_x(angle: f64) -> Matrix4 {
    Matrix4::from_axis_angle(&Vector3::x_axis(), angle)
}

/// Rotation about the Y axis by `angle` radians (right-handed).
#[must_use]
pub fn rotation_y(angle: f64) -> Matrix4 {
    Matrix4::from_axis_angle(&Vector3::y_axis(), angle)
}

/// Rotation about the Z axis by `angle` radians (right-handed).
#[must_use]
pub fn rotation_z(angle: f64) -> Matrix4 {
    Matrix4::from_axis_angle(&Vector3::z_axis(), angle)
}

/// Rotation about an arbitrary axis through the origin.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `axis` has zero length.
pub fn rotation_axis(axis: &Vector3, angle: f64) -> Result<Matrix4, GeometryError> {
    let axis = Unit::try_new(*axis, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
    Ok(Matrix4::from_axis_angle(&axis, angle))
}

/// Right-handed view matrix looking from `eye` towards `target`.
///
/// Degenerate inputs (`eye == target`, `up` parallel to the view
/// direction) produce zero basis vectors rather than NaN.
#[must_use]
pub fn look_at(eye: &Point3, target: &Point3, up: &Vector3) -> Matrix4 {
    let forward = (target - eye).normalize_or_zero();
    let right = forward.cross(up).normalize_or_zero();
    let new_up = right.cross(&forward);
    let e = eye.coords;

    #[rustfmt::skip]
    let view = Matrix4::new(
        right.x,     right.y,     right.z,     -right.dot(&e),
        new_up.x,    new_up.y,    new_up.z,    -new_up.dot(&e),
        -forward.x,  -forward.y,  -forward.z,  forward.dot(&e),
        0.0,         0.0,         0.0,         1.0,
    );
    view
}

/// OpenGL-style perspective projection.
///
/// * `fov_y` - Vertical field of view in radians.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the aspect ratio or field of
/// view is zero, or the near and far planes coincide.
pub fn perspective(
    fov_y: f64,
    aspect: f64,
    near: f64,
    far: f64,
) -> Result<Matrix4, GeometryError> {
    let tan_half = (fov_y * 0.5).tan();
    if aspect.abs() < TOLERANCE || tan_half.abs() < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "perspective aspect ratio and field of view must be non-zero".into(),
        ));
    }
    ensure_distinct(near, far, "near and far planes")?;

    let f = 1.0 / tan_half;
    let depth = near - far;

    #[rustfmt::skip]
    let projection = Matrix4::new(
        f / aspect, 0.0, 0.0,                  0.0,
        0.0,        f,   0.0,                  0.0,
        0.0,        0.0, (far + near) / depth, 2.0 * far * near / depth,
        0.0,        0.0, -1.0,                 0.0,
    );
    Ok(projection)
}

/// OpenGL-style orthographic projection.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if any pair of opposite clip
/// planes coincide.
pub fn orthographic(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
) -> Result<Matrix4, GeometryError> {
    ensure_distinct(left, right, "left and right planes")?;
    ensure_distinct(bottom, top, "bottom and top planes")?;
    ensure_distinct(near, far, "near and far planes")?;

    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    #[rustfmt::skip]
    let projection = Matrix4::new(
        2.0 / w, 0.0,     0.0,      -(right + left) / w,
        0.0,     2.0 / h, 0.0,      -(top + bottom) / h,
        0.0,     0.0,     -2.0 / d, -(far + near) / d,
        0.0,     0.0,     0.0,      1.0,
    );
    Ok(projection)
}

fn ensure_distinct(a: f64, b: f64, what: &str) -> Result<(), GeometryError> {
    let scale = a.abs().max(b.abs()).max(1.0);
    if (b - a).abs() < TOLERANCE * scale {
        return Err(GeometryError::Degenerate(format!("{what} coincide")));
    }
    Ok(())
}

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
///
/// Applies the perspective divide when the resulting `w` is
/// non-negligible; otherwise the result is treated as an affine point.
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let h = matrix * point.to_homogeneous();
    if h.w.abs() > f64::EPSILON {
        Point3::new(h.x / h.w, h.y / h.w, h.z / h.w)
    } else {
        Point3::new(h.x, h.y, h.z)
    }
}

/// Transforms a direction by the linear part of a 4x4 matrix.
///
/// Translation is ignored.
#[must_use]
pub fn transform_vector(matrix: &Matrix4, vector: &Vector3) -> Vector3 {
    matrix.fixed_view::<3, 3>(0, 0) * vector
}

/// Returns the matrix that maps surface normals under `matrix`
/// (the inverse-transpose of its linear part).
///
/// Returns `None` if the linear part is singular.
#[must_use]
pub fn normal_matrix(matrix: &Matrix4) -> Option<Matrix3<f64>> {
    matrix
        .fixed_view::<3, 3>(0, 0)
        .into_owned()
        .try_inverse()
        .map(|inverse| inverse.transpose())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn storage_is_column_major() {
        let m = translation(&v(1.0, 2.0, 3.0));
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m.as_slice()[12], 1.0);
        assert_eq!(m.as_slice()[13], 2.0);
        assert_eq!(m.as_slice()[14], 3.0);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let m = translation(&v(1.0, -2.0, 3.0));
        assert_eq!(transform_point(&m, &p(1.0, 1.0, 1.0)), p(2.0, -1.0, 4.0));
        assert_eq!(transform_vector(&m, &v(1.0, 1.0, 1.0)), v(1.0, 1.0, 1.0));
    }

    #[test]
    fn scaling_per_axis() {
        let m = scaling(&v(2.0, 3.0, 4.0));
        assert_eq!(transform_point(&m, &p(1.0, 1.0, 1.0)), p(2.0, 3.0, 4.0));
        let u = uniform_scaling(0.5);
        assert_eq!(transform_vector(&u, &v(2.0, 4.0, 6.0)), v(1.0, 2.0, 3.0));
    }

    #[test]
    fn rotation_about_principal_axes() {
        let rz = rotation_z(FRAC_PI_2);
        assert_relative_eq!(
            transform_vector(&rz, &Vector3::x()),
            Vector3::y(),
            epsilon = 1e-12
        );
        let rx = rotation_x(FRAC_PI_2);
        assert_relative_eq!(
            transform_vector(&rx, &Vector3::y()),
            Vector3::z(),
            epsilon = 1e-12
        );
        let ry = rotation_y(FRAC_PI_2);
        assert_relative_eq!(
            transform_vector(&ry, &Vector3::z()),
            Vector3::x(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotation_axis_normalizes_and_rejects_zero() {
        let m = rotation_axis(&v(0.0, 0.0, 5.0), FRAC_PI_2).unwrap();
        assert_relative_eq!(m, rotation_z(FRAC_PI_2), epsilon = 1e-12);
        assert_eq!(
            rotation_axis(&Vector3::zeros(), 1.0),
            Err(GeometryError::ZeroVector)
        );
    }

    #[test]
    fn perspective_divide_applied_when_w_nonzero() {
        let mut m = Matrix4::identity();
        m[(3, 2)] = 1.0;
        m[(3, 3)] = 0.0;
        assert_relative_eq!(
            transform_point(&m, &p(2.0, 4.0, 2.0)),
            p(1.0, 2.0, 1.0),
            epsilon = 1e-12
        );
        // w == 0: no divide
        assert_eq!(transform_point(&m, &p(2.0, 4.0, 0.0)), p(2.0, 4.0, 0.0));
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let m = perspective(FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
        let near = transform_point(&m, &p(0.0, 0.0, -1.0));
        let far = transform_point(&m, &p(0.0, 0.0, -10.0));
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_projections_are_rejected() {
        assert!(perspective(1.0, 1.0, 2.0, 2.0).is_err());
        assert!(perspective(1.0, 0.0, 1.0, 2.0).is_err());
        assert!(orthographic(0.0, 0.0, 0.0, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn orthographic_maps_box_to_clip_cube() {
        let m = orthographic(-2.0, 2.0, -1.0, 1.0, 0.5, 10.0).unwrap();
        let corner = transform_point(&m, &p(2.0, 1.0, -10.0));
        assert_relative_eq!(corner, p(1.0, 1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = p(0.0, 0.0, 5.0);
        let m = look_at(&eye, &p(0.0, 0.0, 0.0), &Vector3::y());
        assert_relative_eq!(transform_point(&m, &eye), p(0.0, 0.0, 0.0), epsilon = 1e-12);
        // Target lies straight ahead on -Z in view space.
        let target = transform_point(&m, &p(0.0, 0.0, 0.0));
        assert_relative_eq!(target, p(0.0, 0.0, -5.0), epsilon = 1e-12);
    }

    #[test]
    fn normal_matrix_of_nonuniform_scale() {
        let m = scaling(&v(2.0, 1.0, 1.0));
        let n = normal_matrix(&m).unwrap();
        assert_relative_eq!(n * v(1.0, 0.0, 0.0), v(0.5, 0.0, 0.0), epsilon = 1e-12);
        assert!(normal_matrix(&scaling(&v(0.0, 1.0, 1.0))).is_none());
    }
}
