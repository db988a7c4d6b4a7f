//! Geometric derivations over a single polygon given as an ordered ring of
//! 3D points (counter-clockwise when viewed from the front side).

use super::{Point3, Vector3, VectorExt};

/// Unnormalized polygon normal by Newell's method.
///
/// Sums the contribution of every boundary edge `(p_i, p_{i+1})`, so the
/// result stays well defined for non-planar rings and for polygons whose
/// first three points are collinear. Its length is twice the area of the
/// polygon's projection onto the plane it defines.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    if n < 3 {
        return Vector3::zeros();
    }

    let mut normal = Vector3::zeros();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

/// Unit polygon normal by Newell's method, or the zero vector if the
/// polygon is degenerate.
#[must_use]
pub fn polygon_normal(points: &[Point3]) -> Vector3 {
    newell_normal(points).normalize_or_zero()
}

/// Area of the triangle `(a, b, c)`.
#[must_use]
pub fn triangle_area(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    (b - a).cross(&(c - a)).norm() * 0.5
}

/// Index triples of the fan triangulation of an `n`-gon.
///
/// Every triangle shares the first vertex: `(0, i, i + 1)` for
/// `i` in `1..n - 1`. Yields nothing for `n < 3`.
pub fn fan_triangles(n: usize) -> impl Iterator<Item = [usize; 3]> {
    (1..n.saturating_sub(1)).map(|i| [0, i, i + 1])
}

/// Area of a polygon as the sum of its fan triangles.
///
/// Exact for convex planar polygons.
#[must_use]
pub fn fan_area(points: &[Point3]) -> f64 {
    fan_triangles(points.len())
        .map(|[a, b, c]| triangle_area(&points[a], &points[b], &points[c]))
        .sum()
}

/// Six times the signed volume of the tetrahedron spanned by the origin
/// and the triangle `(a, b, c)`.
#[must_use]
pub fn triple_product(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    a.coords.dot(&b.coords.cross(&c.coords))
}

/// Signed volume contributed by a polygon under the divergence theorem.
///
/// Summed over every face of a closed, consistently wound surface this
/// gives the enclosed volume, positive when faces wind outward.
#[must_use]
pub fn fan_signed_volume(points: &[Point3]) -> f64 {
    fan_triangles(points.len())
        .map(|[a, b, c]| triple_product(&points[a], &points[b], &points[c]))
        .sum::<f64>()
        / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    // ── Newell normal ──

    #[test]
    fn ccw_triangle_normal_points_up() {
        let tri = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        assert_relative_eq!(polygon_normal(&tri), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn cw_winding_flips_normal() {
        let mut square = unit_square();
        square.reverse();
        assert_relative_eq!(polygon_normal(&square), -Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn newell_handles_collinear_leading_points() {
        // First three points are collinear; a 3-point cross product would fail.
        let ring = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 0.0, 1.0),
            p(0.0, 0.0, 1.0),
        ];
        assert_relative_eq!(polygon_normal(&ring), -Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn newell_length_is_twice_area() {
        let n = newell_normal(&unit_square());
        assert_relative_eq!(n.norm(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_polygon_has_zero_normal() {
        let line = [p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0)];
        assert_eq!(polygon_normal(&line), Vector3::zeros());
        assert_eq!(polygon_normal(&line[..2]), Vector3::zeros());
    }

    // ── Areas ──

    #[test]
    fn fan_triangles_of_pentagon() {
        let tris: Vec<_> = fan_triangles(5).collect();
        assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
        assert_eq!(fan_triangles(2).count(), 0);
        assert_eq!(fan_triangles(0).count(), 0);
    }

    #[test]
    fn square_area_by_fan() {
        assert_relative_eq!(fan_area(&unit_square()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_area_is_half_parallelogram() {
        let area = triangle_area(&p(0.0, 0.0, 0.0), &p(2.0, 0.0, 0.0), &p(0.0, 3.0, 0.0));
        assert_relative_eq!(area, 3.0, epsilon = 1e-12);
    }

    // ── Volume ──

    #[test]
    fn corner_tetrahedron_volume() {
        // Faces of the tetrahedron (0,0,0),(1,0,0),(0,1,0),(0,0,1), wound outward.
        let o = p(0.0, 0.0, 0.0);
        let x = p(1.0, 0.0, 0.0);
        let y = p(0.0, 1.0, 0.0);
        let z = p(0.0, 0.0, 1.0);
        let faces = [[o, y, x], [o, x, z], [o, z, y], [x, y, z]];
        let volume: f64 = faces.iter().map(|f| fan_signed_volume(f)).sum();
        assert_abs_diff_eq!(volume, 1.0 / 6.0, epsilon = 1e-12);
    }
}
