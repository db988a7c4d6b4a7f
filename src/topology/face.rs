use crate::math::{Vector3, VectorExt, ATTRIBUTE_EPSILON};

use super::vertex::VertexId;

entity_id! {
    /// Index of a face in its mesh.
    FaceId
}

/// Identifier of the material assigned to a face.
pub type MaterialId = u32;

/// A polygonal face.
///
/// References its vertices by id, in counter-clockwise order when viewed
/// from the side the normal points to.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Vertex ids around the face boundary.
    pub vertices: Vec<VertexId>,
    /// Face normal, zero until computed or if the face is degenerate.
    pub normal: Vector3,
    /// Material assigned to this face, if any.
    pub material: Option<MaterialId>,
    id: FaceId,
}

impl Face {
    pub(crate) fn new(vertices: Vec<VertexId>, material: Option<MaterialId>, id: FaceId) -> Self {
        Self {
            vertices,
            normal: Vector3::zeros(),
            material,
            id,
        }
    }

    /// The id of this face in its mesh.
    #[must_use]
    pub fn id(&self) -> FaceId {
        self.id
    }

    /// Number of vertices around the face.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for a three-vertex face.
    #[must_use]
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }

    /// Returns `true` for a four-vertex face.
    #[must_use]
    pub fn is_quad(&self) -> bool {
        self.vertices.len() == 4
    }

    /// Returns `true` if `vertex` is on the face boundary.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Returns `true` if the face has at least 3 vertices.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Returns `true` if a non-zero normal is stored.
    #[must_use]
    pub fn has_normal(&self) -> bool {
        !self.normal.is_zero_within(ATTRIBUTE_EPSILON)
    }

    /// Boundary edges as canonical `(min, max)` vertex pairs, in boundary
    /// order starting with `(v0, v1)`.
    ///
    /// A repeated consecutive vertex yields a `(v, v)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn edges_are_canonical_and_closed() {
        let face = Face::new(ids(&[2, 0, 1]), None, FaceId::new(0));
        let edges: Vec<_> = face.edges().collect();
        assert_eq!(
            edges,
            vec![
                (VertexId::new(0), VertexId::new(2)),
                (VertexId::new(0), VertexId::new(1)),
                (VertexId::new(1), VertexId::new(2)),
            ]
        );
    }

    #[test]
    fn arity_helpers() {
        let tri = Face::new(ids(&[0, 1, 2]), None, FaceId::new(0));
        let quad = Face::new(ids(&[0, 1, 2, 3]), Some(7), FaceId::new(1));
        assert!(tri.is_triangle() && !tri.is_quad());
        assert!(quad.is_quad() && quad.is_valid());
        assert_eq!(quad.material, Some(7));
        assert!(quad.contains_vertex(VertexId::new(3)));
        assert!(!tri.contains_vertex(VertexId::new(3)));
        assert!(!tri.has_normal());
    }
}
