use crate::math::{Point3, Vector2, Vector3, VectorExt, ATTRIBUTE_EPSILON};

entity_id! {
    /// Index of a vertex in its mesh.
    VertexId
}

/// A mesh vertex.
///
/// `normal` and `uv` use the zero vector to mean "not set"; writers check
/// [`has_normal`](Self::has_normal) and [`has_uv`](Self::has_uv) to decide
/// which attributes to emit.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// The 3D position of the vertex.
    pub position: Point3,
    /// Vertex normal, zero when unset.
    pub normal: Vector3,
    /// Texture coordinate, zero when unset.
    pub uv: Vector2,
    id: VertexId,
}

impl Vertex {
    /// Creates a vertex at the given position with no normal or uv.
    ///
    /// The id is assigned when the vertex is added to a mesh.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            normal: Vector3::zeros(),
            uv: Vector2::zeros(),
            id: VertexId::new(0),
        }
    }

    /// Sets the vertex normal.
    #[must_use]
    pub fn with_normal(mut self, normal: Vector3) -> Self {
        self.normal = normal;
        self
    }

    /// Sets the texture coordinate.
    #[must_use]
    pub fn with_uv(mut self, uv: Vector2) -> Self {
        self.uv = uv;
        self
    }

    /// The id of this vertex in its mesh.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: VertexId) {
        self.id = id;
    }

    /// Returns `true` if a non-zero normal is set.
    #[must_use]
    pub fn has_normal(&self) -> bool {
        !self.normal.is_zero_within(ATTRIBUTE_EPSILON)
    }

    /// Returns `true` if non-zero texture coordinates are set.
    #[must_use]
    pub fn has_uv(&self) -> bool {
        !self.uv.is_zero_within(ATTRIBUTE_EPSILON)
    }
}

impl From<Point3> for Vertex {
    fn from(position: Point3) -> Self {
        Self::new(position)
    }
}
