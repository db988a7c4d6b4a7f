use super::face::FaceId;
use super::vertex::VertexId;

entity_id! {
    /// Index of an edge in its mesh.
    EdgeId
}

/// An undirected mesh edge, derived from face boundaries.
///
/// The endpoints are stored in canonical order (`v1 < v2`) so that every
/// face sharing the vertex pair maps to the same edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Smaller endpoint.
    pub v1: VertexId,
    /// Larger endpoint.
    pub v2: VertexId,
    /// Faces whose boundary contains this edge, without repeats, in the
    /// order they were added.
    pub adjacent_faces: Vec<FaceId>,
    /// `true` iff exactly one face uses this edge.
    pub is_boundary: bool,
    id: EdgeId,
}

impl Edge {
    /// Creates an edge with no adjacent faces. The endpoints may be given
    /// in either order.
    pub(crate) fn new(a: VertexId, b: VertexId, id: EdgeId) -> Self {
        let (v1, v2) = if a <= b { (a, b) } else { (b, a) };
        Self {
            v1,
            v2,
            adjacent_faces: Vec::new(),
            is_boundary: false,
            id,
        }
    }

    /// The id of this edge in its mesh.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns `true` if `vertex` is an endpoint.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.v1 == vertex || self.v2 == vertex
    }

    /// Returns the endpoint opposite `vertex`, or `None` if `vertex` is not
    /// an endpoint.
    #[must_use]
    pub fn other_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        if self.v1 == vertex {
            Some(self.v2)
        } else if self.v2 == vertex {
            Some(self.v1)
        } else {
            None
        }
    }

    /// Number of faces using this edge.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.adjacent_faces.len()
    }

    /// Returns `true` if at most two faces share this edge.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.adjacent_faces.len() <= 2
    }

    /// Records `face` as adjacent. Adding the same face twice is a no-op.
    pub(crate) fn attach_face(&mut self, face: FaceId) {
        if !self.adjacent_faces.contains(&face) {
            self.adjacent_faces.push(face);
        }
        self.is_boundary = self.adjacent_faces.len() == 1;
    }
}
