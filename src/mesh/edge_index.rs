use std::collections::HashMap;

use tracing::{debug, trace};

use crate::topology::{Edge, EdgeId, Face, VertexId};

/// Edge arena plus a lookup from canonical vertex pairs to edge ids.
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeIndex {
    edges: Vec<Edge>,
    lookup: HashMap<(VertexId, VertexId), EdgeId>,
}

impl EdgeIndex {
    /// Builds the index for a complete face list.
    pub(crate) fn from_faces(faces: &[Face]) -> Self {
        let mut index = Self::default();
        for face in faces {
            index.insert_face(face);
        }
        index
    }

    /// Records every boundary edge of `face`, creating edges on first use.
    ///
    /// Pairs of identical vertices do not form an edge.
    pub(crate) fn insert_face(&mut self, face: &Face) {
        for (a, b) in face.edges() {
            if a == b {
                trace!(face = %face.id(), vertex = %a, "skipping degenerate edge");
                continue;
            }

            let edges = &mut self.edges;
            let id = *self.lookup.entry((a, b)).or_insert_with(|| {
                let id = EdgeId::new(edges.len());
                edges.push(Edge::new(a, b, id));
                id
            });

            let edge = &mut self.edges[id.index()];
            edge.attach_face(face.id());
            if edge.face_count() == 3 {
                debug!(edge = %id, v1 = %a, v2 = %b, "edge became non-manifold");
            }
        }
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn find(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.lookup.get(&key).copied()
    }

    pub(crate) fn clear(&mut self) {
        self.edges.clear();
        self.lookup.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::FaceId;

    fn face(id: usize, raw: &[usize]) -> Face {
        Face::new(
            raw.iter().copied().map(VertexId::new).collect(),
            None,
            FaceId::new(id),
        )
    }

    #[test]
    fn shared_edge_is_deduplicated() {
        // Two triangles sharing the diagonal (0, 2).
        let index = EdgeIndex::from_faces(&[face(0, &[0, 1, 2]), face(1, &[0, 2, 3])]);
        assert_eq!(index.edges().len(), 5);

        let diagonal = index.find(VertexId::new(2), VertexId::new(0)).unwrap();
        let edge = &index.edges()[diagonal.index()];
        assert_eq!(edge.adjacent_faces, vec![FaceId::new(0), FaceId::new(1)]);
        assert!(!edge.is_boundary);

        let boundary = index.edges().iter().filter(|e| e.is_boundary).count();
        assert_eq!(boundary, 4);
    }

    #[test]
    fn edge_ids_follow_first_appearance() {
        let index = EdgeIndex::from_faces(&[face(0, &[3, 1, 2])]);
        let pairs: Vec<_> = index
            .edges()
            .iter()
            .map(|e| (e.id().index(), e.v1.index(), e.v2.index()))
            .collect();
        assert_eq!(pairs, vec![(0, 1, 3), (1, 1, 2), (2, 2, 3)]);
    }

    #[test]
    fn repeated_vertex_does_not_create_self_loop() {
        let index = EdgeIndex::from_faces(&[face(0, &[0, 1, 1, 2])]);
        assert!(index.edges().iter().all(|e| e.v1 != e.v2));
        assert_eq!(index.edges().len(), 3);
    }

    #[test]
    fn clear_empties_lookup() {
        let mut index = EdgeIndex::from_faces(&[face(0, &[0, 1, 2])]);
        index.clear();
        assert!(index.edges().is_empty());
        assert!(index.find(VertexId::new(0), VertexId::new(1)).is_none());
    }
}
