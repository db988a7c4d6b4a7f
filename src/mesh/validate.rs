//! Topology validation.
//!
//! A mesh is valid when no two vertices share a position, every face has
//! at least three distinct vertices, and no edge is used by more than two
//! faces.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::topology::{Face, FaceId, Vertex, VertexId};

use super::edge_index::EdgeIndex;
use super::Mesh;

/// Every topology violation found in a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopologyReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Number of distinct edges (tracked or rebuilt for validation).
    pub edge_count: usize,
    /// Number of edges used by exactly one face.
    pub boundary_edge_count: usize,

    /// Pairs of vertices at identical positions, as `(first, duplicate)`
    /// with `first < duplicate`, sorted.
    pub duplicate_vertices: Vec<(VertexId, VertexId)>,
    /// Faces with fewer than three vertices or a repeated vertex id.
    pub invalid_faces: Vec<FaceId>,
    /// Edges used by more than two faces, as canonical vertex pairs.
    pub non_manifold_edges: Vec<(VertexId, VertexId)>,
}

impl TopologyReport {
    /// Returns `true` if no violation was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.duplicate_vertices.is_empty()
            && self.invalid_faces.is_empty()
            && self.non_manifold_edges.is_empty()
    }

    /// Returns `true` if the mesh is valid and has no boundary edges.
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.is_valid() && self.boundary_edge_count == 0 && self.face_count > 0
    }

    /// Total number of violations.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.duplicate_vertices.len() + self.invalid_faces.len() + self.non_manifold_edges.len()
    }
}

impl fmt::Display for TopologyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Topology Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Boundary edges: {}", self.boundary_edge_count)?;
        writeln!(
            f,
            "  Valid: {}",
            if self.is_valid() { "Yes" } else { "No" }
        )?;

        if !self.is_valid() {
            writeln!(f)?;
            writeln!(f, "  Issues:")?;
            if !self.duplicate_vertices.is_empty() {
                writeln!(
                    f,
                    "    Duplicate vertices: {}",
                    self.duplicate_vertices.len()
                )?;
            }
            if !self.invalid_faces.is_empty() {
                writeln!(f, "    Invalid faces: {}", self.invalid_faces.len())?;
            }
            if !self.non_manifold_edges.is_empty() {
                writeln!(
                    f,
                    "    Non-manifold edges: {}",
                    self.non_manifold_edges.len()
                )?;
            }
        }

        Ok(())
    }
}

impl Mesh {
    /// Checks the mesh topology and reports every violation.
    ///
    /// Duplicate positions are found by sorting, in `O(n log n)`.
    /// Manifoldness is checked against the tracked edges, or against an
    /// index rebuilt from the faces when edge tracking is disabled.
    #[must_use]
    pub fn validate(&self) -> TopologyReport {
        let rebuilt;
        let edges = if self.config.track_edges {
            self.edges.edges()
        } else {
            rebuilt = EdgeIndex::from_faces(&self.faces);
            rebuilt.edges()
        };

        let invalid_faces = self
            .faces
            .iter()
            .filter(|face| {
                if !face.is_valid() {
                    return true;
                }
                let mut ids = face.vertices.clone();
                ids.sort_unstable();
                ids.windows(2).any(|w| w[0] == w[1])
            })
            .map(Face::id)
            .collect();

        let report = TopologyReport {
            vertex_count: self.vertices.len(),
            face_count: self.faces.len(),
            edge_count: edges.len(),
            boundary_edge_count: edges.iter().filter(|e| e.is_boundary).count(),
            duplicate_vertices: duplicate_vertex_pairs(&self.vertices),
            invalid_faces,
            non_manifold_edges: edges
                .iter()
                .filter(|e| !e.is_manifold())
                .map(|e| (e.v1, e.v2))
                .collect(),
        };

        debug!(
            vertices = report.vertex_count,
            faces = report.face_count,
            edges = report.edge_count,
            issues = report.issue_count(),
            "validated mesh topology"
        );
        report
    }

    /// Returns `true` if [`validate`](Self::validate) finds no violation.
    #[must_use]
    pub fn validate_topology(&self) -> bool {
        self.validate().is_valid()
    }
}

/// Finds vertices with identical positions by sorting.
///
/// `-0.0` and `0.0` compare equal; NaN positions never match anything.
fn duplicate_vertex_pairs(vertices: &[Vertex]) -> Vec<(VertexId, VertexId)> {
    // Adding 0.0 maps -0.0 to 0.0 so total ordering agrees with `==`.
    let key = |i: usize| {
        let p = &vertices[i].position;
        [p.x + 0.0, p.y + 0.0, p.z + 0.0]
    };
    let mut order: Vec<usize> = (0..vertices.len()).collect();
    order.sort_by(|&a, &b| {
        let (ka, kb) = (key(a), key(b));
        ka.iter()
            .zip(&kb)
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut pairs = Vec::new();
    let mut run_start = 0;
    for k in 1..order.len() {
        let first = order[run_start];
        let current = order[k];
        if vertices[current].position == vertices[first].position {
            pairs.push((VertexId::new(first), VertexId::new(current)));
        } else {
            run_start = k;
        }
    }
    pairs.sort_unstable();
    pairs
}
