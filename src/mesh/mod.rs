mod edge_index;
mod validate;

pub use validate::TopologyReport;

use std::sync::OnceLock;

use tracing::debug;

use crate::error::TopologyError;
use crate::math::polygon_3d::{fan_area, fan_signed_volume, polygon_normal};
use crate::math::{Point3, Vector3, VectorExt};
use crate::topology::{BoundingBox, Edge, EdgeId, Face, FaceId, MaterialId, Vertex, VertexId};

use edge_index::EdgeIndex;

/// Construction-time options for a [`Mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshConfig {
    /// Maintain the edge-adjacency index as faces are added.
    ///
    /// When disabled, [`Mesh::edges`] is empty; validation still checks
    /// manifoldness by building a temporary index.
    pub track_edges: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self { track_edges: true }
    }
}

impl MeshConfig {
    /// Sets whether edges are tracked.
    #[must_use]
    pub fn with_edge_tracking(mut self, enabled: bool) -> Self {
        self.track_edges = enabled;
        self
    }
}

/// An append-only polygon mesh.
///
/// Owns its vertices, faces and edges in flat arrays; entities refer to
/// each other by index. An entity's id is its position in the array and
/// is never reused. Faces may have any number of vertices from three up.
///
/// Normals, area, volume and the bounding box are derived on demand. The
/// bounding box is cached until the next vertex insertion or mutation.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    edges: EdgeIndex,
    config: MeshConfig,
    bounding_box: OnceLock<BoundingBox>,
}

impl Mesh {
    /// Creates a new, empty mesh with edge tracking enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty mesh with the given configuration.
    #[must_use]
    pub fn with_config(config: MeshConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration this mesh was built with.
    #[must_use]
    pub fn config(&self) -> MeshConfig {
        self.config
    }

    /// Enables or disables edge tracking.
    ///
    /// Enabling rebuilds the edge index from every existing face, so the
    /// result is the same as if tracking had been on from the start.
    /// Disabling discards the index.
    pub fn set_edge_tracking(&mut self, enabled: bool) {
        if enabled == self.config.track_edges {
            return;
        }
        self.config.track_edges = enabled;
        if enabled {
            self.edges = EdgeIndex::from_faces(&self.faces);
            debug!(
                faces = self.faces.len(),
                edges = self.edges.edges().len(),
                "rebuilt edge index"
            );
        } else {
            self.edges.clear();
            debug!("edge tracking disabled");
        }
    }

    // --- Vertex operations ---

    /// Appends a vertex and returns its id.
    ///
    /// Accepts either a [`Vertex`] (with optional normal and uv) or a bare
    /// [`Point3`] position. Any id already set on the vertex is replaced.
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        let mut vertex = vertex.into();
        vertex.set_id(id);
        self.vertices.push(vertex);
        self.bounding_box.take();
        id
    }

    /// Returns the vertex with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexOutOfRange`] if `id` is not below
    /// [`vertex_count`](Self::vertex_count).
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, TopologyError> {
        self.vertices
            .get(id.index())
            .ok_or_else(|| out_of_range("vertex", id.index(), self.vertices.len()))
    }

    /// Returns a mutable reference to the vertex with the given id.
    ///
    /// Invalidates the cached bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexOutOfRange`] if `id` is not below
    /// [`vertex_count`](Self::vertex_count).
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex, TopologyError> {
        let len = self.vertices.len();
        let vertex = self
            .vertices
            .get_mut(id.index())
            .ok_or_else(|| out_of_range("vertex", id.index(), len))?;
        self.bounding_box.take();
        Ok(vertex)
    }

    /// Every vertex, indexed by [`VertexId`].
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Reserves capacity for at least `additional` more vertices.
    pub fn reserve_vertices(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    // --- Face operations ---

    /// Appends a face over the given vertex ids and returns its id.
    ///
    /// When edge tracking is enabled the face's boundary edges are added
    /// to the edge index.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::TooFewVertices`] if fewer than 3 ids are
    /// given, or [`TopologyError::IndexOutOfRange`] if any id does not name
    /// an existing vertex. The mesh is unchanged on error.
    pub fn add_face(&mut self, vertices: &[VertexId]) -> Result<FaceId, TopologyError> {
        self.push_face(vertices, None)
    }

    /// Like [`add_face`](Self::add_face), also assigning a material.
    ///
    /// # Errors
    ///
    /// Same as [`add_face`](Self::add_face).
    pub fn add_face_with_material(
        &mut self,
        vertices: &[VertexId],
        material: MaterialId,
    ) -> Result<FaceId, TopologyError> {
        self.push_face(vertices, Some(material))
    }

    /// Appends a triangle.
    ///
    /// # Errors
    ///
    /// Same as [`add_face`](Self::add_face).
    pub fn add_triangle(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        v3: VertexId,
    ) -> Result<FaceId, TopologyError> {
        self.add_face(&[v1, v2, v3])
    }

    /// Appends a quad.
    ///
    /// # Errors
    ///
    /// Same as [`add_face`](Self::add_face).
    pub fn add_quad(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        v3: VertexId,
        v4: VertexId,
    ) -> Result<FaceId, TopologyError> {
        self.add_face(&[v1, v2, v3, v4])
    }

    fn push_face(
        &mut self,
        vertices: &[VertexId],
        material: Option<MaterialId>,
    ) -> Result<FaceId, TopologyError> {
        if vertices.len() < 3 {
            return Err(TopologyError::TooFewVertices {
                count: vertices.len(),
            });
        }
        let len = self.vertices.len();
        if let Some(bad) = vertices.iter().find(|v| v.index() >= len) {
            return Err(out_of_range("vertex", bad.index(), len));
        }

        let id = FaceId::new(self.faces.len());
        let face = Face::new(vertices.to_vec(), material, id);
        if self.config.track_edges {
            self.edges.insert_face(&face);
        }
        self.faces.push(face);
        Ok(id)
    }

    /// Returns the face with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexOutOfRange`] if `id` is not below
    /// [`face_count`](Self::face_count).
    pub fn face(&self, id: FaceId) -> Result<&Face, TopologyError> {
        self.faces
            .get(id.index())
            .ok_or_else(|| out_of_range("face", id.index(), self.faces.len()))
    }

    /// Assigns a material to an existing face.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexOutOfRange`] if `id` is not below
    /// [`face_count`](Self::face_count).
    pub fn set_face_material(
        &mut self,
        id: FaceId,
        material: Option<MaterialId>,
    ) -> Result<(), TopologyError> {
        let len = self.faces.len();
        let face = self
            .faces
            .get_mut(id.index())
            .ok_or_else(|| out_of_range("face", id.index(), len))?;
        face.material = material;
        Ok(())
    }

    /// Every face, indexed by [`FaceId`].
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Reserves capacity for at least `additional` more faces.
    pub fn reserve_faces(&mut self, additional: usize) {
        self.faces.reserve(additional);
    }

    // --- Edge operations ---

    /// Returns the edge with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexOutOfRange`] if `id` is not below
    /// [`edge_count`](Self::edge_count).
    pub fn edge(&self, id: EdgeId) -> Result<&Edge, TopologyError> {
        let edges = self.edges.edges();
        edges
            .get(id.index())
            .ok_or_else(|| out_of_range("edge", id.index(), edges.len()))
    }

    /// Tracked edges in order of first appearance. Empty when edge
    /// tracking is disabled.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        self.edges.edges()
    }

    /// Number of tracked edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.edges().len()
    }

    /// Looks up the edge joining `a` and `b`, in either order.
    #[must_use]
    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edges.find(a, b)
    }

    /// Tracked edges used by exactly one face.
    pub fn boundary_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.edges().iter().filter(|e| e.is_boundary)
    }

    // --- Whole-mesh operations ---

    /// Returns `true` if the mesh has no vertices and no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Removes every vertex, face and edge. The configuration is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.edges.clear();
        self.bounding_box.take();
    }

    /// Mutable access to every vertex for whole-mesh operations.
    /// Invalidates the cached bounding box.
    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        self.bounding_box.take();
        &mut self.vertices
    }

    /// Mutable access to every face for whole-mesh operations.
    ///
    /// Callers may reorder a face's vertices but must not change which
    /// vertices it uses, or the edge index goes stale.
    pub(crate) fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    // --- Geometry ---

    /// Computes every face normal by Newell's method.
    ///
    /// Normals are unit length, or zero for degenerate faces.
    pub fn compute_face_normals(&mut self) {
        let mut ring = Vec::new();
        for face in &mut self.faces {
            gather_positions(&self.vertices, face, &mut ring);
            face.normal = polygon_normal(&ring);
        }
    }

    /// Computes every vertex normal as the normalized, unweighted sum of
    /// the normals of the faces that use it.
    ///
    /// Reads the stored face normals, so call
    /// [`compute_face_normals`](Self::compute_face_normals) first, or use
    /// [`compute_normals`](Self::compute_normals). Vertices with no
    /// contributing face end up with a zero (unset) normal.
    pub fn compute_vertex_normals(&mut self) {
        for vertex in &mut self.vertices {
            vertex.normal = Vector3::zeros();
        }

        for face in self.faces.iter().filter(|f| f.has_normal()) {
            for vid in &face.vertices {
                self.vertices[vid.index()].normal += face.normal;
            }
        }

        for vertex in &mut self.vertices {
            vertex.normal.normalize_in_place_or_zero();
        }
    }

    /// Computes face normals, then vertex normals.
    pub fn compute_normals(&mut self) {
        self.compute_face_normals();
        self.compute_vertex_normals();
    }

    /// Axis-aligned bounds of every vertex position.
    ///
    /// Computed on first use after a change and cached. Empty (invalid)
    /// for a mesh without vertices.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        *self
            .bounding_box
            .get_or_init(|| BoundingBox::from_points(self.vertices.iter().map(|v| &v.position)))
    }

    /// Total face area. Faces with more than three vertices are fan
    /// triangulated from their first vertex.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        let mut ring = Vec::new();
        self.faces
            .iter()
            .map(|face| {
                gather_positions(&self.vertices, face, &mut ring);
                fan_area(&ring)
            })
            .sum()
    }

    /// Signed enclosed volume by the divergence theorem.
    ///
    /// Positive for a closed mesh whose faces wind outward. For an open
    /// mesh the value depends on the position of the origin.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut ring = Vec::new();
        self.faces
            .iter()
            .map(|face| {
                gather_positions(&self.vertices, face, &mut ring);
                fan_signed_volume(&ring)
            })
            .sum()
    }

    /// Enclosed volume, assuming a closed and consistently wound mesh.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }
}

fn gather_positions(vertices: &[Vertex], face: &Face, ring: &mut Vec<Point3>) {
    ring.clear();
    ring.extend(face.vertices.iter().map(|v| vertices[v.index()].position));
}

fn out_of_range(kind: &'static str, index: usize, len: usize) -> TopologyError {
    TopologyError::IndexOutOfRange { kind, index, len }
}
