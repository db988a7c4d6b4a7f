use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::math::polygon_3d::fan_area;
use crate::math::Point3;
use crate::mesh::Mesh;
use crate::topology::BoundingBox;

/// Summary measurements of a mesh.
///
/// Edge lengths are taken over the distinct undirected edges of every
/// face, whether or not the mesh tracks edges. Ranges and averages are
/// zero for a mesh with no edges or faces.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,
    /// Number of faces.
    pub face_count: usize,

    /// Faces with exactly three vertices.
    pub triangle_count: usize,
    /// Faces with exactly four vertices.
    pub quad_count: usize,
    /// Faces with five or more vertices.
    pub polygon_count: usize,

    /// Shortest edge length.
    pub min_edge_length: f64,
    /// Longest edge length.
    pub max_edge_length: f64,
    /// Mean edge length.
    pub average_edge_length: f64,

    /// Smallest face area.
    pub min_face_area: f64,
    /// Largest face area.
    pub max_face_area: f64,
    /// Mean face area.
    pub average_face_area: f64,

    /// Sum of all face areas.
    pub surface_area: f64,
    /// Enclosed volume, see [`Mesh::volume`].
    pub volume: f64,
    /// Bounds of every vertex, empty for an empty mesh.
    pub bounding_box: BoundingBox,
}

impl MeshStatistics {
    /// Measures `mesh`.
    #[must_use]
    pub fn compute(mesh: &Mesh) -> Self {
        let vertices = mesh.vertices();
        let faces = mesh.faces();

        let pairs: BTreeSet<_> = faces
            .iter()
            .flat_map(|face| face.edges())
            .filter(|(a, b)| a != b)
            .collect();
        let edge_lengths = Range::from_values(pairs.iter().map(|(a, b)| {
            (vertices[b.index()].position - vertices[a.index()].position).norm()
        }));

        let mut ring: Vec<Point3> = Vec::new();
        let face_areas = Range::from_values(faces.iter().map(|face| {
            ring.clear();
            ring.extend(face.vertices.iter().map(|v| vertices[v.index()].position));
            fan_area(&ring)
        }));

        let stats = Self {
            vertex_count: vertices.len(),
            edge_count: pairs.len(),
            face_count: faces.len(),
            triangle_count: faces.iter().filter(|f| f.is_triangle()).count(),
            quad_count: faces.iter().filter(|f| f.is_quad()).count(),
            polygon_count: faces.iter().filter(|f| f.vertex_count() > 4).count(),
            min_edge_length: edge_lengths.min,
            max_edge_length: edge_lengths.max,
            average_edge_length: edge_lengths.average(),
            min_face_area: face_areas.min,
            max_face_area: face_areas.max,
            average_face_area: face_areas.average(),
            surface_area: face_areas.sum,
            volume: mesh.volume(),
            bounding_box: mesh.bounding_box(),
        };

        debug!(
            vertices = stats.vertex_count,
            edges = stats.edge_count,
            faces = stats.face_count,
            area = stats.surface_area,
            "computed mesh statistics"
        );
        stats
    }
}

impl fmt::Display for MeshStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mesh Statistics:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(
            f,
            "  Faces: {} ({} triangles, {} quads, {} polygons)",
            self.face_count, self.triangle_count, self.quad_count, self.polygon_count
        )?;
        writeln!(
            f,
            "  Edge length: min {:.6}, max {:.6}, avg {:.6}",
            self.min_edge_length, self.max_edge_length, self.average_edge_length
        )?;
        writeln!(
            f,
            "  Face area: min {:.6}, max {:.6}, avg {:.6}",
            self.min_face_area, self.max_face_area, self.average_face_area
        )?;
        writeln!(f, "  Surface area: {:.6}", self.surface_area)?;
        writeln!(f, "  Volume: {:.6}", self.volume)?;
        if self.bounding_box.is_valid() {
            let (min, max) = (self.bounding_box.min, self.bounding_box.max);
            writeln!(
                f,
                "  Bounds: [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
                min.x, min.y, min.z, max.x, max.y, max.z
            )?;
        } else {
            writeln!(f, "  Bounds: empty")?;
        }
        Ok(())
    }
}

/// Running min, max and sum of a sequence of values.
struct Range {
    min: f64,
    max: f64,
    sum: f64,
    count: usize,
}

impl Range {
    fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut range = Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        };
        for value in values {
            range.min = range.min.min(value);
            range.max = range.max.max(value);
            range.sum += value;
            range.count += 1;
        }
        if range.count == 0 {
            range.min = 0.0;
            range.max = 0.0;
        }
        range
    }

    #[allow(clippy::cast_precision_loss)]
    fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}
