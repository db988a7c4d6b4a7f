use thiserror::Error;

/// Top-level error type for the polymesh library.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("component index {index} is out of range for a {dimension}-dimensional vector")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by the mesh container when it is misused.
///
/// A failed call never modifies the mesh.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("face must have at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("{kind} index {index} is out of range (count is {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}

/// Errors related to mesh operations (generators, transforms).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;
