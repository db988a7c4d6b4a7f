pub mod error;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod topology;

pub use error::{MeshError, Result};
pub use mesh::{Mesh, MeshConfig, TopologyReport};
