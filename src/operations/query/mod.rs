mod statistics;

pub use statistics::MeshStatistics;
