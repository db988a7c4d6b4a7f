mod flip;

pub use flip::FlipFaces;
