/// Declares a typed index into one of the mesh's entity arenas.
///
/// Ids are dense: an id's value is the storage index of its entity.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Creates an id from a raw storage index.
            #[must_use]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the storage index this id refers to.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod bounding_box;
pub mod edge;
pub mod face;
pub mod vertex;

pub use bounding_box::BoundingBox;
pub use edge::{Edge, EdgeId};
pub use face::{Face, FaceId, MaterialId};
pub use vertex::{Vertex, VertexId};
