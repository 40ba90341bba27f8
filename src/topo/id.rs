//! Typed id handles for topological entities.
//!
//! Every entity lives in an arena and is referred to by a typed index
//! wrapper. Cross-links between entities (mates, ring neighbors, parent
//! back-references) are stored as these ids rather than references, which
//! keeps the inherently cyclic topology graph free of ownership cycles.

use std::fmt::{self, Debug};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $display:literal) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(pub(crate) u32);

        impl $name {
            /// Create an id from a raw arena slot index.
            #[inline]
            pub(crate) fn new(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize);
                Self(index as u32)
            }

            /// The raw arena slot index.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }
    };
}

entity_id!(
    /// A type-safe solid index.
    SolidId, "S"
);
entity_id!(
    /// A type-safe face index.
    FaceId, "F"
);
entity_id!(
    /// A type-safe loop index.
    LoopId, "L"
);
entity_id!(
    /// A type-safe half-edge index.
    HalfEdgeId, "HE"
);
entity_id!(
    /// A type-safe edge index.
    EdgeId, "E"
);
entity_id!(
    /// A type-safe vertex index.
    VertexId, "V"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);
        assert_eq!(v, VertexId::new(42));
        assert_ne!(v, VertexId::new(7));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", HalfEdgeId::new(3)), "HE(3)");
        assert_eq!(format!("{:?}", SolidId::new(0)), "S(0)");
    }
}
