//! Error types for hedron.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

use crate::topo::{EdgeId, FaceId, HalfEdgeId, LoopId, SolidId, VertexId};

/// Result type alias using [`TopoError`].
pub type Result<T> = std::result::Result<T, TopoError>;

/// Errors that can occur during topological operations.
///
/// Every Euler operator validates its preconditions before mutating the
/// entity graph; a returned error therefore guarantees the graph is exactly
/// as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopoError {
    /// Two half-edges were required to lie on the same ring, but walking
    /// from the first never reaches the second.
    #[error("half-edge {to:?} is not reachable from {from:?} on its ring")]
    NotCoRing {
        /// The half-edge the walk started from.
        from: HalfEdgeId,
        /// The half-edge the walk was expected to reach.
        to: HalfEdgeId,
    },

    /// Two half-edges were required to be the two sides of one edge.
    #[error("half-edges {0:?} and {1:?} are not mates of a common edge")]
    NotMates(HalfEdgeId, HalfEdgeId),

    /// Two half-edges were required to belong to the same loop.
    #[error("half-edges {0:?} and {1:?} belong to different loops")]
    DifferentLoops(HalfEdgeId, HalfEdgeId),

    /// Two faces were required to belong to the same solid.
    #[error("faces {0:?} and {1:?} belong to different solids")]
    DifferentSolids(FaceId, FaceId),

    /// An operation was asked to merge a face with itself.
    #[error("cannot merge face {0:?} with itself")]
    SelfMerge(FaceId),

    /// A solid id does not resolve to a live solid.
    #[error("solid {0:?} is not in the model")]
    StaleSolid(SolidId),

    /// A face id does not resolve to a live face.
    #[error("face {0:?} is not in the model")]
    StaleFace(FaceId),

    /// A loop id does not resolve to a live loop.
    #[error("loop {0:?} is not in the model")]
    StaleLoop(LoopId),

    /// A half-edge id does not resolve to a live half-edge.
    #[error("half-edge {0:?} is not in the model")]
    StaleHalfEdge(HalfEdgeId),

    /// An edge id does not resolve to a live edge.
    #[error("edge {0:?} is not in the model")]
    StaleEdge(EdgeId),

    /// A vertex id does not resolve to a live vertex.
    #[error("vertex {0:?} is not in the model")]
    StaleVertex(VertexId),

    /// No face with the given number exists in the solid.
    #[error("solid {solid:?} has no face numbered {face_no}")]
    FaceNotFound {
        /// The solid that was searched.
        solid: SolidId,
        /// The requested face number.
        face_no: u32,
    },

    /// No half-edge in the face starts at the numbered vertex.
    #[error("face {face:?} has no half-edge starting at vertex {vertex_no}")]
    VertexNotFound {
        /// The face whose loops were searched.
        face: FaceId,
        /// The requested vertex number.
        vertex_no: u32,
    },

    /// A loop's ring is missing or degenerate where a real boundary is
    /// required (e.g. sweeping a face whose loop is still a lone sentinel).
    #[error("loop {0:?} has no usable boundary ring")]
    MalformedRing(LoopId),

    /// Internal ring bookkeeping produced an impossible state. Indicates a
    /// bug in the kernel rather than misuse by the caller.
    #[error("ring structure corrupted near half-edge {0:?}")]
    RingCorrupted(HalfEdgeId),
}
