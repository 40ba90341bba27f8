//! The six topological entity kinds.
//!
//! A solid owns unordered lists of its faces, edges, and vertices; a face
//! owns a list of loops; a loop owns a circular ring of half-edges; an edge
//! is traversed by exactly two mate half-edges, one per adjacent loop.
//! Ownership lists are intrusive doubly-linked chains (`next`/`prev` on the
//! child, head pointer on the parent); the ring is a circular `next`/`prev`
//! chain that is never empty once its loop exists.

use nalgebra::Point3;

use super::id::{EdgeId, FaceId, HalfEdgeId, LoopId, SolidId, VertexId};

/// Which side of an edge a half-edge records.
///
/// `Plus` half-edges traverse the edge in its reference direction and are
/// stored as the edge's `he_plus`; `Minus` half-edges are stored as
/// `he_minus`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The reference traversal direction.
    Plus,
    /// The opposite traversal direction.
    Minus,
}

/// The root entity: one closed boundary surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Solid {
    /// Head of the face list.
    pub faces: Option<FaceId>,
    /// Head of the edge list.
    pub edges: Option<EdgeId>,
    /// Head of the vertex list.
    pub vertices: Option<VertexId>,
    /// Highest vertex number handed out so far (solid-scoped counter).
    pub max_vertex_no: u32,
    /// Highest face number handed out so far (solid-scoped counter).
    pub max_face_no: u32,
}

/// A planar boundary region, bounded by one outer loop and any number of
/// inner loops (rings).
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    /// Application-visible face number.
    pub face_no: u32,
    /// The designated outer boundary loop.
    pub outer_loop: Option<LoopId>,
    /// Head of the loop list.
    pub loops: Option<LoopId>,
    /// The owning solid.
    pub solid: SolidId,
    /// Next face in the solid's face list.
    pub next: Option<FaceId>,
    /// Previous face in the solid's face list.
    pub prev: Option<FaceId>,
}

/// One circular boundary of a face.
#[derive(Clone, Debug, PartialEq)]
pub struct Loop {
    /// Some half-edge on this loop's ring. `None` only transiently inside
    /// an operator, never between calls.
    pub anchor: Option<HalfEdgeId>,
    /// The owning face.
    pub face: FaceId,
    /// Next loop in the face's loop list.
    pub next: Option<LoopId>,
    /// Previous loop in the face's loop list.
    pub prev: Option<LoopId>,
}

/// One directed traversal of an edge around one of its two adjacent loops.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfEdge {
    /// The edge this half-edge traverses; `None` for the sentinel element
    /// of a not-yet-subdivided loop.
    pub edge: Option<EdgeId>,
    /// The vertex this half-edge starts at.
    pub vertex: VertexId,
    /// The loop whose ring currently contains this half-edge.
    pub wloop: LoopId,
    /// Next half-edge around the ring.
    pub next: HalfEdgeId,
    /// Previous half-edge around the ring.
    pub prev: HalfEdgeId,
}

/// An undirected edge, realized by its two mate half-edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// The half-edge traversing this edge in the `Plus` direction.
    pub he_plus: Option<HalfEdgeId>,
    /// The half-edge traversing this edge in the `Minus` direction.
    pub he_minus: Option<HalfEdgeId>,
    /// Next edge in the solid's edge list.
    pub next: Option<EdgeId>,
    /// Previous edge in the solid's edge list.
    pub prev: Option<EdgeId>,
}

/// A topological vertex with its spatial position.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    /// Application-visible vertex number.
    pub vertex_no: u32,
    /// The vertex position.
    pub point: Point3<f64>,
    /// Homogeneous weight (1.0 unless the caller says otherwise).
    pub weight: f64,
    /// Some half-edge starting at this vertex that carries an edge, or
    /// `None` when the vertex is isolated on a sentinel ring.
    pub vedge: Option<HalfEdgeId>,
    /// Next vertex in the solid's vertex list.
    pub next: Option<VertexId>,
    /// Previous vertex in the solid's vertex list.
    pub prev: Option<VertexId>,
}
