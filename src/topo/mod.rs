//! Core topological data structures.
//!
//! This module provides the entity store for a winged/half-edge boundary
//! representation: solids, faces, loops, half-edges, edges, and vertices,
//! all held in per-kind arenas and wired together with typed ids.
//!
//! # Structure
//!
//! - A **solid** owns unordered lists of faces, edges, and vertices
//! - A **face** owns a list of loops and designates one as its outer boundary
//! - A **loop** owns a circular ring of half-edges
//! - An **edge** is traversed by exactly two mate half-edges, one per loop
//! - A **vertex** caches one incident edge-bearing half-edge
//!
//! Entities are created and destroyed only by the Euler operators in
//! [`crate::euler`]; this module supplies the storage, the membership-list
//! bookkeeping, and the ring splicing they are built from.

mod arena;
mod entity;
mod id;
mod list;
mod model;
mod ring;

pub(crate) use list::{list_insert, list_remove, FaceLoops};

pub use entity::{Edge, Face, HalfEdge, Loop, Orientation, Solid, Vertex};
pub use id::{EdgeId, FaceId, HalfEdgeId, LoopId, SolidId, VertexId};
pub use model::Model;
