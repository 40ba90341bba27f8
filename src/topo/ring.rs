//! Ring editor.
//!
//! Grows and shrinks the circular half-edge sequence that forms a loop's
//! boundary. A fresh loop owns a single sentinel half-edge (self-linked, no
//! edge); the first real edge introduced into the ring reuses that sentinel
//! instead of inserting a second element, and the shrink path restores the
//! sentinel when the last edge leaves the ring.

use super::entity::Orientation;
use super::id::{EdgeId, HalfEdgeId, VertexId};
use super::model::Model;

impl Model {
    /// Record a traversal of `edge` in the ring holding `anchor`, starting
    /// at `vertex`.
    ///
    /// If `anchor` is the sentinel element of its ring, it is reused in
    /// place; otherwise a new half-edge is spliced in immediately before
    /// `anchor`. Either way the element takes `edge`, `vertex`, and the
    /// anchor's loop, and is recorded on the edge as its `Plus` or `Minus`
    /// side. Returns the ring element used.
    pub(crate) fn ring_insert(
        &mut self,
        edge: EdgeId,
        vertex: VertexId,
        anchor: HalfEdgeId,
        orientation: Orientation,
    ) -> HalfEdgeId {
        let he = if self.halfedge(anchor).edge.is_none() {
            anchor
        } else {
            let wloop = self.halfedge(anchor).wloop;
            let he = self.new_half_edge(vertex, wloop);
            let prev = self.halfedge(anchor).prev;
            self.halfedge_mut(prev).next = he;
            self.halfedge_mut(he).prev = prev;
            self.halfedge_mut(he).next = anchor;
            self.halfedge_mut(anchor).prev = he;
            he
        };

        let wloop = self.halfedge(anchor).wloop;
        {
            let h = self.halfedge_mut(he);
            h.edge = Some(edge);
            h.vertex = vertex;
            h.wloop = wloop;
        }
        match orientation {
            Orientation::Plus => self.edge_mut(edge).he_plus = Some(he),
            Orientation::Minus => self.edge_mut(edge).he_minus = Some(he),
        }
        he
    }

    /// Take `he` out of its ring.
    ///
    /// A sentinel is deallocated outright and `None` is returned (the ring
    /// is now empty; this only happens transiently inside an operator). The
    /// sole edge-bearing element of a ring degenerates back into the
    /// sentinel and keeps anchoring its loop. Any other element is spliced
    /// out and deallocated, and its former predecessor is returned as the
    /// new ring anchor.
    pub(crate) fn ring_remove(&mut self, he: HalfEdgeId) -> Option<HalfEdgeId> {
        if self.halfedge(he).edge.is_none() {
            self.free_half_edge(he);
            None
        } else if self.halfedge(he).next == he {
            self.halfedge_mut(he).edge = None;
            Some(he)
        } else {
            let next = self.halfedge(he).next;
            let prev = self.halfedge(he).prev;
            self.halfedge_mut(prev).next = next;
            self.halfedge_mut(next).prev = prev;
            self.free_half_edge(he);
            Some(prev)
        }
    }

    /// Re-derive a vertex's incident half-edge cache from `he`: point the
    /// cache at `he` when it carries an edge, clear it otherwise.
    pub(crate) fn refresh_vedge(&mut self, he: HalfEdgeId) {
        let vertex = self.halfedge(he).vertex;
        let cache = self.halfedge(he).edge.map(|_| he);
        self.vertex_mut(vertex).vedge = cache;
    }
}
