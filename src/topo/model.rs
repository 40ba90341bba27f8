//! The entity store.
//!
//! A [`Model`] owns one arena per entity kind and hands out typed ids. It
//! plays the allocator role for the Euler operators: the `new_*`
//! constructors create a default-initialized entity and link it into its
//! owner's membership list, and the `free_*` methods unlink and reclaim.
//!
//! The panicking accessors (`vertex`, `halfedge`, ...) are for internal use
//! after preconditions have been validated; the `try_*` variants turn a
//! stale id into a typed error and are what the public operators call
//! first.

use nalgebra::Point3;

use super::arena::Arena;
use super::entity::{Edge, Face, HalfEdge, Loop, Solid, Vertex};
use super::id::{EdgeId, FaceId, HalfEdgeId, LoopId, SolidId, VertexId};
use super::list::{list_insert, list_remove, FaceLoops, SolidEdges, SolidFaces, SolidVerts};
use crate::error::{Result, TopoError};

/// Arena-based storage for all topological entities.
///
/// A model may hold any number of independent solids; every operator acts
/// on entities of a single solid at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub(crate) solids: Arena<Solid>,
    pub(crate) faces: Arena<Face>,
    pub(crate) loops: Arena<Loop>,
    pub(crate) halfedges: Arena<HalfEdge>,
    pub(crate) edges: Arena<Edge>,
    pub(crate) vertices: Arena<Vertex>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    /// Get a solid by id.
    #[inline]
    pub fn solid(&self, id: SolidId) -> &Solid {
        self.solids.get(id.index()).expect("stale SolidId")
    }

    /// Get a solid by id, mutably.
    #[inline]
    pub fn solid_mut(&mut self, id: SolidId) -> &mut Solid {
        self.solids.get_mut(id.index()).expect("stale SolidId")
    }

    /// Get a face by id.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        self.faces.get(id.index()).expect("stale FaceId")
    }

    /// Get a face by id, mutably.
    #[inline]
    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        self.faces.get_mut(id.index()).expect("stale FaceId")
    }

    /// Get a loop by id.
    #[inline]
    pub fn loop_(&self, id: LoopId) -> &Loop {
        self.loops.get(id.index()).expect("stale LoopId")
    }

    /// Get a loop by id, mutably.
    #[inline]
    pub fn loop_mut(&mut self, id: LoopId) -> &mut Loop {
        self.loops.get_mut(id.index()).expect("stale LoopId")
    }

    /// Get a half-edge by id.
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId) -> &HalfEdge {
        self.halfedges.get(id.index()).expect("stale HalfEdgeId")
    }

    /// Get a half-edge by id, mutably.
    #[inline]
    pub fn halfedge_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        self.halfedges.get_mut(id.index()).expect("stale HalfEdgeId")
    }

    /// Get an edge by id.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.edges.get(id.index()).expect("stale EdgeId")
    }

    /// Get an edge by id, mutably.
    #[inline]
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        self.edges.get_mut(id.index()).expect("stale EdgeId")
    }

    /// Get a vertex by id.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        self.vertices.get(id.index()).expect("stale VertexId")
    }

    /// Get a vertex by id, mutably.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        self.vertices.get_mut(id.index()).expect("stale VertexId")
    }

    // ==================== Checked lookups ====================

    /// Resolve a solid id or report it stale.
    pub fn try_solid(&self, id: SolidId) -> Result<&Solid> {
        self.solids
            .get(id.index())
            .ok_or(TopoError::StaleSolid(id))
    }

    /// Resolve a face id or report it stale.
    pub fn try_face(&self, id: FaceId) -> Result<&Face> {
        self.faces.get(id.index()).ok_or(TopoError::StaleFace(id))
    }

    /// Resolve a loop id or report it stale.
    pub fn try_loop(&self, id: LoopId) -> Result<&Loop> {
        self.loops.get(id.index()).ok_or(TopoError::StaleLoop(id))
    }

    /// Resolve a half-edge id or report it stale.
    pub fn try_halfedge(&self, id: HalfEdgeId) -> Result<&HalfEdge> {
        self.halfedges
            .get(id.index())
            .ok_or(TopoError::StaleHalfEdge(id))
    }

    /// Resolve an edge id or report it stale.
    pub fn try_edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges.get(id.index()).ok_or(TopoError::StaleEdge(id))
    }

    /// Resolve a vertex id or report it stale.
    pub fn try_vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.vertices
            .get(id.index())
            .ok_or(TopoError::StaleVertex(id))
    }

    // ==================== Allocation ====================

    /// Allocate an empty solid.
    pub(crate) fn new_solid(&mut self) -> SolidId {
        SolidId::new(self.solids.insert(Solid {
            faces: None,
            edges: None,
            vertices: None,
            max_vertex_no: 0,
            max_face_no: 0,
        }))
    }

    /// Allocate a face owned by `solid` and link it into the face list.
    pub(crate) fn new_face(&mut self, solid: SolidId) -> FaceId {
        let id = FaceId::new(self.faces.insert(Face {
            face_no: 0,
            outer_loop: None,
            loops: None,
            solid,
            next: None,
            prev: None,
        }));
        list_insert::<SolidFaces>(self, id, solid);
        id
    }

    /// Allocate a loop owned by `face` and link it into the loop list.
    pub(crate) fn new_loop(&mut self, face: FaceId) -> LoopId {
        let id = LoopId::new(self.loops.insert(Loop {
            anchor: None,
            face,
            next: None,
            prev: None,
        }));
        list_insert::<FaceLoops>(self, id, face);
        id
    }

    /// Allocate a self-linked half-edge starting at `vertex` on `wloop`'s
    /// ring. Half-edges are not list members; the ring editor splices them.
    pub(crate) fn new_half_edge(&mut self, vertex: VertexId, wloop: LoopId) -> HalfEdgeId {
        let id = HalfEdgeId::new(self.halfedges.insert(HalfEdge {
            edge: None,
            vertex,
            wloop,
            next: HalfEdgeId::new(0),
            prev: HalfEdgeId::new(0),
        }));
        let he = self.halfedge_mut(id);
        he.next = id;
        he.prev = id;
        id
    }

    /// Allocate an edge owned by `solid` and link it into the edge list.
    /// Its mate references are filled in by the ring editor.
    pub(crate) fn new_edge(&mut self, solid: SolidId) -> EdgeId {
        let id = EdgeId::new(self.edges.insert(Edge {
            he_plus: None,
            he_minus: None,
            next: None,
            prev: None,
        }));
        list_insert::<SolidEdges>(self, id, solid);
        id
    }

    /// Allocate a numbered vertex owned by `solid` at `point` and link it
    /// into the vertex list.
    pub(crate) fn new_vertex(&mut self, solid: SolidId, vertex_no: u32, point: Point3<f64>) -> VertexId {
        let id = VertexId::new(self.vertices.insert(Vertex {
            vertex_no,
            point,
            weight: 1.0,
            vedge: None,
            next: None,
            prev: None,
        }));
        list_insert::<SolidVerts>(self, id, solid);
        id
    }

    // ==================== Reclamation ====================

    /// Reclaim a half-edge. The caller has already spliced it out of its
    /// ring.
    pub(crate) fn free_half_edge(&mut self, he: HalfEdgeId) {
        self.halfedges.remove(he.index());
    }

    /// Unlink an edge from `solid`'s edge list and reclaim it.
    pub(crate) fn free_edge(&mut self, edge: EdgeId, solid: SolidId) {
        list_remove::<SolidEdges>(self, edge, solid);
        self.edges.remove(edge.index());
    }

    /// Unlink a face from `solid`'s face list and reclaim it. The caller
    /// has already emptied or relocated its loops.
    pub(crate) fn free_face(&mut self, face: FaceId, solid: SolidId) {
        list_remove::<SolidFaces>(self, face, solid);
        self.faces.remove(face.index());
    }

    // ==================== Topology queries ====================

    /// The mate of `he`: the other half-edge sharing its edge. `None` for
    /// a sentinel half-edge.
    pub fn mate(&self, he: HalfEdgeId) -> Option<HalfEdgeId> {
        let edge = self.edge(self.halfedge(he).edge?);
        if edge.he_plus == Some(he) {
            edge.he_minus
        } else {
            edge.he_plus
        }
    }

    /// The solid that owns the loop containing `he`.
    pub fn solid_of(&self, he: HalfEdgeId) -> SolidId {
        self.face(self.loop_(self.halfedge(he).wloop).face).solid
    }

    /// Number of live half-edges across the whole model. Used to bound ring
    /// walks so a corrupted or mismatched ring cannot loop forever.
    pub(crate) fn halfedge_count(&self) -> usize {
        self.halfedges.len()
    }

    // ==================== List traversal ====================

    /// Collect the faces of a solid, list order.
    pub fn faces_of(&self, solid: SolidId) -> Vec<FaceId> {
        let mut out = Vec::new();
        let mut cur = self.solid(solid).faces;
        while let Some(f) = cur {
            out.push(f);
            cur = self.face(f).next;
        }
        out
    }

    /// Collect the edges of a solid, list order.
    pub fn edges_of(&self, solid: SolidId) -> Vec<EdgeId> {
        let mut out = Vec::new();
        let mut cur = self.solid(solid).edges;
        while let Some(e) = cur {
            out.push(e);
            cur = self.edge(e).next;
        }
        out
    }

    /// Collect the vertices of a solid, list order.
    pub fn vertices_of(&self, solid: SolidId) -> Vec<VertexId> {
        let mut out = Vec::new();
        let mut cur = self.solid(solid).vertices;
        while let Some(v) = cur {
            out.push(v);
            cur = self.vertex(v).next;
        }
        out
    }

    /// Collect the loops of a face, list order.
    pub fn loops_of(&self, face: FaceId) -> Vec<LoopId> {
        let mut out = Vec::new();
        let mut cur = self.face(face).loops;
        while let Some(l) = cur {
            out.push(l);
            cur = self.loop_(l).next;
        }
        out
    }

    /// Collect the half-edges of a loop's ring in traversal order, starting
    /// at its anchor. Empty when the loop has no anchor.
    pub fn ring_of(&self, lp: LoopId) -> Vec<HalfEdgeId> {
        let Some(first) = self.loop_(lp).anchor else {
            return Vec::new();
        };
        let mut out = vec![first];
        let mut cur = self.halfedge(first).next;
        while cur != first {
            out.push(cur);
            cur = self.halfedge(cur).next;
        }
        out
    }
}
