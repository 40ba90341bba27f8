//! Membership-list manager.
//!
//! Each parent keeps its children in an unordered intrusive doubly-linked
//! list: head pointer on the parent, `next`/`prev` links on the child.
//! Insert prepends in O(1) and sets the child's back-reference where the
//! relation carries one; remove splices in O(1) and fixes the head pointer
//! when the head is removed. No searching happens here; the caller
//! guarantees the child is a member before removing it.
//!
//! The four relations (solid-face, solid-edge, solid-vertex, face-loop) are
//! a closed set, so the insert/remove logic is written once over a relation
//! trait instead of once per entity kind.

use super::id::{EdgeId, FaceId, LoopId, SolidId, VertexId};
use super::model::Model;

/// One parent/child membership relation.
pub(crate) trait ListRel {
    /// Child id type.
    type Child: Copy + Eq;
    /// Parent id type.
    type Parent: Copy;

    fn head(model: &Model, parent: Self::Parent) -> Option<Self::Child>;
    fn set_head(model: &mut Model, parent: Self::Parent, head: Option<Self::Child>);
    fn links(model: &Model, child: Self::Child) -> (Option<Self::Child>, Option<Self::Child>);
    fn set_next(model: &mut Model, child: Self::Child, next: Option<Self::Child>);
    fn set_prev(model: &mut Model, child: Self::Child, prev: Option<Self::Child>);

    /// Update the child's back-reference to its parent. Relations without a
    /// back-reference (solid-edge, solid-vertex) leave this a no-op.
    fn set_parent(_model: &mut Model, _child: Self::Child, _parent: Self::Parent) {}
}

/// Prepend `child` to `parent`'s list for relation `R`.
pub(crate) fn list_insert<R: ListRel>(model: &mut Model, child: R::Child, parent: R::Parent) {
    let old_head = R::head(model, parent);
    R::set_next(model, child, old_head);
    R::set_prev(model, child, None);
    if let Some(head) = old_head {
        R::set_prev(model, head, Some(child));
    }
    R::set_head(model, parent, Some(child));
    R::set_parent(model, child, parent);
}

/// Splice `child` out of `parent`'s list for relation `R`.
pub(crate) fn list_remove<R: ListRel>(model: &mut Model, child: R::Child, parent: R::Parent) {
    let (next, prev) = R::links(model, child);
    if let Some(p) = prev {
        R::set_next(model, p, next);
    }
    if let Some(n) = next {
        R::set_prev(model, n, prev);
    }
    if R::head(model, parent) == Some(child) {
        R::set_head(model, parent, next);
    }
    R::set_next(model, child, None);
    R::set_prev(model, child, None);
}

/// Solid ↔ Face membership.
pub(crate) struct SolidFaces;

impl ListRel for SolidFaces {
    type Child = FaceId;
    type Parent = SolidId;

    fn head(model: &Model, parent: SolidId) -> Option<FaceId> {
        model.solid(parent).faces
    }
    fn set_head(model: &mut Model, parent: SolidId, head: Option<FaceId>) {
        model.solid_mut(parent).faces = head;
    }
    fn links(model: &Model, child: FaceId) -> (Option<FaceId>, Option<FaceId>) {
        let f = model.face(child);
        (f.next, f.prev)
    }
    fn set_next(model: &mut Model, child: FaceId, next: Option<FaceId>) {
        model.face_mut(child).next = next;
    }
    fn set_prev(model: &mut Model, child: FaceId, prev: Option<FaceId>) {
        model.face_mut(child).prev = prev;
    }
    fn set_parent(model: &mut Model, child: FaceId, parent: SolidId) {
        model.face_mut(child).solid = parent;
    }
}

/// Solid ↔ Edge membership.
pub(crate) struct SolidEdges;

impl ListRel for SolidEdges {
    type Child = EdgeId;
    type Parent = SolidId;

    fn head(model: &Model, parent: SolidId) -> Option<EdgeId> {
        model.solid(parent).edges
    }
    fn set_head(model: &mut Model, parent: SolidId, head: Option<EdgeId>) {
        model.solid_mut(parent).edges = head;
    }
    fn links(model: &Model, child: EdgeId) -> (Option<EdgeId>, Option<EdgeId>) {
        let e = model.edge(child);
        (e.next, e.prev)
    }
    fn set_next(model: &mut Model, child: EdgeId, next: Option<EdgeId>) {
        model.edge_mut(child).next = next;
    }
    fn set_prev(model: &mut Model, child: EdgeId, prev: Option<EdgeId>) {
        model.edge_mut(child).prev = prev;
    }
}

/// Solid ↔ Vertex membership.
pub(crate) struct SolidVerts;

impl ListRel for SolidVerts {
    type Child = VertexId;
    type Parent = SolidId;

    fn head(model: &Model, parent: SolidId) -> Option<VertexId> {
        model.solid(parent).vertices
    }
    fn set_head(model: &mut Model, parent: SolidId, head: Option<VertexId>) {
        model.solid_mut(parent).vertices = head;
    }
    fn links(model: &Model, child: VertexId) -> (Option<VertexId>, Option<VertexId>) {
        let v = model.vertex(child);
        (v.next, v.prev)
    }
    fn set_next(model: &mut Model, child: VertexId, next: Option<VertexId>) {
        model.vertex_mut(child).next = next;
    }
    fn set_prev(model: &mut Model, child: VertexId, prev: Option<VertexId>) {
        model.vertex_mut(child).prev = prev;
    }
}

/// Face ↔ Loop membership.
pub(crate) struct FaceLoops;

impl ListRel for FaceLoops {
    type Child = LoopId;
    type Parent = FaceId;

    fn head(model: &Model, parent: FaceId) -> Option<LoopId> {
        model.face(parent).loops
    }
    fn set_head(model: &mut Model, parent: FaceId, head: Option<LoopId>) {
        model.face_mut(parent).loops = head;
    }
    fn links(model: &Model, child: LoopId) -> (Option<LoopId>, Option<LoopId>) {
        let l = model.loop_(child);
        (l.next, l.prev)
    }
    fn set_next(model: &mut Model, child: LoopId, next: Option<LoopId>) {
        model.loop_mut(child).next = next;
    }
    fn set_prev(model: &mut Model, child: LoopId, prev: Option<LoopId>) {
        model.loop_mut(child).prev = prev;
    }
    fn set_parent(model: &mut Model, child: LoopId, parent: FaceId) {
        model.loop_mut(child).face = parent;
    }
}
