//! Euler operators.
//!
//! The primitive, invariant-preserving mutations of the entity graph. Each
//! operator creates or destroys entities in a matched set so that the
//! Euler-Poincaré relation `V - E + F = 2(S - H) + R` holds before and
//! after every call (`R` counting the inner loops beyond each face's
//! first).
//!
//! Unlike the classical formulation, every operator validates its
//! topological preconditions up front and returns a typed error with the
//! graph untouched on violation; partial execution would be unrecoverable
//! since the operators are not transactional.

use nalgebra::Point3;
use tracing::debug;

use crate::error::{Result, TopoError};
use crate::topo::Orientation::{Minus, Plus};
use crate::topo::{list_insert, list_remove, FaceLoops};
use crate::topo::{EdgeId, FaceId, HalfEdgeId, LoopId, Model, SolidId, VertexId};

impl Model {
    /// Make-vertex-face-solid: create a new solid containing one face, one
    /// loop, one vertex at `(x, y, z)`, and a sentinel half-edge anchoring
    /// the loop at the vertex.
    ///
    /// Delta: V+1, F+1, S+1.
    pub fn make_vertex_face_solid(
        &mut self,
        face_no: u32,
        vertex_no: u32,
        x: f64,
        y: f64,
        z: f64,
    ) -> SolidId {
        let solid = self.new_solid();
        let face = self.new_face(solid);
        let lp = self.new_loop(face);
        let vertex = self.new_vertex(solid, vertex_no, Point3::new(x, y, z));
        let he = self.new_half_edge(vertex, lp);

        self.face_mut(face).face_no = face_no;
        self.face_mut(face).outer_loop = Some(lp);
        self.loop_mut(lp).anchor = Some(he);

        debug!(?solid, ?face, ?vertex, "mvfs");
        solid
    }

    /// Make-edge-vertex: split the vertex shared by the half-edge fan from
    /// `he1` up to (not including) `he2`, reassigning that fan to a new
    /// vertex at `(x, y, z)` and joining old and new vertex with a new
    /// edge. `he1` and `he2` may be equal.
    ///
    /// Returns the new vertex and edge. Delta: V+1, E+1.
    pub fn make_edge_vertex(
        &mut self,
        he1: HalfEdgeId,
        he2: HalfEdgeId,
        vertex_no: u32,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<(VertexId, EdgeId)> {
        self.try_halfedge(he1)?;
        self.try_halfedge(he2)?;
        let fan = self.fan_walk(he1, he2)?;

        let solid = self.solid_of(he1);
        let edge = self.new_edge(solid);
        let vertex = self.new_vertex(solid, vertex_no, Point3::new(x, y, z));

        for he in fan {
            self.halfedge_mut(he).vertex = vertex;
        }

        let old_vertex = self.halfedge(he2).vertex;
        self.ring_insert(edge, old_vertex, he1, Minus);
        self.ring_insert(edge, vertex, he2, Plus);

        let plus_he = self.halfedge(he2).prev;
        self.vertex_mut(vertex).vedge = Some(plus_he);
        self.vertex_mut(old_vertex).vedge = Some(he2);

        debug!(?edge, ?vertex, "lmev");
        Ok((vertex, edge))
    }

    /// Make-edge-face: split the loop holding `he1` and `he2` with a new
    /// edge between their start vertices, moving the ring section from
    /// `he1` up to (not including) `he2` onto a new loop owned by a new
    /// face numbered `face_no`.
    ///
    /// Returns the new face. Delta: F+1, L+1, E+1.
    pub fn make_edge_face(&mut self, he1: HalfEdgeId, he2: HalfEdgeId, face_no: u32) -> Result<FaceId> {
        self.try_halfedge(he1)?;
        self.try_halfedge(he2)?;
        let section = self.ring_span(he1, he2)?;

        let solid = self.solid_of(he1);
        let face = self.new_face(solid);
        let lp = self.new_loop(face);
        let edge = self.new_edge(solid);
        self.face_mut(face).face_no = face_no;
        self.face_mut(face).outer_loop = Some(lp);

        for he in section {
            self.halfedge_mut(he).wloop = lp;
        }

        let v1 = self.halfedge(he1).vertex;
        let v2 = self.halfedge(he2).vertex;
        let nhe1 = self.ring_insert(edge, v2, he1, Minus);
        let nhe2 = self.ring_insert(edge, v1, he2, Plus);

        // Swap the prv chains of nhe1/nhe2 so the two ring sections each
        // close on themselves.
        let p1 = self.halfedge(nhe1).prev;
        let p2 = self.halfedge(nhe2).prev;
        self.halfedge_mut(p1).next = nhe2;
        self.halfedge_mut(p2).next = nhe1;
        self.halfedge_mut(nhe1).prev = p2;
        self.halfedge_mut(nhe2).prev = p1;

        self.halfedge_mut(nhe1).wloop = lp;
        self.loop_mut(lp).anchor = Some(nhe1);
        let old_loop = self.halfedge(nhe2).wloop;
        self.loop_mut(old_loop).anchor = Some(nhe2);

        debug!(?face, ?edge, "lmef");
        Ok(face)
    }

    /// Kill-edge-make-ring: remove the edge shared by mates `h1`/`h2`,
    /// splitting their loop so the section from `h2`'s side becomes a new
    /// ring (inner loop) on the same face.
    ///
    /// Structural inverse of [`Model::make_edge_face`] restricted to the
    /// single-loop case. Returns the new loop. Delta: L+1, E-1.
    pub fn kill_edge_make_ring(&mut self, h1: HalfEdgeId, h2: HalfEdgeId) -> Result<LoopId> {
        self.try_halfedge(h1)?;
        self.try_halfedge(h2)?;
        let edge = self.halfedge(h1).edge.ok_or(TopoError::NotMates(h1, h2))?;
        if h1 == h2 || self.halfedge(h2).edge != Some(edge) {
            return Err(TopoError::NotMates(h1, h2));
        }
        let e = self.edge(edge);
        let mates_ok = (e.he_plus == Some(h1) && e.he_minus == Some(h2))
            || (e.he_plus == Some(h2) && e.he_minus == Some(h1));
        if !mates_ok {
            return Err(TopoError::NotMates(h1, h2));
        }
        let old_loop = self.halfedge(h1).wloop;
        if self.halfedge(h2).wloop != old_loop {
            return Err(TopoError::DifferentLoops(h1, h2));
        }

        let solid = self.solid_of(h1);
        let face = self.loop_(old_loop).face;
        let new_loop = self.new_loop(face);

        // Cross-splice the ring at h1/h2 into two independent cycles.
        let h3 = self.halfedge(h1).next;
        let h2n = self.halfedge(h2).next;
        self.halfedge_mut(h1).next = h2n;
        self.halfedge_mut(h2n).prev = h1;
        self.halfedge_mut(h2).next = h3;
        self.halfedge_mut(h3).prev = h2;

        let mut h4 = h2;
        loop {
            self.halfedge_mut(h4).wloop = new_loop;
            h4 = self.halfedge(h4).next;
            if h4 == h2 {
                break;
            }
        }

        // h1/h2 carry the killed edge, so the shrink path always yields an
        // anchor for each ring.
        let a1 = self.ring_remove(h1).ok_or(TopoError::RingCorrupted(h1))?;
        self.loop_mut(old_loop).anchor = Some(a1);
        let a2 = self.ring_remove(h2).ok_or(TopoError::RingCorrupted(h2))?;
        self.loop_mut(new_loop).anchor = Some(a2);

        self.refresh_vedge(a1);
        self.refresh_vedge(a2);
        let a1n = self.halfedge(a1).next;
        self.refresh_vedge(a1n);
        let a2n = self.halfedge(a2).next;
        self.refresh_vedge(a2n);

        self.free_edge(edge, solid);

        debug!(?edge, ?new_loop, "lkemr");
        Ok(new_loop)
    }

    /// Kill-face-merge-ring: move every loop of `f2` onto `f1`, then delete
    /// `f2`. Purely a bookkeeping merge; the caller is responsible for the
    /// loops of `f2` actually lying in `f1`'s surface.
    ///
    /// Delta: F-1.
    pub fn kill_face_merge_ring(&mut self, f1: FaceId, f2: FaceId) -> Result<()> {
        self.try_face(f1)?;
        self.try_face(f2)?;
        if f1 == f2 {
            return Err(TopoError::SelfMerge(f1));
        }
        let solid = self.face(f1).solid;
        if self.face(f2).solid != solid {
            return Err(TopoError::DifferentSolids(f1, f2));
        }

        while let Some(lp) = self.face(f2).loops {
            list_remove::<FaceLoops>(self, lp, f2);
            list_insert::<FaceLoops>(self, lp, f1);
        }
        self.free_face(f2, solid);

        debug!(?f1, ?f2, "lkfmrh");
        Ok(())
    }

    // ==================== Precondition walks ====================

    /// Walk the half-edge fan around a vertex from `he1` to `he2` via
    /// "cross to mate, take its next", collecting the elements strictly
    /// before `he2`. Fails without mutating if `he2` is unreachable.
    fn fan_walk(&self, he1: HalfEdgeId, he2: HalfEdgeId) -> Result<Vec<HalfEdgeId>> {
        let not_co_ring = TopoError::NotCoRing { from: he1, to: he2 };
        let limit = self.halfedge_count();
        let mut out = Vec::new();
        let mut he = he1;
        while he != he2 {
            let mate = self.mate(he).ok_or_else(|| not_co_ring.clone())?;
            out.push(he);
            he = self.halfedge(mate).next;
            if he == he1 || out.len() > limit {
                return Err(not_co_ring);
            }
        }
        Ok(out)
    }

    /// Walk the ring from `he1` to `he2` via `next`, collecting the
    /// elements strictly before `he2`. Fails without mutating if `he2` is
    /// not on `he1`'s ring.
    fn ring_span(&self, he1: HalfEdgeId, he2: HalfEdgeId) -> Result<Vec<HalfEdgeId>> {
        let not_co_ring = TopoError::NotCoRing { from: he1, to: he2 };
        let limit = self.halfedge_count();
        let mut out = Vec::new();
        let mut he = he1;
        while he != he2 {
            out.push(he);
            he = self.halfedge(he).next;
            if he == he1 || out.len() > limit {
                return Err(not_co_ring);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build the open wire v1-v2-v3-v4 on a single face, the state gwb's
    /// block reaches after mvfs plus three mev calls.
    fn base_wire(model: &mut Model) -> SolidId {
        let s = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        model.mev(s, 1, 1, 2, 1.0, 0.0, 0.0).unwrap();
        model.mev(s, 1, 2, 3, 1.0, 1.0, 0.0).unwrap();
        model.mev(s, 1, 3, 4, 0.0, 1.0, 0.0).unwrap();
        s
    }

    #[test]
    fn test_mvfs_minimal_solid() {
        let mut model = Model::new();
        let s = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);

        assert_eq!(model.faces_of(s).len(), 1);
        assert_eq!(model.vertices_of(s).len(), 1);
        assert_eq!(model.edges_of(s).len(), 0);

        let f = model.faces_of(s)[0];
        assert_eq!(model.face(f).face_no, 1);
        let loops = model.loops_of(f);
        assert_eq!(loops.len(), 1);
        assert_eq!(model.face(f).outer_loop, Some(loops[0]));

        let ring = model.ring_of(loops[0]);
        assert_eq!(ring.len(), 1);
        let he = model.halfedge(ring[0]);
        assert_eq!(he.next, ring[0]);
        assert_eq!(he.prev, ring[0]);
        assert_eq!(he.edge, None);
        assert_eq!(model.vertex(he.vertex).vertex_no, 1);
        assert_eq!(model.vertex(he.vertex).weight, 1.0);
    }

    #[test]
    fn test_lmev_splits_sentinel_vertex() {
        let mut model = Model::new();
        let s = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        let f = model.faces_of(s)[0];
        let lp = model.loops_of(f)[0];
        let he = model.ring_of(lp)[0];

        let (v, e) = model.make_edge_vertex(he, he, 2, 1.0, 0.0, 0.0).unwrap();
        assert_eq!(model.vertices_of(s).len(), 2);
        assert_eq!(model.edges_of(s).len(), 1);

        let ring = model.ring_of(lp);
        assert_eq!(ring.len(), 2);
        assert_eq!(model.mate(ring[0]), Some(ring[1]));
        assert_eq!(model.halfedge(ring[0]).edge, Some(e));
        assert_eq!(model.halfedge(ring[1]).edge, Some(e));

        // both vertex caches point at half-edges starting at them
        for vid in [v, model.halfedge(he).vertex] {
            let cached = model.vertex(vid).vedge.unwrap();
            assert_eq!(model.halfedge(cached).vertex, vid);
            assert!(model.halfedge(cached).edge.is_some());
        }
    }

    #[test]
    fn test_lmev_unreachable_leaves_model_untouched() {
        let mut model = Model::new();
        let s1 = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        let s2 = model.make_vertex_face_solid(1, 1, 5.0, 0.0, 0.0);
        let he1 = model.ring_of(model.loops_of(model.faces_of(s1)[0])[0])[0];
        let he2 = model.ring_of(model.loops_of(model.faces_of(s2)[0])[0])[0];

        let snapshot = model.clone();
        let err = model.make_edge_vertex(he1, he2, 9, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, TopoError::NotCoRing { .. }));
        assert_eq!(model, snapshot);
    }

    #[test]
    fn test_lmef_closes_quad() {
        let mut model = Model::new();
        let s = base_wire(&mut model);

        // wire ring visits v1 v2 v3 v4 v3 v2
        let f1 = model.face_by_number(s, 1).unwrap();
        let ring = model.ring_of(model.loops_of(f1)[0]);
        assert_eq!(ring.len(), 6);

        let f2 = model.mef(s, 1, 4, 1, 2).unwrap();
        assert_eq!(model.faces_of(s).len(), 2);
        assert_eq!(model.edges_of(s).len(), 4);
        assert_eq!(model.vertices_of(s).len(), 4);

        // both faces now bound a quadrilateral
        let r1 = model.ring_of(model.loops_of(f1)[0]);
        let r2 = model.ring_of(model.loops_of(f2)[0]);
        assert_eq!(r1.len(), 4);
        assert_eq!(r2.len(), 4);

        // every ring element's wloop matches the ring that holds it
        for (lp, ring) in [
            (model.loops_of(f1)[0], &r1),
            (model.loops_of(f2)[0], &r2),
        ] {
            for &he in ring {
                assert_eq!(model.halfedge(he).wloop, lp);
            }
        }
    }

    #[test]
    fn test_lmef_unreachable_fails_cleanly() {
        let mut model = Model::new();
        let s = base_wire(&mut model);
        model.mef(s, 1, 4, 1, 2).unwrap();

        let f1 = model.face_by_number(s, 1).unwrap();
        let f2 = model.face_by_number(s, 2).unwrap();
        let he1 = model.ring_of(model.loops_of(f1)[0])[0];
        let he2 = model.ring_of(model.loops_of(f2)[0])[0];

        let snapshot = model.clone();
        let err = model.make_edge_face(he1, he2, 3).unwrap_err();
        assert!(matches!(err, TopoError::NotCoRing { .. }));
        assert_eq!(model, snapshot);
    }

    #[test]
    fn test_lkemr_inverts_lmev_edge_count() {
        let mut model = Model::new();
        let s = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        let f = model.faces_of(s)[0];
        let lp = model.loops_of(f)[0];
        let he = model.ring_of(lp)[0];

        let (_, e) = model.make_edge_vertex(he, he, 2, 1.0, 0.0, 0.0).unwrap();
        let ring = model.ring_of(lp);
        let (h1, h2) = (ring[0], ring[1]);
        assert_eq!(model.halfedge(h1).edge, Some(e));

        let nl = model.kill_edge_make_ring(h1, h2).unwrap();
        assert_eq!(model.edges_of(s).len(), 0);
        assert_eq!(model.loops_of(f).len(), 2);

        // both rings degenerate back into sentinels, vertex caches cleared
        for lid in [lp, nl] {
            let ring = model.ring_of(lid);
            assert_eq!(ring.len(), 1);
            let he = model.halfedge(ring[0]);
            assert_eq!(he.edge, None);
            assert_eq!(model.vertex(he.vertex).vedge, None);
        }
    }

    #[test]
    fn test_lkemr_rejects_non_mates() {
        let mut model = Model::new();
        let s = base_wire(&mut model);
        let f1 = model.face_by_number(s, 1).unwrap();
        let ring = model.ring_of(model.loops_of(f1)[0]);

        // ring[0] and ring[1] are consecutive, not mates
        let snapshot = model.clone();
        let err = model.kill_edge_make_ring(ring[0], ring[1]).unwrap_err();
        assert!(matches!(
            err,
            TopoError::NotMates(_, _) | TopoError::DifferentLoops(_, _)
        ));
        assert_eq!(model, snapshot);
    }

    #[test]
    fn test_lkfmrh_merges_loops() {
        let mut model = Model::new();
        let s = base_wire(&mut model);
        let f2 = model.mef(s, 1, 4, 1, 2).unwrap();
        let f1 = model.face_by_number(s, 1).unwrap();

        model.kill_face_merge_ring(f1, f2).unwrap();
        assert_eq!(model.faces_of(s).len(), 1);
        assert_eq!(model.loops_of(f1).len(), 2);
        for lp in model.loops_of(f1) {
            assert_eq!(model.loop_(lp).face, f1);
        }
        assert!(model.try_face(f2).is_err());
    }

    #[test]
    fn test_lkfmrh_rejects_cross_solid() {
        let mut model = Model::new();
        let s1 = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        let s2 = model.make_vertex_face_solid(1, 1, 5.0, 0.0, 0.0);
        let f1 = model.faces_of(s1)[0];
        let f2 = model.faces_of(s2)[0];

        let err = model.kill_face_merge_ring(f1, f2).unwrap_err();
        assert_eq!(err, TopoError::DifferentSolids(f1, f2));
    }
}
