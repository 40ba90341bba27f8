//! Derived constructors.
//!
//! Everything here is composed purely from the Euler operators in
//! [`crate::euler`]: the number-based `mev`/`mef` wrappers, the solid-scoped
//! numbering used by extrusion, and the two derived builders `sweep`
//! (linear extrusion) and `block` (axis-aligned box).

use nalgebra::Vector3;
use tracing::debug;

use crate::error::{Result, TopoError};
use crate::topo::{FaceId, HalfEdgeId, Model, SolidId, VertexId};

impl Model {
    // ==================== Numbering ====================

    /// Seed `solid`'s numbering counters from the highest vertex and face
    /// numbers currently in use, so that freshly handed-out numbers never
    /// collide with existing ones.
    pub fn seed_numbering(&mut self, solid: SolidId) {
        let max_v = self
            .vertices_of(solid)
            .iter()
            .map(|&v| self.vertex(v).vertex_no)
            .max()
            .unwrap_or(0);
        let max_f = self
            .faces_of(solid)
            .iter()
            .map(|&f| self.face(f).face_no)
            .max()
            .unwrap_or(0);
        let s = self.solid_mut(solid);
        s.max_vertex_no = max_v;
        s.max_face_no = max_f;
    }

    /// Hand out the next unused vertex number for `solid`.
    pub fn next_vertex_no(&mut self, solid: SolidId) -> u32 {
        let s = self.solid_mut(solid);
        s.max_vertex_no += 1;
        s.max_vertex_no
    }

    /// Hand out the next unused face number for `solid`.
    pub fn next_face_no(&mut self, solid: SolidId) -> u32 {
        let s = self.solid_mut(solid);
        s.max_face_no += 1;
        s.max_face_no
    }

    // ==================== Number-based lookup ====================

    /// Find the face of `solid` carrying `face_no`.
    pub fn face_by_number(&self, solid: SolidId, face_no: u32) -> Option<FaceId> {
        self.faces_of(solid)
            .into_iter()
            .find(|&f| self.face(f).face_no == face_no)
    }

    /// Find a half-edge in `face`'s loops starting at the vertex numbered
    /// `vertex_no`.
    pub fn halfedge_at(&self, face: FaceId, vertex_no: u32) -> Option<HalfEdgeId> {
        for lp in self.loops_of(face) {
            for he in self.ring_of(lp) {
                if self.vertex(self.halfedge(he).vertex).vertex_no == vertex_no {
                    return Some(he);
                }
            }
        }
        None
    }

    // ==================== Number-based operator wrappers ====================

    /// Make-edge-vertex by numbers: in face `face_no` of `solid`, split the
    /// vertex numbered `vertex_no`, numbering the new vertex
    /// `new_vertex_no` and placing it at `(x, y, z)`.
    pub fn mev(
        &mut self,
        solid: SolidId,
        face_no: u32,
        vertex_no: u32,
        new_vertex_no: u32,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<VertexId> {
        self.try_solid(solid)?;
        let face = self
            .face_by_number(solid, face_no)
            .ok_or(TopoError::FaceNotFound { solid, face_no })?;
        let he = self
            .halfedge_at(face, vertex_no)
            .ok_or(TopoError::VertexNotFound { face, vertex_no })?;
        let (vertex, _) = self.make_edge_vertex(he, he, new_vertex_no, x, y, z)?;
        Ok(vertex)
    }

    /// Make-edge-face by numbers: in face `face_no` of `solid`, connect the
    /// vertices numbered `v1_no` and `v2_no` with a new edge, splitting the
    /// face; the new face is numbered `new_face_no`.
    pub fn mef(
        &mut self,
        solid: SolidId,
        face_no: u32,
        v1_no: u32,
        v2_no: u32,
        new_face_no: u32,
    ) -> Result<FaceId> {
        self.try_solid(solid)?;
        let face = self
            .face_by_number(solid, face_no)
            .ok_or(TopoError::FaceNotFound { solid, face_no })?;
        let he1 = self
            .halfedge_at(face, v1_no)
            .ok_or(TopoError::VertexNotFound { face, vertex_no: v1_no })?;
        let he2 = self
            .halfedge_at(face, v2_no)
            .ok_or(TopoError::VertexNotFound { face, vertex_no: v2_no })?;
        self.make_edge_face(he1, he2, new_face_no)
    }

    // ==================== Derived builders ====================

    /// Extrude `face` along `(dx, dy, dz)`.
    ///
    /// Walks every loop of the face once, splitting each boundary vertex
    /// into its translated copy with [`Model::make_edge_vertex`] and closing
    /// one side face per boundary edge with [`Model::make_edge_face`]. New
    /// vertex and face numbers come from the solid's counters, seeded here.
    pub fn sweep(&mut self, face: FaceId, dx: f64, dy: f64, dz: f64) -> Result<()> {
        self.try_face(face)?;
        let solid = self.face(face).solid;
        self.seed_numbering(solid);
        let d = Vector3::new(dx, dy, dz);

        for lp in self.loops_of(face) {
            let first = self
                .loop_(lp)
                .anchor
                .ok_or(TopoError::MalformedRing(lp))?;
            if self.halfedge(first).edge.is_none() {
                return Err(TopoError::MalformedRing(lp));
            }

            let mut scan = self.halfedge(first).next;
            let start = self.vertex(self.halfedge(scan).vertex).point + d;
            let vn = self.next_vertex_no(solid);
            self.make_edge_vertex(scan, scan, vn, start.x, start.y, start.z)?;

            while scan != first {
                let ahead = self.halfedge(scan).next;
                let lifted = self.vertex(self.halfedge(ahead).vertex).point + d;
                let vn = self.next_vertex_no(solid);
                self.make_edge_vertex(ahead, ahead, vn, lifted.x, lifted.y, lifted.z)?;

                let behind = self.halfedge(scan).prev;
                let two_ahead = self.halfedge(self.halfedge(scan).next).next;
                let side_no = self.next_face_no(solid);
                self.make_edge_face(behind, two_ahead, side_no)?;

                let ahead = self.halfedge(scan).next;
                let mate = self.mate(ahead).ok_or(TopoError::RingCorrupted(ahead))?;
                scan = self.halfedge(mate).next;
            }

            let behind = self.halfedge(scan).prev;
            let two_ahead = self.halfedge(self.halfedge(scan).next).next;
            let side_no = self.next_face_no(solid);
            self.make_edge_face(behind, two_ahead, side_no)?;
        }

        debug!(?face, dx, dy, dz, "sweep");
        Ok(())
    }

    /// Build an axis-aligned box of size `(dx, dy, dz)` with one corner at
    /// the origin: lay out the base quadrilateral with `mvfs` plus three
    /// `mev`s and one `mef`, then sweep it upward.
    pub fn block(&mut self, dx: f64, dy: f64, dz: f64) -> Result<SolidId> {
        let solid = self.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        self.mev(solid, 1, 1, 2, dx, 0.0, 0.0)?;
        self.mev(solid, 1, 2, 3, dx, dy, 0.0)?;
        self.mev(solid, 1, 3, 4, 0.0, dy, 0.0)?;
        self.mef(solid, 1, 4, 1, 2)?;

        let base = self
            .face_by_number(solid, 1)
            .ok_or(TopoError::FaceNotFound { solid, face_no: 1 })?;
        self.sweep(base, 0.0, 0.0, dz)?;

        debug!(?solid, dx, dy, dz, "block");
        Ok(solid)
    }
}
