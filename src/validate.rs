//! Topology validation for B-rep solids.
//!
//! Checks the invariants that must hold between operator calls:
//! - every ring is a closed, mutually linked `next`/`prev` cycle
//! - every half-edge's loop reference matches the ring holding it
//! - every edge has exactly two distinct mate half-edges pointing back at it
//! - every vertex's incident-half-edge cache is accurate (set iff an
//!   edge-bearing half-edge starts there, and pointing at one)
//! - ownership back-references agree with the membership lists
//! - Euler-Poincaré: `V - E + F = 2 + R` for a single genus-0 shell, with
//!   `R` the inner loops beyond each face's first

use std::collections::{HashMap, HashSet};

use crate::topo::{HalfEdgeId, Model, SolidId, VertexId};

/// Entity counts for one solid, derived by walking its membership lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    /// Vertices in the solid's vertex list.
    pub vertices: usize,
    /// Edges in the solid's edge list.
    pub edges: usize,
    /// Faces in the solid's face list.
    pub faces: usize,
    /// Loops across all faces.
    pub loops: usize,
}

/// Count the entities of `solid`.
pub fn counts(model: &Model, solid: SolidId) -> Counts {
    let faces = model.faces_of(solid);
    let loops = faces.iter().map(|&f| model.loops_of(f).len()).sum();
    Counts {
        vertices: model.vertices_of(solid).len(),
        edges: model.edges_of(solid).len(),
        faces: faces.len(),
        loops,
    }
}

/// The Euler-Poincaré count `V - E + F - R` of `solid`, where `R` is the
/// number of loops beyond one per face. Equals 2 for a valid single shell
/// with no handles.
pub fn euler_characteristic(model: &Model, solid: SolidId) -> i64 {
    let c = counts(model, solid);
    let rings = c.loops as i64 - c.faces as i64;
    c.vertices as i64 - c.edges as i64 + c.faces as i64 - rings
}

/// Result of topology validation.
#[derive(Debug)]
pub struct ValidationResult {
    /// True when no violations were found.
    pub valid: bool,
    /// Human-readable descriptions of every violation found.
    pub errors: Vec<String>,
}

/// Validate that `solid` satisfies the boundary-structure invariants.
pub fn validate_solid(model: &Model, solid: SolidId) -> ValidationResult {
    let mut errors = Vec::new();
    let limit = model.halfedge_count() + 1;

    // 1. Rings: closed cycles, consistent prev links, loop references.
    let mut ring_members: HashSet<HalfEdgeId> = HashSet::new();
    for face in model.faces_of(solid) {
        if model.face(face).solid != solid {
            errors.push(format!("face {face:?}: solid back-reference mismatch"));
        }
        let loops = model.loops_of(face);
        match model.face(face).outer_loop {
            Some(outer) if !loops.contains(&outer) => {
                errors.push(format!("face {face:?}: outer loop {outer:?} not in loop list"));
            }
            None => errors.push(format!("face {face:?} has no outer loop")),
            _ => {}
        }
        for lp in loops {
            if model.loop_(lp).face != face {
                errors.push(format!("loop {lp:?}: face back-reference mismatch"));
            }
            let Some(first) = model.loop_(lp).anchor else {
                errors.push(format!("loop {lp:?} has no anchor"));
                continue;
            };
            let mut he = first;
            let mut steps = 0;
            loop {
                ring_members.insert(he);
                if model.halfedge(he).wloop != lp {
                    errors.push(format!("half-edge {he:?}: wloop does not match its ring"));
                }
                let next = model.halfedge(he).next;
                if model.halfedge(next).prev != he {
                    errors.push(format!("half-edge {he:?}: next/prev links disagree"));
                }
                he = next;
                steps += 1;
                if he == first {
                    break;
                }
                if steps > limit {
                    errors.push(format!("loop {lp:?}: ring does not close"));
                    break;
                }
            }
        }
    }

    // 2. Edges: two distinct mates, each in a ring of this solid and
    // pointing back at the edge.
    for edge in model.edges_of(solid) {
        let e = model.edge(edge);
        match (e.he_plus, e.he_minus) {
            (Some(hp), Some(hm)) => {
                if hp == hm {
                    errors.push(format!("edge {edge:?}: mates are the same half-edge"));
                }
                for he in [hp, hm] {
                    if model.halfedge(he).edge != Some(edge) {
                        errors.push(format!(
                            "edge {edge:?}: half-edge {he:?} does not reference it back"
                        ));
                    }
                    if !ring_members.contains(&he) {
                        errors.push(format!(
                            "edge {edge:?}: half-edge {he:?} is in no ring of the solid"
                        ));
                    }
                }
            }
            _ => errors.push(format!("edge {edge:?}: missing mate half-edge")),
        }
    }

    // 3. Vertex caches: set iff an edge-bearing half-edge starts at the
    // vertex, and pointing at such a half-edge.
    let mut incident: HashMap<VertexId, HalfEdgeId> = HashMap::new();
    for &he in &ring_members {
        if model.halfedge(he).edge.is_some() {
            incident.insert(model.halfedge(he).vertex, he);
        }
    }
    for vertex in model.vertices_of(solid) {
        match model.vertex(vertex).vedge {
            Some(he) => {
                if !ring_members.contains(&he) {
                    errors.push(format!("vertex {vertex:?}: vedge {he:?} is in no ring"));
                } else if model.halfedge(he).vertex != vertex {
                    errors.push(format!(
                        "vertex {vertex:?}: vedge {he:?} does not start there"
                    ));
                } else if model.halfedge(he).edge.is_none() {
                    errors.push(format!(
                        "vertex {vertex:?}: vedge {he:?} carries no edge"
                    ));
                }
            }
            None => {
                if incident.contains_key(&vertex) {
                    errors.push(format!(
                        "vertex {vertex:?}: vedge cleared but incident edges exist"
                    ));
                }
            }
        }
    }

    // 4. Euler-Poincaré for a single genus-0 shell.
    let chi = euler_characteristic(model, solid);
    if chi != 2 {
        let c = counts(model, solid);
        errors.push(format!(
            "Euler-Poincaré violated: V-E+F-R = {}-{}+{}-{} = {chi} (expected 2)",
            c.vertices,
            c.edges,
            c.faces,
            c.loops - c.faces,
        ));
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(model: &Model, solid: SolidId) {
        let result = validate_solid(model, solid);
        assert!(result.valid, "violations: {:#?}", result.errors);
    }

    #[test]
    fn test_mvfs_is_valid() {
        let mut model = Model::new();
        let s = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        assert_valid(&model, s);
        assert_eq!(euler_characteristic(&model, s), 2);
    }

    #[test]
    fn test_block_is_valid() {
        let mut model = Model::new();
        let s = model.block(2.0, 3.0, 4.0).unwrap();
        assert_valid(&model, s);
        assert_eq!(
            counts(&model, s),
            Counts { vertices: 8, edges: 12, faces: 6, loops: 6 }
        );
    }

    #[test]
    fn test_every_step_of_block_construction_is_valid() {
        let mut model = Model::new();
        let s = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        assert_valid(&model, s);

        model.mev(s, 1, 1, 2, 2.0, 0.0, 0.0).unwrap();
        assert_valid(&model, s);
        model.mev(s, 1, 2, 3, 2.0, 3.0, 0.0).unwrap();
        assert_valid(&model, s);
        model.mev(s, 1, 3, 4, 0.0, 3.0, 0.0).unwrap();
        assert_valid(&model, s);

        model.mef(s, 1, 4, 1, 2).unwrap();
        assert_valid(&model, s);

        let base = model.face_by_number(s, 1).unwrap();
        model.sweep(base, 0.0, 0.0, 4.0).unwrap();
        assert_valid(&model, s);
    }

    #[test]
    fn test_lkemr_then_merge_stays_valid() {
        let mut model = Model::new();
        let s = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        let f = model.faces_of(s)[0];
        let lp = model.loops_of(f)[0];
        let he = model.ring_of(lp)[0];

        model.make_edge_vertex(he, he, 2, 1.0, 0.0, 0.0).unwrap();
        assert_valid(&model, s);

        let ring = model.ring_of(lp);
        model.kill_edge_make_ring(ring[0], ring[1]).unwrap();
        assert_valid(&model, s);
    }

    #[test]
    fn test_detects_broken_mate() {
        let mut model = Model::new();
        let s = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
        let f = model.faces_of(s)[0];
        let lp = model.loops_of(f)[0];
        let he = model.ring_of(lp)[0];
        model.make_edge_vertex(he, he, 2, 1.0, 0.0, 0.0).unwrap();

        // sever one mate reference behind the kernel's back
        let e = model.edges_of(s)[0];
        let plus = model.edge(e).he_plus;
        model.edge_mut(e).he_minus = plus;

        let result = validate_solid(&model, s);
        assert!(!result.valid);
    }
}
