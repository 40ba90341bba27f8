//! # Hedron
//!
//! A topological kernel for boundary-representation (B-rep) solid modeling.
//!
//! Hedron maintains the boundary surface of a solid as a graph of vertices,
//! edges, half-edges, loops, and faces, and mutates it exclusively through
//! **Euler operators**: primitive graph edits that create or destroy
//! entities in matched sets so the Euler-Poincaré relation holds at every
//! step. The result is that the graph always describes a valid, orientable
//! 2-manifold boundary.
//!
//! ## Features
//!
//! - **Arena-indexed entity graph**: typed ids instead of pointers, so the
//!   cyclic topology graph needs no `Rc`/`RefCell`
//! - **Validated preconditions**: operators fail with a typed error instead
//!   of corrupting the graph on misuse
//! - **Derived constructors**: linear extrusion (`sweep`) and an
//!   axis-aligned box (`block`), composed purely from the primitives
//! - **Structural validation**: invariant checking for use in tests and
//!   debugging
//!
//! ## Quick Start
//!
//! ```
//! use hedron::prelude::*;
//!
//! let mut model = Model::new();
//! let solid = model.block(2.0, 3.0, 4.0)?;
//!
//! assert_eq!(model.vertices_of(solid).len(), 8);
//! assert_eq!(model.edges_of(solid).len(), 12);
//! assert_eq!(model.faces_of(solid).len(), 6);
//! assert_eq!(euler_characteristic(&model, solid), 2);
//! # Ok::<(), hedron::TopoError>(())
//! ```
//!
//! ## Building Topology by Hand
//!
//! The primitives compose into arbitrary manifold boundaries. A square
//! lamina (two faces sharing four edges) built explicitly:
//!
//! ```
//! use hedron::prelude::*;
//!
//! let mut model = Model::new();
//! let solid = model.make_vertex_face_solid(1, 1, 0.0, 0.0, 0.0);
//! model.mev(solid, 1, 1, 2, 1.0, 0.0, 0.0)?;
//! model.mev(solid, 1, 2, 3, 1.0, 1.0, 0.0)?;
//! model.mev(solid, 1, 3, 4, 0.0, 1.0, 0.0)?;
//! model.mef(solid, 1, 4, 1, 2)?;
//!
//! let check = validate_solid(&model, solid);
//! assert!(check.valid);
//! # Ok::<(), hedron::TopoError>(())
//! ```
//!
//! ## Scope
//!
//! Hedron is the topological core only: it stores vertex positions but does
//! no geometric reasoning (intersection, coplanarity), rendering, or
//! persistence. Operators assume exclusive access to the model; concurrent
//! mutation is a caller error by construction (`&mut Model`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod topo;
pub mod validate;

mod construct;
mod euler;

pub use error::{Result, TopoError};

/// Prelude module for convenient imports.
///
/// ```
/// use hedron::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, TopoError};
    pub use crate::topo::{
        Edge, EdgeId, Face, FaceId, HalfEdge, HalfEdgeId, Loop, LoopId, Model, Orientation,
        Solid, SolidId, Vertex, VertexId,
    };
    pub use crate::validate::{counts, euler_characteristic, validate_solid, Counts};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_tower_of_two_sweeps() {
        let mut model = Model::new();
        let solid = model.block(1.0, 1.0, 1.0).unwrap();

        // the swept base keeps its number, so face 1 is now the top cap;
        // extruding it again stacks a second box on the first
        let top = model.face_by_number(solid, 1).unwrap();
        model.sweep(top, 0.0, 0.0, 1.0).unwrap();

        assert_eq!(model.vertices_of(solid).len(), 12);
        assert_eq!(model.edges_of(solid).len(), 20);
        assert_eq!(model.faces_of(solid).len(), 10);
        assert_eq!(euler_characteristic(&model, solid), 2);

        let check = validate_solid(&model, solid);
        assert!(check.valid, "violations: {:#?}", check.errors);
    }

    #[test]
    fn test_independent_solids_do_not_interfere() {
        let mut model = Model::new();
        let a = model.block(1.0, 1.0, 1.0).unwrap();
        let b = model.block(2.0, 2.0, 2.0).unwrap();

        assert_eq!(counts(&model, a), counts(&model, b));
        for solid in [a, b] {
            let check = validate_solid(&model, solid);
            assert!(check.valid, "violations: {:#?}", check.errors);
        }
    }
}
