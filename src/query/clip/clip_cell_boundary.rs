use super::clip_cell::{crosses, cuts_through, signed_distances};
use crate::math::{Real, MAX_CELL_POINTS};
use crate::query::{ChainVertex, InterfaceVertex};
use crate::shape::{Cell, Plane};
use crate::utils::crossing_parameter;
use arrayvec::ArrayVec;

/// The maximum length of a boundary chain: every vertex, plus one interface vertex per edge.
pub const MAX_CHAIN_VERTICES: usize = 2 * MAX_CELL_POINTS;

/// The two sides of a 2D cell clipped by a line, as boundary chains.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryClip {
    /// The signed distance from each cell vertex to the line.
    pub distances: ArrayVec<Real, MAX_CELL_POINTS>,
    /// The boundary of the inside part (`distance <= 0`), in boundary order.
    pub inside_chain: ArrayVec<ChainVertex, MAX_CHAIN_VERTICES>,
    /// The boundary of the outside part (`distance > 0`), in boundary order.
    pub outside_chain: ArrayVec<ChainVertex, MAX_CHAIN_VERTICES>,
    /// The interface vertices, in the order they were met along the boundary.
    pub interface: ArrayVec<InterfaceVertex, MAX_CELL_POINTS>,
}

/// Clips a 2D cell by a line, walking its boundary once.
///
/// Each original vertex is appended to the chain of its side. Whenever the boundary edge
/// leaving a vertex crosses the line, the new interface vertex is appended to both chains,
/// so each chain is the closed boundary polygon of its side of the cell. A convex cell cut
/// through its interior yields exactly two interface vertices, even when the line passes
/// through some of its vertices (the interface vertex then coincides with the original
/// one). A line only touching the cell yields none.
pub fn clip_cell_boundary(cell: &Cell, plane: &Plane) -> BoundaryClip {
    let points = cell.points();
    let distances = signed_distances(cell, plane);
    let cut = cuts_through(&distances);
    let mut inside_chain = ArrayVec::new();
    let mut outside_chain = ArrayVec::new();
    let mut interface = ArrayVec::new();

    for edge in cell.topology().edges() {
        let d0 = distances[edge[0] as usize];
        let d1 = distances[edge[1] as usize];

        if d0 <= 0.0 {
            inside_chain.push(ChainVertex::Original(edge[0]));
        } else {
            outside_chain.push(ChainVertex::Original(edge[0]));
        }

        if cut && crosses(d0, d1) {
            let id = ChainVertex::Interface(interface.len() as u32);
            interface.push(InterfaceVertex::on_edge(
                points,
                *edge,
                crossing_parameter(d0, d1),
            ));
            inside_chain.push(id);
            outside_chain.push(id);
        }
    }

    BoundaryClip {
        distances,
        inside_chain,
        outside_chain,
        interface,
    }
}
