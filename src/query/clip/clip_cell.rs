use crate::math::{Real, MAX_CELL_EDGES, MAX_CELL_POINTS};
use crate::query::InterfaceVertex;
use crate::shape::{Cell, Plane};
use crate::utils::crossing_parameter;
use arrayvec::ArrayVec;

/// The classification of the vertices of a cell with regard to a plane, and the vertices
/// of the interface.
#[derive(Clone, Debug, PartialEq)]
pub struct CellClip {
    /// The signed distance from each cell vertex to the plane.
    pub distances: ArrayVec<Real, MAX_CELL_POINTS>,
    /// The vertices lying inside the plane (`distance <= 0`), in increasing order.
    pub inside: ArrayVec<u32, MAX_CELL_POINTS>,
    /// The vertices lying outside the plane (`distance > 0`), in increasing order.
    pub outside: ArrayVec<u32, MAX_CELL_POINTS>,
    /// One vertex per edge with endpoints on opposite sides of the plane, in the order of
    /// the edge list. A vertex lying on the plane yields a single interface vertex, however
    /// many of its edges cross.
    pub interface: ArrayVec<InterfaceVertex, MAX_CELL_EDGES>,
}

/// The signed distances from the vertices of `cell` to `plane`.
#[inline]
pub(crate) fn signed_distances(cell: &Cell, plane: &Plane) -> ArrayVec<Real, MAX_CELL_POINTS> {
    cell.points()
        .iter()
        .map(|pt| plane.signed_distance(pt))
        .collect()
}

/// Whether the plane passes through the interior of a cell, i.e. leaves vertices strictly on
/// both of its sides.
///
/// A plane only touching the cell, on a vertex or a face, does not cut it.
#[inline]
pub(crate) fn cuts_through(distances: &[Real]) -> bool {
    distances.iter().any(|d| *d < 0.0) && distances.iter().any(|d| *d > 0.0)
}

/// Whether the endpoints of an edge lie on different sides. A vertex on the plane is inside.
#[inline]
pub(crate) fn crosses(d0: Real, d1: Real) -> bool {
    (d0 <= 0.0) != (d1 <= 0.0)
}

/// Clips the edges of `cell` by `plane`.
///
/// Every vertex goes to exactly one of [`CellClip::inside`] and [`CellClip::outside`]. If
/// the plane cuts through the cell, an interface vertex is created on each edge going from
/// one side to the other. When the plane passes exactly through a vertex, the interface
/// vertex sits on it (`t` is `0` or `1`) and is shared by all its crossing edges.
///
/// For a convex cell, the interface has either no vertex or at least three (exactly two
/// in 2D).
pub fn clip_cell(cell: &Cell, plane: &Plane) -> CellClip {
    let points = cell.points();
    let distances = signed_distances(cell, plane);
    let mut inside = ArrayVec::new();
    let mut outside = ArrayVec::new();
    let mut interface = ArrayVec::new();

    for (i, dist) in distances.iter().enumerate() {
        if *dist <= 0.0 {
            inside.push(i as u32);
        } else {
            outside.push(i as u32);
        }
    }

    if cuts_through(&distances) {
        let mut on_plane = [false; MAX_CELL_POINTS];

        for edge in cell.topology().edges() {
            let d0 = distances[edge[0] as usize];
            let d1 = distances[edge[1] as usize];

            if !crosses(d0, d1) {
                continue;
            }

            let touched = if d0 == 0.0 {
                Some(edge[0])
            } else if d1 == 0.0 {
                Some(edge[1])
            } else {
                None
            };

            if let Some(vid) = touched {
                if on_plane[vid as usize] {
                    continue;
                }
                on_plane[vid as usize] = true;
            }

            let t = crossing_parameter(d0, d1);
            interface.push(InterfaceVertex::on_edge(points, *edge, t));
        }
    }

    CellClip {
        distances,
        inside,
        outside,
        interface,
    }
}
