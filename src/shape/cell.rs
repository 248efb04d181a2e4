use crate::math::{Point, Real, Vector};
use crate::shape::{CellError, CellTopology};

/// A single mesh cell: its vertex coordinates together with the topology of its zone type.
///
/// This is a cheap, borrowed view. The coordinates and the topology are owned by the caller,
/// and a topology is usually shared by all the cells of the same zone type.
#[derive(Copy, Clone, Debug)]
pub struct Cell<'a> {
    points: &'a [Point<Real>],
    topology: &'a CellTopology,
}

impl<'a> Cell<'a> {
    /// Creates a cell view, checking that `points` has one entry per vertex of `topology`.
    pub fn new(points: &'a [Point<Real>], topology: &'a CellTopology) -> Result<Self, CellError> {
        if points.len() != topology.num_points() {
            return Err(CellError::PointCountMismatch {
                expected: topology.num_points(),
                found: points.len(),
            });
        }

        Ok(Self { points, topology })
    }

    /// The vertex coordinates of this cell.
    #[inline]
    pub fn points(&self) -> &'a [Point<Real>] {
        self.points
    }

    /// The topology of this cell.
    #[inline]
    pub fn topology(&self) -> &'a CellTopology {
        self.topology
    }

    /// The smallest and largest projections of the cell vertices on `dir`.
    pub fn projected_extents(&self, dir: &Vector<Real>) -> (Real, Real) {
        self.points
            .iter()
            .map(|pt| pt.coords.dot(dir))
            .fold((Real::MAX, -Real::MAX), |(min, max), proj| {
                (min.min(proj), max.max(proj))
            })
    }
}
