use crate::interface::{InterfaceError, InterfaceOptions};
use crate::math::{Point, Real, UnitVector, Vector};
use crate::measure::CellMeasure;
use crate::query::{
    clip_cell_boundary, resolve_offset, ChainVertex, InterfaceVertex, OffsetMode,
    OffsetSolution, SolveStatus, MAX_CHAIN_VERTICES,
};
use crate::shape::{unit_normal_or_fallback, Cell};
use arrayvec::ArrayVec;

/// The interface reconstructed in a 2D cell: a segment, and the boundaries of both sides.
#[derive(Clone, Debug, PartialEq)]
pub struct CellInterface2d {
    /// The unit normal of the cutting line (`(1, 0)` if a zero normal was given).
    pub normal: UnitVector<Real>,
    /// The offset of the cutting line, and how it was found.
    pub offset: OffsetSolution,
    /// The endpoints of the interface segment, in the order they were met along the cell
    /// boundary.
    pub interface: [InterfaceVertex; 2],
    /// The closed boundary of the inner side, following the cell boundary.
    pub inside_chain: ArrayVec<ChainVertex, MAX_CHAIN_VERTICES>,
    /// The closed boundary of the outer side, following the cell boundary.
    pub outside_chain: ArrayVec<ChainVertex, MAX_CHAIN_VERTICES>,
}

impl CellInterface2d {
    /// The coordinates of a chain vertex, given the vertices of the clipped cell.
    #[inline]
    pub fn chain_point(&self, points: &[Point<Real>], vertex: ChainVertex) -> Point<Real> {
        match vertex {
            ChainVertex::Original(i) => points[i as usize],
            ChainVertex::Interface(k) => self.interface[k as usize].point,
        }
    }

    /// The inner boundary, with interface vertices encoded as negative integers.
    ///
    /// See [`ChainVertex::to_sentinel`].
    pub fn inside_sentinels(&self) -> ArrayVec<i64, MAX_CHAIN_VERTICES> {
        self.inside_chain.iter().map(|v| v.to_sentinel()).collect()
    }

    /// The outer boundary, with interface vertices encoded as negative integers.
    pub fn outside_sentinels(&self) -> ArrayVec<i64, MAX_CHAIN_VERTICES> {
        self.outside_chain.iter().map(|v| v.to_sentinel()).collect()
    }
}

/// Reconstructs the interface of a 2D cell.
///
/// The line normal is `normal`, normalized, and its offset is given by `mode`: either
/// solved so that the inner side holds the requested fraction of the cell area (or of its
/// volume of revolution, if `options.axisymmetric` is set), or used as-is. The boundary of
/// the cell is then walked once, splitting it into the boundary chains of both sides.
///
/// Fails unless the line crosses the cell boundary exactly twice, which is always the case
/// for a convex cell and a line passing through its interior.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim2")] {
/// use plic2d::interface::{cell_interface2d, InterfaceOptions};
/// use plic2d::math::{Point, Vector};
/// use plic2d::query::{ChainVertex, OffsetMode};
/// use plic2d::shape::{Cell, CellShape};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let topology = CellShape::Quadrilateral.topology().unwrap();
/// let cell = Cell::new(&points, &topology).unwrap();
///
/// let interface = cell_interface2d(
///     &cell,
///     &Vector::x(),
///     OffsetMode::Distance(-0.5),
///     &InterfaceOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(interface.inside_sentinels().as_slice(), &[0, -1, -2, 3]);
/// assert_eq!(interface.outside_sentinels().as_slice(), &[-1, 1, 2, -2]);
/// assert_eq!(interface.interface[0].point, Point::new(0.5, 0.0));
/// assert_eq!(interface.chain_point(&points, ChainVertex::Interface(1)), Point::new(0.5, 1.0));
/// # }
/// ```
pub fn cell_interface2d(
    cell: &Cell,
    normal: &Vector<Real>,
    mode: OffsetMode,
    options: &InterfaceOptions,
) -> Result<CellInterface2d, InterfaceError> {
    let normal = unit_normal_or_fallback(normal);
    let measure = CellMeasure::with_axisymmetry(*cell, options.axisymmetric);
    let offset = resolve_offset(&measure, &normal, mode, &options.solver);

    if offset.status == SolveStatus::Degenerate {
        return Err(InterfaceError::DegenerateCell);
    }

    let clip = clip_cell_boundary(cell, &offset.plane(normal));

    if clip.interface.len() != 2 {
        log::debug!(
            "The line crosses the cell boundary {} times.",
            clip.interface.len()
        );
        return Err(InterfaceError::CrossingCount {
            found: clip.interface.len(),
        });
    }

    Ok(CellInterface2d {
        normal,
        offset,
        interface: [clip.interface[0], clip.interface[1]],
        inside_chain: clip.inside_chain,
        outside_chain: clip.outside_chain,
    })
}
