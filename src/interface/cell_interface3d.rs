use crate::interface::InterfaceOptions;
use crate::math::{Real, UnitVector, Vector, MAX_CELL_EDGES, MAX_CELL_POINTS};
use crate::measure::CellMeasure;
use crate::query::{
    clip_cell, resolve_offset, sort_interface_polygon, InterfaceVertex, OffsetMode,
    OffsetSolution,
};
use crate::shape::{unit_normal_or_fallback, Cell};
use arrayvec::ArrayVec;

/// The interface reconstructed in a 3D cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellInterface3d {
    /// The unit normal of the cutting plane (`(1, 0, 0)` if a zero normal was given).
    pub normal: UnitVector<Real>,
    /// The offset of the cutting plane, and how it was found.
    pub offset: OffsetSolution,
    /// The cell vertices on the inner side of the plane, in increasing order.
    pub inside: ArrayVec<u32, MAX_CELL_POINTS>,
    /// The cell vertices on the outer side of the plane, in increasing order.
    pub outside: ArrayVec<u32, MAX_CELL_POINTS>,
    /// The vertices of the interface polygon. When there are more than three of them, they
    /// are ordered counter-clockwise around `normal`.
    pub polygon: ArrayVec<InterfaceVertex, MAX_CELL_EDGES>,
}

impl CellInterface3d {
    /// Does the plane actually cut the cell?
    #[inline]
    pub fn is_cut(&self) -> bool {
        !self.polygon.is_empty()
    }
}

/// Reconstructs the interface of a 3D cell.
///
/// The plane normal is `normal`, normalized, and its offset is given by `mode`: either
/// solved so that the inner side holds the requested fraction of the cell volume, or used
/// as-is. The cell is then clipped by the plane and the interface vertices are sorted into
/// a polygon.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use plic3d::interface::{cell_interface3d, InterfaceOptions};
/// use plic3d::math::{Point, Vector};
/// use plic3d::query::OffsetMode;
/// use plic3d::shape::{Cell, CellShape};
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
///     Point::new(1.0, 0.0, 1.0),
///     Point::new(1.0, 1.0, 1.0),
///     Point::new(0.0, 1.0, 1.0),
/// ];
/// let topology = CellShape::Hexahedron.topology().unwrap();
/// let cell = Cell::new(&points, &topology).unwrap();
///
/// let interface = cell_interface3d(
///     &cell,
///     &Vector::z(),
///     OffsetMode::Fraction(0.5),
///     &InterfaceOptions::default(),
/// );
///
/// assert!((interface.offset.offset + 0.5).abs() < 1.0e-8);
/// assert_eq!(interface.polygon.len(), 4);
/// assert_eq!(interface.inside.as_slice(), &[0, 1, 2, 3]);
/// # }
/// ```
pub fn cell_interface3d(
    cell: &Cell,
    normal: &Vector<Real>,
    mode: OffsetMode,
    options: &InterfaceOptions,
) -> CellInterface3d {
    let normal = unit_normal_or_fallback(normal);
    let measure = CellMeasure::new(*cell);
    let offset = resolve_offset(&measure, &normal, mode, &options.solver);
    let clip = clip_cell(cell, &offset.plane(normal));
    let mut polygon = clip.interface;

    if polygon.len() > 3 {
        sort_interface_polygon(&mut polygon, &normal);
    }

    CellInterface3d {
        normal,
        offset,
        inside: clip.inside,
        outside: clip.outside,
        polygon,
    }
}
