use crate::math::{Real, DEFAULT_EPSILON, DIM, SIMPLEX_VERTICES};
#[cfg(feature = "dim3")]
use crate::shape::Tetrahedron;
#[cfg(feature = "dim2")]
use crate::shape::Triangle;
use crate::shape::{Cell, Plane};

/// Measures (volumes, areas, or revolved volumes) of a cell and of its parts below a plane.
///
/// The measure of a cell is the sum of the measures of the simplices of its decomposition.
/// The total is computed once when the `CellMeasure` is built, so that evaluating
/// [`CellMeasure::fraction_below`] repeatedly (as the offset solver does) only clips the
/// simplices.
#[derive(Copy, Clone, Debug)]
pub struct CellMeasure<'a> {
    cell: Cell<'a>,
    axisymmetric: bool,
    total: Real,
    degenerate: bool,
}

impl<'a> CellMeasure<'a> {
    /// Measures the volume (area, in 2D) of a cell.
    pub fn new(cell: Cell<'a>) -> Self {
        Self::with_axisymmetry(cell, false)
    }

    /// Measures either the area of a 2D cell, or, if `axisymmetric` is `true`, the volume
    /// it sweeps revolving around the `y` axis.
    #[cfg(feature = "dim2")]
    pub fn axisymmetric(cell: Cell<'a>) -> Self {
        Self::with_axisymmetry(cell, true)
    }

    /// Measures a cell, as a volume of revolution if `axisymmetric` is `true`.
    ///
    /// Volumes of revolution are only meaningful for 2D cells, so the flag is ignored in 3D.
    pub fn with_axisymmetry(cell: Cell<'a>, axisymmetric: bool) -> Self {
        let mut result = Self {
            cell,
            axisymmetric: axisymmetric && DIM == 2,
            total: 0.0,
            degenerate: false,
        };

        result.total = cell
            .topology()
            .simplices()
            .iter()
            .map(|idx| result.simplex_measure(idx))
            .sum();
        result.degenerate = result.is_negligible(result.total);
        result
    }

    #[cfg(feature = "dim3")]
    #[inline]
    fn simplex_measure(&self, idx: &[u32; SIMPLEX_VERTICES]) -> Real {
        Tetrahedron::from_indices(self.cell.points(), idx).volume()
    }

    #[cfg(feature = "dim2")]
    #[inline]
    fn simplex_measure(&self, idx: &[u32; SIMPLEX_VERTICES]) -> Real {
        let tri = Triangle::from_indices(self.cell.points(), idx);
        if self.axisymmetric {
            tri.revolved_volume()
        } else {
            tri.area()
        }
    }

    #[cfg(feature = "dim3")]
    #[inline]
    fn simplex_measure_below(&self, idx: &[u32; SIMPLEX_VERTICES], plane: &Plane) -> Real {
        Tetrahedron::from_indices(self.cell.points(), idx).volume_below_plane(plane)
    }

    #[cfg(feature = "dim2")]
    #[inline]
    fn simplex_measure_below(&self, idx: &[u32; SIMPLEX_VERTICES], plane: &Plane) -> Real {
        let tri = Triangle::from_indices(self.cell.points(), idx);
        if self.axisymmetric {
            tri.revolved_volume_below_plane(plane)
        } else {
            tri.area_below_plane(plane)
        }
    }

    /// Is `measure` negligible with regard to the size of the cell's bounding box?
    fn is_negligible(&self, measure: Real) -> bool {
        let points = self.cell.points();
        let (mins, maxs) = points.iter().fold(
            (points[0].coords, points[0].coords),
            |(mins, maxs), pt| (mins.inf(&pt.coords), maxs.sup(&pt.coords)),
        );
        let extent = (maxs - mins).norm();
        // Revolved volumes scale with one extra length.
        let exponent = if self.axisymmetric { DIM + 1 } else { DIM };

        measure <= DEFAULT_EPSILON * extent.powi(exponent as i32)
    }

    /// The measured cell.
    #[inline]
    pub fn cell(&self) -> Cell<'a> {
        self.cell
    }

    /// Are revolved volumes measured instead of areas?
    #[inline]
    pub fn is_axisymmetric(&self) -> bool {
        self.axisymmetric
    }

    /// The total measure of the cell.
    #[inline]
    pub fn total(&self) -> Real {
        self.total
    }

    /// Is the total measure of the cell too small to compute meaningful fractions?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// The measure of the part of the cell lying inside `plane` (where the signed
    /// distance is `<= 0`).
    pub fn measure_below(&self, plane: &Plane) -> Real {
        self.cell
            .topology()
            .simplices()
            .iter()
            .map(|idx| self.simplex_measure_below(idx, plane))
            .sum()
    }

    /// The fraction, in `[0, 1]`, of the cell lying inside `plane`.
    ///
    /// Returns `0.0` for a degenerate cell.
    pub fn fraction_below(&self, plane: &Plane) -> Real {
        if self.degenerate {
            return 0.0;
        }

        (self.measure_below(plane) / self.total).clamp(0.0, 1.0)
    }
}
