use crate::math::{Point, Real};
use core::ops::{Add, Mul};

/// A vertex of the interface, created where a cell edge crosses the cutting plane.
///
/// The vertex lies at `points[edge[0]] + t * (points[edge[1]] - points[edge[0]])`. The same
/// `(edge, t)` pair is used to interpolate any per-vertex field at this vertex, so that
/// coordinates and fields stay consistent.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InterfaceVertex {
    /// The indices of the endpoints of the crossed edge, in the order of the edge list.
    pub edge: [u32; 2],
    /// The interpolation parameter along the edge, in `[0, 1]`, measured from `edge[0]`.
    pub t: Real,
    /// The coordinates of this vertex.
    pub point: Point<Real>,
}

impl InterfaceVertex {
    /// Creates an interface vertex on the edge `edge` of a cell with the given vertices.
    #[inline]
    pub fn on_edge(points: &[Point<Real>], edge: [u32; 2], t: Real) -> Self {
        debug_assert!(edge.iter().all(|i| (*i as usize) < points.len()));
        debug_assert!((0.0..=1.0).contains(&t));

        let a = points[edge[0] as usize];
        let b = points[edge[1] as usize];

        Self {
            edge,
            t,
            point: a + (b - a) * t,
        }
    }

    /// Interpolates at this vertex the per-vertex field `values`.
    ///
    /// `values` must have one entry per cell vertex. Works with scalars as well as with
    /// vectors (e.g. the volume fractions of all the materials of the cell).
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "dim3")] {
    /// use plic3d::math::Point;
    /// use plic3d::query::InterfaceVertex;
    ///
    /// let points = [Point::origin(), Point::new(2.0, 0.0, 0.0)];
    /// let vertex = InterfaceVertex::on_edge(&points, [0, 1], 0.25);
    ///
    /// assert_eq!(vertex.point, Point::new(0.5, 0.0, 0.0));
    /// assert_eq!(vertex.interpolate(&[10.0, 20.0]), 12.5);
    /// # }
    /// ```
    #[inline]
    pub fn interpolate<T>(&self, values: &[T]) -> T
    where
        T: Clone + Add<T, Output = T> + Mul<Real, Output = T>,
    {
        let a = values[self.edge[0] as usize].clone();
        let b = values[self.edge[1] as usize].clone();
        a * (1.0 - self.t) + b * self.t
    }
}
