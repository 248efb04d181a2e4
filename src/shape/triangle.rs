//! Definition of the triangle, the simplex of 2D cell decompositions.

use crate::math::{Point, Real, SIMPLEX_VERTICES};
use crate::utils;

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Gathers the triangle whose vertices are `points[idx[0]]`, `points[idx[1]]` and `points[idx[2]]`.
    #[inline]
    pub fn from_indices(points: &[Point<Real>], idx: &[u32; SIMPLEX_VERTICES]) -> Triangle {
        Triangle::new(
            points[idx[0] as usize],
            points[idx[1] as usize],
            points[idx[2] as usize],
        )
    }

    /// The three vertices of this triangle, in order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The signed area of this triangle, positive if it is counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> Real {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.perp(&ac) * 0.5
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// The center of mass of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.vertices())
    }
}
