//! Definition of the cutting plane (line, in 2D).

use crate::math::{Point, Real, UnitVector, Vector};
use na::Unit;

/// An oriented plane (a line in 2D) defined by `dot(x, normal) + offset = 0`.
///
/// Points with a signed distance `<= 0` lie on the *inside* of the plane, all the
/// others lie on the *outside*.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use plic3d::math::{Point, Vector};
/// use plic3d::shape::Plane;
///
/// let plane = Plane::new(Vector::z_axis(), -0.5);
/// assert_eq!(plane.signed_distance(&Point::new(0.0, 0.0, 1.0)), 0.5);
/// assert_eq!(plane.level(), 0.5);
/// # }
/// ```
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The plane unit normal, pointing toward the outside.
    pub normal: UnitVector<Real>,
    /// The plane offset `d` in `dot(x, normal) + d = 0`.
    pub offset: Real,
}

impl Plane {
    /// Builds a plane from its unit normal and offset.
    #[inline]
    pub fn new(normal: UnitVector<Real>, offset: Real) -> Self {
        Self { normal, offset }
    }

    /// Builds a plane from an arbitrary, possibly non-normalized, normal.
    ///
    /// See [`unit_normal_or_fallback`] for how degenerate normals are handled.
    #[inline]
    pub fn from_raw_normal(normal: &Vector<Real>, offset: Real) -> Self {
        Self::new(unit_normal_or_fallback(normal), offset)
    }

    /// Builds the plane `dot(x, normal) = level`.
    #[inline]
    pub fn at_level(normal: UnitVector<Real>, level: Real) -> Self {
        Self::new(normal, -level)
    }

    /// The projection along the normal of every point lying on this plane.
    #[inline]
    pub fn level(&self) -> Real {
        -self.offset
    }

    /// The signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        pt.coords.dot(&self.normal) + self.offset
    }

    /// Is `pt` on the inside (`signed_distance <= 0`) of this plane?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.signed_distance(pt) <= 0.0
    }
}

/// Normalizes `normal`, substituting the first coordinate axis if it has a zero length.
///
/// A cell with an undefined interface orientation is thus cut along the first axis.
pub fn unit_normal_or_fallback(normal: &Vector<Real>) -> UnitVector<Real> {
    if normal.norm_squared() > 0.0 {
        Unit::new_normalize(*normal)
    } else {
        log::debug!("Zero-length interface normal, falling back to the first coordinate axis.");
        Vector::x_axis()
    }
}
