use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use plic3d::math::Point;
/// use plic3d::utils::center;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.5),
///     Point::new(1.0, 0.0, 0.5),
///     Point::new(1.0, 1.0, 0.5),
///     Point::new(0.0, 1.0, 0.5),
/// ];
///
/// assert_eq!(center(&points), Point::new(0.5, 0.5, 0.5));
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom = 1.0 / pts.len() as Real;
    let mut res = Point::origin();

    for pt in pts {
        res += pt.coords * denom;
    }

    res
}
