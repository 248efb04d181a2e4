use crate::math::{Point, Real};
use crate::shape::{Plane, Triangle};
use crate::utils::crossing_parameter;
use arrayvec::ArrayVec;
use core::f64::consts::TAU;

impl Triangle {
    /// The volume swept by this triangle revolving around the `y` axis.
    ///
    /// The `x` coordinate is the distance to the symmetry axis (Pappus's centroid theorem).
    #[inline]
    pub fn revolved_volume(&self) -> Real {
        (TAU * self.signed_area() * self.center().x).abs()
    }

    /// The area of the part of this triangle lying inside `plane` (where the signed
    /// distance is `<= 0`).
    pub fn area_below_plane(&self, plane: &Plane) -> Real {
        let clipped = self.clip_below_plane(plane);
        polygon_area_and_moment(&clipped).0.abs()
    }

    /// The volume swept by the part of this triangle lying inside `plane`, revolving around
    /// the `y` axis.
    pub fn revolved_volume_below_plane(&self, plane: &Plane) -> Real {
        let clipped = self.clip_below_plane(plane);
        (TAU * polygon_area_and_moment(&clipped).1).abs()
    }

    /// Clips this triangle by the inside of `plane`.
    ///
    /// The result keeps the orientation of the triangle: it is either empty, a triangle,
    /// or a quadrilateral.
    pub fn clip_below_plane(&self, plane: &Plane) -> ArrayVec<Point<Real>, 4> {
        let pts = self.vertices();
        let dists = pts.map(|pt| plane.signed_distance(&pt));
        let mut result = ArrayVec::new();

        for i in 0..3 {
            let j = (i + 1) % 3;

            if dists[i] <= 0.0 {
                result.push(pts[i]);
            }

            if dists[i] * dists[j] < 0.0 {
                let t = crossing_parameter(dists[i], dists[j]);
                result.push(pts[i] + (pts[j] - pts[i]) * t);
            }
        }

        result
    }
}

/// The signed area of a polygon, and its signed first moment with regard to the `y` axis.
fn polygon_area_and_moment(polygon: &[Point<Real>]) -> (Real, Real) {
    let mut area = 0.0;
    let mut moment = 0.0;

    if let Some((first, rest)) = polygon.split_first() {
        for pair in rest.windows(2) {
            let tri = Triangle::new(*first, pair[0], pair[1]);
            let tri_area = tri.signed_area();
            area += tri_area;
            moment += tri_area * tri.center().x;
        }
    }

    (area, moment)
}
