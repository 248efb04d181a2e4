use crate::math::Real;

/// The parameter where the segment from a vertex at signed distance `d0` to a vertex
/// at signed distance `d1` crosses a plane.
///
/// The result is clamped to `[0, 1]` to absorb rounding at near-tangent crossings, and is
/// `0` if both distances are equal.
#[inline]
pub fn crossing_parameter(d0: Real, d1: Real) -> Real {
    if d1 == d0 {
        0.0
    } else {
        (-d0 / (d1 - d0)).clamp(0.0, 1.0)
    }
}
