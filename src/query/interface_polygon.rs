use crate::math::{Real, UnitVector, MAX_CELL_EDGES};
use crate::query::InterfaceVertex;
use arrayvec::ArrayVec;
use ordered_float::OrderedFloat;

/// Sorts interface vertices into a simple polygon, wound counter-clockwise around `normal`.
///
/// The vertices are projected on the coordinate plane orthogonal to the dominant component
/// of `normal` (the projection never degenerates, even for axis-aligned cuts) and sorted by
/// their angle around the centroid. Vertices with the same angle are sorted by increasing
/// distance to the centroid, then by their original order, so the result is deterministic.
///
/// Three vertices or fewer are left untouched.
pub fn sort_interface_polygon(
    vertices: &mut ArrayVec<InterfaceVertex, MAX_CELL_EDGES>,
    normal: &UnitVector<Real>,
) {
    if vertices.len() <= 3 {
        return;
    }

    let centroid = vertices
        .iter()
        .fold(na::Vector3::zeros(), |acc, v| acc + v.point.coords)
        / vertices.len() as Real;

    let axis = normal.iamax();
    let (mut u, mut v) = ((axis + 1) % 3, (axis + 2) % 3);

    if normal[axis] < 0.0 {
        core::mem::swap(&mut u, &mut v);
    }

    let mut keyed: ArrayVec<_, MAX_CELL_EDGES> = vertices
        .iter()
        .enumerate()
        .map(|(i, vertex)| {
            let du = vertex.point[u] - centroid[u];
            let dv = vertex.point[v] - centroid[v];
            let key = (
                OrderedFloat(dv.atan2(du)),
                OrderedFloat(du * du + dv * dv),
                i,
            );
            (key, *vertex)
        })
        .collect();

    keyed.sort_unstable_by_key(|(key, _)| *key);

    for (dst, (_, vertex)) in vertices.iter_mut().zip(keyed) {
        *dst = vertex;
    }
}
