use crate::math::{Point, Real};
use crate::shape::{Plane, Tetrahedron};
use crate::utils::crossing_parameter;
use arrayvec::ArrayVec;

impl Tetrahedron {
    /// Computes the volume of the part of this tetrahedron lying inside `plane`
    /// (where the signed distance is `<= 0`).
    ///
    /// The result lies in `[0, self.volume()]` and is continuous and non-decreasing
    /// as the plane level increases.
    pub fn volume_below_plane(&self, plane: &Plane) -> Real {
        let pts = self.vertices();
        let dists = pts.map(|pt| plane.signed_distance(&pt));

        let mut below = ArrayVec::<usize, 4>::new();
        let mut above = ArrayVec::<usize, 4>::new();

        for (i, dist) in dists.iter().enumerate() {
            if *dist <= 0.0 {
                below.push(i);
            } else {
                above.push(i);
            }
        }

        match below.len() {
            0 => 0.0,
            1 => self.corner_volume(&dists, below[0], &above),
            2 => {
                let [a, b] = [below[0], below[1]];
                let [c, d] = [above[0], above[1]];
                let p = edge_point(&pts, &dists, a, c);
                let q = edge_point(&pts, &dists, a, d);
                let r = edge_point(&pts, &dists, b, c);
                let s = edge_point(&pts, &dists, b, d);

                // The clipped part is a prism with the triangles `a, p, q` and `b, r, s`
                // as caps (`p, r` lie on the face `a, b, c` and `q, s` on `a, b, d`).
                Tetrahedron::new(pts[a], p, q, s).volume()
                    + Tetrahedron::new(pts[a], p, s, r).volume()
                    + Tetrahedron::new(pts[a], r, s, pts[b]).volume()
            }
            3 => self.volume() - self.corner_volume(&dists, above[0], &below),
            _ => self.volume(),
        }
    }

    /// The volume of the corner of this tetrahedron cut at `apex` by the plane, the three
    /// other vertices being on the opposite side.
    fn corner_volume(&self, dists: &[Real; 4], apex: usize, others: &[usize]) -> Real {
        let scale: Real = others
            .iter()
            .map(|other| crossing_parameter(dists[apex], dists[*other]))
            .product();
        self.volume() * scale
    }
}

#[inline]
fn edge_point(pts: &[Point<Real>; 4], dists: &[Real; 4], from: usize, to: usize) -> Point<Real> {
    let t = crossing_parameter(dists[from], dists[to]);
    pts[from] + (pts[to] - pts[from]) * t
}
