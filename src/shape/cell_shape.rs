use crate::shape::{CellError, CellTopology};
#[cfg(feature = "dim3")]
use crate::shape::Tetrahedron;

/// The standard zone types, with their usual vertex ordering.
///
/// Each variant knows its wireframe and its simplex decomposition, so that a driver
/// working on an unstructured zoo mesh does not have to provide them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellShape {
    /// A tetrahedron: vertices `0, 1, 2, 3`.
    #[cfg(feature = "dim3")]
    Tetrahedron,
    /// A pyramid: the quadrilateral base `0, 1, 2, 3` and the apex `4`.
    #[cfg(feature = "dim3")]
    Pyramid,
    /// A wedge (triangular prism): the bottom triangle `0, 1, 2` and the
    /// top triangle `3, 4, 5`, with `3` above `0`.
    #[cfg(feature = "dim3")]
    Wedge,
    /// A hexahedron: the bottom face `0, 1, 2, 3` and the top face `4, 5, 6, 7`,
    /// with `4` above `0`.
    #[cfg(feature = "dim3")]
    Hexahedron,
    /// A triangle.
    #[cfg(feature = "dim2")]
    Triangle,
    /// A quadrilateral, vertices given in boundary order.
    #[cfg(feature = "dim2")]
    Quadrilateral,
    /// A convex polygon with the given number of vertices, in boundary order.
    #[cfg(feature = "dim2")]
    Polygon(usize),
}

#[cfg(feature = "dim3")]
const PYRAMID_EDGES: [[u32; 2]; 8] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [0, 4],
    [1, 4],
    [2, 4],
    [3, 4],
];
#[cfg(feature = "dim3")]
const PYRAMID_TETRAHEDRA: [[u32; 4]; 2] = [[0, 1, 2, 4], [0, 2, 3, 4]];

#[cfg(feature = "dim3")]
const WEDGE_EDGES: [[u32; 2]; 9] = [
    [0, 1],
    [1, 2],
    [2, 0],
    [3, 4],
    [4, 5],
    [5, 3],
    [0, 3],
    [1, 4],
    [2, 5],
];
#[cfg(feature = "dim3")]
const WEDGE_TETRAHEDRA: [[u32; 4]; 3] = [[0, 1, 2, 5], [0, 1, 5, 4], [0, 4, 5, 3]];

#[cfg(feature = "dim3")]
const HEXAHEDRON_EDGES: [[u32; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];
// Six tetrahedra sharing the diagonal 0-6.
#[cfg(feature = "dim3")]
const HEXAHEDRON_TETRAHEDRA: [[u32; 4]; 6] = [
    [0, 1, 2, 6],
    [0, 2, 3, 6],
    [0, 3, 7, 6],
    [0, 7, 4, 6],
    [0, 4, 5, 6],
    [0, 5, 1, 6],
];

impl CellShape {
    /// The number of vertices of this zone type.
    pub fn num_points(self) -> usize {
        match self {
            #[cfg(feature = "dim3")]
            CellShape::Tetrahedron => 4,
            #[cfg(feature = "dim3")]
            CellShape::Pyramid => 5,
            #[cfg(feature = "dim3")]
            CellShape::Wedge => 6,
            #[cfg(feature = "dim3")]
            CellShape::Hexahedron => 8,
            #[cfg(feature = "dim2")]
            CellShape::Triangle => 3,
            #[cfg(feature = "dim2")]
            CellShape::Quadrilateral => 4,
            #[cfg(feature = "dim2")]
            CellShape::Polygon(n) => n,
        }
    }

    /// Builds the topology of this zone type.
    ///
    /// Only fails for a [`CellShape::Polygon`] with too few or too many vertices.
    #[cfg(feature = "dim3")]
    pub fn topology(self) -> Result<CellTopology, CellError> {
        match self {
            CellShape::Tetrahedron => {
                let edges: [[u32; 2]; 6] = core::array::from_fn(|i| {
                    let (a, b) = Tetrahedron::edge_ids(i as u32);
                    [a, b]
                });
                CellTopology::new(4, &edges, &[[0, 1, 2, 3]])
            }
            CellShape::Pyramid => CellTopology::new(5, &PYRAMID_EDGES, &PYRAMID_TETRAHEDRA),
            CellShape::Wedge => CellTopology::new(6, &WEDGE_EDGES, &WEDGE_TETRAHEDRA),
            CellShape::Hexahedron => {
                CellTopology::new(8, &HEXAHEDRON_EDGES, &HEXAHEDRON_TETRAHEDRA)
            }
        }
    }

    /// Builds the topology of this zone type.
    ///
    /// Polygons are triangulated as a fan around their first vertex, so they must be convex.
    /// Only fails for a [`CellShape::Polygon`] with too few or too many vertices.
    #[cfg(feature = "dim2")]
    pub fn topology(self) -> Result<CellTopology, CellError> {
        use crate::math::{MAX_CELL_POINTS, MAX_CELL_SIMPLICES};
        use arrayvec::ArrayVec;

        let n = self.num_points();

        if n > MAX_CELL_POINTS {
            return Err(CellError::TooManyPoints(n));
        }

        let fan: ArrayVec<[u32; 3], MAX_CELL_SIMPLICES> = (1..n.saturating_sub(1) as u32)
            .map(|i| [0, i, i + 1])
            .collect();
        CellTopology::new(n, &fan)
    }
}
