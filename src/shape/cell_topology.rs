use crate::math::{MAX_CELL_EDGES, MAX_CELL_POINTS, MAX_CELL_SIMPLICES, SIMPLEX_VERTICES};
use arrayvec::ArrayVec;

/// Error indicating that a cell topology or a cell view could not be built.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellError {
    /// The cell has more vertices than [`MAX_CELL_POINTS`](crate::math::MAX_CELL_POINTS).
    #[error("the cell has {0} vertices, more than the supported maximum.")]
    TooManyPoints(usize),
    /// The cell has fewer vertices than a single simplex.
    #[error("the cell has {0} vertices, which is not enough to enclose any volume.")]
    NotEnoughPoints(usize),
    /// The edge list has more entries than [`MAX_CELL_EDGES`](crate::math::MAX_CELL_EDGES).
    #[error("the cell has {0} edges, more than the supported maximum.")]
    TooManyEdges(usize),
    /// The decomposition has more simplices than [`MAX_CELL_SIMPLICES`](crate::math::MAX_CELL_SIMPLICES).
    #[error("the cell decomposition has {0} simplices, more than the supported maximum.")]
    TooManySimplices(usize),
    /// An edge or a simplex refers to a vertex that does not exist.
    #[error("the vertex index {index} is out of bounds for a cell with {num_points} vertices.")]
    IndexOutOfBounds {
        /// The faulty vertex index.
        index: u32,
        /// The number of vertices of the cell.
        num_points: usize,
    },
    /// The number of coordinates given does not match the topology.
    #[error("expected {expected} vertex coordinates, found {found}.")]
    PointCountMismatch {
        /// The number of vertices of the topology.
        expected: usize,
        /// The number of coordinates given.
        found: usize,
    },
}

/// The connectivity of a cell, shared by every cell of the same zone type.
///
/// A topology is made of:
/// - An edge list: in 3D, the wireframe tested for intersection with the cutting plane.
///   In 2D, the boundary cycle `(0, 1), (1, 2), …, (n - 1, 0)`, so the cell vertices
///   must be given in boundary order.
/// - A simplex decomposition (tetrahedra in 3D, triangles in 2D) used to evaluate
///   volumes (areas) on either side of a plane.
///
/// Building a topology validates capacities and indices once, so that the per-cell
/// queries can skip these checks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellTopology {
    num_points: usize,
    edges: ArrayVec<[u32; 2], MAX_CELL_EDGES>,
    simplices: ArrayVec<[u32; SIMPLEX_VERTICES], MAX_CELL_SIMPLICES>,
}

impl CellTopology {
    /// Builds the topology of a 3D cell from its wireframe edges and tetrahedral decomposition.
    #[cfg(feature = "dim3")]
    pub fn new(
        num_points: usize,
        edges: &[[u32; 2]],
        tetrahedra: &[[u32; SIMPLEX_VERTICES]],
    ) -> Result<Self, CellError> {
        Self::check_num_points(num_points)?;

        if edges.len() > MAX_CELL_EDGES {
            return Err(CellError::TooManyEdges(edges.len()));
        }

        for edge in edges {
            Self::check_indices(edge, num_points)?;
        }

        let simplices = Self::collect_simplices(num_points, tetrahedra)?;

        Ok(Self {
            num_points,
            edges: edges.iter().copied().collect(),
            simplices,
        })
    }

    /// Builds the topology of a 2D cell from its triangulation.
    ///
    /// The boundary edges are implied by the vertex order.
    #[cfg(feature = "dim2")]
    pub fn new(num_points: usize, triangles: &[[u32; SIMPLEX_VERTICES]]) -> Result<Self, CellError> {
        Self::check_num_points(num_points)?;
        let simplices = Self::collect_simplices(num_points, triangles)?;
        let edges = (0..num_points as u32)
            .map(|i| [i, (i + 1) % num_points as u32])
            .collect();

        Ok(Self {
            num_points,
            edges,
            simplices,
        })
    }

    /// The number of vertices of cells with this topology.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// The edges tested for intersection with the cutting plane.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// The simplex decomposition of the cell.
    #[inline]
    pub fn simplices(&self) -> &[[u32; SIMPLEX_VERTICES]] {
        &self.simplices
    }

    fn check_num_points(num_points: usize) -> Result<(), CellError> {
        if num_points > MAX_CELL_POINTS {
            Err(CellError::TooManyPoints(num_points))
        } else if num_points < SIMPLEX_VERTICES {
            Err(CellError::NotEnoughPoints(num_points))
        } else {
            Ok(())
        }
    }

    fn check_indices(indices: &[u32], num_points: usize) -> Result<(), CellError> {
        match indices.iter().find(|i| **i as usize >= num_points) {
            Some(index) => Err(CellError::IndexOutOfBounds {
                index: *index,
                num_points,
            }),
            None => Ok(()),
        }
    }

    fn collect_simplices(
        num_points: usize,
        simplices: &[[u32; SIMPLEX_VERTICES]],
    ) -> Result<ArrayVec<[u32; SIMPLEX_VERTICES], MAX_CELL_SIMPLICES>, CellError> {
        if simplices.len() > MAX_CELL_SIMPLICES {
            return Err(CellError::TooManySimplices(simplices.len()));
        }

        for simplex in simplices {
            Self::check_indices(simplex, num_points)?;
        }

        Ok(simplices.iter().copied().collect())
    }
}
