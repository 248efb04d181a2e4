/*!
plic
========

**plic** is the per-cell geometry kernel of a piecewise-linear material interface
reconstruction (PLIC / MIR) written with the rust programming language.

Given a single mesh cell holding two materials in a known proportion, and the
orientation of the interface between them, it positions the cutting plane (line,
in 2D) that splits the cell with the requested volume (area) fraction, then
clips the cell by that plane.

The same sources are compiled as `plic2d` and `plic3d`.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "dim2", feature = "dim3"))]
core::compile_error!("The `dim2` and `dim3` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod interface;
pub mod measure;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The number of vertices of a simplex of this dimension (tetrahedron).
    pub const SIMPLEX_VERTICES: usize = DIM + 1;

    /// The maximum number of vertices a single cell may have.
    pub const MAX_CELL_POINTS: usize = 128;

    /// The maximum number of simplices (tetrahedra) a cell decomposition may have.
    pub const MAX_CELL_SIMPLICES: usize = 128;

    /// The maximum number of wireframe edges a cell may have.
    pub const MAX_CELL_EDGES: usize = 256;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim2")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The number of vertices of a simplex of this dimension (triangle).
    pub const SIMPLEX_VERTICES: usize = DIM + 1;

    /// The maximum number of vertices a single cell may have.
    pub const MAX_CELL_POINTS: usize = 128;

    /// The maximum number of simplices (triangles) a cell decomposition may have.
    pub const MAX_CELL_SIMPLICES: usize = 128;

    /// The maximum number of boundary edges a cell may have.
    pub const MAX_CELL_EDGES: usize = MAX_CELL_POINTS;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;
}
