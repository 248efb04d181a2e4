//! Non-persistent geometric queries on a single cell.
//!
//! * [`find_offset()`] positions a plane of given normal so that it splits a cell with a
//!   given volume (area) fraction.
//! * [`clip_cell()`] classifies the vertices of a cell with regard to a plane, and creates
//!   the interface vertices on the crossed edges.
//! * `clip_cell_boundary()` (2D) does the same while walking the cell boundary, producing
//!   the boundary chain of each side.
//! * `sort_interface_polygon()` (3D) orders the interface vertices into a simple polygon.

pub use self::clip::{clip_cell, CellClip, InterfaceVertex};
#[cfg(feature = "dim2")]
pub use self::clip::{clip_cell_boundary, BoundaryClip, ChainVertex, MAX_CHAIN_VERTICES};
#[cfg(feature = "dim3")]
pub use self::interface_polygon::sort_interface_polygon;
pub use self::offset_solver::{
    find_offset, resolve_offset, OffsetMode, OffsetSolution, OffsetSolverOptions, SolveStatus,
};

mod clip;
#[cfg(feature = "dim3")]
mod interface_polygon;
mod offset_solver;
