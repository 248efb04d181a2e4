//! Cells, their topologies, and the primitive shapes they are made of.

pub use self::cell::Cell;
pub use self::cell_shape::CellShape;
pub use self::cell_topology::{CellError, CellTopology};
pub use self::plane::{unit_normal_or_fallback, Plane};

#[cfg(feature = "dim3")]
pub use self::tetrahedron::Tetrahedron;
#[cfg(feature = "dim2")]
pub use self::triangle::Triangle;

mod cell;
mod cell_shape;
mod cell_topology;
mod plane;

#[cfg(feature = "dim3")]
mod tetrahedron;
#[cfg(feature = "dim2")]
mod triangle;
