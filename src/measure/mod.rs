//! Volumes (areas, in 2D) of cells and of their parts lying below a plane.

pub use self::cell_measure::CellMeasure;

mod cell_measure;
#[cfg(feature = "dim3")]
mod measure_tetrahedron;
#[cfg(feature = "dim2")]
mod measure_triangle;
