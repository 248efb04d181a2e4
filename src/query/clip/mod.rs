pub use self::clip_cell::{clip_cell, CellClip};
#[cfg(feature = "dim2")]
pub use self::chain_vertex::ChainVertex;
#[cfg(feature = "dim2")]
pub use self::clip_cell_boundary::{clip_cell_boundary, BoundaryClip, MAX_CHAIN_VERTICES};
pub use self::interface_vertex::InterfaceVertex;

#[cfg(feature = "dim2")]
mod chain_vertex;
mod clip_cell;
#[cfg(feature = "dim2")]
mod clip_cell_boundary;
mod interface_vertex;
