//! Entry points reconstructing the material interface of a single cell.
//!
//! These chain the offset solver, the cell clipper and (in 3D) the interface polygon
//! builder. Every call is independent, allocation-free and touches only its own inputs, so
//! distinct cells can be processed concurrently.

#[cfg(feature = "dim2")]
pub use self::interface_options::InterfaceError;
pub use self::interface_options::InterfaceOptions;

#[cfg(feature = "dim2")]
pub use self::cell_interface2d::{cell_interface2d, CellInterface2d};
#[cfg(feature = "dim3")]
pub use self::cell_interface3d::{cell_interface3d, CellInterface3d};

mod interface_options;

#[cfg(feature = "dim2")]
mod cell_interface2d;
#[cfg(feature = "dim3")]
mod cell_interface3d;

static_assertions::assert_impl_all!(crate::shape::Cell<'static>: Send, Sync);
static_assertions::assert_impl_all!(crate::shape::CellTopology: Send, Sync);
static_assertions::assert_impl_all!(crate::query::OffsetSolution: Send, Sync);
static_assertions::assert_impl_all!(crate::query::CellClip: Send, Sync);
#[cfg(feature = "dim2")]
static_assertions::assert_impl_all!(CellInterface2d: Send, Sync);
#[cfg(feature = "dim3")]
static_assertions::assert_impl_all!(CellInterface3d: Send, Sync);
