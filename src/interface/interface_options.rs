use crate::query::OffsetSolverOptions;

/// Options of the interface reconstruction of a cell.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InterfaceOptions {
    /// The options of the plane offset solver.
    pub solver: OffsetSolverOptions,
    /// Measure 2D cells as the volume they sweep revolving around the `y` axis, instead of
    /// their area. Ignored in 3D.
    pub axisymmetric: bool,
}

/// Error indicating that the interface of a 2D cell could not be reconstructed.
#[cfg(feature = "dim2")]
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InterfaceError {
    /// The line did not cross the cell boundary exactly twice.
    #[error("the line crosses the cell boundary {found} times instead of 2.")]
    CrossingCount {
        /// The number of boundary edges crossed by the line.
        found: usize,
    },
    /// A fraction was requested for a cell with a negligible measure.
    #[error("cannot split a cell with a negligible measure by fraction.")]
    DegenerateCell,
}
