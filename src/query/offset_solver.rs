use crate::math::{Real, UnitVector};
use crate::measure::CellMeasure;
use crate::shape::Plane;

/// Tolerances and limits of the plane offset solver.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim3")] {
/// use plic3d::query::OffsetSolverOptions;
///
/// // Trade some accuracy for speed.
/// let options = OffsetSolverOptions {
///     fraction_tolerance: 1.0e-6,
///     ..OffsetSolverOptions::default()
/// };
/// assert_eq!(options.max_iterations, 100);
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetSolverOptions {
    /// The solve stops once the fraction below the plane is within this absolute
    /// distance of the target.
    pub fraction_tolerance: Real,
    /// The solve stops once the bracket around the plane position is narrower than
    /// this fraction of the cell extent along the normal.
    pub width_tolerance: Real,
    /// The maximum number of fraction evaluations.
    pub max_iterations: usize,
}

impl Default for OffsetSolverOptions {
    fn default() -> Self {
        Self {
            fraction_tolerance: 1.0e-10,
            width_tolerance: 1.0e-12,
            max_iterations: 100,
        }
    }
}

/// How the offset of the cutting plane is obtained.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OffsetMode {
    /// Solve for the offset that leaves this fraction of the cell inside the plane.
    Fraction(Real),
    /// Use this offset as-is, bypassing the solver.
    Distance(Real),
}

/// How an [`OffsetSolution`] was obtained.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolveStatus {
    /// The target fraction was matched within tolerance.
    Converged,
    /// The target fraction was `<= 0` or `>= 1`: the plane passes through the
    /// extreme vertex of the cell, without iterating.
    Saturated,
    /// The offset was given by the caller.
    Bypassed,
    /// The iteration limit was reached: the best offset found is returned and the
    /// resulting interface is only approximate.
    MaxIterations,
    /// The cell has a negligible measure: the plane passes through the middle of the
    /// cell extent.
    Degenerate,
}

/// The offset of a cutting plane, and how it was obtained.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetSolution {
    /// The offset `d` of the plane `dot(x, normal) + d = 0`.
    pub offset: Real,
    /// The fraction of the cell lying inside the plane (`NaN` if the solver was bypassed).
    pub fraction: Real,
    /// The number of fraction evaluations performed.
    pub iterations: usize,
    /// How this solution was obtained.
    pub status: SolveStatus,
}

impl OffsetSolution {
    fn new(offset: Real, fraction: Real, iterations: usize, status: SolveStatus) -> Self {
        Self {
            offset,
            fraction,
            iterations,
            status,
        }
    }

    /// Is the resulting interface only approximate?
    #[inline]
    pub fn is_approximate(&self) -> bool {
        matches!(
            self.status,
            SolveStatus::MaxIterations | SolveStatus::Degenerate
        )
    }

    /// The cutting plane with the given normal and this offset.
    #[inline]
    pub fn plane(&self, normal: UnitVector<Real>) -> Plane {
        Plane::new(normal, self.offset)
    }
}

/// Computes the offset of the plane according to `mode`.
///
/// This is [`find_offset`] for [`OffsetMode::Fraction`], and a pass-through for
/// [`OffsetMode::Distance`].
pub fn resolve_offset(
    measure: &CellMeasure,
    normal: &UnitVector<Real>,
    mode: OffsetMode,
    options: &OffsetSolverOptions,
) -> OffsetSolution {
    match mode {
        OffsetMode::Fraction(target) => find_offset(measure, normal, target, options),
        OffsetMode::Distance(offset) => {
            OffsetSolution::new(offset, Real::NAN, 0, SolveStatus::Bypassed)
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Side {
    None,
    Lower,
    Upper,
}

/// Finds the offset `d` such that the part of the cell where `dot(x, normal) + d <= 0`
/// has the fraction `target` of the cell measure.
///
/// The fraction below the plane is a continuous, non-decreasing function of the plane
/// level `-d`, which is bracketed by the smallest and largest projections of the cell
/// vertices on the normal. The root is found with the Illinois variant of the
/// regula falsi, falling back to bisection whenever the secant leaves the bracket.
pub fn find_offset(
    measure: &CellMeasure,
    normal: &UnitVector<Real>,
    target: Real,
    options: &OffsetSolverOptions,
) -> OffsetSolution {
    let (min, max) = measure.cell().projected_extents(normal);

    if measure.is_degenerate() {
        log::debug!("Offset requested for a cell with a negligible measure.");
        let level = (min + max) * 0.5;
        return OffsetSolution::new(-level, 0.0, 0, SolveStatus::Degenerate);
    }

    if !(target > 0.0) {
        return OffsetSolution::new(-min, 0.0, 0, SolveStatus::Saturated);
    }

    if target >= 1.0 {
        return OffsetSolution::new(-max, 1.0, 0, SolveStatus::Saturated);
    }

    let residual = |level: Real| measure.fraction_below(&Plane::at_level(*normal, level)) - target;
    let width_tolerance = options.width_tolerance * (max - min);

    // Invariant: `f_lo < 0 < f_hi`.
    let (mut lo, mut f_lo) = (min, -target);
    let (mut hi, mut f_hi) = (max, 1.0 - target);
    let mut best = if -f_lo < f_hi { (lo, f_lo) } else { (hi, f_hi) };
    let mut last_moved = Side::None;

    for iteration in 1..=options.max_iterations {
        let mut level = (lo * f_hi - hi * f_lo) / (f_hi - f_lo);

        if !(level > lo && level < hi) {
            level = (lo + hi) * 0.5;
        }

        let f = residual(level);

        if f.abs() < best.1.abs() {
            best = (level, f);
        }

        if f.abs() <= options.fraction_tolerance || hi - lo <= width_tolerance {
            return OffsetSolution::new(-level, f + target, iteration, SolveStatus::Converged);
        }

        if f < 0.0 {
            lo = level;
            f_lo = f;
            if last_moved == Side::Lower {
                f_hi *= 0.5;
            }
            last_moved = Side::Lower;
        } else {
            hi = level;
            f_hi = f;
            if last_moved == Side::Upper {
                f_lo *= 0.5;
            }
            last_moved = Side::Upper;
        }
    }

    log::debug!(
        "Plane offset solver reached {} iterations, residual: {}.",
        options.max_iterations,
        best.1
    );

    OffsetSolution::new(
        -best.0,
        best.1 + target,
        options.max_iterations,
        SolveStatus::MaxIterations,
    )
}
