//! Various unsorted geometrical operators.

pub use self::center::center;
pub use self::crossing_parameter::crossing_parameter;

mod center;
mod crossing_parameter;
