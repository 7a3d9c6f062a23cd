mod grid_point;

pub use grid_point::GridPoint;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3x3 homogeneous transformation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rounds a coordinate to the nearest grid index, ties away from zero.
///
/// Values outside the `i32` range saturate; NaN maps to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_grid(value: f64) -> i32 {
    value.round() as i32
}
