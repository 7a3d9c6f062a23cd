use crate::math::{Matrix3, Point2};

use super::TransformParams;

/// Builds the composite matrix for `params`.
///
/// Starts from the identity and right-multiplies translation, rotation,
/// scale, shear and (if enabled) reflection, in that fixed order.
#[must_use]
pub fn build_matrix(params: &TransformParams) -> Matrix3 {
    params
        .steps()
        .iter()
        .fold(Matrix3::identity(), |acc, step| {
            multiply_matrices(&acc, &step.matrix())
        })
}

/// Standard 3x3 product `a · b`.
///
/// Accumulating `matrix = multiply_matrices(&matrix, &next)` places later
/// steps on the right.
#[must_use]
pub fn multiply_matrices(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    a * b
}

/// Applies an affine matrix to `point` in homogeneous form `(x, y, 1)`.
///
/// Only rows 0 and 1 are read; the bottom row is assumed to be `[0, 0, 1]`
/// and no perspective division happens.
#[must_use]
pub fn transform_point(point: &Point2, matrix: &Matrix3) -> Point2 {
    Point2::new(
        matrix[(0, 0)] * point.x + matrix[(0, 1)] * point.y + matrix[(0, 2)],
        matrix[(1, 0)] * point.x + matrix[(1, 1)] * point.y + matrix[(1, 2)],
    )
}

/// Applies [`transform_point`] to every vertex, preserving order.
#[must_use]
pub fn transform_polygon(points: &[Point2], matrix: &Matrix3) -> Vec<Point2> {
    points.iter().map(|p| transform_point(p, matrix)).collect()
}
