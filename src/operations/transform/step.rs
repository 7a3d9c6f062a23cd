use crate::math::Matrix3;

/// A single elementary 2D transform. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")
)]
pub enum TransformStep {
    /// Offset by `(dx, dy)`.
    Translate { dx: f64, dy: f64 },
    /// Rotation about the origin; clockwise when `ccw` is unset.
    Rotate { degrees: f64, ccw: bool },
    /// Per-axis scale factors.
    Scale { sx: f64, sy: f64 },
    /// Shear angles along x and y.
    Shear { x_degrees: f64, y_degrees: f64 },
    /// Reflection about the line `y = slope·x + intercept`.
    Reflect { slope: f64, intercept: f64 },
}

impl TransformStep {
    /// The homogeneous matrix of this step.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        match *self {
            Self::Translate { dx, dy } => translation_matrix(dx, dy),
            Self::Rotate { degrees, ccw } => rotation_matrix(degrees, ccw),
            Self::Scale { sx, sy } => scale_matrix(sx, sy),
            Self::Shear {
                x_degrees,
                y_degrees,
            } => shear_matrix(x_degrees, y_degrees),
            Self::Reflect { slope, intercept } => reflection_matrix(slope, intercept),
        }
    }

    /// Returns `true` if the step leaves every point in place by construction.
    ///
    /// A reflection is never neutral.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        match *self {
            Self::Translate { dx, dy } => dx == 0.0 && dy == 0.0,
            Self::Rotate { degrees, .. } => degrees == 0.0,
            Self::Scale { sx, sy } => sx == 1.0 && sy == 1.0,
            Self::Shear {
                x_degrees,
                y_degrees,
            } => x_degrees == 0.0 && y_degrees == 0.0,
            Self::Reflect { .. } => false,
        }
    }
}

/// Translation by `(dx, dy)`.
#[must_use]
#[rustfmt::skip]
pub fn translation_matrix(dx: f64, dy: f64) -> Matrix3 {
    Matrix3::new(
        1.0, 0.0, dx,
        0.0, 1.0, dy,
        0.0, 0.0, 1.0,
    )
}

/// Rotation about the origin by `degrees`, counter-clockwise when `ccw` is set.
#[must_use]
#[rustfmt::skip]
pub fn rotation_matrix(degrees: f64, ccw: bool) -> Matrix3 {
    let rad = (if ccw { degrees } else { -degrees }).to_radians();
    let (s, c) = rad.sin_cos();
    Matrix3::new(
        c,   -s,  0.0,
        s,   c,   0.0,
        0.0, 0.0, 1.0,
    )
}

/// Axis-aligned scale.
#[must_use]
#[rustfmt::skip]
pub fn scale_matrix(sx: f64, sy: f64) -> Matrix3 {
    Matrix3::new(
        sx,  0.0, 0.0,
        0.0, sy,  0.0,
        0.0, 0.0, 1.0,
    )
}

/// Shear along both axes, given as angles in degrees.
///
/// The x factor `tan(x_degrees)` lands in row 0, column 1; the y factor in
/// row 1, column 0.
#[must_use]
#[rustfmt::skip]
pub fn shear_matrix(x_degrees: f64, y_degrees: f64) -> Matrix3 {
    let shx = x_degrees.to_radians().tan();
    let shy = y_degrees.to_radians().tan();
    Matrix3::new(
        1.0, shx, 0.0,
        shy, 1.0, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Reflection about the line `y = m·x + t`.
///
/// `m² + 1` is never zero for finite `m`, so no guard is needed.
#[must_use]
#[rustfmt::skip]
#[allow(clippy::many_single_char_names)]
pub fn reflection_matrix(m: f64, t: f64) -> Matrix3 {
    let m2 = m * m;
    let d = m2 + 1.0;
    Matrix3::new(
        (1.0 - m2) / d, 2.0 * m / d,    -2.0 * m * t / d,
        2.0 * m / d,    (m2 - 1.0) / d, 2.0 * t / d,
        0.0,            0.0,            1.0,
    )
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn clockwise_rotation_is_negated_angle() {
        let cw = rotation_matrix(30.0, false);
        let ccw = rotation_matrix(-30.0, true);
        assert_abs_diff_eq!(cw, ccw, epsilon = TOLERANCE);
    }

    #[test]
    fn rotation_45_entries() {
        let r = rotation_matrix(45.0, true);
        assert_abs_diff_eq!(r[(0, 0)], FRAC_1_SQRT_2, epsilon = TOLERANCE);
        assert_abs_diff_eq!(r[(0, 1)], -FRAC_1_SQRT_2, epsilon = TOLERANCE);
        assert_abs_diff_eq!(r[(1, 0)], FRAC_1_SQRT_2, epsilon = TOLERANCE);
    }

    #[test]
    fn shear_places_tangents_off_diagonal() {
        let s = shear_matrix(45.0, 0.0);
        assert_abs_diff_eq!(s[(0, 1)], 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(s[(1, 0)], 0.0, epsilon = TOLERANCE);

        let s = shear_matrix(0.0, -45.0);
        assert_abs_diff_eq!(s[(0, 1)], 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(s[(1, 0)], -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn reflection_about_x_axis() {
        // m = 0, t = 0: y -> -y
        let r = reflection_matrix(0.0, 0.0);
        assert_abs_diff_eq!(r, scale_matrix(1.0, -1.0), epsilon = TOLERANCE);
    }

    #[test]
    fn reflection_is_an_involution() {
        let r = reflection_matrix(1.7, -3.0);
        assert_abs_diff_eq!(r * r, Matrix3::identity(), epsilon = 1e-9);
    }

    #[test]
    fn reflection_bottom_row_is_affine() {
        let r = reflection_matrix(-2.0, 5.0);
        assert_abs_diff_eq!(r[(2, 0)], 0.0);
        assert_abs_diff_eq!(r[(2, 1)], 0.0);
        assert_abs_diff_eq!(r[(2, 2)], 1.0);
    }

    #[test]
    fn neutral_steps() {
        assert!(TransformStep::Translate { dx: 0.0, dy: 0.0 }.is_identity());
        assert!(TransformStep::Rotate { degrees: 0.0, ccw: false }.is_identity());
        assert!(TransformStep::Scale { sx: 1.0, sy: 1.0 }.is_identity());
        assert!(!TransformStep::Scale { sx: 1.0, sy: 2.0 }.is_identity());
        assert!(!TransformStep::Reflect { slope: 0.0, intercept: 0.0 }.is_identity());
    }

    #[test]
    fn neutral_steps_build_identity() {
        let neutral = [
            TransformStep::Translate { dx: 0.0, dy: 0.0 },
            TransformStep::Rotate { degrees: 0.0, ccw: true },
            TransformStep::Scale { sx: 1.0, sy: 1.0 },
            TransformStep::Shear { x_degrees: 0.0, y_degrees: 0.0 },
        ];
        for step in neutral {
            assert_abs_diff_eq!(step.matrix(), Matrix3::identity(), epsilon = TOLERANCE);
        }
    }
}
