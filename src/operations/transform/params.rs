use super::TransformStep;

/// Parameters of a composite 2D transform.
///
/// Every field has a neutral default, so `TransformParams::default()` builds
/// the identity matrix. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct TransformParams {
    /// Horizontal offset.
    pub translate_x: f64,
    /// Vertical offset.
    pub translate_y: f64,
    /// Rotation angle about the origin.
    pub angle_degrees: f64,
    /// Positive angles rotate counter-clockwise when set, clockwise otherwise.
    pub rotate_ccw: bool,
    /// Scale factor along x.
    pub scale_x: f64,
    /// Scale factor along y.
    pub scale_y: f64,
    /// Shear angle along x; its tangent multiplies `y`.
    pub shear_x_degrees: f64,
    /// Shear angle along y; its tangent multiplies `x`.
    pub shear_y_degrees: f64,
    /// Appends the reflection step when set.
    pub reflection_enabled: bool,
    /// Slope `m` of the reflection line `y = m·x + t`.
    pub reflection_slope: f64,
    /// Intercept `t` of the reflection line `y = m·x + t`.
    pub reflection_intercept: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            angle_degrees: 0.0,
            rotate_ccw: true,
            scale_x: 1.0,
            scale_y: 1.0,
            shear_x_degrees: 0.0,
            shear_y_degrees: 0.0,
            reflection_enabled: false,
            reflection_slope: 1.0,
            reflection_intercept: 0.0,
        }
    }
}

impl TransformParams {
    /// Sets the translation offset.
    #[must_use]
    pub fn with_translation(mut self, dx: f64, dy: f64) -> Self {
        self.translate_x = dx;
        self.translate_y = dy;
        self
    }

    /// Sets the rotation angle in degrees and its direction.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64, ccw: bool) -> Self {
        self.angle_degrees = degrees;
        self.rotate_ccw = ccw;
        self
    }

    /// Sets the per-axis scale factors.
    #[must_use]
    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale_x = sx;
        self.scale_y = sy;
        self
    }

    /// Sets the shear angles in degrees.
    #[must_use]
    pub fn with_shear(mut self, x_degrees: f64, y_degrees: f64) -> Self {
        self.shear_x_degrees = x_degrees;
        self.shear_y_degrees = y_degrees;
        self
    }

    /// Enables reflection about the line `y = slope·x + intercept`.
    #[must_use]
    pub fn with_reflection(mut self, slope: f64, intercept: f64) -> Self {
        self.reflection_enabled = true;
        self.reflection_slope = slope;
        self.reflection_intercept = intercept;
        self
    }

    /// Disables reflection, keeping the configured line.
    #[must_use]
    pub fn without_reflection(mut self) -> Self {
        self.reflection_enabled = false;
        self
    }

    /// The elementary steps in composition order: translate, rotate, scale,
    /// shear, then reflect when enabled.
    #[must_use]
    pub fn steps(&self) -> Vec<TransformStep> {
        let mut steps = vec![
            TransformStep::Translate {
                dx: self.translate_x,
                dy: self.translate_y,
            },
            TransformStep::Rotate {
                degrees: self.angle_degrees,
                ccw: self.rotate_ccw,
            },
            TransformStep::Scale {
                sx: self.scale_x,
                sy: self.scale_y,
            },
            TransformStep::Shear {
                x_degrees: self.shear_x_degrees,
                y_degrees: self.shear_y_degrees,
            },
        ];
        if self.reflection_enabled {
            steps.push(TransformStep::Reflect {
                slope: self.reflection_slope,
                intercept: self.reflection_intercept,
            });
        }
        steps
    }
}
