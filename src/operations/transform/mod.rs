//! 2D affine transforms in homogeneous coordinates.

mod matrix;
mod params;
mod session;
mod step;

pub use matrix::{build_matrix, multiply_matrices, transform_point, transform_polygon};
pub use params::TransformParams;
pub use session::TransformSession;
pub use step::{
    reflection_matrix, rotation_matrix, scale_matrix, shear_matrix, translation_matrix,
    TransformStep,
};
