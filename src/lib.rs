pub mod error;
pub mod math;
pub mod operations;
pub mod viewport;

pub use error::{GfxError, Result};
pub use math::{GridPoint, Matrix3, Point2};
pub use operations::raster::{compute_line, compute_line_by_tag, LineAlgorithm};
pub use operations::transform::{build_matrix, TransformParams, TransformSession, TransformStep};
