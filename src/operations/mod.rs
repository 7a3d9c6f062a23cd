pub mod raster;
pub mod transform;
