pub mod codec;
pub mod extract;
pub mod raster;
pub mod source;
