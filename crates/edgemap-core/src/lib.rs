pub mod buffer;
pub mod consts;
pub mod error;
pub mod filters;
pub mod io;
pub mod luminance;
pub mod pipeline;
pub mod quantize;
pub mod raster;
pub mod sobel;
