use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgeMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode/encode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    #[error("Sample {value} at ({row}, {col}) outside [0, 255]")]
    ValueOutOfRange { value: f32, row: usize, col: usize },

    #[error("Invalid Gaussian kernel: {0}")]
    InvalidKernel(String),

    #[error("Sample count {samples} does not match {width}x{height} raster")]
    InvalidDimensions {
        width: usize,
        height: usize,
        samples: usize,
    },

    #[error("Image has zero width or height")]
    EmptyImage,
}

pub type Result<T> = std::result::Result<T, EdgeMapError>;
