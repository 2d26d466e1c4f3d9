use ndarray::Array2;

use crate::consts::MAX_INTENSITY;
use crate::error::{EdgeMapError, Result};

/// Integer intensity buffer with samples in [0, 255].
/// Produced by the luminance and contrast-normalization stages.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayMap {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
}

impl GrayMap {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Exact floating-point mirror for the convolution stages.
    pub fn to_channel(&self) -> Channel {
        Channel::new(self.data.mapv(f32::from))
    }
}

/// Floating-point working buffer of one pipeline stage
/// (smoothed intensity, gradient, or magnitude).
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Channel {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Round back into the integer domain.
    ///
    /// Rounding is half-away-from-zero (`f32::round`), i.e. round-half-up
    /// for the non-negative samples handled here. A sample that rounds
    /// outside [0, 255] or is not finite fails with `ValueOutOfRange`.
    pub fn to_gray(&self) -> Result<GrayMap> {
        let (h, w) = self.data.dim();
        let mut out = Array2::<u8>::zeros((h, w));

        for row in 0..h {
            for col in 0..w {
                let v = self.data[[row, col]];
                let rounded = v.round();
                if !rounded.is_finite() || rounded < 0.0 || rounded > MAX_INTENSITY {
                    return Err(EdgeMapError::ValueOutOfRange { value: v, row, col });
                }
                out[[row, col]] = rounded as u8;
            }
        }

        Ok(GrayMap::new(out))
    }
}
