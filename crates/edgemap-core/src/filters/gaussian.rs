use ndarray::Array2;
use rayon::prelude::*;

use crate::buffer::Channel;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{EdgeMapError, Result};

/// Normalized 2D Gaussian kernel of odd size K, weights summing to 1.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    pub size: usize,
    /// Weights, shape = (size, size); center at (size/2, size/2).
    pub weights: Array2<f32>,
}

impl GaussianKernel {
    pub fn new(sigma: f32, size: usize) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(EdgeMapError::InvalidKernel(format!(
                "sigma must be a positive finite number, got {sigma}"
            )));
        }
        if size == 0 || size % 2 == 0 {
            return Err(EdgeMapError::InvalidKernel(format!(
                "kernel size must be odd and >= 1, got {size}"
            )));
        }

        let offset = (size / 2) as isize;
        let s2 = 2.0 * sigma * sigma;
        let norm = 1.0 / (s2 * std::f32::consts::PI);

        let mut weights = Array2::<f32>::zeros((size, size));
        let mut sum = 0.0f32;
        for dy in -offset..=offset {
            for dx in -offset..=offset {
                let w = norm * (-((dx * dx + dy * dy) as f32) / s2).exp();
                weights[[(dy + offset) as usize, (dx + offset) as usize]] = w;
                sum += w;
            }
        }
        for w in &mut weights {
            *w /= sum;
        }

        Ok(Self { size, weights })
    }

    /// Half-width of the kernel; also the width of the untouched border band.
    pub fn offset(&self) -> usize {
        self.size / 2
    }
}

/// Convolve one interior row, returning the values for columns
/// `offset .. w - offset`.
fn smooth_row(data: &Array2<f32>, kernel: &GaussianKernel, row: usize) -> Vec<f32> {
    let w = data.ncols();
    let offset = kernel.offset();

    (offset..w - offset)
        .map(|col| {
            let mut sum = 0.0f32;
            for kr in 0..kernel.size {
                for kc in 0..kernel.size {
                    sum += kernel.weights[[kr, kc]]
                        * data[[row + kr - offset, col + kc - offset]];
                }
            }
            sum
        })
        .collect()
}

/// Convolve the buffer with a normalized Gaussian of the given sigma and
/// odd size, returning a new buffer of identical dimensions.
///
/// Border pixels within `size / 2` of any edge keep the input value
/// unchanged; no clipping is applied to the convolved values.
pub fn smooth(channel: &Channel, sigma: f32, size: usize) -> Result<Channel> {
    let kernel = GaussianKernel::new(sigma, size)?;
    let (h, w) = channel.data.dim();
    let offset = kernel.offset();

    // The whole image is border band: nothing to convolve.
    if h < kernel.size || w < kernel.size {
        return Ok(channel.clone());
    }

    let mut result = channel.data.clone();

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<f32>> = (offset..h - offset)
            .into_par_iter()
            .map(|row| smooth_row(&channel.data, &kernel, row))
            .collect();

        for (i, row_data) in rows.into_iter().enumerate() {
            for (j, val) in row_data.into_iter().enumerate() {
                result[[offset + i, offset + j]] = val;
            }
        }
    } else {
        for row in offset..h - offset {
            for (j, val) in smooth_row(&channel.data, &kernel, row).into_iter().enumerate() {
                result[[row, offset + j]] = val;
            }
        }
    }

    Ok(Channel::new(result))
}
