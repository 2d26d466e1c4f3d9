use ndarray::Array2;
use rayon::prelude::*;

use crate::buffer::Channel;
use crate::consts::{MAX_INTENSITY, PARALLEL_PIXEL_THRESHOLD};

/// Per-pixel Sobel output: raw signed gradients plus the clipped
/// L1 magnitude `|gx| + |gy|`.
#[derive(Clone, Debug)]
pub struct SobelGradients {
    /// Horizontal gradient, unclipped.
    pub gx: Channel,
    /// Vertical gradient, unclipped.
    pub gy: Channel,
    /// `|gx| + |gy|` clamped to [0, 255].
    pub magnitude: Channel,
}

/// One interior row of (gx, gy, magnitude) for columns `1 .. w - 1`.
fn sobel_row(data: &Array2<f32>, row: usize) -> Vec<(f32, f32, f32)> {
    let w = data.ncols();

    (1..w - 1)
        .map(|col| {
            let gx = 2.0 * data[[row, col + 1]]
                + data[[row - 1, col + 1]]
                + data[[row + 1, col + 1]]
                - 2.0 * data[[row, col - 1]]
                - data[[row - 1, col - 1]]
                - data[[row + 1, col - 1]];

            let gy = 2.0 * data[[row + 1, col]]
                + data[[row + 1, col - 1]]
                + data[[row + 1, col + 1]]
                - 2.0 * data[[row - 1, col]]
                - data[[row - 1, col - 1]]
                - data[[row - 1, col + 1]];

            let magnitude = (gx.abs() + gy.abs()).clamp(0.0, MAX_INTENSITY);
            (gx, gy, magnitude)
        })
        .collect()
}

/// Apply the fixed 3x3 Sobel masks to the buffer.
///
/// The one-pixel border gets gx = gy = magnitude = 0; the masks are never
/// applied there (no mirroring or extension).
pub fn sobel_gradients(channel: &Channel) -> SobelGradients {
    let (h, w) = channel.data.dim();
    let mut gx = Array2::<f32>::zeros((h, w));
    let mut gy = Array2::<f32>::zeros((h, w));
    let mut magnitude = Array2::<f32>::zeros((h, w));

    if h >= 3 && w >= 3 {
        if h * w >= PARALLEL_PIXEL_THRESHOLD {
            let rows: Vec<Vec<(f32, f32, f32)>> = (1..h - 1)
                .into_par_iter()
                .map(|row| sobel_row(&channel.data, row))
                .collect();

            for (i, row_data) in rows.into_iter().enumerate() {
                for (j, (x, y, m)) in row_data.into_iter().enumerate() {
                    gx[[1 + i, 1 + j]] = x;
                    gy[[1 + i, 1 + j]] = y;
                    magnitude[[1 + i, 1 + j]] = m;
                }
            }
        } else {
            for row in 1..h - 1 {
                for (j, (x, y, m)) in sobel_row(&channel.data, row).into_iter().enumerate() {
                    gx[[row, 1 + j]] = x;
                    gy[[row, 1 + j]] = y;
                    magnitude[[row, 1 + j]] = m;
                }
            }
        }
    }

    SobelGradients {
        gx: Channel::new(gx),
        gy: Channel::new(gy),
        magnitude: Channel::new(magnitude),
    }
}
