use ndarray::Array2;

use crate::buffer::GrayMap;
use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::raster::{Raster, RasterSamples};

/// BT.601 weighted luminance, rounded half-up (inputs are non-negative).
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.round() as u8
}

/// Convert a decoded raster into a single-channel intensity buffer
/// with samples in [0, 255].
///
/// Unsupported source encodings are rejected at the decode boundary,
/// so this dispatch is total.
pub fn extract_luminance(raster: &Raster) -> GrayMap {
    let (w, h) = (raster.width, raster.height);
    let mut data = Array2::<u8>::zeros((h, w));

    match &raster.samples {
        RasterSamples::PackedRgb(pixels) | RasterSamples::PackedArgb(pixels) => {
            for (i, out) in data.iter_mut().enumerate() {
                let p = pixels[i];
                let r = ((p >> 16) & 0xff) as u8;
                let g = ((p >> 8) & 0xff) as u8;
                let b = (p & 0xff) as u8;
                *out = luminance(r, g, b);
            }
        }
        RasterSamples::ByteGray(pixels) => {
            for (i, out) in data.iter_mut().enumerate() {
                *out = pixels[i];
            }
        }
        RasterSamples::UShortGray(pixels) => {
            // Scale 16-bit down to 8-bit by dropping the low byte.
            for (i, out) in data.iter_mut().enumerate() {
                *out = (pixels[i] >> 8) as u8;
            }
        }
        RasterSamples::ByteBgr(pixels) => {
            for (i, out) in data.iter_mut().enumerate() {
                let b = pixels[3 * i];
                let g = pixels[3 * i + 1];
                let r = pixels[3 * i + 2];
                *out = luminance(r, g, b);
            }
        }
    }

    GrayMap::new(data)
}
