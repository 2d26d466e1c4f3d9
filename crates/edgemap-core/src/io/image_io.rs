use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::{EdgeMapError, Result};
use crate::raster::{Raster, RasterSamples};

/// Decode an image file into a `Raster`, resolving the pixel encoding once.
///
/// Supported source layouts: 8-bit gray, 16-bit gray, 8-bit RGB
/// (stored as byte triplets in B,G,R order) and 8-bit RGBA (packed ARGB
/// words). Anything else fails with `UnsupportedPixelFormat`.
pub fn decode_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let (w, h) = (img.width() as usize, img.height() as usize);

    let samples = match img {
        DynamicImage::ImageLuma8(gray) => RasterSamples::ByteGray(gray.into_raw()),
        DynamicImage::ImageLuma16(gray) => RasterSamples::UShortGray(gray.into_raw()),
        DynamicImage::ImageRgb8(rgb) => {
            let mut bgr = Vec::with_capacity(w * h * 3);
            for px in rgb.pixels() {
                bgr.push(px.0[2]);
                bgr.push(px.0[1]);
                bgr.push(px.0[0]);
            }
            RasterSamples::ByteBgr(bgr)
        }
        DynamicImage::ImageRgba8(rgba) => {
            let words = rgba
                .pixels()
                .map(|px| {
                    let [r, g, b, a] = px.0;
                    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
                })
                .collect();
            RasterSamples::PackedArgb(words)
        }
        other => {
            return Err(EdgeMapError::UnsupportedPixelFormat(format!(
                "{:?}",
                other.color()
            )))
        }
    };

    Raster::new(w, h, samples)
}

/// Encode row-major ARGB words as a PNG file.
pub fn encode_argb(pixels: &[u32], width: usize, height: usize, path: &Path) -> Result<()> {
    debug_assert_eq!(pixels.len(), width * height);

    let mut img = RgbaImage::new(width as u32, height as u32);
    for (i, &p) in pixels.iter().enumerate() {
        let a = (p >> 24) as u8;
        let r = (p >> 16) as u8;
        let g = (p >> 8) as u8;
        let b = p as u8;
        img.put_pixel((i % width) as u32, (i / width) as u32, Rgba([r, g, b, a]));
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
