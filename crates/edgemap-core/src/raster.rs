use crate::error::{EdgeMapError, Result};

/// Raw pixel storage for a decoded image, tagged with its encoding.
///
/// The encoding is resolved once at the decode boundary; downstream
/// stages match on the variant instead of re-inspecting the source.
#[derive(Clone, Debug)]
pub enum RasterSamples {
    /// One 32-bit word per pixel, `0x00RRGGBB`. High byte ignored.
    PackedRgb(Vec<u32>),
    /// One 32-bit word per pixel, `0xAARRGGBB`. Alpha ignored.
    PackedArgb(Vec<u32>),
    /// One byte per pixel.
    ByteGray(Vec<u8>),
    /// One 16-bit word per pixel.
    UShortGray(Vec<u16>),
    /// Three consecutive bytes per pixel in B, G, R order.
    ByteBgr(Vec<u8>),
}

impl RasterSamples {
    /// Number of pixels this sample buffer describes.
    pub fn pixel_count(&self) -> usize {
        match self {
            Self::PackedRgb(v) | Self::PackedArgb(v) => v.len(),
            Self::ByteGray(v) => v.len(),
            Self::UShortGray(v) => v.len(),
            Self::ByteBgr(v) => v.len() / 3,
        }
    }

    /// Short human-readable encoding name for logs and errors.
    pub fn encoding_name(&self) -> &'static str {
        match self {
            Self::PackedRgb(_) => "packed-rgb",
            Self::PackedArgb(_) => "packed-argb",
            Self::ByteGray(_) => "byte-gray",
            Self::UShortGray(_) => "ushort-gray",
            Self::ByteBgr(_) => "byte-bgr",
        }
    }
}

/// A decoded input image: dimensions plus raw samples.
///
/// Read-only to the pipeline; every stage output lives in its own buffer.
#[derive(Clone, Debug)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub samples: RasterSamples,
}

impl Raster {
    /// Build a raster, validating the sample count against the dimensions.
    pub fn new(width: usize, height: usize, samples: RasterSamples) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EdgeMapError::EmptyImage);
        }
        let expected = width * height;
        let actual = samples.pixel_count();
        // BGR buffers must also be a whole number of triplets.
        let ragged = matches!(&samples, RasterSamples::ByteBgr(v) if v.len() % 3 != 0);
        if actual != expected || ragged {
            return Err(EdgeMapError::InvalidDimensions {
                width,
                height,
                samples: actual,
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
