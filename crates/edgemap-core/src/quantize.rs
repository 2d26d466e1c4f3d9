use crate::buffer::Channel;
use crate::consts::{ARGB_BLACK, ARGB_WHITE, DEFAULT_EDGE_THRESHOLD, MAX_INTENSITY};

/// Options for quantizing a stage buffer into displayable ARGB words.
#[derive(Clone, Copy, Debug)]
pub struct QuantizeOptions {
    /// Multiplier applied before clipping; 1.0 = identity.
    pub scale: f32,
    /// Map v to 255 - v after clipping.
    pub invert: bool,
    /// Emit a hard binary edge mask instead of grayscale.
    pub edge_mode: bool,
    /// Edge-mask threshold, compared after inversion is applied.
    pub threshold: u8,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            invert: false,
            edge_mode: false,
            threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

/// Quantize a buffer to 8-bit and pack it into row-major ARGB words.
///
/// Each sample becomes `v = clamp(round(sample * scale), 0, 255)`,
/// inverted if configured. Grayscale mode packs v into all three color
/// channels at full opacity; edge mode emits opaque white where v passes
/// the threshold and opaque black elsewhere.
pub fn quantize(channel: &Channel, opts: &QuantizeOptions) -> Vec<u32> {
    channel
        .data
        .iter()
        .map(|&sample| {
            let mut v = (sample * opts.scale).round().clamp(0.0, MAX_INTENSITY) as u32;
            if opts.invert {
                v = 255 - v;
            }

            if opts.edge_mode {
                let cutoff = if opts.invert {
                    255 - opts.threshold as u32
                } else {
                    opts.threshold as u32
                };
                if v > cutoff {
                    ARGB_WHITE
                } else {
                    ARGB_BLACK
                }
            } else {
                ARGB_BLACK | (v << 16) | (v << 8) | v
            }
        })
        .collect()
}
