/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Number of histogram bins / intensity levels in the 8-bit domain.
pub const GRAY_LEVELS: usize = 256;

/// Maximum 8-bit intensity value.
pub const MAX_INTENSITY: f32 = 255.0;

/// Default edge threshold for the binary output mask.
pub const DEFAULT_EDGE_THRESHOLD: u8 = 50;

/// Default Gaussian smoothing sigma.
pub const DEFAULT_GAUSS_SIGMA: f32 = 1.0;

/// Default Gaussian kernel size (must stay odd).
pub const DEFAULT_GAUSS_SIZE: usize = 3;

/// Default output file prefix for emitted artifacts.
pub const DEFAULT_FILE_PREFIX: &str = "sobel_";

/// Fully opaque black ARGB word.
pub const ARGB_BLACK: u32 = 0xFF00_0000;

/// Fully opaque white ARGB word.
pub const ARGB_WHITE: u32 = 0xFFFF_FFFF;
