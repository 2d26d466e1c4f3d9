use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_EDGE_THRESHOLD, DEFAULT_FILE_PREFIX, DEFAULT_GAUSS_SIGMA, DEFAULT_GAUSS_SIZE,
};
use crate::error::{EdgeMapError, Result};

/// Immutable configuration for one pipeline run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub smoothing: SmoothingConfig,
    /// Apply cumulative-histogram contrast normalization.
    #[serde(default)]
    pub normalize: bool,
    /// Invert output values (edges dark on light background).
    #[serde(default)]
    pub invert: bool,
    /// Also emit the lumi/gauss/normed/xgrad/ygrad diagnostic snapshots.
    #[serde(default)]
    pub emit_intermediates: bool,
    /// Threshold for the binary edge mask in the `final` artifact.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: u8,
    /// Prefix prepended to every artifact file name.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Optional run label inserted between prefix and base name.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_edge_threshold() -> u8 {
    DEFAULT_EDGE_THRESHOLD
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmoothingConfig {
    pub enabled: bool,
    /// Spread of the Gaussian kernel; must be positive.
    pub sigma: f32,
    /// Kernel width; must be odd.
    pub size: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            sigma: DEFAULT_GAUSS_SIGMA,
            size: DEFAULT_GAUSS_SIZE,
        }
    }
}

impl PipelineConfig {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            output_dir: default_output_dir(),
            smoothing: SmoothingConfig::default(),
            normalize: false,
            invert: false,
            emit_intermediates: false,
            edge_threshold: default_edge_threshold(),
            file_prefix: default_file_prefix(),
            label: None,
        }
    }

    /// Check smoothing parameters before the run starts.
    pub fn validate(&self) -> Result<()> {
        if self.smoothing.enabled {
            let sigma = self.smoothing.sigma;
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(EdgeMapError::InvalidKernel(format!(
                    "sigma must be a positive finite number, got {sigma}"
                )));
            }
            let size = self.smoothing.size;
            if size == 0 || size % 2 == 0 {
                return Err(EdgeMapError::InvalidKernel(format!(
                    "kernel size must be odd and >= 1, got {size}"
                )));
            }
        }
        Ok(())
    }
}
