use std::path::PathBuf;

use tracing::info;

use crate::buffer::Channel;
use crate::error::Result;
use crate::io::image_io::{decode_raster, encode_argb};
use crate::quantize::{quantize, QuantizeOptions};

use super::config::PipelineConfig;
use super::stages::{process_raster, StageBuffers};
use super::types::StageArtifact;

/// Result of a pipeline run: the artifact files that were written.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub artifacts: Vec<PathBuf>,
}

/// Path for one artifact: `{prefix}{label_}{base}_{stage}.png` inside the
/// output directory.
fn artifact_path(config: &PipelineConfig, base: &str, stage: StageArtifact) -> PathBuf {
    let label = match &config.label {
        Some(l) => format!("{l}_"),
        None => String::new(),
    };
    config
        .output_dir
        .join(format!("{}{label}{base}_{stage}.png", config.file_prefix))
}

/// Run the full pipeline: decode, process, and emit artifacts.
///
/// `sum` and `final` are always written; `lumi`, `gauss`, `normed`,
/// `xgrad` and `ygrad` only when `emit_intermediates` is set.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput> {
    config.validate()?;

    let raster = decode_raster(&config.input)?;
    info!(
        width = raster.width,
        height = raster.height,
        encoding = raster.samples.encoding_name(),
        "Decoded {}",
        config.input.display()
    );

    let buffers = process_raster(&raster, config)?;

    std::fs::create_dir_all(&config.output_dir)?;
    let base = config
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string();

    let mut emitter = ArtifactEmitter {
        config,
        base,
        artifacts: Vec::new(),
    };
    emitter.emit_all(&buffers)?;

    Ok(PipelineOutput {
        artifacts: emitter.artifacts,
    })
}

struct ArtifactEmitter<'a> {
    config: &'a PipelineConfig,
    base: String,
    artifacts: Vec<PathBuf>,
}

impl ArtifactEmitter<'_> {
    fn emit_all(&mut self, buffers: &StageBuffers) -> Result<()> {
        if self.config.emit_intermediates {
            self.emit(StageArtifact::Lumi, &buffers.luminance.to_channel(), false)?;
            if let Some(smoothed) = &buffers.smoothed {
                self.emit(StageArtifact::Gauss, smoothed, false)?;
            }
            if let Some(normalized) = &buffers.normalized {
                self.emit(StageArtifact::Normed, &normalized.to_channel(), false)?;
            }
            self.emit(StageArtifact::Xgrad, &buffers.gradients.gx, false)?;
            self.emit(StageArtifact::Ygrad, &buffers.gradients.gy, false)?;
        }
        self.emit(StageArtifact::Sum, &buffers.gradients.magnitude, false)?;
        self.emit(StageArtifact::Final, &buffers.gradients.magnitude, true)?;
        Ok(())
    }

    fn emit(&mut self, stage: StageArtifact, channel: &Channel, edge_mode: bool) -> Result<()> {
        let opts = QuantizeOptions {
            scale: 1.0,
            invert: self.config.invert,
            edge_mode,
            threshold: self.config.edge_threshold,
        };
        let pixels = quantize(channel, &opts);
        let path = artifact_path(self.config, &self.base, stage);
        encode_argb(&pixels, channel.width(), channel.height(), &path)?;
        info!(stage = %stage, "Wrote {}", path.display());
        self.artifacts.push(path);
        Ok(())
    }
}
