use std::time::Instant;

use tracing::info;

use crate::buffer::{Channel, GrayMap};
use crate::error::Result;
use crate::filters::gaussian::smooth;
use crate::filters::normalize::normalize_contrast;
use crate::luminance::extract_luminance;
use crate::raster::Raster;
use crate::sobel::{sobel_gradients, SobelGradients};

use super::config::PipelineConfig;

/// All buffers produced by the numeric stages of one run.
///
/// `smoothed` and `normalized` are present only when the corresponding
/// optional stage ran; the Sobel stage always consumed whichever buffer
/// was current.
#[derive(Clone, Debug)]
pub struct StageBuffers {
    pub luminance: GrayMap,
    pub smoothed: Option<Channel>,
    pub normalized: Option<GrayMap>,
    pub gradients: SobelGradients,
}

/// Run the numeric stages (luminance through Sobel) over a decoded raster.
///
/// Pure with respect to the filesystem; artifact emission happens in the
/// orchestrator.
pub fn process_raster(raster: &Raster, config: &PipelineConfig) -> Result<StageBuffers> {
    let started = Instant::now();
    let luminance = extract_luminance(raster);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Luminance extracted"
    );

    let mut current = luminance.to_channel();

    let smoothed = if config.smoothing.enabled {
        let started = Instant::now();
        let result = smooth(&current, config.smoothing.sigma, config.smoothing.size)?;
        info!(
            sigma = config.smoothing.sigma,
            size = config.smoothing.size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Gaussian smoothing applied"
        );
        current = result.clone();
        Some(result)
    } else {
        None
    };

    let normalized = if config.normalize {
        let started = Instant::now();
        let result = normalize_contrast(&current.to_gray()?);
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Contrast normalized"
        );
        current = result.to_channel();
        Some(result)
    } else {
        None
    };

    let started = Instant::now();
    let gradients = sobel_gradients(&current);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Sobel gradients computed"
    );

    Ok(StageBuffers {
        luminance,
        smoothed,
        normalized,
        gradients,
    })
}
