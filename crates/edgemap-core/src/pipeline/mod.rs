pub mod config;
mod runner;
mod stages;
mod types;

pub use runner::{run_pipeline, PipelineOutput};
pub use stages::{process_raster, StageBuffers};
pub use types::StageArtifact;
