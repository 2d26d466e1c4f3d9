use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use edgemap_core::pipeline::config::{PipelineConfig, SmoothingConfig};
use edgemap_core::pipeline::run_pipeline;

#[derive(Parser)]
#[command(name = "edgemap", about = "Sobel edge-map extraction tool")]
#[command(version)]
struct Cli {
    /// Input image file
    pub file: PathBuf,

    /// Pipeline config file (TOML); overrides the other flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Apply Gaussian smoothing before edge detection
    #[arg(long)]
    pub gauss: bool,

    /// Gaussian sigma
    #[arg(long, default_value = "1.0")]
    pub sigma: f32,

    /// Gaussian kernel size (must be odd)
    #[arg(long, default_value = "3")]
    pub size: usize,

    /// Apply histogram contrast normalization
    #[arg(long)]
    pub normalize: bool,

    /// Invert output (dark edges on light background)
    #[arg(long)]
    pub invert: bool,

    /// Also write the intermediate stage images
    #[arg(long)]
    pub intermediates: bool,

    /// Edge threshold for the binary mask (0-255)
    #[arg(long, default_value = "50")]
    pub threshold: u8,

    /// Output directory
    #[arg(short, long, default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Label inserted into artifact file names
    #[arg(long)]
    pub label: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn build_config_from_args(cli: &Cli) -> PipelineConfig {
    let mut config = PipelineConfig::new(cli.file.clone());
    config.output_dir = cli.output_dir.clone();
    config.smoothing = SmoothingConfig {
        enabled: cli.gauss,
        sigma: cli.sigma,
        size: cli.size,
    };
    config.normalize = cli.normalize;
    config.invert = cli.invert;
    config.emit_intermediates = cli.intermediates;
    config.edge_threshold = cli.threshold;
    config.label = cli.label.clone();
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = if let Some(ref config_path) = cli.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(&cli)
    };

    println!("Edgemap Pipeline");
    println!("  Input:      {}", config.input.display());
    println!("  Output:     {}", config.output_dir.display());
    if config.smoothing.enabled {
        println!(
            "  Gauss:      sigma {}, size {}",
            config.smoothing.sigma, config.smoothing.size
        );
    } else {
        println!("  Gauss:      disabled");
    }
    println!(
        "  Normalize:  {}",
        if config.normalize { "yes" } else { "no" }
    );
    println!("  Invert:     {}", if config.invert { "yes" } else { "no" });
    println!("  Threshold:  {}", config.edge_threshold);
    println!();

    let output = run_pipeline(&config)
        .with_context(|| format!("Pipeline failed for {}", config.input.display()))?;

    println!("Wrote {} artifact(s):", output.artifacts.len());
    for path in &output.artifacts {
        println!("  {}", path.display());
    }

    Ok(())
}
