// noise-preview: sample a configured generator over a grid and save it as PNG
mod config;
mod error;
mod render;

use std::path::PathBuf;
use std::time::Instant;

use noise::utils::{normalize2, sample_grid};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Palette, PreviewConfig};
use crate::error::AppError;

const DEFAULT_CONFIG: &str = "noise.toml";

fn run(config_path: PathBuf) -> Result<(), AppError> {
    let config = if config_path.exists() {
        info!(path = %config_path.display(), "loading config");
        PreviewConfig::load(&config_path)?
    } else {
        info!(path = %config_path.display(), "config not found, using defaults");
        PreviewConfig::default()
    };

    let generator = config.generator.build()?;

    let start = Instant::now();
    let mut map = sample_grid(generator.as_ref(), config.size, config.scale);
    info!(
        kind = ?config.generator.kind,
        size = config.size,
        elapsed_ms = start.elapsed().as_secs_f32() * 1000.0,
        "sampled noise grid"
    );

    normalize2(&mut map);
    match config.palette {
        Palette::Grayscale => render::to_grayscale(&map).save(&config.output)?,
        Palette::Terrain => render::to_terrain(&map).save(&config.output)?,
    }
    info!(output = %config.output.display(), "saved preview");
    Ok(())
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    run(config_path)
}
