use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Noise(#[from] noise::NoiseError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
