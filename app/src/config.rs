use std::path::{Path, PathBuf};

use noise::{
    CellularNoise, DistanceCombinator, DistanceFunction, NoiseGenerator, NoiseParams, Perlin,
    SimpleNoise,
};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Grayscale,
    Terrain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    #[default]
    Perlin,
    Simple,
    Cellular,
}

// [generator] table: shared parameters plus the cellular strategies
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,
    #[serde(flatten)]
    pub params: NoiseParams,
    pub distance: DistanceFunction,
    pub combinator: DistanceCombinator,
}

impl GeneratorConfig {
    pub fn build(&self) -> Result<Box<dyn NoiseGenerator>, AppError> {
        let generator: Box<dyn NoiseGenerator> = match self.kind {
            GeneratorKind::Perlin => Box::new(Perlin::from_params(&self.params)?),
            GeneratorKind::Simple => Box::new(SimpleNoise::from_params(&self.params)?),
            GeneratorKind::Cellular => Box::new(
                CellularNoise::builder()
                    .frequency(self.params.frequency)
                    .amplitude(self.params.amplitude)
                    .seed(self.params.seed)
                    .distance_function(self.distance)
                    .combinator(self.combinator)
                    .build()?,
            ),
        };
        Ok(generator)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub size: usize,     // image is size×size pixels
    pub scale: f32,      // input units per pixel
    pub output: PathBuf, // PNG destination
    pub palette: Palette,
    pub generator: GeneratorConfig,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            size: 256,
            scale: 1.0 / 32.0,
            output: PathBuf::from("noise.png"),
            palette: Palette::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl PreviewConfig {
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(text)?;
        if config.size == 0 {
            return Err(AppError::Config("size must be at least 1".into()));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::{GeneratorKind, Palette, PreviewConfig};
    use noise::{DistanceCombinator, DistanceFunction};

    #[test]
    fn empty_config_uses_defaults() {
        let c = PreviewConfig::parse("").unwrap();
        assert_eq!(c, PreviewConfig::default());
        assert!(c.generator.build().is_ok());
    }

    #[test]
    fn parses_cellular_table() {
        let c = PreviewConfig::parse(
            r#"
            size = 64
            output = "cells.png"
            palette = "terrain"

            [generator]
            kind = "cellular"
            frequency = 8.0
            seed = 42
            distance = "manhattan"
            combinator = "f2f1diff"
            "#,
        )
        .unwrap();
        assert_eq!(c.size, 64);
        assert_eq!(c.palette, Palette::Terrain);
        assert_eq!(c.generator.kind, GeneratorKind::Cellular);
        assert_eq!(c.generator.params.frequency, 8.0);
        assert_eq!(c.generator.params.seed, 42);
        assert_eq!(c.generator.distance, DistanceFunction::Manhattan);
        assert_eq!(c.generator.combinator, DistanceCombinator::F2F1Diff);
        assert!(c.generator.build().is_ok());
    }

    #[test]
    fn invalid_params_surface_as_errors() {
        let c = PreviewConfig::parse("[generator]\nkind = \"perlin\"\noctaves = 0\n").unwrap();
        assert!(c.generator.build().is_err());
        assert!(PreviewConfig::parse("size = 0").is_err());
    }
}
