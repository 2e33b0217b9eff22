use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

// Shared knobs for the lattice generators.
// `persistence` and `octaves` only matter to `Perlin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    pub frequency: f32,   // lattice cells per unit of input
    pub amplitude: f32,   // output gain applied before clamping
    pub persistence: f32, // amplitude decay per octave
    pub octaves: u32,     // number of fractal layers
    pub seed: i64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 1.0,
            persistence: 0.5,
            octaves: 1,
            seed: 0,
        }
    }
}

impl NoiseParams {
    pub fn validate(&self) -> Result<(), NoiseError> {
        check_frequency(self.frequency)?;
        check_finite("amplitude", self.amplitude)?;
        check_finite("persistence", self.persistence)?;
        if self.octaves == 0 {
            return Err(NoiseError::invalid("octaves", "at least one octave is required"));
        }
        Ok(())
    }
}

pub(crate) fn check_frequency(frequency: f32) -> Result<(), NoiseError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(NoiseError::invalid(
            "frequency",
            format!("must be finite and greater than zero, got {frequency}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_finite(name: &'static str, value: f32) -> Result<(), NoiseError> {
    if !value.is_finite() {
        return Err(NoiseError::invalid(name, format!("must be finite, got {value}")));
    }
    Ok(())
}

// Fold a 64-bit seed into the small lattice offset used by Perlin and SimpleNoise.
// Squaring spreads the low seeds apart; content generated against a seed
// depends on this exact formula.
#[inline]
pub fn fold_seed(seed: i64) -> i32 {
    let low = (seed & 0xFF) as i32;
    2 + low * low
}
