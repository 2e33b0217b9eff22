use tracing::debug;

use crate::NoiseGenerator;
use crate::error::NoiseError;
use crate::hash::noise;
use crate::params::{NoiseParams, check_finite, check_frequency, fold_seed};
use crate::utils::{clamp_unit, lattice};

// Unsmoothed single-octave noise: one hash sample per frequency-scaled cell.
// Output is a step function, constant inside each cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleNoise {
    frequency: f32,
    amplitude: f32,
    offset: i32,
}

impl SimpleNoise {
    pub fn new(frequency: f32, amplitude: f32, seed: i64) -> Result<Self, NoiseError> {
        check_frequency(frequency)?;
        check_finite("amplitude", amplitude)?;
        let offset = fold_seed(seed);
        debug!(frequency, amplitude, seed, offset, "built simple noise generator");

        Ok(Self {
            frequency,
            amplitude,
            offset,
        })
    }

    // Octaves and persistence are ignored
    pub fn from_params(params: &NoiseParams) -> Result<Self, NoiseError> {
        Self::new(params.frequency, params.amplitude, params.seed)
    }

    #[inline]
    fn cell(&self, v: f32) -> i32 {
        lattice(v * self.frequency).wrapping_add(self.offset)
    }
}

impl NoiseGenerator for SimpleNoise {
    fn get1(&self, x: f32) -> f32 {
        clamp_unit(self.amplitude * noise(self.cell(x), 0))
    }

    fn get2(&self, x: f32, y: f32) -> f32 {
        clamp_unit(self.amplitude * noise(self.cell(x), self.cell(y)))
    }
}
