use tracing::debug;

use crate::NoiseGenerator;
use crate::error::NoiseError;
use crate::params::{NoiseParams, fold_seed};
use crate::utils::clamp_unit;
use crate::value::{smooth_noise1, smooth_noise2};

// Fractal value noise: a stack of cosine-smoothed octaves
#[derive(Debug, Clone, PartialEq)]
pub struct Perlin {
    frequency: f32,   // base frequency of the first octave
    amplitude: f32,   // gain applied to the summed octaves
    persistence: f32, // amplitude scaling per octave
    octaves: u32,     // number of octaves to sum
    offset: f32,      // folded seed, added to every lattice coordinate
}

impl Perlin {
    pub fn new(
        frequency: f32,
        amplitude: f32,
        persistence: f32,
        octaves: u32,
        seed: i64,
    ) -> Result<Self, NoiseError> {
        Self::from_params(&NoiseParams {
            frequency,
            amplitude,
            persistence,
            octaves,
            seed,
        })
    }

    pub fn from_params(params: &NoiseParams) -> Result<Self, NoiseError> {
        params.validate()?;
        let offset = fold_seed(params.seed);
        debug!(
            frequency = params.frequency,
            amplitude = params.amplitude,
            persistence = params.persistence,
            octaves = params.octaves,
            seed = params.seed,
            offset,
            "built perlin generator"
        );

        Ok(Self {
            frequency: params.frequency,
            amplitude: params.amplitude,
            persistence: params.persistence,
            octaves: params.octaves,
            offset: offset as f32,
        })
    }

    // Sum `octaves` layers, doubling frequency and scaling weight by persistence
    #[inline]
    fn fractal(&self, mut layer: impl FnMut(f32) -> f32) -> f32 {
        let mut total = 0.0;
        let mut freq = self.frequency;
        let mut amp = 1.0;

        for _ in 0..self.octaves {
            total += amp * layer(freq);
            freq *= 2.0;
            amp *= self.persistence;
        }

        clamp_unit(self.amplitude * total)
    }
}

impl NoiseGenerator for Perlin {
    fn get1(&self, x: f32) -> f32 {
        self.fractal(|freq| smooth_noise1(x * freq + self.offset))
    }

    fn get2(&self, x: f32, y: f32) -> f32 {
        self.fractal(|freq| smooth_noise2(x * freq + self.offset, y * freq + self.offset))
    }
}
