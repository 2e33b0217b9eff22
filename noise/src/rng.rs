use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Explicit, reseedable random source for callers outside the noise core
// (random directions, jittered sampling). Owned and passed by the caller;
// nothing in this crate looks one up implicitly, and cellular noise never
// touches it.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // Restart the stream from `seed`
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    // Uniform in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.rng.random()
    }

    // Uniform in [low, high)
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_f32()
    }

    // Unit vector at a uniformly drawn angle
    pub fn unit_vector2(&mut self) -> [f32; 2] {
        let theta = self.next_f32() * TAU;
        let (s, c) = theta.sin_cos();
        [c, s]
    }

    // Unit vector uniformly distributed over the sphere
    pub fn unit_vector3(&mut self) -> [f32; 3] {
        // z uniform in [-1, 1) plus a uniform azimuth gives an even spread
        let z = self.range_f32(-1.0, 1.0);
        let azimuth = self.next_f32() * TAU;
        let r = (1.0 - z * z).max(0.0).sqrt();
        let (s, c) = azimuth.sin_cos();
        [r * c, r * s, z]
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(0)
    }
}
