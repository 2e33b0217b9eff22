// noise holds the lattice hash, value/fractal noise and the cellular engine
pub mod candidates;
pub mod cellular;
pub mod combinator;
pub mod distance;
pub mod error;
pub mod hash;
pub mod params;
pub mod perlin;
pub mod rng;
pub mod simple;
pub mod utils;
pub mod value;

pub use candidates::CandidateDistances;
pub use cellular::{CellularNoise, CellularNoiseBuilder};
pub use combinator::DistanceCombinator;
pub use distance::DistanceFunction;
pub use error::NoiseError;
pub use params::NoiseParams;
pub use perlin::Perlin;
pub use rng::SeededRandom;
pub use simple::SimpleNoise;
pub use utils::{HeightMap2D, flatten2, normalize2, sample_grid};

// Scalar field sampled at continuous coordinates.
// Every implementation returns values in [-1, 1] and never mutates itself
// while sampling, so a shared reference can be queried from many threads.
pub trait NoiseGenerator {
    // Sample 1D noise at x.
    fn get1(&self, x: f32) -> f32;

    // Sample 2D noise at (x, y).
    fn get2(&self, x: f32, y: f32) -> f32;
}
