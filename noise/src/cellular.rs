// Worley (cellular / Voronoi) noise.
// A cell's feature points depend only on its coordinates and the seed,
// never on which neighbouring query reached it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::NoiseGenerator;
use crate::candidates::CandidateDistances;
use crate::combinator::DistanceCombinator;
use crate::distance::DistanceFunction;
use crate::error::NoiseError;
use crate::hash::{hash, hash3};
use crate::params::{check_finite, check_frequency};
use crate::utils::{clamp_unit, lattice};

// Upper bound of feature points per cell along a line.
pub const MAX_POINTS_1D: u32 = 3;
// Upper bound of feature points per cell in 2D and 3D.
pub const MAX_POINTS: u32 = 7;

const NEIGHBORS: [i32; 3] = [-1, 0, 1];

// Immutable cellular noise generator. Build it with `CellularNoise::builder`
// or `CellularNoise::new` for the Euclidean/F1 defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CellularNoise {
    frequency: f32,
    amplitude: f32,
    cell_seed: i32,
    distance: DistanceFunction,
    combinator: DistanceCombinator,
}

// Configures a `CellularNoise`; validation happens in `build`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellularNoiseBuilder {
    frequency: f32,
    amplitude: f32,
    seed: i64,
    distance: DistanceFunction,
    combinator: DistanceCombinator,
}

impl Default for CellularNoiseBuilder {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 1.0,
            seed: 0,
            distance: DistanceFunction::default(),
            combinator: DistanceCombinator::default(),
        }
    }
}

impl CellularNoiseBuilder {
    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    pub fn distance_function(mut self, distance: DistanceFunction) -> Self {
        self.distance = distance;
        self
    }

    pub fn combinator(mut self, combinator: DistanceCombinator) -> Self {
        self.combinator = combinator;
        self
    }

    pub fn build(self) -> Result<CellularNoise, NoiseError> {
        check_frequency(self.frequency)?;
        check_finite("amplitude", self.amplitude)?;

        // Low 16 bits stay clear so nearby seeds land far apart on the lattice
        let cell_seed = (self.seed << 16) as i32;
        debug!(
            frequency = self.frequency,
            amplitude = self.amplitude,
            seed = self.seed,
            cell_seed,
            distance = ?self.distance,
            combinator = ?self.combinator,
            "built cellular noise generator"
        );

        Ok(CellularNoise {
            frequency: self.frequency,
            amplitude: self.amplitude,
            cell_seed,
            distance: self.distance,
            combinator: self.combinator,
        })
    }
}

impl CellularNoise {
    pub fn builder() -> CellularNoiseBuilder {
        CellularNoiseBuilder::default()
    }

    pub fn new(frequency: f32, amplitude: f32, seed: i64) -> Result<Self, NoiseError> {
        Self::builder()
            .frequency(frequency)
            .amplitude(amplitude)
            .seed(seed)
            .build()
    }

    pub fn distance_function(&self) -> DistanceFunction {
        self.distance
    }

    pub fn combinator(&self) -> DistanceCombinator {
        self.combinator
    }

    // A fresh generator keyed only by the cell hash, never by shared state
    #[inline]
    fn cell_rng(cell_hash: i32) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(cell_hash as u64)
    }

    #[inline]
    fn offset(&self, c: i32) -> i32 {
        c.wrapping_add(self.cell_seed)
    }

    fn visit_points1(&self, cell: i32, mut visit: impl FnMut(f32)) {
        let mut rng = Self::cell_rng(hash(self.offset(cell), 0));
        let count = rng.random_range(1..=MAX_POINTS_1D);
        let base = cell as f32;
        for _ in 0..count {
            visit(base + rng.random::<f32>());
        }
    }

    fn visit_points2(&self, cell: [i32; 2], mut visit: impl FnMut([f32; 2])) {
        let [cx, cy] = cell;
        let mut rng = Self::cell_rng(hash(self.offset(cx), self.offset(cy)));
        let count = rng.random_range(1..=MAX_POINTS);
        let base = [cx as f32, cy as f32];
        for _ in 0..count {
            let px = base[0] + rng.random::<f32>();
            let py = base[1] + rng.random::<f32>();
            visit([px, py]);
        }
    }

    fn visit_points3(&self, cell: [i32; 3], mut visit: impl FnMut([f32; 3])) {
        let [cx, cy, cz] = cell;
        let mut rng = Self::cell_rng(hash3(self.offset(cx), self.offset(cy), self.offset(cz)));
        let count = rng.random_range(1..=MAX_POINTS);
        let base = [cx as f32, cy as f32, cz as f32];
        for _ in 0..count {
            let px = base[0] + rng.random::<f32>();
            let py = base[1] + rng.random::<f32>();
            let pz = base[2] + rng.random::<f32>();
            visit([px, py, pz]);
        }
    }

    // Feature points owned by a 1D cell, in lattice (frequency-scaled) space.
    pub fn feature_points1(&self, cell: i32) -> Vec<f32> {
        let mut points = Vec::with_capacity(MAX_POINTS_1D as usize);
        self.visit_points1(cell, |p| points.push(p));
        points
    }

    // Feature points owned by a 2D cell, in lattice (frequency-scaled) space.
    pub fn feature_points2(&self, cell: [i32; 2]) -> Vec<[f32; 2]> {
        let mut points = Vec::with_capacity(MAX_POINTS as usize);
        self.visit_points2(cell, |p| points.push(p));
        points
    }

    // Feature points owned by a 3D cell, in lattice (frequency-scaled) space.
    pub fn feature_points3(&self, cell: [i32; 3]) -> Vec<[f32; 3]> {
        let mut points = Vec::with_capacity(MAX_POINTS as usize);
        self.visit_points3(cell, |p| points.push(p));
        points
    }

    // Ranked distances from `x` (input space) to the feature points of its
    // cell and both neighbours.
    pub fn candidates1(&self, x: f32) -> CandidateDistances {
        let p = x * self.frequency;
        let cell = lattice(p);
        let mut distances = CandidateDistances::with_capacity(3 * MAX_POINTS_1D as usize);

        for dx in NEIGHBORS {
            self.visit_points1(cell.wrapping_add(dx), |fp| {
                distances.insert(self.distance.apply1(p, fp));
            });
        }
        distances
    }

    // Ranked distances from `(x, y)` to the feature points of the 3×3 block
    // around its cell.
    pub fn candidates2(&self, x: f32, y: f32) -> CandidateDistances {
        let p = [x * self.frequency, y * self.frequency];
        let [cx, cy] = [lattice(p[0]), lattice(p[1])];
        let mut distances = CandidateDistances::with_capacity(9 * MAX_POINTS as usize);

        for dy in NEIGHBORS {
            for dx in NEIGHBORS {
                let cell = [cx.wrapping_add(dx), cy.wrapping_add(dy)];
                self.visit_points2(cell, |fp| {
                    distances.insert(self.distance.apply2(p, fp));
                });
            }
        }
        distances
    }

    // Ranked distances from `(x, y, z)` to the feature points of the 27-cell
    // block around its cell.
    pub fn candidates3(&self, x: f32, y: f32, z: f32) -> CandidateDistances {
        let p = [x * self.frequency, y * self.frequency, z * self.frequency];
        let [cx, cy, cz] = [lattice(p[0]), lattice(p[1]), lattice(p[2])];
        let mut distances = CandidateDistances::with_capacity(27 * MAX_POINTS as usize);

        for dz in NEIGHBORS {
            for dy in NEIGHBORS {
                for dx in NEIGHBORS {
                    let cell = [cx.wrapping_add(dx), cy.wrapping_add(dy), cz.wrapping_add(dz)];
                    self.visit_points3(cell, |fp| {
                        distances.insert(self.distance.apply3(p, fp));
                    });
                }
            }
        }
        distances
    }

    // Unscaled combinator output at `x`; `None` when no candidate was found.
    pub fn evaluate1(&self, x: f32) -> Option<f32> {
        self.combinator.apply(&self.candidates1(x))
    }

    // Unscaled combinator output at `(x, y)`.
    pub fn evaluate2(&self, x: f32, y: f32) -> Option<f32> {
        self.combinator.apply(&self.candidates2(x, y))
    }

    // Unscaled combinator output at `(x, y, z)`.
    pub fn evaluate3(&self, x: f32, y: f32, z: f32) -> Option<f32> {
        self.combinator.apply(&self.candidates3(x, y, z))
    }

    // Recenter the combinator value around zero, apply gain, clamp.
    // An empty neighbourhood is a defined outcome and maps to 0.
    fn finish(&self, value: Option<f32>) -> f32 {
        match value {
            Some(v) => clamp_unit(self.amplitude * (v - 0.5) * 2.0),
            None => {
                trace!("cellular query found no feature points");
                0.0
            }
        }
    }

    // 3D cellular noise in `[-1, 1]`.
    pub fn get3(&self, x: f32, y: f32, z: f32) -> f32 {
        self.finish(self.evaluate3(x, y, z))
    }
}

impl NoiseGenerator for CellularNoise {
    fn get1(&self, x: f32) -> f32 {
        self.finish(self.evaluate1(x))
    }

    fn get2(&self, x: f32, y: f32) -> f32 {
        self.finish(self.evaluate2(x, y))
    }
}
