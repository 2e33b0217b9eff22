use crate::NoiseGenerator;

// 2D height map: row-major Vec<Vec<f32>> of size N×N
// access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// Clamp into the closed output interval shared by every generator.
// NaN (overflowed coordinates or distances) maps to the neutral 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

// Floor to a lattice index. Saturates for coordinates outside the i32 range.
#[inline]
pub(crate) fn lattice(v: f32) -> i32 {
    v.floor() as i32
}

// Sample a generator over a size×size grid.
// Grid point (x, y) is fed to the generator as (x * scale, y * scale).
pub fn sample_grid(generator: &dyn NoiseGenerator, size: usize, scale: f32) -> HeightMap2D {
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| generator.get2(x as f32 * scale, y as f32 * scale))
                .collect()
        })
        .collect()
}

// flatten a 2D height map (row-major) into a single Vec<f32>
// For converting to an image buffer (e.g. grayscale u8)
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Stretch a height map onto [0.0, 1.0] in place.
// A flat map (max == min) becomes a uniform 0.5.
pub fn normalize2(map: &mut HeightMap2D) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;

    for row in map.iter() {
        for &val in row.iter() {
            min = min.min(val);
            max = max.max(val);
        }
    }

    let range = max - min;
    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = if range <= f32::EPSILON {
                0.5
            } else {
                (*val - min) / range
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HeightMap2D, clamp_unit, flatten2, lattice, normalize2, sample_grid};
    use crate::{NoiseGenerator, SimpleNoise};

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(clamp_unit(3.0), 1.0);
        assert_eq!(clamp_unit(-3.0), -1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
        assert_eq!(clamp_unit(f32::INFINITY), 1.0);
        assert_eq!(clamp_unit(f32::NEG_INFINITY), -1.0);
    }

    #[test]
    fn lattice_floors_negatives() {
        assert_eq!(lattice(-0.5), -1);
        assert_eq!(lattice(-1.0), -1);
        assert_eq!(lattice(2.999), 2);
    }

    #[test]
    fn flatten_is_row_major() {
        let map: HeightMap2D = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten2(&map), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn normalize_stretches_to_unit() {
        let mut map: HeightMap2D = vec![vec![-2.0, 0.0], vec![1.0, 2.0]];
        normalize2(&mut map);
        assert_eq!(map[0][0], 0.0);
        assert_eq!(map[1][1], 1.0);
        assert_eq!(map[0][1], 0.5);
    }

    #[test]
    fn normalize_flat_map() {
        let mut map: HeightMap2D = vec![vec![0.3; 4]; 4];
        normalize2(&mut map);
        assert!(map.iter().flatten().all(|&v| v == 0.5));
    }

    #[test]
    fn sample_grid_matches_direct_queries() {
        let n = SimpleNoise::new(4.0, 1.0, 9).unwrap();
        let grid = sample_grid(&n, 8, 0.125);
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[3][5], n.get2(5.0 * 0.125, 3.0 * 0.125));
    }
}
