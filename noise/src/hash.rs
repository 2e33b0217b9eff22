// Integer lattice hash shared by every generator in this crate.
// All arithmetic wraps: overflow is part of the bit pattern, not an error.

// Divisor that maps a 31-bit hash onto [0, 2) before it is flipped into [-1, 1].
const HALF_RANGE: f32 = 1_073_741_824.0;

// Hash a 2D lattice point into [0, 0x7fffffff]
#[inline]
pub fn hash(x: i32, y: i32) -> i32 {
    // Linear mix of both coordinates
    let n = x.wrapping_add(y.wrapping_mul(57));
    // XOR-shift to push low bits upward
    let n = (n << 13) ^ n;
    // Odd-constant polynomial, then drop the sign bit
    let nn = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(60493).wrapping_add(19_990_303))
        .wrapping_add(1_376_312_589);
    nn & 0x7fff_ffff
}

// Hash a 3D lattice point by folding z into the 2D hash twice
#[inline]
pub fn hash3(x: i32, y: i32, z: i32) -> i32 {
    hash(hash(x, y).wrapping_add(z), z)
}

// Lattice value in [-1, 1]
#[inline]
pub fn noise(x: i32, y: i32) -> f32 {
    1.0 - hash(x, y) as f32 / HALF_RANGE
}

#[cfg(test)]
mod tests {
    use super::{hash, hash3, noise};

    #[test]
    fn hash_origin_and_neighbor_differ() {
        let a = hash(0, 0);
        let b = hash(1, 0);
        assert!((0..=0x7fff_ffff).contains(&a));
        assert!((0..=0x7fff_ffff).contains(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn hash_known_values() {
        // n = 0 collapses the polynomial to its constant term
        assert_eq!(hash(0, 0), 1_376_312_589);
        assert_eq!(noise(0, 0), 1.0 - 1_376_312_589.0 / 1_073_741_824.0);
    }

    #[test]
    fn hash_is_pure() {
        for x in -50..50 {
            for y in -50..50 {
                assert_eq!(hash(x, y), hash(x, y));
            }
        }
    }

    #[test]
    fn hash_wraps_at_extremes() {
        // Must not panic in debug builds
        for &(x, y) in &[(i32::MAX, i32::MAX), (i32::MIN, i32::MIN), (i32::MAX, i32::MIN)] {
            let h = hash(x, y);
            assert!(h >= 0);
            let h3 = hash3(x, y, i32::MAX);
            assert!(h3 >= 0);
        }
    }

    #[test]
    fn noise_range() {
        for x in -200..200 {
            for y in -20..20 {
                let v = noise(x, y);
                assert!((-1.0..=1.0).contains(&v), "noise({x}, {y}) = {v}");
            }
        }
    }

    #[test]
    fn hash3_depends_on_z() {
        let differs = (0..16).any(|z| hash3(3, 4, z) != hash3(3, 4, z + 1));
        assert!(differs);
    }
}
