use std::f32::consts::PI;

use crate::hash::noise;

// Cosine interpolation: eases t with (1 - cos(pi*t)) / 2, then blends linearly.
// Zero slope at both ends keeps stacked octaves free of visible creases.
#[inline]
pub fn cos_interpolate(a: f32, b: f32, t: f32) -> f32 {
    let f = (1.0 - (t * PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}

// Split a coordinate into its lattice cell and the offset inside it.
// Infinite coordinates sit on their (saturated) lattice point.
#[inline]
fn split(v: f32) -> (i32, f32) {
    let floor = v.floor();
    let frac = v - floor;
    (floor as i32, if frac.is_finite() { frac } else { 0.0 })
}

// Smoothed 1D value noise, sampled along the y = 0 row of the lattice
pub fn smooth_noise1(x: f32) -> f32 {
    let (xi, xf) = split(x);

    let left = noise(xi, 0);
    let right = noise(xi.wrapping_add(1), 0);

    cos_interpolate(left, right, xf)
}

// Smoothed 2D value noise: blend along x for both rows, then along y
pub fn smooth_noise2(x: f32, y: f32) -> f32 {
    let (xi, xf) = split(x);
    let (yi, yf) = split(y);
    let xi1 = xi.wrapping_add(1);
    let yi1 = yi.wrapping_add(1);

    // Corner samples of the unit square
    let n00 = noise(xi, yi);
    let n10 = noise(xi1, yi);
    let n01 = noise(xi, yi1);
    let n11 = noise(xi1, yi1);

    let bottom = cos_interpolate(n00, n10, xf);
    let top = cos_interpolate(n01, n11, xf);

    cos_interpolate(bottom, top, yf)
}

#[cfg(test)]
mod tests {
    use super::{cos_interpolate, smooth_noise1, smooth_noise2};
    use crate::hash::noise;

    #[test]
    fn cos_interpolate_endpoints() {
        assert_eq!(cos_interpolate(-0.25, 0.75, 0.0), -0.25);
        assert!((cos_interpolate(-0.25, 0.75, 1.0) - 0.75).abs() < 1e-6);
        assert!((cos_interpolate(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smooth_noise_hits_lattice_values() {
        for x in -5..5 {
            assert_eq!(smooth_noise1(x as f32), noise(x, 0));
            for y in -5..5 {
                assert_eq!(smooth_noise2(x as f32, y as f32), noise(x, y));
            }
        }
    }

    #[test]
    fn smooth_noise_is_continuous() {
        // Small steps produce small changes, including across negative cells
        let mut x = -3.0f32;
        while x < 3.0 {
            let a = smooth_noise2(x, 0.37);
            let b = smooth_noise2(x + 0.001, 0.37);
            assert!((a - b).abs() < 0.02, "jump at x = {x}");
            x += 0.01;
        }
    }

    #[test]
    fn smooth_noise_survives_infinite_coordinates() {
        for v in [f32::INFINITY, f32::NEG_INFINITY] {
            assert!(smooth_noise1(v).is_finite());
            assert!(smooth_noise2(v, 0.5).is_finite());
            assert!(smooth_noise2(0.5, v).is_finite());
        }
    }

    #[test]
    fn smooth_noise_range() {
        for i in 0..400 {
            let x = i as f32 * 0.173 - 30.0;
            let y = i as f32 * 0.311 - 60.0;
            let v = smooth_noise2(x, y);
            assert!(v.abs() <= 1.0 + 1e-6);
            assert!(smooth_noise1(x).abs() <= 1.0 + 1e-6);
        }
    }
}
