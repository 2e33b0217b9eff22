use image::{GrayImage, Luma, Rgb, RgbImage};
use noise::HeightMap2D;
use palette::{Gradient, LinSrgb};

// Map a normalized [0, 1] height map to 8-bit gray
pub fn to_grayscale(map: &HeightMap2D) -> GrayImage {
    let size = map.len() as u32;
    GrayImage::from_fn(size, size, |x, y| {
        let v = map[y as usize][x as usize];
        Luma([(v.clamp(0.0, 1.0) * 255.0).round() as u8])
    })
}

// Heights below this are drawn as water
const SHORELINE: f32 = 0.4;

// Map a normalized [0, 1] height map onto a coastline palette.
// Stops are spaced by SHORELINE so the water/land split is easy to retune.
pub fn to_terrain(map: &HeightMap2D) -> RgbImage {
    let gradient = Gradient::with_domain(vec![
        (0.0, LinSrgb::new(0.02, 0.05, 0.35)),
        (SHORELINE - 0.02, LinSrgb::new(0.15, 0.45, 0.7)),
        (SHORELINE, LinSrgb::new(0.85, 0.78, 0.55)),
        (SHORELINE + 0.15, LinSrgb::new(0.25, 0.55, 0.15)),
        (0.85, LinSrgb::new(0.42, 0.36, 0.3)),
        (1.0, LinSrgb::new(0.95, 0.95, 0.97)),
    ]);

    let size = map.len() as u32;
    RgbImage::from_fn(size, size, |x, y| {
        let h = map[y as usize][x as usize].clamp(0.0, 1.0);
        let col: LinSrgb = gradient.get(h);
        let rgb = col.into_format::<u8>();
        Rgb([rgb.red, rgb.green, rgb.blue])
    })
}
