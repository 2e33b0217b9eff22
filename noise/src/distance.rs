use serde::{Deserialize, Serialize};

// Metric used by `CellularNoise` to rank feature points.
// The 2D and 3D forms are non-negative. `Euclidean` returns the *squared*
// distance: ranking only needs a monotonic measure, so the root is skipped
// uniformly for every dimension.
// The 1D form is the signed offset `b - a` for every variant and is only
// meaningful for ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceFunction {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl DistanceFunction {
    #[inline]
    pub fn apply1(self, a: f32, b: f32) -> f32 {
        b - a
    }

    #[inline]
    pub fn apply2(self, a: [f32; 2], b: [f32; 2]) -> f32 {
        self.reduce(a.iter().zip(b.iter()).map(|(p, q)| p - q))
    }

    #[inline]
    pub fn apply3(self, a: [f32; 3], b: [f32; 3]) -> f32 {
        self.reduce(a.iter().zip(b.iter()).map(|(p, q)| p - q))
    }

    // Fold per-axis differences into a single measure
    #[inline]
    fn reduce(self, diffs: impl Iterator<Item = f32>) -> f32 {
        match self {
            DistanceFunction::Euclidean => diffs.map(|d| d * d).sum(),
            DistanceFunction::Manhattan => diffs.map(f32::abs).sum(),
            DistanceFunction::Chebyshev => diffs.map(f32::abs).fold(0.0, f32::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceFunction::{self, *};

    const ALL: [DistanceFunction; 3] = [Euclidean, Manhattan, Chebyshev];

    #[test]
    fn euclidean_is_squared() {
        assert_eq!(Euclidean.apply2([0.0, 0.0], [3.0, 4.0]), 25.0);
        assert_eq!(Euclidean.apply3([1.0, 1.0, 1.0], [2.0, 3.0, 4.0]), 14.0);
    }

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(Manhattan.apply2([0.0, 0.0], [3.0, -4.0]), 7.0);
        assert_eq!(Manhattan.apply3([1.0, 1.0, 1.0], [0.0, 3.0, -1.0]), 5.0);
    }

    #[test]
    fn chebyshev_takes_max_axis() {
        assert_eq!(Chebyshev.apply2([0.0, 0.0], [3.0, -4.0]), 4.0);
        assert_eq!(Chebyshev.apply3([1.0, 1.0, 1.0], [0.5, 3.0, -1.5]), 2.5);
    }

    #[test]
    fn one_dimensional_is_signed() {
        for f in ALL {
            assert_eq!(f.apply1(2.0, 0.5), -1.5);
            assert_eq!(f.apply1(0.5, 2.0), 1.5);
        }
    }

    #[test]
    fn geometric_forms_non_negative_and_symmetric() {
        let pts = [[0.1, -3.2], [7.5, 0.0], [-1.25, -1.25]];
        for f in ALL {
            for a in pts {
                for b in pts {
                    let d = f.apply2(a, b);
                    assert!(d >= 0.0);
                    assert_eq!(d, f.apply2(b, a));
                }
                assert_eq!(f.apply2(a, a), 0.0);
            }
        }
    }

    #[test]
    fn parses_lowercase_names() {
        #[derive(serde::Deserialize)]
        struct Wrap {
            d: DistanceFunction,
        }
        let w: Wrap = toml::from_str("d = \"chebyshev\"").unwrap();
        assert_eq!(w.d, Chebyshev);
    }
}
