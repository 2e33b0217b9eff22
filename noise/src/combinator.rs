use serde::{Deserialize, Serialize};

use crate::candidates::CandidateDistances;

// Reduces the ranked candidate distances of one cellular query to a value.
// Every variant returns `None` only when no candidate was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceCombinator {
    // Nearest feature point: classic Voronoi cells.
    #[default]
    F1,
    // Second nearest, or the nearest when only one distance exists.
    F2,
    // Third nearest, stepping back toward the nearest as candidates run out.
    F3,
    // Farthest candidate.
    FN,
    // `F2 - F1`, with `2 * F1` standing in for a missing second distance.
    // Produces ridgelines along cell borders.
    F2F1Diff,
}

impl DistanceCombinator {
    pub fn apply(self, distances: &CandidateDistances) -> Option<f32> {
        let first = distances.first()?;

        let value = match self {
            DistanceCombinator::F1 => first,
            DistanceCombinator::F2 => distances.higher(first).unwrap_or(first),
            DistanceCombinator::F3 => {
                let mut value = first;
                for _ in 0..2 {
                    match distances.higher(value) {
                        Some(next) => value = next,
                        None => break,
                    }
                }
                value
            }
            DistanceCombinator::FN => distances.last()?,
            DistanceCombinator::F2F1Diff => {
                let second = distances.higher(first).unwrap_or(2.0 * first);
                second - first
            }
        };

        Some(value)
    }
}
