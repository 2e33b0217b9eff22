// Ascending set of candidate distances gathered during one cellular query.
// Equal distances collapse into one entry, so "next larger" always means
// strictly larger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateDistances {
    sorted: Vec<f32>,
}

impl CandidateDistances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sorted: Vec::with_capacity(capacity),
        }
    }

    // Insert keeping ascending order; NaN and infinities are never stored.
    // Returns false when the value was already present or rejected.
    pub fn insert(&mut self, distance: f32) -> bool {
        if !distance.is_finite() {
            return false;
        }
        // -0.0 and 0.0 are the same distance
        let distance = distance + 0.0;
        match self.sorted.binary_search_by(|probe| probe.total_cmp(&distance)) {
            Ok(_) => false,
            Err(pos) => {
                self.sorted.insert(pos, distance);
                true
            }
        }
    }

    pub fn first(&self) -> Option<f32> {
        self.sorted.first().copied()
    }

    pub fn last(&self) -> Option<f32> {
        self.sorted.last().copied()
    }

    // Smallest stored value strictly greater than `value`
    pub fn higher(&self, value: f32) -> Option<f32> {
        let pos = self.sorted.partition_point(|d| *d <= value);
        self.sorted.get(pos).copied()
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.sorted
    }
}

impl FromIterator<f32> for CandidateDistances {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut set = Self::new();
        for d in iter {
            set.insert(d);
        }
        set
    }
}
