use tracing::debug;

use crate::domain::types::{Location, LocationCollection};

/// Euclidean distance with the square root truncated toward zero.
///
/// Differences are taken in `f64`, so no pair of coordinates can overflow;
/// lengths beyond `u64::MAX` saturate.
pub fn truncated_distance(from: &Location, to: &Location) -> u64 {
    let dx = to.x as f64 - from.x as f64;
    let dy = to.y as f64 - from.y as f64;
    (dx * dx + dy * dy).sqrt() as u64
}

/// Pairwise truncated distances for one collection, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<u64>,
}

impl DistanceMatrix {
    pub fn from_locations(locations: &LocationCollection) -> Self {
        let size = locations.len();
        let mut values = vec![0; size * size];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate().skip(i + 1) {
                let d = truncated_distance(from, to);
                values[i * size + j] = d;
                values[j * size + i] = d;
            }
        }

        debug!("Created {size}x{size} distance matrix");
        DistanceMatrix { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn between(&self, from: usize, to: usize) -> u64 {
        self.values[from * self.size + to]
    }
}
