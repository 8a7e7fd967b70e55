use tracing::trace;

use super::visited::VisitedSet;
use crate::distance::matrix::DistanceMatrix;

/// Location currently favoured as the next stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub distance: u64,
}

/// First step out of the start: the closest unvisited location among indices >= 1.
///
/// Seeds with index 1 and only replaces on a strictly smaller distance, so the
/// lowest index wins ties. Zero distances are allowed here.
pub fn nearest_from_start(start: usize, visited: &VisitedSet, dm: &DistanceMatrix) -> Candidate {
    let seed = Candidate {
        index: 1,
        distance: dm.between(start, 1),
    };

    (1..dm.size())
        .filter(|&j| !visited.contains(j))
        .fold(seed, |best, j| {
            let distance = dm.between(start, j);
            if distance < best.distance {
                Candidate { index: j, distance }
            } else {
                best
            }
        })
}

/// Lowest-index unvisited location at a strictly positive distance from `from`.
pub fn first_positive_candidate(
    from: usize,
    visited: &VisitedSet,
    dm: &DistanceMatrix,
) -> Option<Candidate> {
    (0..dm.size())
        .filter(|&i| !visited.contains(i))
        .map(|i| Candidate {
            index: i,
            distance: dm.between(from, i),
        })
        .find(|candidate| candidate.distance > 0)
}

/// Rescans indices >= 1 and keeps the first unvisited location strictly closer than `seed`.
///
/// A zero-distance duplicate only wins when `seed` is positive. If `seed` is a
/// carried-over zero, nothing can beat it and it is returned unchanged.
pub fn refine_candidate(
    from: usize,
    seed: Candidate,
    visited: &VisitedSet,
    dm: &DistanceMatrix,
) -> Candidate {
    (1..dm.size())
        .filter(|&j| !visited.contains(j))
        .fold(seed, |best, j| {
            let distance = dm.between(from, j);
            if distance < best.distance {
                trace!(from, to = j, distance, "Closer candidate");
                Candidate { index: j, distance }
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::LocationCollection;

    fn matrix(points: &[(i64, i64)]) -> DistanceMatrix {
        DistanceMatrix::from_locations(&LocationCollection::from_points(points.iter().copied()))
    }

    #[test]
    fn start_step_breaks_ties_by_lowest_index() {
        let dm = matrix(&[(0, 0), (10, 0), (0, 5), (5, 0), (0, -5)]);
        let mut visited = VisitedSet::new(5);
        visited.mark(0);

        assert_eq!(
            nearest_from_start(0, &visited, &dm),
            Candidate { index: 2, distance: 5 }
        );
    }

    #[test]
    fn start_step_accepts_a_coincident_location() {
        let dm = matrix(&[(0, 0), (4, 3), (0, 0)]);
        let mut visited = VisitedSet::new(3);
        visited.mark(0);

        assert_eq!(
            nearest_from_start(0, &visited, &dm),
            Candidate { index: 2, distance: 0 }
        );
    }

    #[test]
    fn positive_seed_skips_visited_and_coincident_locations() {
        let dm = matrix(&[(0, 0), (3, 4), (3, 4), (9, 4)]);
        let mut visited = VisitedSet::new(4);
        visited.mark(0);
        visited.mark(1);

        assert_eq!(
            first_positive_candidate(1, &visited, &dm),
            Some(Candidate { index: 3, distance: 6 })
        );

        visited.mark(3);
        assert_eq!(first_positive_candidate(1, &visited, &dm), None);
    }

    #[test]
    fn refinement_prefers_duplicate_over_positive_seed() {
        let dm = matrix(&[(0, 0), (3, 4), (3, 4), (9, 4)]);
        let mut visited = VisitedSet::new(4);
        visited.mark(0);
        visited.mark(1);
        let seed = Candidate { index: 3, distance: 6 };

        assert_eq!(
            refine_candidate(1, seed, &visited, &dm),
            Candidate { index: 2, distance: 0 }
        );
    }

    #[test]
    fn refinement_cannot_beat_a_zero_seed() {
        let dm = matrix(&[(0, 0), (3, 4), (3, 4), (3, 4)]);
        let mut visited = VisitedSet::new(4);
        visited.mark(0);
        visited.mark(1);
        visited.mark(2);
        let carried = Candidate { index: 2, distance: 0 };

        assert_eq!(refine_candidate(2, carried, &visited, &dm), carried);
    }
}
