use itertools::Itertools;

use crate::distance::matrix::DistanceMatrix;

/// Length of a closed route: consecutive stops plus the return from the last stop to the first.
pub fn find_distance(stops: &[usize], dm: &DistanceMatrix) -> u64 {
    if stops.is_empty() {
        return 0;
    }

    stops
        .iter()
        .circular_tuple_windows()
        .map(|(&from, &to)| dist_between(from, to, dm))
        .fold(0, u64::saturating_add)
}

pub fn dist_between(from_loc: usize, to_loc: usize, dm: &DistanceMatrix) -> u64 {
    dm.between(from_loc, to_loc)
}

/// True when `stops` starts at 0 and visits each of `location_count` indices exactly once.
pub fn is_complete_tour(stops: &[usize], location_count: usize) -> bool {
    stops.len() == location_count
        && stops.first() == Some(&0)
        && stops.iter().all(|&i| i < location_count)
        && stops.iter().all_unique()
}
