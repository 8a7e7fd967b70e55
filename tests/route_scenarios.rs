use tsp_route::distance::matrix::{truncated_distance, DistanceMatrix};
use tsp_route::evaluation::fitness::{find_distance, is_complete_tour};
use tsp_route::fixtures::data_generator::generate_seeded;
use tsp_route::{build_tour, Bounds, ConstructionStrategy, LocationCollection, RouteError};

fn collection(points: &[(i64, i64)]) -> LocationCollection {
    LocationCollection::from_points(points.iter().copied())
}

#[test]
fn duplicate_destination_scenario() {
    let locations = collection(&[(0, 0), (3, 4), (3, 4)]);
    let tour = build_tour(&locations).unwrap();

    let visited: Vec<(i64, i64)> = tour.locations(&locations).map(|l| (l.x, l.y)).collect();
    assert_eq!(visited, vec![(0, 0), (3, 4), (3, 4)]);
    assert_eq!(tour.stops(), &[0, 1, 2]);
    assert_eq!(tour.total_distance(), 10);
}

#[test]
fn generated_layout_respects_inset() {
    let bounds = Bounds::new(0, 0, 1000, 1000);
    let locations = generate_seeded(5, &bounds, 25, 2024).unwrap();

    assert_eq!(locations.len(), 5);
    assert!(locations.iter().all(|l| (25..=975).contains(&l.x) && (25..=975).contains(&l.y)));
}

#[test]
fn invalid_inputs_surface_invalid_argument() {
    let bounds = Bounds::new(0, 0, 1000, 1000);

    assert!(matches!(generate_seeded(0, &bounds, 25, 1), Err(RouteError::InvalidArgument(_))));
    assert!(matches!(
        build_tour(&LocationCollection::default()),
        Err(RouteError::InvalidArgument(_))
    ));
}

#[test]
fn single_location_tour_is_trivial() {
    let locations = collection(&[(300, 200)]);
    let tour = build_tour(&locations).unwrap();

    assert_eq!(tour.stops(), &[0]);
    assert_eq!(tour.total_distance(), 0);
}

#[test]
fn lower_index_wins_equal_positive_distances() {
    // (10, 0), (0, 10), (-10, 0) and (0, -10) are all 10 from the start.
    let locations = collection(&[(0, 0), (0, 10), (10, 0), (-10, 0), (0, -10)]);
    let tour = build_tour(&locations).unwrap();

    assert_eq!(tour.stops()[1], 1);
}

#[test]
fn coincident_twin_is_taken_before_positive_seed() {
    // From (50, 0) the twin at index 3 is taken before (60, 0) only because it is strictly closer.
    let locations = collection(&[(0, 0), (50, 0), (60, 0), (50, 0), (200, 0)]);
    let tour = build_tour(&locations).unwrap();

    assert_eq!(tour.stops(), &[0, 1, 3, 2, 4]);
    assert_eq!(tour.total_distance(), 50 + 0 + 10 + 140 + 200);
}

#[test]
fn truncation_drives_tie_breaks() {
    // Start to (7, 7) is 9.89 -> 9 and start to (9, 1) is 9.05 -> 9: a tie, so index 1 wins.
    let locations = collection(&[(0, 0), (7, 7), (9, 1)]);
    let tour = build_tour(&locations).unwrap();

    assert_eq!(truncated_distance(&locations[0], &locations[1]), 9);
    assert_eq!(truncated_distance(&locations[0], &locations[2]), 9);
    assert_eq!(tour.stops(), &[0, 1, 2]);
}

#[test]
fn default_map_layout_builds_a_full_tour() {
    let bounds = Bounds::new(187, 105, 1312, 945);
    let locations = generate_seeded(50, &bounds, 25, 64).unwrap();
    let tour = ConstructionStrategy::NearestNeighbor.build(&locations).unwrap();
    let dm = DistanceMatrix::from_locations(&locations);

    assert!(tour.is_complete());
    assert!(is_complete_tour(tour.stops(), 50));
    assert_eq!(find_distance(tour.stops(), &dm), tour.total_distance());
}
