use tracing::{debug, info, span, warn, Level};

use super::selection::{first_positive_candidate, nearest_from_start, refine_candidate};
use super::visited::VisitedSet;
use crate::distance::matrix::DistanceMatrix;
use crate::domain::tour::{Leg, Tour};
use crate::domain::types::LocationCollection;
use crate::error::{RouteError, RouteResult};

/// Index every tour starts and ends at.
pub const START: usize = 0;

/// Builds a greedy nearest-neighbour tour over `locations`, starting and ending at index 0.
///
/// Every call owns its own visited set, so repeated calls on the same
/// collection give identical tours.
///
/// After the first step, each selection seeds with the lowest-index unvisited
/// location at a strictly positive distance, then rescans for anything strictly
/// closer. A zero-distance duplicate of the current location therefore wins the
/// rescan whenever the seed is positive. When no positive seed exists the
/// previous step's choice is carried into the rescan unchanged; if
/// that choice was itself a zero-length move, the step stalls on the current
/// location (see [`Tour::stalled_steps`]).
pub fn build_tour(locations: &LocationCollection) -> RouteResult<Tour> {
    let n = locations.len();
    if n == 0 {
        return Err(RouteError::invalid_argument(
            "a tour needs at least one location",
        ));
    }

    let span = span!(Level::DEBUG, "nearest_neighbour", locations = n);
    let _guard = span.enter();

    if n == 1 {
        debug!("Single location, returning trivial tour");
        return Ok(Tour::from_start());
    }

    let dm = DistanceMatrix::from_locations(locations);
    let tour = construct(&dm);

    info!(
        "Nearest neighbour tour over {} locations: total distance = {}",
        n,
        tour.total_distance()
    );
    if !tour.is_complete() {
        warn!(
            "Tour stalled on coincident locations in {} step(s); {} of {} locations visited",
            tour.stalled_steps(),
            n - tour.stalled_steps(),
            n
        );
    }

    Ok(tour)
}

/// Runs the construction over a matrix of at least two locations.
fn construct(dm: &DistanceMatrix) -> Tour {
    let n = dm.size();
    let mut visited = VisitedSet::new(n);
    let mut tour = Tour::from_start();

    visited.mark(START);

    let mut best = nearest_from_start(START, &visited, dm);
    visited.mark(best.index);
    tour.push_leg(Leg {
        from: START,
        to: best.index,
        length: best.distance,
    });
    debug!("Step 1: {} -> {} ({})", START, best.index, best.distance);

    let mut current = best.index;
    for step in 2..n {
        match first_positive_candidate(current, &visited, dm) {
            Some(seed) => best = seed,
            None => info!(
                "No remaining points to visit at a positive distance from {}",
                current
            ),
        }

        best = refine_candidate(current, best, &visited, dm);

        let leg = Leg {
            from: current,
            to: best.index,
            length: best.distance,
        };
        if visited.mark(best.index) {
            debug!("Step {}: {} -> {} ({})", step, current, best.index, best.distance);
            tour.push_leg(leg);
        } else {
            warn!(
                "Step {}: no unvisited location beats the carried-over choice, staying at {}",
                step, best.index
            );
            tour.push_stalled_leg(leg);
        }

        current = best.index;
    }

    tour.close(Leg {
        from: current,
        to: START,
        length: dm.between(START, current),
    });

    tour
}
