use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::domain::types::{Bounds, LocationCollection};
use crate::error::{RouteError, RouteResult};

/// Generates `n` locations drawn uniformly from `bounds` shrunk by `min_separation` on every side.
///
/// Coordinates are independent draws; two locations may coincide. Fails when
/// `n < 1` or when the inset leaves no room on either axis.
pub fn generate<R: Rng + ?Sized>(
    n: usize,
    bounds: &Bounds,
    min_separation: i64,
    rng: &mut R,
) -> RouteResult<LocationCollection> {
    if n < 1 {
        return Err(RouteError::invalid_argument(
            "at least one location must be generated",
        ));
    }

    let area = bounds.inset(min_separation)?;
    debug!(
        "Drawing {} locations from x in [{}, {}), y in [{}, {})",
        n, area.min_x, area.max_x, area.min_y, area.max_y
    );

    let points: Vec<(i64, i64)> = (0..n)
        .map(|_| {
            let x = rng.gen_range(area.min_x..area.max_x);
            let y = rng.gen_range(area.min_y..area.max_y);
            (x, y)
        })
        .collect();

    let locations = LocationCollection::from_points(points);
    info!("Generated {} locations", locations.len());

    Ok(locations)
}

/// Reproducible generation from a fixed seed.
pub fn generate_seeded(
    n: usize,
    bounds: &Bounds,
    min_separation: i64,
    seed: u64,
) -> RouteResult<LocationCollection> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(n, bounds, min_separation, &mut rng)
}
