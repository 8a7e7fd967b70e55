use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::Writer;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::tour::Tour;
use crate::domain::types::{Location, LocationCollection};
use crate::solver::ConstructionStrategy;

/// Serialisable view of a built tour with its locations resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourReport {
    pub method: String,
    pub location_count: usize,
    pub total_distance: u64,
    pub complete: bool,
    pub stalled_steps: usize,
    pub stops: Vec<Location>,
}

impl TourReport {
    pub fn new(strategy: ConstructionStrategy, locations: &LocationCollection, tour: &Tour) -> Self {
        TourReport {
            method: strategy.label().to_string(),
            location_count: locations.len(),
            total_distance: tour.total_distance(),
            complete: tour.is_complete(),
            stalled_steps: tour.stalled_steps(),
            stops: tour.locations(locations).copied().collect(),
        }
    }
}

/// One row per stop with the length of the leg that reached it, then the return to the start.
pub fn save_tour_csv(
    path: impl AsRef<Path>,
    locations: &LocationCollection,
    tour: &Tour,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["order", "index", "x", "y", "leg_distance"])?;

    let arrivals = std::iter::once(0).chain(tour.legs().iter().map(|leg| leg.length));
    for (order, (location, leg_distance)) in tour.locations(locations).zip(arrivals).enumerate() {
        wtr.write_record([
            order.to_string(),
            location.index.to_string(),
            location.x.to_string(),
            location.y.to_string(),
            leg_distance.to_string(),
        ])?;
    }

    if let (Some(leg), Some(start)) = (tour.closing_leg(), locations.start()) {
        wtr.write_record([
            tour.stops().len().to_string(),
            start.index.to_string(),
            start.x.to_string(),
            start.y.to_string(),
            leg.length.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!("Saved tour CSV to {}", path.display());
    Ok(())
}

pub fn save_tour_json(
    path: impl AsRef<Path>,
    strategy: ConstructionStrategy,
    locations: &LocationCollection,
    tour: &Tour,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let report = TourReport::new(strategy, locations, tour);

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &report)?;

    info!("Saved tour report to {}", path.display());
    Ok(())
}
