pub mod batch;
pub mod nearest_neighbour;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::tour::Tour;
use crate::domain::types::LocationCollection;
use crate::error::{RouteError, RouteResult};

/// Available tour construction heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionStrategy {
    #[default]
    NearestNeighbor,
}

impl ConstructionStrategy {
    pub const ALL: [ConstructionStrategy; 1] = [ConstructionStrategy::NearestNeighbor];

    /// Name shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            ConstructionStrategy::NearestNeighbor => "Nearest Neighbor",
        }
    }

    pub fn build(&self, locations: &LocationCollection) -> RouteResult<Tour> {
        match self {
            ConstructionStrategy::NearestNeighbor => nearest_neighbour::build_tour(locations),
        }
    }
}

impl fmt::Display for ConstructionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConstructionStrategy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest-neighbor" | "nearest_neighbor" | "nearest neighbor" | "nn" => {
                Ok(ConstructionStrategy::NearestNeighbor)
            }
            other => Err(RouteError::invalid_argument(format!(
                "unknown construction strategy '{other}'"
            ))),
        }
    }
}

/// Builds a tour over `locations` with the chosen heuristic.
pub fn construct_tour(
    strategy: ConstructionStrategy,
    locations: &LocationCollection,
) -> RouteResult<Tour> {
    strategy.build(locations)
}
