//! Random location layouts and greedy nearest-neighbour tours over them.
//!
//! The engine is two calls: [`fixtures::data_generator::generate`] draws a
//! [`LocationCollection`] and [`solver::nearest_neighbour::build_tour`] turns it
//! into a [`Tour`]. Everything else in the crate presents, exports or batches
//! their output.

pub mod app;
pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod export;
pub mod fixtures;
pub mod session;
pub mod solver;
pub mod visualization;

pub use domain::tour::{Leg, Tour};
pub use domain::types::{Bounds, Location, LocationCollection};
pub use error::{RouteError, RouteResult};
pub use fixtures::data_generator::generate;
pub use solver::nearest_neighbour::build_tour;
pub use solver::ConstructionStrategy;
