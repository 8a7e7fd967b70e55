use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::Settings;
use crate::domain::tour::Tour;
use crate::domain::types::{Bounds, LocationCollection};
use crate::error::{RouteError, RouteResult};
use crate::fixtures::data_generator::generate;
use crate::solver::ConstructionStrategy;

/// State the interactive front end keeps between user actions.
///
/// Holds one live collection at a time; every regeneration replaces it and
/// drops the tour built from the previous one.
#[derive(Debug, Clone)]
pub struct RouteSession {
    bounds: Bounds,
    min_separation: i64,
    location_count: usize,
    rng: ChaCha8Rng,
    locations: LocationCollection,
    strategy: Option<ConstructionStrategy>,
    tour: Option<Tour>,
}

impl RouteSession {
    /// Starts a session and generates its first layout. No strategy is selected yet.
    pub fn new(settings: &Settings) -> RouteResult<Self> {
        let mut rng = match settings.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let locations = generate(
            settings.location_count,
            &settings.bounds,
            settings.min_separation,
            &mut rng,
        )?;

        Ok(RouteSession {
            bounds: settings.bounds,
            min_separation: settings.min_separation,
            location_count: settings.location_count,
            rng,
            locations,
            strategy: None,
            tour: None,
        })
    }

    /// Replaces the layout with a fresh one of the current size.
    pub fn regenerate(&mut self) -> RouteResult<&LocationCollection> {
        self.regenerate_with(self.location_count)?;
        Ok(&self.locations)
    }

    pub fn more_locations(&mut self) -> RouteResult<usize> {
        self.regenerate_with(self.location_count + 1)?;
        Ok(self.location_count)
    }

    /// Fails below one location and leaves the session untouched.
    pub fn fewer_locations(&mut self) -> RouteResult<usize> {
        if self.location_count <= 1 {
            return Err(RouteError::invalid_argument(
                "cannot go below one location",
            ));
        }
        self.regenerate_with(self.location_count - 1)?;
        Ok(self.location_count)
    }

    fn regenerate_with(&mut self, count: usize) -> RouteResult<()> {
        let locations = generate(count, &self.bounds, self.min_separation, &mut self.rng)?;

        self.location_count = count;
        self.locations = locations;
        self.tour = None;
        info!("New layout with {} locations", count);
        Ok(())
    }

    pub fn select_strategy(&mut self, strategy: ConstructionStrategy) {
        if self.strategy != Some(strategy) {
            debug!("Selected {}", strategy);
            self.strategy = Some(strategy);
            self.tour = None;
        }
    }

    /// Selects `strategy`, or clears the selection and the tour if it was already selected.
    pub fn toggle_strategy(&mut self, strategy: ConstructionStrategy) -> Option<ConstructionStrategy> {
        if self.strategy == Some(strategy) {
            debug!("Deselected {}", strategy);
            self.strategy = None;
            self.tour = None;
        } else {
            self.select_strategy(strategy);
        }
        self.strategy
    }

    /// Builds the tour with the selected strategy; `Ok(None)` when nothing is selected.
    pub fn draw(&mut self) -> RouteResult<Option<&Tour>> {
        let Some(strategy) = self.strategy else {
            debug!("Draw requested with no strategy selected");
            return Ok(None);
        };

        let tour = strategy.build(&self.locations)?;
        let tour: &Tour = self.tour.insert(tour);
        Ok(Some(tour))
    }

    pub fn location_count(&self) -> usize {
        self.location_count
    }

    pub fn locations(&self) -> &LocationCollection {
        &self.locations
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn strategy(&self) -> Option<ConstructionStrategy> {
        self.strategy
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Zero until a tour has been drawn for the current layout.
    pub fn total_distance(&self) -> u64 {
        self.tour.as_ref().map_or(0, Tour::total_distance)
    }

    pub fn method_label(&self) -> String {
        match self.strategy {
            Some(strategy) => format!("Method: {}", strategy.label()),
            None => "Method: none selected".to_string(),
        }
    }
}
