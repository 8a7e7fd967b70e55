use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// A point on the map. `index` is its position in the owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub index: usize,
    pub x: i64,
    pub y: i64,
}

impl Location {
    pub fn new(index: usize, x: i64, y: i64) -> Self {
        Location { index, x, y }
    }
}

/// Ordered set of locations for one run. Index 0 is the start and end of every tour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCollection {
    locations: Vec<Location>,
}

impl LocationCollection {
    /// Builds a collection from raw coordinates, assigning indices 0..N-1 in order.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let locations = points
            .into_iter()
            .enumerate()
            .map(|(index, (x, y))| Location::new(index, x, y))
            .collect();

        LocationCollection { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    /// The designated start/end location, if any.
    pub fn start(&self) -> Option<&Location> {
        self.locations.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }
}

impl std::ops::Index<usize> for LocationCollection {
    type Output = Location;

    fn index(&self, index: usize) -> &Self::Output {
        &self.locations[index]
    }
}

impl<'a> IntoIterator for &'a LocationCollection {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}

/// Axis-aligned map region locations are drawn inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal extent, widened so extreme coordinates cannot overflow.
    pub fn width(&self) -> i128 {
        i128::from(self.max_x) - i128::from(self.min_x)
    }

    pub fn height(&self) -> i128 {
        i128::from(self.max_y) - i128::from(self.min_y)
    }

    /// Shrinks the region by `inset` on every side so markers of that radius stay inside.
    pub fn inset(&self, inset: i64) -> RouteResult<Bounds> {
        if inset < 0 {
            return Err(RouteError::invalid_argument(format!(
                "minimum separation must not be negative, got {inset}"
            )));
        }
        let margin = 2 * i128::from(inset);
        if self.width() <= margin {
            return Err(RouteError::invalid_argument(format!(
                "bounds width {} is too small for an inset of {inset} on both sides",
                self.width()
            )));
        }
        if self.height() <= margin {
            return Err(RouteError::invalid_argument(format!(
                "bounds height {} is too small for an inset of {inset} on both sides",
                self.height()
            )));
        }

        Ok(Bounds::new(
            self.min_x + inset,
            self.min_y + inset,
            self.max_x - inset,
            self.max_y - inset,
        ))
    }

    pub fn contains(&self, location: &Location) -> bool {
        (self.min_x..=self.max_x).contains(&location.x) && (self.min_y..=self.max_y).contains(&location.y)
    }
}
