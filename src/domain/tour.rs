use serde::Serialize;

use crate::domain::types::{Location, LocationCollection};

/// A single travelled edge, measured in truncated Euclidean units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
    pub length: u64,
}

/// Visiting order over a `LocationCollection`, starting at index 0.
///
/// The tour holds indices only; resolve them with [`Tour::locations`] against
/// the collection it was built from. The return edge to the start is kept
/// apart from the forward legs as `closing_leg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    stops: Vec<usize>,
    legs: Vec<Leg>,
    closing_leg: Option<Leg>,
    total_distance: u64,
    stalled_steps: usize,
}

impl Tour {
    /// Tour that has only visited the start.
    pub(crate) fn from_start() -> Self {
        Tour {
            stops: vec![0],
            legs: vec![],
            closing_leg: None,
            total_distance: 0,
            stalled_steps: 0,
        }
    }

    pub(crate) fn push_leg(&mut self, leg: Leg) {
        self.total_distance = self.total_distance.saturating_add(leg.length);
        self.stops.push(leg.to);
        self.legs.push(leg);
    }

    /// Records a selection step that moved nowhere new.
    pub(crate) fn push_stalled_leg(&mut self, leg: Leg) {
        self.stalled_steps += 1;
        self.push_leg(leg);
    }

    pub(crate) fn close(&mut self, leg: Leg) {
        self.total_distance = self.total_distance.saturating_add(leg.length);
        self.closing_leg = Some(leg);
    }

    /// Location indices in visitation order; the first is always 0.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn closing_leg(&self) -> Option<&Leg> {
        self.closing_leg.as_ref()
    }

    /// Forward legs followed by the closing leg.
    pub fn segments(&self) -> impl Iterator<Item = &Leg> + '_ {
        self.legs.iter().chain(self.closing_leg.iter())
    }

    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    pub fn stalled_steps(&self) -> usize {
        self.stalled_steps
    }

    /// False when a selection step stalled on a chain of coincident locations.
    pub fn is_complete(&self) -> bool {
        self.stalled_steps == 0
    }

    pub fn locations<'a>(
        &'a self,
        collection: &'a LocationCollection,
    ) -> impl Iterator<Item = &'a Location> + 'a {
        self.stops.iter().filter_map(move |&index| collection.get(index))
    }
}
