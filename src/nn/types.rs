//! Tour result type.

use crate::geometry::City;

/// A closed tour produced by the nearest-neighbor builder.
///
/// For `n > 0` input cities both [`cities`](Tour::cities) and
/// [`order`](Tour::order) hold `n + 1` entries: every input index exactly
/// once, followed by the start again. An empty input gives an empty tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    pub(crate) order: Vec<usize>,
    pub(crate) cities: Vec<City>,
    pub(crate) total_distance: f64,
}

impl Tour {
    pub(crate) fn empty() -> Self {
        Self {
            order: Vec::new(),
            cities: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Cities in visiting order, start repeated at the end.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Input indices in visiting order, start repeated at the end.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Sum of all traversed edges, closing edge included.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of entries in the closed tour (`n + 1`, or `0`).
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Splits the tour into its city sequence and total distance.
    pub fn into_parts(self) -> (Vec<City>, f64) {
        (self.cities, self.total_distance)
    }
}
