//! Nearest-neighbor construction loop.
//!
//! # Algorithm
//!
//! 1. Place the start city, mark it visited
//! 2. Repeat `n - 1` times:
//!    a. Scan all unvisited cities in ascending index order
//!    b. Keep the first candidate at minimum distance from the current city
//!    c. Move there, mark it visited, add the edge to the running total
//! 3. Add the edge back to the start and repeat the start to close the tour

use super::config::NnConfig;
use super::types::Tour;
use crate::error::{TourError, TourResult};
use crate::geometry::{distance, City};

/// Builds a closed nearest-neighbor tour starting at index 0.
///
/// Never fails: an empty slice yields an empty tour with zero length.
///
/// # Examples
///
/// ```
/// use u_nntour::geometry::City;
/// use u_nntour::nn::build_tour;
///
/// let cities = vec![
///     City::new("origin", 0.0, 0.0),
///     City::new("far", 10.0, 0.0),
///     City::new("near", 1.0, 0.0),
/// ];
/// let tour = build_tour(&cities);
/// assert_eq!(tour.order(), &[0, 2, 1, 0]);
/// assert!((tour.total_distance() - 20.0).abs() < 1e-12);
/// ```
pub fn build_tour(cities: &[City]) -> Tour {
    construct(cities, 0)
}

/// Executes the nearest-neighbor heuristic under an [`NnConfig`].
pub struct NnRunner;

impl NnRunner {
    /// Builds a closed tour from `config.start`.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidConfig`] when the start index is out of range for
    /// a non-empty input.
    pub fn run(cities: &[City], config: &NnConfig) -> TourResult<Tour> {
        config
            .validate(cities.len())
            .map_err(TourError::InvalidConfig)?;
        Ok(construct(cities, config.start))
    }
}

fn construct(cities: &[City], start: usize) -> Tour {
    let n = cities.len();
    if n == 0 {
        return Tour::empty();
    }

    log::debug!("nn: start cities={n} start={start}");

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n + 1);
    let mut total = 0.0;

    let mut current = start;
    visited[current] = true;
    order.push(current);

    for _ in 1..n {
        let from = &cities[current];
        let mut best: Option<(usize, f64)> = None;

        for (j, candidate) in cities.iter().enumerate() {
            if visited[j] {
                continue;
            }
            let d = distance(from, candidate);
            // The first candidate is always adopted, so NaN distances still
            // produce a successor; later ones need a strictly smaller distance.
            let better = match best {
                None => true,
                Some((_, best_d)) => d < best_d,
            };
            if better {
                best = Some((j, d));
            }
        }

        // One city is placed per pass, so an unvisited index remains here.
        let Some((next, d)) = best else { break };

        visited[next] = true;
        order.push(next);
        total += d;
        current = next;
    }

    total += distance(&cities[current], &cities[start]);
    order.push(start);

    log::debug!("nn: done cities={n} total_distance={total}");

    let tour_cities = order.iter().map(|&i| cities[i].clone()).collect();
    Tour {
        order,
        cities: tour_cities,
        total_distance: total,
    }
}
