//! Random city sets for benchmarks and fixtures.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::City;

/// Generates `count` cities named `City_<i>` uniformly in `[0, side)²`.
///
/// The same `seed` always yields the same cities.
///
/// # Examples
///
/// ```
/// use u_nntour::loader::random_cities;
///
/// let cities = random_cities(3, 100.0, 42);
/// assert_eq!(cities.len(), 3);
/// assert_eq!(cities[2].name(), "City_2");
/// assert_eq!(cities, random_cities(3, 100.0, 42));
/// ```
pub fn random_cities(count: usize, side: f64, seed: u64) -> Vec<City> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let x = rng.random::<f64>() * side;
            let y = rng.random::<f64>() * side;
            City::new(format!("City_{i}"), x, y)
        })
        .collect()
}
