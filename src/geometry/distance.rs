//! Euclidean metric and closed-tour length.

use super::types::City;

/// Euclidean distance between two cities.
///
/// Symmetric and non-negative; zero iff both coordinates match. NaN or
/// infinite coordinates yield NaN or infinite distances, which the caller
/// receives unchanged.
///
/// # Examples
///
/// ```
/// use u_nntour::geometry::{distance, City};
///
/// let a = City::new("a", 0.0, 0.0);
/// let b = City::new("b", 3.0, 4.0);
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
#[inline]
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

/// Sum of the edges between consecutive entries of an already-closed tour.
///
/// The closing edge is not added implicitly: pass the tour with its start
/// repeated at the end. Returns `0.0` for fewer than two entries.
pub fn tour_length(tour: &[City]) -> f64 {
    tour.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}
