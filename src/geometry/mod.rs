//! Planar geometry for the Euclidean TSP.
//!
//! Holds the [`City`] record and the metric the tour builder evaluates on
//! every scan step. Coordinates are plain `f64`; non-finite values are not
//! rejected and propagate through [`distance`] and [`tour_length`].

mod distance;
mod types;

pub use distance::{distance, tour_length};
pub use types::City;
