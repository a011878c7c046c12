//! Nearest-neighbor tour construction for the Euclidean TSP.
//!
//! Builds an approximate closed tour over labeled 2D points by always moving
//! to the closest unvisited city, then returning to the start.
//!
//! - **Geometry**: the [`City`](geometry::City) record, Euclidean
//!   [`distance`](geometry::distance) and closed-tour
//!   [`tour_length`](geometry::tour_length).
//! - **Nearest neighbor**: [`build_tour`](nn::build_tour) and the
//!   configurable [`NnRunner`](nn::NnRunner). O(n²), deterministic, exact
//!   ties go to the lowest input index.
//! - **Loader**: parses `name|x|y` records (decimal `.` or `,`), skipping
//!   malformed lines; writes city files and generates seeded random sets.
//!
//! # Example
//!
//! ```
//! use u_nntour::loader::{load_str, LoaderConfig};
//! use u_nntour::nn::build_tour;
//!
//! let text = "A|0|0\nB|3|4\nnot a city\nC|0,5|0\n";
//! let cities = load_str(text, &LoaderConfig::default()).unwrap();
//! assert_eq!(cities.len(), 3);
//!
//! let tour = build_tour(&cities);
//! assert_eq!(tour.order(), &[0, 2, 1, 0]);
//! ```
//!
//! # Architecture
//!
//! The heuristic is a pure function of its input slice: each call owns its
//! visited flags and output buffers, and nothing is shared between calls.
//! No improvement phase (2-opt, Or-opt) and no spatial index are provided.

pub mod error;
pub mod geometry;
pub mod loader;
pub mod nn;

pub use error::{TourError, TourResult};
