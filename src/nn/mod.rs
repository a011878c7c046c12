//! Nearest-neighbor tour construction.
//!
//! A greedy constructive heuristic for the symmetric Euclidean TSP: starting
//! from one city, repeatedly move to the closest city not yet visited, then
//! return to the start.
//!
//! # Complexity
//!
//! O(n²) distance evaluations, O(n) auxiliary memory. Every step is a full
//! linear scan over the input; no spatial index is used.
//!
//! # Determinism
//!
//! Candidates are scanned in ascending input index and only a strictly
//! smaller distance replaces the current best, so exact ties always resolve
//! to the lowest index. Reordering the input can therefore change the tour.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::NnConfig;
pub use runner::{build_tour, NnRunner};
pub use types::Tour;
