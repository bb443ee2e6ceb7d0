//! A* search over a weighted cost grid.
//!
//! This module provides:
//! - [`PriorityFrontier`]: the open set, ordered by total estimated cost
//! - [`AStarSearch`]: the search engine producing a [`RawPath`]

mod astar;
mod frontier;

pub use astar::{AStarSearch, RawPath};
pub use frontier::{FrontierNode, PriorityFrontier};
