//! # MargaNav
//!
//! Weighted-grid pathfinding library: A* search over a 2D cost grid with
//! composable path-simplification passes.
//!
//! ## Overview
//!
//! MargaNav plans routes across a dense grid of traversal weights. An
//! external collaborator builds the grid (streets, rooms, floors — anything
//! expressible as per-cell costs with an impassable sentinel) and supplies
//! start and destination points in grid space; the library returns an
//! ordered waypoint sequence ready for a motion or animation layer.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. **A\* search** ([`AStarSearch`]) over the [`CostGrid`] with a
//!    selectable [`DistanceMetric`], producing a raw cell-by-cell path.
//! 2. **Visibility pruning** ([`VisibilityPruner`]) — removes waypoints
//!    whose covering straight segment rasterizes obstacle-free.
//! 3. **Collinearity reduction** ([`CollinearityReducer`]) — removes
//!    waypoints lying on a straight line through their neighbors.
//! 4. **World conversion** ([`WorldTransform`]) — per-axis affine map into
//!    the caller's coordinate space.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga_nav::{CostGrid, PathPlanner, PlannerConfig, WorldPoint};
//!
//! let grid = CostGrid::from_cells(100, 100, cells)?;
//! let planner = PathPlanner::with_defaults();
//!
//! if let Some(path) = planner.plan(&grid, WorldPoint::new(2.0, 3.0), WorldPoint::new(90.0, 55.0)) {
//!     println!("{} waypoints, {:.1} units", path.waypoints.len(), path.length);
//! }
//! ```
//!
//! ## Coordinate System
//!
//! Grid cells are indexed `(x, y)` with `x` in `[0, width)` and `y` in
//! `[0, depth)`. Waypoints are 3D: planar `(x, y)` matching the grid axes
//! plus a constant elevation. A path of one point or fewer means "no path
//! found"; a [`PlannedPath`] whose `reached_goal` flag is false is a
//! best-effort prefix from an exhausted search.

#![warn(missing_docs)]

// Core geometric types
pub mod core;

// Weighted cost grid
pub mod grid;

// Distance metrics and connectivity
pub mod metric;

// A* search engine and open frontier
pub mod search;

// Path simplification passes
pub mod simplify;

// Planning pipeline
pub mod pipeline;

// Unified configuration
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types
pub use crate::core::{GridCoord, Waypoint, WorldPoint};

pub use grid::CostGrid;

pub use metric::DistanceMetric;

pub use search::{AStarSearch, FrontierNode, PriorityFrontier, RawPath};

pub use simplify::{rasterize, CollinearityReducer, VisibilityPruner};

pub use pipeline::{PathPlanner, PlannedPath, PlannerConfig, WorldTransform};

pub use config::{MargaConfig, SearchSection, SimplifySection, WorldSection};

pub use error::{MargaError, Result};
