//! Path planning pipeline.
//!
//! Orchestrates the fixed pass order — A* search, then optional visibility
//! pruning, then optional collinearity reduction — and converts the result
//! into the caller's coordinate space.

use serde::{Deserialize, Serialize};

use crate::core::{Waypoint, WorldPoint};
use crate::grid::CostGrid;
use crate::metric::DistanceMetric;
use crate::search::AStarSearch;
use crate::simplify::{CollinearityReducer, VisibilityPruner};

/// Per-axis affine map from grid space into the caller's world space:
/// `world = offset + scale * point`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldTransform {
    /// Added after scaling.
    pub offset: Waypoint,
    /// Per-axis scale applied to the grid-space point.
    pub scale: Waypoint,
}

impl WorldTransform {
    /// The identity transform (world space equals grid space).
    pub fn identity() -> Self {
        Self {
            offset: Waypoint::ZERO,
            scale: Waypoint::new(1.0, 1.0, 1.0),
        }
    }

    /// Apply the transform to a single point.
    #[inline]
    pub fn apply(&self, point: Waypoint) -> Waypoint {
        Waypoint::new(
            self.offset.x + self.scale.x * point.x,
            self.offset.y + self.scale.y * point.y,
            self.offset.elevation + self.scale.elevation * point.elevation,
        )
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Configuration for the planning pipeline.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Distance function for the search; also selects connectivity.
    pub metric: DistanceMetric,
    /// Run the grid-aware visibility pruning pass.
    pub visibility_pruning: bool,
    /// Run the collinearity reduction pass.
    pub collinearity_pruning: bool,
    /// Collinearity threshold for the pipeline pass. Deliberately looser
    /// than the standalone reducer default so near-collinear detours
    /// collapse.
    pub collinearity_epsilon: f32,
    /// Constant elevation assigned to waypoints. Must be nonzero for the
    /// collinearity determinant to discriminate (it measures planar area
    /// scaled by this constant).
    pub elevation: f32,
    /// Conversion into the caller's coordinate space.
    pub transform: WorldTransform,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            metric: DistanceMetric::Euclidean,
            visibility_pruning: true,
            collinearity_pruning: true,
            collinearity_epsilon: 1.0,
            elevation: 1.0,
            transform: WorldTransform::identity(),
        }
    }
}

/// A planned path in caller coordinates.
#[derive(Clone, Debug)]
pub struct PlannedPath {
    /// Waypoints in traversal order.
    pub waypoints: Vec<Waypoint>,
    /// Total point-to-point length.
    pub length: f32,
    /// `false` when the search exhausted its frontier before the goal and
    /// the waypoints are a best-effort prefix.
    pub reached_goal: bool,
}

/// Path planning pipeline.
///
/// Holds only configuration; every call is a pure function of its inputs.
/// Separate instances may be used concurrently on separate grids.
pub struct PathPlanner {
    config: PlannerConfig,
}

impl PathPlanner {
    /// Create a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Create a planner with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route across `grid` from `start` to `goal` (grid-space
    /// points).
    ///
    /// Returns `None` when no path exists — the search produced one point
    /// or fewer. A returned path with `reached_goal == false` is a
    /// best-effort prefix from an exhausted search.
    pub fn plan(
        &self,
        grid: &CostGrid,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> Option<PlannedPath> {
        let search = AStarSearch::new(self.config.metric);
        let raw = search.find_path(grid, start, goal);

        if raw.points.len() <= 1 {
            return None;
        }

        let mut path: Vec<Waypoint> = raw
            .points
            .iter()
            .map(|p| Waypoint::new(p.x, p.y, self.config.elevation))
            .collect();

        if self.config.visibility_pruning {
            path = VisibilityPruner::new().prune(&path, grid);
        }

        if self.config.collinearity_pruning {
            if self.config.elevation == 0.0 {
                tracing::warn!(
                    "zero elevation makes every triple collinear; reduction will collapse the path"
                );
            }
            path = CollinearityReducer::new(self.config.collinearity_epsilon).reduce(&path);
        }

        let waypoints: Vec<Waypoint> = path
            .iter()
            .map(|p| self.config.transform.apply(*p))
            .collect();
        let length = path_length(&waypoints);

        tracing::debug!(
            points = waypoints.len(),
            length,
            reached_goal = raw.reached_goal,
            "planned path"
        );

        Some(PlannedPath {
            waypoints,
            length,
            reached_goal: raw.reached_goal,
        })
    }
}

/// Point-to-point length of a waypoint sequence.
fn path_length(waypoints: &[Waypoint]) -> f32 {
    if waypoints.len() < 2 {
        return 0.0;
    }

    let mut length = 0.0;
    for pair in waypoints.windows(2) {
        length += pair[0].distance(&pair[1]);
    }
    length
}
