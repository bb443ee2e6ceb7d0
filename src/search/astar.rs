//! A* path search over a weighted cost grid.
//!
//! The implementation follows the classical open/closed-set formulation
//! with one deliberate deviation in the relaxation rule: a neighbor already
//! in the closed set is skipped when its tentative g-score is at least the
//! *current* node's g-score, and is re-relaxed when the tentative g-score
//! is below the current node's g-score and the neighbor's grid weight is
//! below the current node's. Cell weights never enter the step cost; they
//! participate only through that re-relaxation rule and the obstacle
//! sentinel.

use std::collections::{HashMap, HashSet};

use crate::core::{GridCoord, WorldPoint};
use crate::grid::CostGrid;
use crate::metric::DistanceMetric;

use super::frontier::PriorityFrontier;

/// Raw search result in grid space.
#[derive(Clone, Debug)]
pub struct RawPath {
    /// Cell coordinates from the start toward the goal, ending with the
    /// exact (unsnapped) requested destination.
    pub points: Vec<WorldPoint>,
    /// `false` when the frontier was exhausted before the goal cell; the
    /// points are then a best-effort prefix toward the last expanded cell.
    pub reached_goal: bool,
}

impl RawPath {
    /// A result of one point or fewer means "no path found".
    pub fn is_path(&self) -> bool {
        self.points.len() > 1
    }
}

/// A* search engine.
pub struct AStarSearch {
    metric: DistanceMetric,
}

impl AStarSearch {
    /// Create a search engine using the given distance metric.
    pub fn new(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    /// Find a path across `grid` from `start` to `goal`.
    ///
    /// Both points are truncated to grid indices; callers with
    /// out-of-range coordinates clamp before calling. A goal cell carrying
    /// the obstacle sentinel yields an empty path immediately. Absence of
    /// a path is signaled by a result of length one or zero, never by an
    /// error.
    pub fn find_path(&self, grid: &CostGrid, start: WorldPoint, goal: WorldPoint) -> RawPath {
        let start_cell = start.cell();
        let goal_cell = goal.cell();

        // An obstacle goal is unreachable by definition.
        if grid.cost(goal_cell) == CostGrid::OBSTACLE {
            tracing::warn!(
                x = goal_cell.x,
                y = goal_cell.y,
                "goal cell is an obstacle, no path"
            );
            return RawPath {
                points: Vec::new(),
                reached_goal: false,
            };
        }

        let mut frontier = PriorityFrontier::new();
        let mut parent: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_score: HashMap<GridCoord, f32> = HashMap::new();
        let mut closed: HashSet<GridCoord> = HashSet::new();

        g_score.insert(start_cell, 0.0);
        frontier.insert(start_cell, self.metric.distance(start_cell, goal_cell));

        let mut current = start_cell;
        let mut reached_goal = false;

        loop {
            let Some(min) = frontier.peek_min() else {
                break;
            };

            // The goal is never dequeued; the peeked node ends the search.
            if min.coord == goal_cell {
                current = min.coord;
                reached_goal = true;
                frontier.clear();
                break;
            }

            let Some(node) = frontier.extract_min() else {
                break;
            };
            current = node.coord;
            closed.insert(current);

            let current_g = g_score.get(&current).copied().unwrap_or(f32::MAX);
            let current_weight = grid.cost(current);

            let n4;
            let n8;
            let neighbors: &[GridCoord] = if self.metric.diagonal() {
                n8 = current.neighbors_8();
                &n8
            } else {
                n4 = current.neighbors_4();
                &n4
            };

            for &neighbor in neighbors {
                // Out-of-range cells read as the sentinel and drop out here.
                if grid.cost(neighbor) == CostGrid::OBSTACLE {
                    continue;
                }

                let tentative_g = current_g + self.metric.distance(current, neighbor);
                let neighbor_closed = closed.contains(&neighbor);

                if neighbor_closed && tentative_g >= current_g {
                    continue;
                }

                // Relaxation accepted for unclosed neighbors, or for closed
                // ones when the tentative cost undercuts the current node
                // and the neighbor sits on a lighter cell.
                if !neighbor_closed
                    || (tentative_g < current_g && grid.cost(neighbor) < current_weight)
                {
                    parent.insert(neighbor, current);
                    g_score.insert(neighbor, tentative_g);

                    let f_score = tentative_g + self.metric.distance(neighbor, goal_cell);
                    if !frontier.contains(neighbor) {
                        frontier.insert(neighbor, f_score);
                    }
                }
            }
        }

        if !reached_goal {
            tracing::warn!(
                x = current.x,
                y = current.y,
                "frontier exhausted before goal, returning best-effort path"
            );
        }

        RawPath {
            points: reconstruct(&parent, current, goal),
            reached_goal,
        }
    }
}

/// Walk the predecessor map back from the terminal cell, reverse, and
/// append the exact requested destination. The terminal cell itself is not
/// emitted; the destination point takes its place.
fn reconstruct(
    parent: &HashMap<GridCoord, GridCoord>,
    terminal: GridCoord,
    destination: WorldPoint,
) -> Vec<WorldPoint> {
    let mut points = Vec::new();
    let mut visited: HashSet<GridCoord> = HashSet::new();
    let mut cursor = terminal;

    while let Some(&back) = parent.get(&cursor) {
        if !visited.insert(cursor) {
            tracing::warn!("predecessor cycle during reconstruction, truncating path");
            break;
        }
        points.push(WorldPoint::new(back.x as f32, back.y as f32));
        cursor = back;
    }

    points.reverse();
    points.push(destination);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: usize, depth: usize) -> CostGrid {
        CostGrid::from_cells(width, depth, vec![1; width * depth]).unwrap()
    }

    #[test]
    fn test_straight_path_euclidean() {
        let grid = open_grid(10, 10);
        let search = AStarSearch::new(DistanceMetric::Euclidean);

        let raw = search.find_path(&grid, WorldPoint::new(0.0, 0.0), WorldPoint::new(5.0, 0.0));
        assert!(raw.reached_goal);
        assert!(raw.is_path());
        assert_eq!(raw.points.len(), 6);
        assert_eq!(raw.points[0], WorldPoint::new(0.0, 0.0));
        assert_eq!(raw.points[5], WorldPoint::new(5.0, 0.0));
    }

    #[test]
    fn test_diagonal_path_chebyshev() {
        let grid = open_grid(10, 10);
        let search = AStarSearch::new(DistanceMetric::Chebyshev);

        let raw = search.find_path(&grid, WorldPoint::new(0.0, 0.0), WorldPoint::new(4.0, 4.0));
        assert!(raw.reached_goal);
        assert_eq!(raw.points.len(), 5);
        for pair in raw.points.windows(2) {
            assert!((pair[1].x - pair[0].x - 1.0).abs() < 1e-6);
            assert!((pair[1].y - pair[0].y - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_obstacle_goal_returns_empty() {
        let mut grid = open_grid(8, 8);
        grid.set_cost(GridCoord::new(6, 6), CostGrid::OBSTACLE);
        let search = AStarSearch::new(DistanceMetric::Euclidean);

        let raw = search.find_path(&grid, WorldPoint::new(0.0, 0.0), WorldPoint::new(6.0, 6.0));
        assert!(!raw.reached_goal);
        assert!(raw.points.is_empty());
        assert!(!raw.is_path());
    }

    #[test]
    fn test_start_equals_goal_is_degenerate() {
        let grid = open_grid(8, 8);
        let search = AStarSearch::new(DistanceMetric::Manhattan);

        let raw = search.find_path(&grid, WorldPoint::new(3.0, 3.0), WorldPoint::new(3.0, 3.0));
        assert!(raw.points.len() <= 1);
        assert!(!raw.is_path());
    }

    #[test]
    fn test_exact_destination_is_appended() {
        let grid = open_grid(8, 8);
        let search = AStarSearch::new(DistanceMetric::Euclidean);

        // Fractional destination: the final waypoint is the caller's exact
        // point, not the snapped cell center.
        let raw = search.find_path(&grid, WorldPoint::new(0.0, 0.0), WorldPoint::new(4.6, 0.2));
        assert!(raw.reached_goal);
        let last = raw.points.last().unwrap();
        assert!((last.x - 4.6).abs() < 1e-6);
        assert!((last.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_weights_do_not_enter_step_cost() {
        // A band of expensive-but-passable cells must not lengthen the
        // path: weights gate relaxation, never the g-score.
        let mut grid = open_grid(9, 5);
        for y in 0..5 {
            grid.set_cost(GridCoord::new(4, y), 1000);
        }
        let search = AStarSearch::new(DistanceMetric::Manhattan);

        let raw = search.find_path(&grid, WorldPoint::new(0.0, 2.0), WorldPoint::new(8.0, 2.0));
        assert!(raw.reached_goal);
        assert_eq!(raw.points.len(), 9);
    }

    #[test]
    fn test_exhausted_search_yields_partial_path() {
        // Goal cell is free but fenced off by sentinel walls.
        let mut grid = open_grid(10, 10);
        for x in 5..=7 {
            grid.set_cost(GridCoord::new(x, 5), CostGrid::OBSTACLE);
            grid.set_cost(GridCoord::new(x, 7), CostGrid::OBSTACLE);
        }
        for y in 5..=7 {
            grid.set_cost(GridCoord::new(5, y), CostGrid::OBSTACLE);
            grid.set_cost(GridCoord::new(7, y), CostGrid::OBSTACLE);
        }
        let search = AStarSearch::new(DistanceMetric::Euclidean);

        let raw = search.find_path(&grid, WorldPoint::new(0.0, 0.0), WorldPoint::new(6.0, 6.0));
        assert!(!raw.reached_goal);
        // Best-effort prefix plus the appended destination.
        assert!(raw.points.len() > 1);
    }
}
