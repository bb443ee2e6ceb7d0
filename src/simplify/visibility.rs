//! Grid-aware path pruning via line-of-sight checks.

use crate::core::Waypoint;
use crate::grid::CostGrid;

use super::raster::rasterize;

/// Outcome of walking one rasterized segment against the grid.
enum SegmentScan {
    /// No obstacle along the segment.
    Clear,
    /// Obstructed; `detour` is the last traversable cell before the first
    /// obstacle, when one exists past the segment start.
    Blocked { detour: Option<Waypoint> },
}

/// Removes waypoints whose covering straight segment is obstacle-free.
///
/// The pass scans forward from a retained anchor: every candidate whose
/// rasterized segment from the anchor stays clear is eligible for removal.
/// When a segment hits an obstacle, the last pre-obstacle cell of the
/// rasterized line is retained as a detour anchor so the path bends around
/// the obstruction. The first and last input points are always retained.
///
/// Every removal is backed by a segment verified clear between the
/// retained neighbors: the pass may keep more points than strictly
/// necessary, but it never cuts across an obstacle.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityPruner;

impl VisibilityPruner {
    /// Create a pruner.
    pub fn new() -> Self {
        Self
    }

    /// Prune `path` against `grid`.
    pub fn prune(&self, path: &[Waypoint], grid: &CostGrid) -> Vec<Waypoint> {
        if path.len() < 3 {
            return path.to_vec();
        }

        let last = path.len() - 1;
        let mut kept = vec![path[0]];
        let mut anchor = path[0];
        // Index of the last candidate verified visible from `anchor`.
        let mut last_clear: Option<usize> = None;
        let mut index = 1;

        while index <= last {
            match scan_segment(anchor, path[index], grid) {
                SegmentScan::Clear => {
                    last_clear = Some(index);
                    index += 1;
                }
                SegmentScan::Blocked { detour } => {
                    if let Some(visible) = last_clear.take() {
                        // Re-anchor on the last waypoint verified visible,
                        // then retry this candidate.
                        kept.push(path[visible]);
                        anchor = path[visible];
                    } else if let Some(cell) =
                        detour_anchor(detour, anchor, path[index], grid)
                    {
                        kept.push(cell);
                        anchor = cell;
                        last_clear = Some(index);
                        index += 1;
                    } else {
                        // The input segment itself is obstructed; retain
                        // the candidate untouched rather than cut across.
                        kept.push(path[index]);
                        anchor = path[index];
                        index += 1;
                    }
                }
            }
        }

        if last_clear == Some(last) {
            kept.push(path[last]);
        }

        kept
    }
}

/// A detour cell is usable as an anchor only when it advances past the
/// current anchor and both the segment reaching it and the segment onward
/// to the candidate verify as clear.
fn detour_anchor(
    detour: Option<Waypoint>,
    anchor: Waypoint,
    candidate: Waypoint,
    grid: &CostGrid,
) -> Option<Waypoint> {
    let cell = detour?;
    if cell.cell() == anchor.cell() {
        return None;
    }
    let inbound = matches!(scan_segment(anchor, cell, grid), SegmentScan::Clear);
    let onward = matches!(scan_segment(cell, candidate, grid), SegmentScan::Clear);
    if inbound && onward {
        Some(cell)
    } else {
        None
    }
}

/// Walk the rasterized segment cell by cell against the grid.
fn scan_segment(from: Waypoint, to: Waypoint, grid: &CostGrid) -> SegmentScan {
    let mut last_open: Option<Waypoint> = None;
    for cell in rasterize(from, to) {
        if grid.is_obstacle(cell.cell()) {
            return SegmentScan::Blocked { detour: last_open };
        }
        last_open = Some(cell);
    }
    SegmentScan::Clear
}
