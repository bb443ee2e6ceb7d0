//! Test fixtures for MargaNav planning tests.
//!
//! Provides grid builders (open, walled, street-pattern) and the
//! plane-centered world transform used by the end-to-end scenarios.

#![allow(dead_code)]

use marga_nav::{rasterize, CostGrid, GridCoord, Waypoint, WorldTransform};

/// Uniform-cost open grid.
pub fn open_grid(width: usize, depth: usize, cost: i16) -> CostGrid {
    CostGrid::from_cells(width, depth, vec![cost; width * depth]).unwrap()
}

/// Open grid with a solid sentinel wall at column `wall_x`, except a
/// single gap at `gap_y`.
pub fn walled_grid(width: usize, depth: usize, wall_x: i32, gap_y: i32) -> CostGrid {
    let mut grid = open_grid(width, depth, 1);
    for y in 0..depth as i32 {
        if y != gap_y {
            grid.set_cost(GridCoord::new(wall_x, y), CostGrid::OBSTACLE);
        }
    }
    grid
}

/// Manhattan-street weighted grid: street centers cost 1, street edges
/// cost 2, everything off-street impassable.
///
/// `ns_x` are the center x positions of north-south streets, `ew_y` the
/// center y positions of east-west streets.
pub fn street_grid(
    width: usize,
    depth: usize,
    ns_x: &[i32],
    ew_y: &[i32],
    street_width: i32,
) -> CostGrid {
    let mut grid = CostGrid::new(width, depth);

    for &sx in ns_x {
        for j in 0..street_width {
            let x = sx + street_width / 2 - j - 1;
            let weight = if j > 0 && j < street_width - 1 { 1 } else { 2 };
            for y in 0..depth as i32 {
                grid.set_cost(GridCoord::new(x, y), weight);
            }
        }
    }

    for &sy in ew_y {
        for j in 0..street_width {
            let y = sy + street_width / 2 - j - 1;
            let weight = if j > 0 && j < street_width - 1 { 1 } else { 2 };
            for x in 0..width as i32 {
                grid.set_cost(GridCoord::new(x, y), weight);
            }
        }
    }

    // Anything still untouched is off-street and therefore impassable.
    for y in 0..depth as i32 {
        for x in 0..width as i32 {
            let coord = GridCoord::new(x, y);
            if grid.cost(coord) == 0 {
                grid.set_cost(coord, CostGrid::OBSTACLE);
            }
        }
    }

    grid
}

/// Plane-centered world transform for a `width` × `depth` nav plane:
/// `world = (width/2 - x - 0.5, -depth/2 + y + 0.5, elevation)`.
pub fn plane_transform(width: usize, depth: usize) -> WorldTransform {
    WorldTransform {
        offset: Waypoint::new(
            width as f32 / 2.0 - 0.5,
            -(depth as f32) / 2.0 + 0.5,
            0.0,
        ),
        scale: Waypoint::new(-1.0, 1.0, 1.0),
    }
}

/// Assert that every consecutive waypoint pair rasterizes obstacle-free.
pub fn assert_segments_clear(path: &[Waypoint], grid: &CostGrid) {
    for pair in path.windows(2) {
        for cell in rasterize(pair[0], pair[1]) {
            assert!(
                !grid.is_obstacle(cell.cell()),
                "segment ({:?} -> {:?}) crosses obstacle cell {:?}",
                pair[0],
                pair[1],
                cell.cell()
            );
        }
    }
}
