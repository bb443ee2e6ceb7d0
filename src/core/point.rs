//! Point and coordinate types for the cost grid and paths.

use serde::{Deserialize, Serialize};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y + 1), // North
            GridCoord::new(self.x + 1, self.y), // East
            GridCoord::new(self.x, self.y - 1), // South
            GridCoord::new(self.x - 1, self.y), // West
        ]
    }

    /// Get the 8 neighbors (including diagonals)
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.x, self.y + 1),     // N
            GridCoord::new(self.x + 1, self.y + 1), // NE
            GridCoord::new(self.x + 1, self.y),     // E
            GridCoord::new(self.x + 1, self.y - 1), // SE
            GridCoord::new(self.x, self.y - 1),     // S
            GridCoord::new(self.x - 1, self.y - 1), // SW
            GridCoord::new(self.x - 1, self.y),     // W
            GridCoord::new(self.x - 1, self.y + 1), // NW
        ]
    }
}

/// Planar coordinates (f32), used for search endpoints and raw paths
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl WorldPoint {
    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Create a new planar point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The grid cell containing this point (truncation toward zero)
    #[inline]
    pub fn cell(&self) -> GridCoord {
        GridCoord::new(self.x as i32, self.y as i32)
    }
}

/// A 3D path point: planar coordinates plus a constant elevation
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Waypoint {
    /// X coordinate (matches grid x)
    pub x: f32,
    /// Y coordinate (matches grid y)
    pub y: f32,
    /// Elevation, constant along a path
    pub elevation: f32,
}

impl Waypoint {
    /// Zero point (origin)
    pub const ZERO: Waypoint = Waypoint {
        x: 0.0,
        y: 0.0,
        elevation: 0.0,
    };

    /// Create a new waypoint
    #[inline]
    pub fn new(x: f32, y: f32, elevation: f32) -> Self {
        Self { x, y, elevation }
    }

    /// Euclidean distance to another waypoint (all three components)
    #[inline]
    pub fn distance(&self, other: &Waypoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let de = self.elevation - other.elevation;
        (dx * dx + dy * dy + de * de).sqrt()
    }

    /// The grid cell containing this waypoint (truncation toward zero)
    #[inline]
    pub fn cell(&self) -> GridCoord {
        GridCoord::new(self.x as i32, self.y as i32)
    }
}
