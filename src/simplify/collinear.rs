//! Collinearity-based path reduction.

use crate::core::Waypoint;

/// Removes interior waypoints that lie (approximately) on the straight
/// line through their neighbors.
///
/// Collinearity is measured as the absolute determinant of the 3×3 matrix
/// whose rows are the three points. With a shared constant elevation the
/// determinant equals twice the planar triangle area scaled by that
/// elevation, so the elevation must be nonzero for the check to
/// discriminate.
///
/// The pass is purely geometric and ignores grid obstacles; run it only on
/// paths already known to be obstacle-free. Applying it twice changes
/// nothing.
#[derive(Clone, Copy, Debug)]
pub struct CollinearityReducer {
    epsilon: f32,
}

impl Default for CollinearityReducer {
    fn default() -> Self {
        Self { epsilon: 1e-6 }
    }
}

impl CollinearityReducer {
    /// Create a reducer with the given collinearity threshold.
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// Create a reducer with the default threshold.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Remove collinear interior points from `path`.
    pub fn reduce(&self, path: &[Waypoint]) -> Vec<Waypoint> {
        let mut points = path.to_vec();
        let mut index = 0;

        while index + 2 < points.len() {
            if self.collinear(points[index], points[index + 1], points[index + 2]) {
                // The third point becomes the second and the triple at this
                // index is re-tested on the next iteration.
                points.remove(index + 1);
            } else {
                index += 1;
            }
        }

        points
    }

    /// Whether three points lie within the threshold of a straight line.
    pub fn collinear(&self, p1: Waypoint, p2: Waypoint, p3: Waypoint) -> bool {
        determinant(p1, p2, p3) < self.epsilon
    }
}

/// Absolute determinant of the 3×3 matrix with rows `p1`, `p2`, `p3`.
fn determinant(p1: Waypoint, p2: Waypoint, p3: Waypoint) -> f32 {
    (p1.x * (p2.y * p3.elevation - p2.elevation * p3.y)
        + p1.y * (p2.elevation * p3.x - p2.x * p3.elevation)
        + p1.elevation * (p2.x * p3.y - p2.y * p3.x))
        .abs()
}
