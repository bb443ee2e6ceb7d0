//! Distance metrics for search and heuristic estimation.
//!
//! The same function serves as step cost and heuristic. The metric also
//! fixes the expansion connectivity: Chebyshev pairs with 8-connected
//! neighborhoods, the others with 4-connected.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// Distance function used for both step costs and heuristic estimates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Straight-line distance; 4-connected expansion.
    #[default]
    Euclidean,
    /// Sum of absolute coordinate differences; 4-connected expansion.
    Manhattan,
    /// Maximum absolute coordinate difference; 8-connected expansion.
    Chebyshev,
}

impl DistanceMetric {
    /// Distance between two cells under this metric.
    #[inline]
    pub fn distance(&self, from: GridCoord, to: GridCoord) -> f32 {
        let dx = (to.x - from.x).abs() as f32;
        let dy = (to.y - from.y).abs() as f32;
        match self {
            DistanceMetric::Euclidean => (dx * dx + dy * dy).sqrt(),
            DistanceMetric::Manhattan => dx + dy,
            DistanceMetric::Chebyshev => dx.max(dy),
        }
    }

    /// Whether expansion under this metric includes diagonal neighbors.
    #[inline]
    pub fn diagonal(&self) -> bool {
        matches!(self, DistanceMetric::Chebyshev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        let m = DistanceMetric::Euclidean;
        let d = m.distance(GridCoord::new(0, 0), GridCoord::new(3, 4));
        assert!((d - 5.0).abs() < 1e-6);
        assert!(!m.diagonal());
    }

    #[test]
    fn test_manhattan() {
        let m = DistanceMetric::Manhattan;
        let d = m.distance(GridCoord::new(2, 3), GridCoord::new(-1, 5));
        assert!((d - 5.0).abs() < 1e-6);
        assert!(!m.diagonal());
    }

    #[test]
    fn test_chebyshev() {
        let m = DistanceMetric::Chebyshev;
        let d = m.distance(GridCoord::new(0, 0), GridCoord::new(3, 7));
        assert!((d - 7.0).abs() < 1e-6);
        assert!(m.diagonal());

        // Diagonal steps cost one unit
        let step = m.distance(GridCoord::new(4, 4), GridCoord::new(5, 5));
        assert!((step - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_euclidean() {
        assert_eq!(DistanceMetric::default(), DistanceMetric::Euclidean);
    }
}
