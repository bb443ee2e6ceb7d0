//! Configuration loading for MargaNav
//!
//! Loads planner settings from a single TOML file with sensible defaults:
//!
//! ```toml
//! [search]
//! metric = "chebyshev"
//!
//! [simplify]
//! visibility = true
//! collinearity = true
//! epsilon = 1.0
//!
//! [world]
//! elevation = 1.0
//! offset = [49.5, -49.5, 0.0]
//! scale = [-1.0, 1.0, 1.0]
//! ```
//!
//! Every section and field is optional; missing values fall back to the
//! built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Waypoint;
use crate::error::Result;
use crate::metric::DistanceMetric;
use crate::pipeline::{PlannerConfig, WorldTransform};

/// Full MargaNav configuration loaded from TOML
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MargaConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Path simplification settings
    #[serde(default)]
    pub simplify: SimplifySection,

    /// World-space conversion settings
    #[serde(default)]
    pub world: WorldSection,
}

/// Search settings section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchSection {
    /// Distance function: "euclidean", "manhattan" or "chebyshev"
    #[serde(default)]
    pub metric: DistanceMetric,
}

/// Path simplification settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimplifySection {
    /// Enable grid-aware visibility pruning
    #[serde(default = "default_enabled")]
    pub visibility: bool,

    /// Enable collinearity reduction
    #[serde(default = "default_enabled")]
    pub collinearity: bool,

    /// Collinearity threshold used by the pipeline
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
}

impl Default for SimplifySection {
    fn default() -> Self {
        Self {
            visibility: true,
            collinearity: true,
            epsilon: 1.0,
        }
    }
}

/// World-space conversion settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSection {
    /// Constant waypoint elevation (nonzero so collinearity can
    /// discriminate)
    #[serde(default = "default_elevation")]
    pub elevation: f32,

    /// World-space offset `[x, y, elevation]`
    #[serde(default = "default_offset")]
    pub offset: [f32; 3],

    /// World-space per-axis scale `[x, y, elevation]`
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            elevation: 1.0,
            offset: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl MargaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from the default config path (`configs/marga.toml`), falling
    /// back to built-in defaults when the file does not exist
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/marga.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert to a runtime planner configuration
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            metric: self.search.metric,
            visibility_pruning: self.simplify.visibility,
            collinearity_pruning: self.simplify.collinearity,
            collinearity_epsilon: self.simplify.epsilon,
            elevation: self.world.elevation,
            transform: WorldTransform {
                offset: Waypoint::new(
                    self.world.offset[0],
                    self.world.offset[1],
                    self.world.offset[2],
                ),
                scale: Waypoint::new(
                    self.world.scale[0],
                    self.world.scale[1],
                    self.world.scale[2],
                ),
            },
        }
    }
}

// Default value functions for serde deserialization

fn default_enabled() -> bool {
    true
}

fn default_epsilon() -> f32 {
    1.0
}

fn default_elevation() -> f32 {
    1.0
}

fn default_offset() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MargaConfig::default();
        assert_eq!(config.search.metric, DistanceMetric::Euclidean);
        assert!(config.simplify.visibility);
        assert!(config.simplify.collinearity);
        assert_eq!(config.simplify.epsilon, 1.0);
        assert_eq!(config.world.elevation, 1.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = MargaConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed = MargaConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed.search.metric, config.search.metric);
        assert_eq!(parsed.simplify.epsilon, config.simplify.epsilon);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = MargaConfig::from_toml(
            r#"
            [search]
            metric = "chebyshev"

            [simplify]
            visibility = false
            "#,
        )
        .unwrap();

        assert_eq!(config.search.metric, DistanceMetric::Chebyshev);
        assert!(!config.simplify.visibility);
        // Unspecified fields fall back to defaults
        assert!(config.simplify.collinearity);
        assert_eq!(config.simplify.epsilon, 1.0);
        assert_eq!(config.world.scale, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = MargaConfig::from_toml("metric = [not toml").unwrap_err();
        assert!(matches!(err, crate::error::MargaError::Config(_)));
    }

    #[test]
    fn test_to_planner_config() {
        let config = MargaConfig::from_toml(
            r#"
            [search]
            metric = "manhattan"

            [world]
            elevation = 2.0
            offset = [10.0, -5.0, 0.0]
            scale = [-1.0, 1.0, 1.0]
            "#,
        )
        .unwrap();

        let planner = config.to_planner_config();
        assert_eq!(planner.metric, DistanceMetric::Manhattan);
        assert_eq!(planner.elevation, 2.0);
        assert_eq!(planner.transform.offset, Waypoint::new(10.0, -5.0, 0.0));
        assert_eq!(planner.transform.scale, Waypoint::new(-1.0, 1.0, 1.0));
    }
}
