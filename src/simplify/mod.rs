//! Path simplification passes.
//!
//! Two independent, composable passes over a waypoint sequence:
//!
//! - [`VisibilityPruner`]: grid-aware — removes waypoints whose covering
//!   straight segment rasterizes obstacle-free against the cost grid
//! - [`CollinearityReducer`]: grid-agnostic — removes waypoints lying
//!   (approximately) on the line through their neighbors
//!
//! The rasterizer backing the visibility pass is exported as [`rasterize`]
//! so callers can re-validate pruned paths cell by cell.

mod collinear;
mod raster;
mod visibility;

pub use collinear::CollinearityReducer;
pub use raster::rasterize;
pub use visibility::VisibilityPruner;
