//! Core geometric types for the MargaNav library.
//!
//! - [`GridCoord`]: integer cell indices for cost-grid access
//! - [`WorldPoint`]: planar floating-point coordinates
//! - [`Waypoint`]: 3D path point (planar coordinates plus constant
//!   elevation), the unit of simplified paths

mod point;

pub use point::{GridCoord, Waypoint, WorldPoint};
