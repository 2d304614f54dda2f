//! Spatial partitioning data structures
//!
//! Provides the axis-aligned bounding box primitive and the uniform hash
//! grid used for broad-phase collision queries against static obstacles.

mod aabb;
mod grid;

pub use aabb::Aabb;
pub use grid::SpatialHashGrid;
