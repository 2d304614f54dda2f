//! Obstacle shapes and their broad-phase footprints
//!
//! Obstacles are registered by the external world/entity layer; the
//! collision system only indexes a handle plus a cached footprint box. A
//! moved obstacle must be explicitly re-registered; footprints are
//! snapshots, never polled.

use crate::foundation::math::{Mat4, Point3, Vec3};
use crate::spatial::Aabb;

slotmap::new_key_type! {
    /// Opaque handle to an obstacle registered with the collision system.
    ///
    /// The external entity layer owns entity lifetime; this key only names
    /// the registration.
    pub struct ObstacleKey;
}

/// Shape of an obstacle, as tested against a spherical query
///
/// The set is closed: the ground plane is implicit in every query and is not
/// a registerable shape.
#[derive(Debug, Clone)]
pub enum ObstacleShape {
    /// World-space axis-aligned box (buildings, terrain blocks, vehicles)
    Box {
        /// World-space bounds
        aabb: Aabb,
    },
    /// Ring gate: a torus lying in its local XY plane with +Z normal
    Torus {
        /// Local-to-world transform
        world: Mat4,
        /// Cached inverse of `world`, for projecting query points into
        /// local space
        inv_world: Mat4,
        /// Radius of the ring's center circle
        ring_radius: f32,
        /// Radius of the tube around the center circle
        tube_radius: f32,
    },
}

impl ObstacleShape {
    /// Create a box obstacle from world-space bounds
    pub fn aligned_box(aabb: Aabb) -> Self {
        Self::Box { aabb }
    }

    /// Create a torus obstacle from its world transform and radii
    ///
    /// The inverse transform is cached at construction. A non-invertible
    /// matrix falls back to identity rather than faulting; ring transforms
    /// are rigid in practice.
    pub fn torus(world: Mat4, ring_radius: f32, tube_radius: f32) -> Self {
        let inv_world = world.try_inverse().unwrap_or_else(Mat4::identity);
        Self::Torus {
            world,
            inv_world,
            ring_radius,
            tube_radius,
        }
    }

    /// Conservative world-space bounding box, used for grid indexing
    pub fn footprint(&self) -> Aabb {
        match self {
            Self::Box { aabb } => *aabb,
            Self::Torus {
                world,
                ring_radius,
                tube_radius,
                ..
            } => {
                // Extent covers the torus in any orientation
                let center = world.transform_point(&Point3::origin());
                let reach = ring_radius + tube_radius;
                Aabb::from_center_extents(
                    Vec3::new(center.x, center.y, center.z),
                    Vec3::new(reach, reach, reach),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_footprint_is_its_bounds() {
        let aabb = Aabb::new(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(1.0, 4.0, 2.0));
        let shape = ObstacleShape::aligned_box(aabb);

        assert_eq!(shape.footprint(), aabb);
    }

    #[test]
    fn test_torus_footprint_covers_ring_reach() {
        let world = Mat4::new_translation(&Vec3::new(10.0, 5.0, -3.0));
        let shape = ObstacleShape::torus(world, 1.5, 0.2);
        let footprint = shape.footprint();

        assert_relative_eq!(footprint.min.x, 10.0 - 1.7, epsilon = 1e-6);
        assert_relative_eq!(footprint.max.z, -3.0 + 1.7, epsilon = 1e-6);
    }

    #[test]
    fn test_torus_caches_inverse_transform() {
        let world = Mat4::new_translation(&Vec3::new(4.0, 0.0, 0.0));
        let ObstacleShape::Torus { inv_world, .. } = ObstacleShape::torus(world, 1.5, 0.2) else {
            panic!("expected torus");
        };

        let local = inv_world.transform_point(&Point3::new(4.0, 0.0, 0.0));
        assert_relative_eq!(local.x, 0.0, epsilon = 1e-6);
    }
}
