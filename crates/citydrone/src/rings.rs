//! Collectible ring gates
//!
//! Rings are upright tori the drone flies through. The rim is solid and is
//! surfaced to collision queries as a transient torus obstacle, while the
//! hole is scored: passing near the ring center on the ring plane collects
//! it. Placement comes from the world-generation collaborator.

use flight_engine::foundation::math::{yaw_rotation, Mat4, Point3, Vec3};
use flight_engine::physics::ObstacleShape;
use log::debug;

/// Radius of a ring's center circle
pub const RING_RADIUS: f32 = 1.5;
/// Radius of the rim tube
pub const TUBE_RADIUS: f32 = 0.2;

/// Collection window: planar distance from the ring center
const HOLE_RADIUS: f32 = 1.0;
/// Collection window: distance from the ring plane
const HOLE_HALF_DEPTH: f32 = 0.5;

/// One placed ring
#[derive(Debug, Clone)]
pub struct Ring {
    /// World position of the ring center
    pub position: Vec3,
    /// Heading of the ring plane about the vertical axis, in radians
    pub yaw: f32,
}

impl Ring {
    fn world_transform(&self) -> Mat4 {
        Mat4::new_translation(&self.position) * yaw_rotation(self.yaw).to_homogeneous()
    }
}

/// Active ring set and its collision shapes
pub struct RingSystem {
    rings: Vec<Ring>,
    // Rebuilt on placement changes, not per query
    shapes: Vec<ObstacleShape>,
}

impl Default for RingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RingSystem {
    /// Create an empty ring set
    pub fn new() -> Self {
        Self {
            rings: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Place a ring
    pub fn add_ring(&mut self, position: Vec3, yaw: f32) {
        self.rings.push(Ring { position, yaw });
        self.rebuild_shapes();
    }

    /// Active rings
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Transient torus obstacles for the active rings
    ///
    /// Rings are few and always relevant to the player, so they bypass the
    /// spatial grid and ride along with every query.
    pub fn obstacle_shapes(&self) -> &[ObstacleShape] {
        &self.shapes
    }

    /// Collect any ring the body center is passing through
    ///
    /// A ring is collected when the body sits inside the hole: planar
    /// distance from the ring axis under [`HOLE_RADIUS`] and distance from
    /// the ring plane under [`HOLE_HALF_DEPTH`], both in ring-local space.
    /// Returns the number of rings collected this frame.
    pub fn update(&mut self, body_position: Vec3) -> usize {
        let before = self.rings.len();

        self.rings.retain(|ring| {
            let inv = ring
                .world_transform()
                .try_inverse()
                .unwrap_or_else(Mat4::identity);
            let local = inv.transform_point(&Point3::new(
                body_position.x,
                body_position.y,
                body_position.z,
            ));

            let planar = (local.x * local.x + local.y * local.y).sqrt();
            let depth = local.z.abs();
            !(planar < HOLE_RADIUS && depth < HOLE_HALF_DEPTH)
        });

        let collected = before - self.rings.len();
        if collected > 0 {
            debug!("collected {collected} ring(s), {} remain", self.rings.len());
            self.rebuild_shapes();
        }
        collected
    }

    fn rebuild_shapes(&mut self) {
        self.shapes = self
            .rings
            .iter()
            .map(|ring| ObstacleShape::torus(ring.world_transform(), RING_RADIUS, TUBE_RADIUS))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flying_through_the_hole_collects() {
        let mut rings = RingSystem::new();
        rings.add_ring(Vec3::new(0.0, 10.0, 0.0), 0.0);

        let collected = rings.update(Vec3::new(0.2, 10.1, 0.0));

        assert_eq!(collected, 1);
        assert!(rings.rings().is_empty());
        assert!(rings.obstacle_shapes().is_empty());
    }

    #[test]
    fn test_passing_beside_the_ring_does_not_collect() {
        let mut rings = RingSystem::new();
        rings.add_ring(Vec3::new(0.0, 10.0, 0.0), 0.0);

        // Outside the hole radius on the ring plane
        assert_eq!(rings.update(Vec3::new(1.2, 10.0, 0.0)), 0);
        // In front of the ring, outside the plane window
        assert_eq!(rings.update(Vec3::new(0.0, 10.0, 2.0)), 0);
        assert_eq!(rings.rings().len(), 1);
    }

    #[test]
    fn test_yawed_ring_collects_in_local_space() {
        let mut rings = RingSystem::new();
        // Ring plane rotated 90 degrees: the hole now opens along world X
        rings.add_ring(Vec3::new(0.0, 10.0, 0.0), std::f32::consts::FRAC_PI_2);

        // Approaching along world X sits on the ring axis
        assert_eq!(rings.update(Vec3::new(0.3, 10.0, 0.0)), 1);
    }

    #[test]
    fn test_shapes_track_ring_count() {
        let mut rings = RingSystem::new();
        rings.add_ring(Vec3::new(0.0, 10.0, 0.0), 0.0);
        rings.add_ring(Vec3::new(20.0, 10.0, 0.0), 1.0);

        assert_eq!(rings.obstacle_shapes().len(), 2);

        rings.update(Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(rings.obstacle_shapes().len(), 1);
    }
}
