//! World obstacle registry
//!
//! The world owns the collision system and translates obstacle descriptions
//! from the map-loading collaborator into registrations. Descriptions only
//! arrive after a successful parse; this module never sees partial map
//! data. Moving or edited obstacles must be explicitly re-registered; the
//! collision system does not poll for movement.

use crate::config::WorldConfig;
use flight_engine::foundation::math::{yaw_rotation, Mat4, Vec3};
use flight_engine::physics::{CollisionSystem, ObstacleKey, ObstacleShape};
use flight_engine::spatial::Aabb;
use log::info;
use serde::{Deserialize, Serialize};

/// One obstacle entry from the map's entity list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ObstacleDesc {
    /// Axis-aligned block: buildings, terrain pieces, street furniture
    Block {
        /// World position of the block center
        position: Vec3,
        /// Half-extents on each axis
        half_extents: Vec3,
    },
    /// Ring gate placed by the map rather than spawned as a collectible
    Gate {
        /// World position of the ring center
        position: Vec3,
        /// Heading of the ring plane about the vertical axis, in radians
        rotation_y: f32,
        /// Radius of the ring's center circle
        ring_radius: f32,
        /// Radius of the rim tube
        tube_radius: f32,
    },
}

impl ObstacleDesc {
    /// Build the collision shape this description registers
    pub fn to_shape(&self) -> ObstacleShape {
        match self {
            Self::Block {
                position,
                half_extents,
            } => ObstacleShape::aligned_box(Aabb::from_center_extents(*position, *half_extents)),
            Self::Gate {
                position,
                rotation_y,
                ring_radius,
                tube_radius,
            } => {
                let world =
                    Mat4::new_translation(position) * yaw_rotation(*rotation_y).to_homogeneous();
                ObstacleShape::torus(world, *ring_radius, *tube_radius)
            }
        }
    }
}

/// Owns the collision system and the static obstacle registrations
pub struct World {
    collision: CollisionSystem,
}

impl World {
    /// Create an empty world
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            collision: CollisionSystem::new(config.cell_size),
        }
    }

    /// Register a batch of parsed obstacle descriptions
    ///
    /// Returns the keys in description order; the caller keeps them for
    /// later removal or updates.
    pub fn register_static(&mut self, descs: &[ObstacleDesc]) -> Vec<ObstacleKey> {
        let keys = descs
            .iter()
            .map(|desc| self.collision.register(desc.to_shape()))
            .collect();
        info!(
            "registered {} static obstacles ({} total)",
            descs.len(),
            self.collision.obstacle_count()
        );
        keys
    }

    /// Remove one registered obstacle
    pub fn remove(&mut self, key: ObstacleKey) {
        self.collision.remove(key);
    }

    /// Re-register an obstacle that moved or was edited
    pub fn update_body(&mut self, key: ObstacleKey, desc: &ObstacleDesc) {
        self.collision.update_obstacle(key, desc.to_shape());
    }

    /// Drop every registration
    pub fn clear(&mut self) {
        self.collision.clear();
    }

    /// The collision system, for queries
    pub fn collision(&self) -> &CollisionSystem {
        &self.collision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_engine::physics::ContactSource;

    #[test]
    fn test_registered_blocks_are_queryable() {
        let mut world = World::new(&WorldConfig::default());
        let keys = world.register_static(&[ObstacleDesc::Block {
            position: Vec3::new(0.0, 10.0, 0.0),
            half_extents: Vec3::new(2.0, 10.0, 2.0),
        }]);

        let contacts = world
            .collision()
            .check_collisions(Vec3::new(2.3, 10.0, 0.0), 0.5, &[]);

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].source, ContactSource::Static(keys[0]));
    }

    #[test]
    fn test_descriptions_round_trip_through_ron() {
        let descs = vec![
            ObstacleDesc::Block {
                position: Vec3::new(1.0, 2.0, 3.0),
                half_extents: Vec3::new(4.0, 5.0, 6.0),
            },
            ObstacleDesc::Gate {
                position: Vec3::new(0.0, 12.0, -30.0),
                rotation_y: 1.2,
                ring_radius: 1.5,
                tube_radius: 0.2,
            },
        ];

        let text = ron::to_string(&descs).unwrap();
        let parsed: Vec<ObstacleDesc> = ron::from_str(&text).unwrap();

        assert_eq!(parsed.len(), 2);
        let ObstacleDesc::Gate { ring_radius, .. } = &parsed[1] else {
            panic!("expected gate");
        };
        assert_eq!(*ring_radius, 1.5);
    }

    #[test]
    fn test_update_body_follows_an_edited_obstacle() {
        let mut world = World::new(&WorldConfig::default());
        let keys = world.register_static(&[ObstacleDesc::Block {
            position: Vec3::new(0.0, 5.0, 0.0),
            half_extents: Vec3::new(1.0, 1.0, 1.0),
        }]);

        world.update_body(
            keys[0],
            &ObstacleDesc::Block {
                position: Vec3::new(300.0, 5.0, 0.0),
                half_extents: Vec3::new(1.0, 1.0, 1.0),
            },
        );

        assert!(world
            .collision()
            .check_collisions(Vec3::new(0.0, 5.0, 0.0), 0.5, &[])
            .is_empty());
        assert!(!world
            .collision()
            .check_collisions(Vec3::new(300.8, 5.0, 0.0), 0.5, &[])
            .is_empty());
    }

    #[test]
    fn test_clear_empties_the_registry() {
        let mut world = World::new(&WorldConfig::default());
        world.register_static(&[ObstacleDesc::Block {
            position: Vec3::new(0.0, 5.0, 0.0),
            half_extents: Vec3::new(1.0, 1.0, 1.0),
        }]);

        world.clear();

        assert_eq!(world.collision().obstacle_count(), 0);
    }
}
