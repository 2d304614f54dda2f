//! Per-frame simulation orchestration
//!
//! One `step` runs the whole core in its required order: waypoint bodies
//! move first, then the drone integrates, then contacts are resolved against
//! the updated world, then gameplay (rings, battery) reads the final state.
//! Everything is synchronous; a frame either completes or is skipped whole.

use crate::battery::Battery;
use crate::config::GameConfig;
use crate::drone::Drone;
use crate::input::ControlInput;
use crate::rings::RingSystem;
use crate::traffic::TrafficSystem;
use crate::world::World;
use flight_engine::physics::{DynamicBody, ObstacleShape, PhysicsEngine};

/// What happened during one frame, for external feedback collaborators
#[derive(Debug, Clone, Copy, Default)]
pub struct StepReport {
    /// At least one contact was resolved (impact audio, particles)
    pub impact: bool,
    /// Rings collected this frame (reward audio, scoring)
    pub collected: usize,
}

/// The complete single-player simulation
pub struct Simulation {
    /// Static world and collision registry
    pub world: World,
    /// Player flight body
    pub drone: Drone,
    /// Lane traffic
    pub traffic: TrafficSystem,
    /// Collectible rings
    pub rings: RingSystem,
    /// Battery charge
    pub battery: Battery,
    physics: PhysicsEngine,
    reward: f32,
}

impl Simulation {
    /// Create a simulation from game configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: World::new(&config.world),
            drone: Drone::new(config.drone.clone()),
            traffic: TrafficSystem::new(config.traffic),
            rings: RingSystem::new(),
            battery: Battery::new(config.battery.clone(), config.drone.max_speed),
            physics: PhysicsEngine::new(),
            reward: config.battery.reward,
        }
    }

    /// Advance the simulation by one frame
    ///
    /// `dt` must already be clamped (see
    /// [`flight_engine::foundation::time::Timer`]); `input` components must
    /// be bounded to [-1, 1].
    pub fn step(&mut self, dt: f32, input: &ControlInput) -> StepReport {
        // Obstacle movement completes before any query sees this frame
        self.traffic.update(dt);

        self.drone.update(dt, input);

        // Rings and nearby cars bypass the grid as transients
        let mut transient: Vec<ObstacleShape> = self.rings.obstacle_shapes().to_vec();
        transient.extend(
            self.traffic
                .nearby_colliders(self.drone.position, self.drone.collider_radius()),
        );

        let impact = self
            .physics
            .resolve_collisions(self.world.collision(), &mut self.drone, &transient);

        // Gameplay reads the post-resolution position
        let collected = self.rings.update(self.drone.position);
        for _ in 0..collected {
            self.battery.add(self.reward);
        }
        self.battery.update(dt, self.drone.velocity, input);

        StepReport { impact, collected }
    }

    /// Reset the session: reposition the drone and recharge the battery
    ///
    /// World obstacles and traffic persist; rings are a gameplay concern the
    /// caller reseeds.
    pub fn reset(&mut self) {
        self.drone.reset(Drone::SPAWN_POSITION);
        self.battery.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traffic::{Car, LaneAxis};
    use crate::world::ObstacleDesc;
    use approx::assert_relative_eq;
    use flight_engine::foundation::math::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn simulation() -> Simulation {
        flight_engine::foundation::logging::init_for_tests();
        Simulation::new(GameConfig::default())
    }

    #[test]
    fn test_free_flight_reports_nothing() {
        let mut sim = simulation();
        let report = sim.step(DT, &ControlInput::neutral());

        assert!(!report.impact);
        assert_eq!(report.collected, 0);
    }

    #[test]
    fn test_descending_drone_lands_on_ground() {
        let mut sim = simulation();
        let down = ControlInput {
            y: -1.0,
            ..Default::default()
        };

        for _ in 0..1200 {
            sim.step(DT, &down);
        }

        // Held at the collider radius by the resolver
        let radius = sim.drone.collider_radius();
        assert_relative_eq!(sim.drone.position.y, radius, epsilon = 1e-3);
    }

    #[test]
    fn test_flying_into_a_building_reports_impact() {
        let mut sim = simulation();
        sim.world.register_static(&[ObstacleDesc::Block {
            position: Vec3::new(0.0, 5.0, -6.0),
            half_extents: Vec3::new(4.0, 20.0, 1.0),
        }]);

        let forward = ControlInput {
            z: -1.0,
            ..Default::default()
        };
        let mut hit = false;
        for _ in 0..600 {
            if sim.step(DT, &forward).impact {
                hit = true;
                break;
            }
        }

        assert!(hit);
        // Pushed back out of the wall face
        assert!(sim.drone.position.z > -5.0 + sim.drone.collider_radius() - 1e-3);
    }

    #[test]
    fn test_flying_through_a_ring_collects_and_recharges() {
        let mut sim = simulation();
        // Ring dead ahead at spawn altitude, facing the flight path
        sim.rings.add_ring(Vec3::new(0.0, 5.0, -8.0), 0.0);
        // Drain some charge first so the reward is visible
        sim.battery.update(10.0, Vec3::new(18.0, 0.0, 0.0), &ControlInput::neutral());
        let before = sim.battery.current();

        let forward = ControlInput {
            z: -1.0,
            ..Default::default()
        };
        let mut collected = 0;
        for _ in 0..600 {
            collected += sim.step(DT, &forward).collected;
        }

        assert_eq!(collected, 1);
        assert!(sim.rings.rings().is_empty());
        assert!(sim.battery.current() > before);
    }

    #[test]
    fn test_moving_car_is_hit_where_it_is_now() {
        let mut sim = simulation();
        // Car driving under the hovering drone's column; drone descends onto
        // the lane
        sim.traffic.add_car(Car {
            position: Vec3::new(-2.0, 0.6, 0.0),
            axis: LaneAxis::X,
            direction: 1.0,
            speed: 4.0,
        });

        let down = ControlInput {
            y: -1.0,
            ..Default::default()
        };
        let mut hit = false;
        for _ in 0..1200 {
            if sim.step(DT, &down).impact {
                // First contact is the car roof, well above ground level
                if sim.drone.position.y > 1.0 {
                    hit = true;
                    break;
                }
            }
        }

        assert!(hit);
    }

    #[test]
    fn test_reset_restores_drone_and_battery() {
        let mut sim = simulation();
        let forward = ControlInput {
            z: -1.0,
            y: 1.0,
            ..Default::default()
        };
        for _ in 0..600 {
            sim.step(DT, &forward);
        }

        sim.reset();

        assert_eq!(sim.drone.position, Drone::SPAWN_POSITION);
        assert_relative_eq!(sim.battery.current(), 100.0);
    }
}
