//! Lane-following traffic
//!
//! Cars run along fixed axis-aligned lanes and wrap at the world edge. They
//! are waypoint bodies, not physics bodies: each integrates its own position
//! and surfaces its current footprint to collision queries as a transient
//! box obstacle. Traffic is never passed to the resolver.
//!
//! Keeping a hundred moving boxes in the persistent grid would force a full
//! rebuild every frame; a linear scan near the query point is cheaper at
//! these counts.

use crate::config::TrafficConfig;
use flight_engine::foundation::math::Vec3;
use flight_engine::physics::ObstacleShape;
use flight_engine::spatial::Aabb;

/// Axis a car travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneAxis {
    /// Travels along world X
    X,
    /// Travels along world Z
    Z,
}

/// One car on a lane
#[derive(Debug, Clone)]
pub struct Car {
    /// World position of the car center
    pub position: Vec3,
    /// Travel axis
    pub axis: LaneAxis,
    /// Travel direction along the axis, +1 or -1
    pub direction: f32,
    /// Speed in m/s
    pub speed: f32,
}

impl Car {
    /// Velocity vector implied by lane, direction and speed
    pub fn velocity(&self) -> Vec3 {
        match self.axis {
            LaneAxis::X => Vec3::new(self.direction * self.speed, 0.0, 0.0),
            LaneAxis::Z => Vec3::new(0.0, 0.0, self.direction * self.speed),
        }
    }
}

/// All traffic in the world
pub struct TrafficSystem {
    cars: Vec<Car>,
    config: TrafficConfig,
}

impl TrafficSystem {
    /// Create an empty traffic system
    pub fn new(config: TrafficConfig) -> Self {
        Self {
            cars: Vec::new(),
            config,
        }
    }

    /// Create a traffic system with pre-placed cars
    ///
    /// Placement comes from the world-generation collaborator; lane snapping
    /// uses [`TrafficConfig::lane_step`] and [`TrafficConfig::lane_offset`]
    /// there, not here.
    pub fn with_cars(config: TrafficConfig, cars: Vec<Car>) -> Self {
        Self { cars, config }
    }

    /// Add a car
    pub fn add_car(&mut self, car: Car) {
        self.cars.push(car);
    }

    /// All cars
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Advance every car along its lane, wrapping at the world edge
    pub fn update(&mut self, dt: f32) {
        let range = self.config.wrap_range;

        for car in &mut self.cars {
            match car.axis {
                LaneAxis::X => {
                    car.position.x += car.direction * car.speed * dt;
                    if car.position.x > range {
                        car.position.x = -range;
                    }
                    if car.position.x < -range {
                        car.position.x = range;
                    }
                }
                LaneAxis::Z => {
                    car.position.z += car.direction * car.speed * dt;
                    if car.position.z > range {
                        car.position.z = -range;
                    }
                    if car.position.z < -range {
                        car.position.z = range;
                    }
                }
            }
        }
    }

    /// Footprints of cars near a query point, as transient box obstacles
    ///
    /// A car's length runs along its travel axis, so the box half-extents
    /// swap X/Z for cars on X lanes. Selection is a per-axis slab test
    /// within `radius + search_pad`.
    pub fn nearby_colliders(&self, center: Vec3, radius: f32) -> Vec<ObstacleShape> {
        let reach = radius + self.config.search_pad;
        let half = self.config.car_half_extents;

        self.cars
            .iter()
            .filter(|car| {
                (car.position.x - center.x).abs() < reach
                    && (car.position.z - center.z).abs() < reach
            })
            .map(|car| {
                let extents = match car.axis {
                    LaneAxis::Z => half,
                    LaneAxis::X => Vec3::new(half.z, half.y, half.x),
                };
                ObstacleShape::aligned_box(Aabb::from_center_extents(car.position, extents))
            })
            .collect()
    }
}
