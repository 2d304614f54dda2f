//! Game tuning configuration
//!
//! All handling and world constants live here as serde structs so they can
//! be loaded from TOML/RON settings files through
//! [`flight_engine::config::Config`]. Defaults are the shipped tuning.

use flight_engine::config::Config;
use flight_engine::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Drone handling tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneConfig {
    /// Nominal top horizontal speed in m/s, used to normalize battery drain
    pub max_speed: f32,

    /// Horizontal acceleration in m/s^2
    pub acceleration: f32,

    /// Horizontal drag coefficient per second
    pub drag: f32,

    /// Vertical acceleration in m/s^2
    pub vertical_accel: f32,

    /// Vertical drag coefficient per second
    pub vertical_drag: f32,

    /// Yaw rate at full stick, in rad/s
    pub yaw_speed: f32,

    /// Collision sphere radius in meters
    pub radius: f32,

    /// Maximum visual tilt in radians; physics stays level
    pub tilt_max: f32,

    /// Exponential smoothing rate for tilt
    pub tilt_rate: f32,
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            max_speed: 18.0,
            acceleration: 26.0,
            drag: 2.8,
            vertical_accel: 18.0,
            vertical_drag: 3.4,
            yaw_speed: 2.5,
            radius: 0.5,
            tilt_max: 0.3,
            tilt_rate: 10.0,
        }
    }
}

/// Battery drain tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryConfig {
    /// Full charge
    pub max: f32,

    /// Drain per second at top horizontal speed
    pub drain_move: f32,

    /// Drain per second while ascending
    pub drain_ascend: f32,

    /// Drain per second while descending
    pub drain_descend: f32,

    /// Drain per second while hovering
    pub drain_idle: f32,

    /// Charge restored per collected ring
    pub reward: f32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            drain_move: 0.5,
            drain_ascend: 1.25,
            drain_descend: 0.5,
            drain_idle: 0.0,
            reward: 15.0,
        }
    }
}

/// Traffic lane and car tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficConfig {
    /// Car half-extents (width, height, length halves) in lane-local space,
    /// with the length along the travel axis
    pub car_half_extents: Vec3,

    /// Cars wrap to the opposite end of their lane beyond this coordinate
    pub wrap_range: f32,

    /// Extra slab distance added to the query radius when gathering nearby
    /// car colliders
    pub search_pad: f32,

    /// Spacing between lane center lines in meters
    pub lane_step: f32,

    /// Offset from the lane center line for two-way traffic
    pub lane_offset: f32,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            car_half_extents: Vec3::new(1.0, 0.6, 2.25),
            wrap_range: 500.0,
            search_pad: 5.0,
            lane_step: 34.0,
            lane_offset: 5.0,
        }
    }
}

/// World indexing tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Broad-phase grid cell size in meters; matches the world chunk size
    pub cell_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { cell_size: 100.0 }
    }
}

/// Root game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Drone handling
    pub drone: DroneConfig,

    /// Battery drain
    pub battery: BatteryConfig,

    /// Traffic lanes and cars
    pub traffic: TrafficConfig,

    /// World indexing
    pub world: WorldConfig,
}

impl Config for GameConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_shipped_tuning() {
        let config = GameConfig::default();

        assert_relative_eq!(config.drone.acceleration, 26.0);
        assert_relative_eq!(config.drone.drag, 2.8);
        assert_relative_eq!(config.drone.radius, 0.5);
        assert_relative_eq!(config.battery.max, 100.0);
        assert_relative_eq!(config.world.cell_size, 100.0);
    }

    #[test]
    fn test_toml_override_of_a_single_field() {
        let toml = r"
            [drone]
            max_speed = 18.0
            acceleration = 40.0
            drag = 2.8
            vertical_accel = 18.0
            vertical_drag = 3.4
            yaw_speed = 2.5
            radius = 0.5
            tilt_max = 0.3
            tilt_rate = 10.0

            [battery]
            max = 100.0
            drain_move = 0.5
            drain_ascend = 1.25
            drain_descend = 0.5
            drain_idle = 0.0
            reward = 15.0

            [traffic]
            car_half_extents = [1.0, 0.6, 2.25]
            wrap_range = 500.0
            search_pad = 5.0
            lane_step = 34.0
            lane_offset = 5.0

            [world]
            cell_size = 100.0
        ";

        let config = GameConfig::load_from_str(toml, "settings.toml").unwrap();
        assert_relative_eq!(config.drone.acceleration, 40.0);
        assert_relative_eq!(config.traffic.car_half_extents.z, 2.25);
    }
}
