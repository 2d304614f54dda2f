//! Drone flight body
//!
//! Converts the per-frame control vector into acceleration, integrates
//! velocity under split horizontal/vertical drag, and derives the cosmetic
//! state (tilt, propeller spin) from the same kinematics. There are no
//! discrete flight modes; resting on the ground is just a persistent ground
//! contact handled by the resolver.
//!
//! Input is trusted to be bounded and `dt` to be clamped by the frame timer;
//! the integrator itself has no error path.

use crate::config::DroneConfig;
use crate::input::ControlInput;
use flight_engine::foundation::math::{damp, yaw_rotation, Vec3};
use flight_engine::physics::DynamicBody;

/// Propeller spin rate at rest, in rad/s
const PROP_BASE_RATE: f32 = 20.0;
/// Additional propeller spin per m/s of flight speed
const PROP_SPEED_RATE: f32 = 2.0;

/// Smoothed visual tilt, in radians
#[derive(Debug, Clone, Copy, Default)]
pub struct Tilt {
    /// Nose pitch, driven by the longitudinal stick
    pub pitch: f32,
    /// Roll, driven by the strafe stick
    pub roll: f32,
}

/// The player-controlled flight body
#[derive(Debug, Clone)]
pub struct Drone {
    /// World position of the body center
    pub position: Vec3,
    /// World velocity
    pub velocity: Vec3,
    /// Heading about the vertical axis, in radians
    pub yaw: f32,
    /// Smoothed visual tilt; cosmetic, physics stays level
    pub tilt: Tilt,
    /// Accumulated propeller angle; cosmetic
    pub propeller_angle: f32,
    config: DroneConfig,
}

impl Drone {
    /// Spawn altitude for a fresh session
    pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 5.0, 0.0);

    /// Create a drone at the spawn position
    pub fn new(config: DroneConfig) -> Self {
        Self {
            position: Self::SPAWN_POSITION,
            velocity: Vec3::zeros(),
            yaw: 0.0,
            tilt: Tilt::default(),
            propeller_angle: 0.0,
            config,
        }
    }

    /// Handling tuning
    pub fn config(&self) -> &DroneConfig {
        &self.config
    }

    /// Reposition the body, zeroing motion state (session reset)
    pub fn reset(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::zeros();
        self.yaw = 0.0;
        self.tilt = Tilt::default();
    }

    /// Advance the body by one frame of control input
    pub fn update(&mut self, dt: f32, input: &ControlInput) {
        self.update_physics(dt, input);
        self.update_visuals(dt, input);
    }

    fn update_physics(&mut self, dt: f32, input: &ControlInput) {
        let conf = &self.config;

        // Yaw
        self.yaw += input.yaw * conf.yaw_speed * dt;

        // Acceleration: horizontal stick rotated into world space by the
        // current heading; vertical axis independent of heading
        let mut accel =
            yaw_rotation(self.yaw) * Vec3::new(input.x, 0.0, input.z) * conf.acceleration;
        accel.y = input.y * conf.vertical_accel;

        self.velocity += accel * dt;

        // Drag, split by axis group: horizontal flight and ascent reach
        // different terminal speeds
        self.velocity.x -= self.velocity.x * conf.drag * dt;
        self.velocity.z -= self.velocity.z * conf.drag * dt;
        self.velocity.y -= self.velocity.y * conf.vertical_drag * dt;

        self.position += self.velocity * dt;
    }

    fn update_visuals(&mut self, dt: f32, input: &ControlInput) {
        let conf = &self.config;

        let target_pitch = input.z * conf.tilt_max;
        let target_roll = -input.x * conf.tilt_max;
        self.tilt.pitch = damp(self.tilt.pitch, target_pitch, conf.tilt_rate, dt);
        self.tilt.roll = damp(self.tilt.roll, target_roll, conf.tilt_rate, dt);

        let spin = PROP_BASE_RATE + self.velocity.magnitude() * PROP_SPEED_RATE;
        self.propeller_angle += spin * dt;
    }
}

impl DynamicBody for Drone {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn collider_radius(&self) -> f32 {
        self.config.radius
    }
}
