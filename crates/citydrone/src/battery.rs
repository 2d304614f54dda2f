//! Battery charge model
//!
//! Drain is driven by the same kinematic state the integrator produces:
//! horizontal speed scales the movement drain, the vertical stick selects
//! ascend/descend rates, and hovering falls back to the idle rate. Ring
//! rewards charge the battery back up. Depletion latches until reset.

use crate::config::BatteryConfig;
use crate::input::ControlInput;
use flight_engine::foundation::math::Vec3;
use log::info;

/// Speed below which the drone counts as hovering
const HOVER_SPEED: f32 = 0.1;

/// Battery charge state
pub struct Battery {
    current: f32,
    depleted: bool,
    config: BatteryConfig,
    /// Drone top speed, used to normalize movement drain
    max_speed: f32,
}

impl Battery {
    /// Create a full battery; `max_speed` is the drone's nominal top speed
    pub fn new(config: BatteryConfig, max_speed: f32) -> Self {
        Self {
            current: config.max,
            depleted: false,
            config,
            max_speed,
        }
    }

    /// Remaining charge
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Remaining charge as a fraction of full
    pub fn fraction(&self) -> f32 {
        self.current / self.config.max
    }

    /// Whether the battery has run out
    pub fn is_depleted(&self) -> bool {
        self.depleted
    }

    /// Drain for one frame of flight
    pub fn update(&mut self, dt: f32, velocity: Vec3, input: &ControlInput) {
        if self.depleted {
            return;
        }

        let mut drain = 0.0;
        let mut active = false;

        // Horizontal movement, proportional to speed
        let h_speed = (velocity.x * velocity.x + velocity.z * velocity.z).sqrt();
        if h_speed > HOVER_SPEED {
            drain += self.config.drain_move * (h_speed / self.max_speed) * dt;
            active = true;
        }

        // Vertical thrust
        if input.y > 0.0 {
            drain += self.config.drain_ascend * dt;
            active = true;
        } else if input.y < 0.0 {
            drain += self.config.drain_descend * dt;
            active = true;
        }

        if !active {
            drain += self.config.drain_idle * dt;
        }

        self.current = (self.current - drain).max(0.0);
        if self.current <= 0.0 {
            self.depleted = true;
            info!("battery depleted");
        }
    }

    /// Add charge (ring reward, landing-pad recharge), capped at full
    pub fn add(&mut self, amount: f32) {
        if self.depleted {
            return;
        }
        self.current = (self.current + amount).min(self.config.max);
    }

    /// Restore a full, un-depleted battery
    pub fn reset(&mut self) {
        self.current = self.config.max;
        self.depleted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn battery() -> Battery {
        Battery::new(BatteryConfig::default(), 18.0)
    }

    #[test]
    fn test_hovering_with_zero_idle_drain_holds_charge() {
        let mut battery = battery();
        battery.update(1.0, Vec3::zeros(), &ControlInput::neutral());

        assert_relative_eq!(battery.current(), 100.0);
    }

    #[test]
    fn test_full_speed_drains_at_move_rate() {
        let mut battery = battery();
        // Flying at the reference speed for one second
        battery.update(1.0, Vec3::new(18.0, 0.0, 0.0), &ControlInput::neutral());

        assert_relative_eq!(battery.current(), 100.0 - 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_ascending_costs_more_than_descending() {
        let mut climbing = battery();
        let mut sinking = battery();
        let up = ControlInput {
            y: 1.0,
            ..Default::default()
        };
        let down = ControlInput {
            y: -1.0,
            ..Default::default()
        };

        climbing.update(1.0, Vec3::zeros(), &up);
        sinking.update(1.0, Vec3::zeros(), &down);

        assert!(climbing.current() < sinking.current());
        assert_relative_eq!(climbing.current(), 100.0 - 1.25, epsilon = 1e-4);
    }

    #[test]
    fn test_depletion_latches() {
        let mut battery = battery();
        let up = ControlInput {
            y: 1.0,
            ..Default::default()
        };

        // 1.25/s drain: dead in 80 seconds
        for _ in 0..100 {
            battery.update(1.0, Vec3::zeros(), &up);
        }

        assert!(battery.is_depleted());
        assert_relative_eq!(battery.current(), 0.0);

        // No recharge once dead
        battery.add(15.0);
        assert_relative_eq!(battery.current(), 0.0);
    }

    #[test]
    fn test_reward_is_capped_at_full() {
        let mut battery = battery();
        battery.update(1.0, Vec3::new(18.0, 0.0, 0.0), &ControlInput::neutral());
        battery.add(15.0);

        assert_relative_eq!(battery.current(), 100.0);
    }

    #[test]
    fn test_reset_revives_a_dead_battery() {
        let mut battery = battery();
        let up = ControlInput {
            y: 1.0,
            ..Default::default()
        };
        for _ in 0..100 {
            battery.update(1.0, Vec3::zeros(), &up);
        }

        battery.reset();

        assert!(!battery.is_depleted());
        assert_relative_eq!(battery.current(), 100.0);
    }
}
