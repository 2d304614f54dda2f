//! Impulse-based collision response for a single dynamic body
//!
//! Contacts are resolved independently and in sequence: positional push-out
//! first, then a restitution impulse against the incoming normal velocity,
//! then tangential damping. This is an approximation, not a joint contact
//! solver; simultaneous contacts may fight at corners, which is accepted for
//! a single fast-moving body.

use crate::foundation::math::Vec3;
use crate::physics::collision_system::CollisionSystem;
use crate::physics::obstacle::ObstacleShape;

/// Kinematic state the resolver needs from a body
///
/// The flight body lives in the game layer; this seam keeps the resolver
/// usable for any sphere-shaped body.
pub trait DynamicBody {
    /// World position of the body center
    fn position(&self) -> Vec3;
    /// Overwrite the body position (after push-out)
    fn set_position(&mut self, position: Vec3);
    /// World velocity
    fn velocity(&self) -> Vec3;
    /// Overwrite the body velocity (after impulse)
    fn set_velocity(&mut self, velocity: Vec3);
    /// Collision sphere radius
    fn collider_radius(&self) -> f32;
}

/// Per-resolution tuning
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Fraction of incoming normal velocity reflected outward; the total
    /// applied impulse factor is `1 + restitution`
    pub restitution: f32,
    /// Scale kept on the tangential velocity after a bounce
    pub friction: f32,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            restitution: 0.5,
            friction: 0.9,
        }
    }
}

/// Resolves contacts for one dynamic body per call
pub struct PhysicsEngine {
    options: ResolveOptions,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsEngine {
    /// Create a physics engine with default response tuning
    pub fn new() -> Self {
        Self {
            options: ResolveOptions::default(),
        }
    }

    /// Create a physics engine with explicit response tuning
    pub fn with_options(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Current response tuning
    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Query the world at the body's position and resolve every contact
    ///
    /// For each overlapping contact: push the body out along the contact
    /// normal by the penetration depth, and if the body moves into the
    /// surface, reflect the normal velocity component
    /// (`v' = v - (1 + e)(v·n)n`) and damp the tangential remainder by the
    /// friction factor. Returns whether any contact was resolved, which the
    /// caller uses for impact feedback.
    pub fn resolve_collisions(
        &self,
        collision: &CollisionSystem,
        body: &mut dyn DynamicBody,
        transient: &[ObstacleShape],
    ) -> bool {
        let contacts =
            collision.check_collisions(body.position(), body.collider_radius(), transient);

        let mut resolved = false;
        for contact in &contacts {
            if contact.penetration <= 0.0 {
                continue;
            }

            // Positional correction: push out of overlap immediately
            body.set_position(body.position() + contact.normal * contact.penetration);
            resolved = true;

            // Velocity response only when moving into the surface
            let velocity = body.velocity();
            let normal_speed = velocity.dot(&contact.normal);
            if normal_speed < 0.0 {
                let impulse = -(1.0 + self.options.restitution) * normal_speed;
                let bounced = velocity + contact.normal * impulse;

                // Sliding: keep the outgoing normal component, damp the rest
                let normal_component = contact.normal * bounced.dot(&contact.normal);
                let tangent = (bounced - normal_component) * self.options.friction;
                body.set_velocity(normal_component + tangent);
            }
        }

        resolved
    }
}
