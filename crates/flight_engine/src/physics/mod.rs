//! Physics module for collision detection and response
//!
//! The collision pipeline is split into two phases: broad-phase (spatial
//! hash lookup by query position) and narrow-phase (sphere-vs-shape
//! penetration tests). The resolver consumes the resulting contact list and
//! applies positional correction plus a restitution impulse to one dynamic
//! body per frame.
//!
//! # Module Organization
//!
//! - [`obstacle`] - Registered obstacle shapes and their grid footprints
//! - [`collision_system`] - Broad + narrow phase query producing contacts
//! - [`resolver`] - Impulse-based response for a kinematic body

pub mod collision_system;
pub mod obstacle;
pub mod resolver;

pub use collision_system::{CollisionSystem, Contact, ContactSource};
pub use obstacle::{ObstacleKey, ObstacleShape};
pub use resolver::{DynamicBody, PhysicsEngine, ResolveOptions};
