//! # Flight Engine
//!
//! The simulation core for a first-person drone-flight game: spatial hash
//! broad-phase, sphere-vs-world narrow-phase collision detection, and
//! impulse-based collision response for a single kinematic body.
//!
//! ## Features
//!
//! - **Spatial Hash Grid**: O(1)-amortized broad-phase lookup over a 2D
//!   (X/Z) cell grid, appropriate for mostly-planar city worlds
//! - **Shape Dispatch**: Closed obstacle shape set (boxes, tori) plus an
//!   implicit ground plane, tested against a spherical query
//! - **Impulse Response**: Positional correction and restitution impulse,
//!   resolved contact-by-contact
//! - **Frame Foundation**: Math aliases, clamped frame timing, logging
//!
//! Rendering, scene management, procedural world generation and audio are
//! external collaborators: they register obstacle boxes and transforms with
//! [`physics::CollisionSystem`] and read back body state after resolution.
//!
//! ## Quick Start
//!
//! ```rust
//! use flight_engine::prelude::*;
//!
//! let mut collision = CollisionSystem::new(100.0);
//! collision.register(ObstacleShape::aligned_box(Aabb::new(
//!     Vec3::new(-1.0, 0.0, -1.0),
//!     Vec3::new(1.0, 10.0, 1.0),
//! )));
//!
//! let contacts = collision.check_collisions(Vec3::new(0.0, 5.0, 1.2), 0.5, &[]);
//! assert_eq!(contacts.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod spatial;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::{
            math::{damp, lerp, Mat4, Vec2, Vec3},
            time::Timer,
        },
        physics::{
            Contact, ContactSource, CollisionSystem, DynamicBody, ObstacleKey, ObstacleShape,
            PhysicsEngine, ResolveOptions,
        },
        spatial::{Aabb, SpatialHashGrid},
    };
}
