//! # Citydrone
//!
//! Game-side simulation for a first-person city drone flight game: control
//! input, the drone flight-dynamics integrator, lane-following traffic,
//! collectible ring gates and battery management, wired to the collision
//! core in [`flight_engine`].
//!
//! Rendering, audio and world generation live outside this crate; they feed
//! obstacle descriptions and control input in, and read drone transforms and
//! step reports out.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod battery;
pub mod config;
pub mod drone;
pub mod input;
pub mod rings;
pub mod simulation;
pub mod traffic;
pub mod world;

pub use battery::Battery;
pub use config::{BatteryConfig, DroneConfig, GameConfig, TrafficConfig, WorldConfig};
pub use drone::{Drone, Tilt};
pub use input::{ActionState, ControlInput};
pub use rings::RingSystem;
pub use simulation::{Simulation, StepReport};
pub use traffic::{Car, LaneAxis, TrafficSystem};
pub use world::{ObstacleDesc, World};
