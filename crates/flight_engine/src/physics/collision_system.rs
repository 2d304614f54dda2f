//! Core collision detection system
//!
//! Produces a unified contact list for a spherical query against the world:
//! broad-phase candidates from the spatial hash grid, caller-supplied
//! transient obstacles (few, always relevant, never indexed), and an
//! implicit ground plane at y = 0.
//!
//! The broad phase inspects only the grid cell containing the query point.
//! An obstacle just across a cell border can be missed even when inside the
//! collision radius. Cells are sized far above any collider radius, so the
//! miss window only matters within a fraction of a meter of a border.

use crate::foundation::math::{Point3, Vec2, Vec3};
use crate::physics::obstacle::{ObstacleKey, ObstacleShape};
use crate::spatial::{Aabb, SpatialHashGrid};
use log::debug;
use slotmap::SlotMap;

/// Below this length a projection is treated as degenerate and replaced by a
/// fixed fallback direction
const DEGENERATE_EPSILON: f32 = 1e-4;

/// What a contact was generated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSource {
    /// A registered static obstacle
    Static(ObstacleKey),
    /// Index into the transient slice passed to the query
    Transient(usize),
    /// The implicit ground plane at y = 0
    Ground,
}

/// A single sphere-vs-obstacle overlap
///
/// Lives for one query call; never persisted across frames.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// What was hit
    pub source: ContactSource,
    /// Unit surface normal, pointing away from the obstacle toward the body
    pub normal: Vec3,
    /// Overlap distance along the normal, always > 0 for emitted contacts
    pub penetration: f32,
}

struct Registered {
    shape: ObstacleShape,
    footprint: Aabb,
}

/// Owns the obstacle registry and the broad-phase grid
///
/// An explicitly owned instance, passed by reference to whoever queries it;
/// multiple independent worlds (one per test, say) never share state.
pub struct CollisionSystem {
    grid: SpatialHashGrid,
    obstacles: SlotMap<ObstacleKey, Registered>,
}

impl CollisionSystem {
    /// Create a collision system with the given grid cell size
    pub fn new(cell_size: f32) -> Self {
        Self {
            grid: SpatialHashGrid::new(cell_size),
            obstacles: SlotMap::with_key(),
        }
    }

    /// Register a static obstacle and index its footprint
    ///
    /// The returned key is the caller's handle for removal and updates.
    pub fn register(&mut self, shape: ObstacleShape) -> ObstacleKey {
        let footprint = shape.footprint();
        let key = self.obstacles.insert(Registered { shape, footprint });
        self.grid.insert(key, &footprint);
        key
    }

    /// Remove a registered obstacle
    ///
    /// Buckets are rebuilt from the surviving set; cheap at city scale but
    /// O(N), so moving obstacles should prefer transient queries over
    /// per-frame re-registration.
    pub fn remove(&mut self, key: ObstacleKey) {
        if self.obstacles.remove(key).is_some() {
            self.rebuild_grid();
        }
    }

    /// Replace a registered obstacle's shape after it moved
    ///
    /// Footprints are snapshots: a moved obstacle is invisible at its new
    /// position until this is called.
    pub fn update_obstacle(&mut self, key: ObstacleKey, shape: ObstacleShape) {
        if let Some(entry) = self.obstacles.get_mut(key) {
            entry.footprint = shape.footprint();
            entry.shape = shape;
            self.rebuild_grid();
        }
    }

    /// Drop all obstacles and buckets
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.grid.clear();
    }

    /// Number of registered obstacles
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Shape of a registered obstacle, if still present
    pub fn shape(&self, key: ObstacleKey) -> Option<&ObstacleShape> {
        self.obstacles.get(key).map(|entry| &entry.shape)
    }

    fn rebuild_grid(&mut self) {
        self.grid.clear();
        for (key, entry) in &self.obstacles {
            self.grid.insert(key, &entry.footprint);
        }
        debug!(
            "rebuilt collision grid: {} obstacles over {} cells",
            self.obstacles.len(),
            self.grid.cell_count()
        );
    }

    /// Find all obstacles overlapping a sphere at `center` with `radius`
    ///
    /// Static candidates come from the grid cell under the query point;
    /// `transient` obstacles (active rings, nearby cars) bypass the grid and
    /// are always tested. The ground plane is checked once per query. An
    /// empty result is a normal outcome, not an error.
    pub fn check_collisions(
        &self,
        center: Vec3,
        radius: f32,
        transient: &[ObstacleShape],
    ) -> Vec<Contact> {
        let mut contacts = Vec::new();

        for &key in self.grid.query(center.x, center.z) {
            if let Some(entry) = self.obstacles.get(key) {
                test_shape(
                    &entry.shape,
                    ContactSource::Static(key),
                    center,
                    radius,
                    &mut contacts,
                );
            }
        }

        for (index, shape) in transient.iter().enumerate() {
            test_shape(
                shape,
                ContactSource::Transient(index),
                center,
                radius,
                &mut contacts,
            );
        }

        // Infinite plane at y = 0
        if center.y < radius {
            contacts.push(Contact {
                source: ContactSource::Ground,
                normal: Vec3::y(),
                penetration: radius - center.y,
            });
        }

        contacts
    }
}

/// Narrow-phase dispatch for one obstacle shape
fn test_shape(
    shape: &ObstacleShape,
    source: ContactSource,
    center: Vec3,
    radius: f32,
    contacts: &mut Vec<Contact>,
) {
    match shape {
        ObstacleShape::Box { aabb } => {
            let closest = aabb.closest_point(center);
            let delta = center - closest;
            let distance = delta.magnitude();

            if distance < radius {
                // Query center exactly on the closest point (e.g. inside the
                // box): direction is undefined, push up
                let normal = if distance > DEGENERATE_EPSILON {
                    delta / distance
                } else {
                    Vec3::y()
                };
                contacts.push(Contact {
                    source,
                    normal,
                    penetration: radius - distance,
                });
            }
        }
        ObstacleShape::Torus {
            world,
            inv_world,
            ring_radius,
            tube_radius,
        } => {
            let local = inv_world.transform_point(&Point3::new(center.x, center.y, center.z));

            // Nearest point on the ring's center circle, in the local XY plane
            let planar = Vec2::new(local.x, local.y);
            let planar_len = planar.magnitude();
            let on_circle = if planar_len > DEGENERATE_EPSILON {
                planar * (ring_radius / planar_len)
            } else {
                // Query on the ring axis: any direction works, pick +X
                Vec2::new(*ring_radius, 0.0)
            };
            let closest = Vec3::new(on_circle.x, on_circle.y, 0.0);

            let local_center = Vec3::new(local.x, local.y, local.z);
            let delta = local_center - closest;
            let distance = delta.magnitude();

            if distance < tube_radius + radius {
                let local_normal = if distance > DEGENERATE_EPSILON {
                    delta / distance
                } else {
                    Vec3::z()
                };
                let normal = world.transform_vector(&local_normal).normalize();
                contacts.push(Contact {
                    source,
                    normal,
                    penetration: tube_radius + radius - distance,
                });
            }
        }
    }
}
