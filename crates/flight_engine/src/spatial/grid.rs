//! Uniform spatial hash grid for broad-phase obstacle lookup
//!
//! The grid is 2D over the X/Z plane: city obstacles are mostly planar, so
//! bucketing by footprint keeps cells small without a vertical dimension.
//! An obstacle is referenced from every cell its box spans; a point query
//! inspects exactly the one cell containing the point. Obstacles straddling
//! a cell border next to the query point are therefore not returned; the
//! collision system documents this as an accepted approximation.

use crate::physics::ObstacleKey;
use crate::spatial::Aabb;
use std::collections::HashMap;

/// Uniform-cell broad-phase index over the X/Z plane
#[derive(Debug, Clone)]
pub struct SpatialHashGrid {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<ObstacleKey>>,
}

impl SpatialHashGrid {
    /// Create a grid with the given cell edge length
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    /// Cell edge length
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn cell_index(&self, coord: f32) -> i32 {
        (coord / self.cell_size).floor() as i32
    }

    /// Insert an obstacle into every cell its footprint spans
    pub fn insert(&mut self, key: ObstacleKey, footprint: &Aabb) {
        let min_x = self.cell_index(footprint.min.x);
        let max_x = self.cell_index(footprint.max.x);
        let min_z = self.cell_index(footprint.min.z);
        let max_z = self.cell_index(footprint.max.z);

        for x in min_x..=max_x {
            for z in min_z..=max_z {
                self.cells.entry((x, z)).or_default().push(key);
            }
        }
    }

    /// Return the bucket for the single cell containing `(x, z)`
    ///
    /// No fallback to adjacent cells is performed.
    pub fn query(&self, x: f32, z: f32) -> &[ObstacleKey] {
        let key = (self.cell_index(x), self.cell_index(z));
        self.cells.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Drop all buckets
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
