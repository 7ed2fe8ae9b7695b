//! World state: the immutable grid plus the mutable camera pose.

use std::f64::consts::PI;

use crate::grid::Grid;
use crate::pose::{Movement, Pose};
use crate::types::{PlayerAction, VIEWPORT_WIDTH};

/// Minimap extent in world units. Every grid is scaled to fill it.
pub const WORLD_EXTENT: f64 = (VIEWPORT_WIDTH / 2) as f64;

#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    pose: Pose,
    tile_size: f64,
}

impl World {
    /// Create a world with the camera at the centre of the map, facing north.
    pub fn new(grid: Grid) -> Self {
        let tile_size = WORLD_EXTENT / grid.side() as f64;
        let centre = WORLD_EXTENT / 2.0;
        Self {
            grid,
            pose: Pose::new(centre, centre, PI),
            tile_size,
        }
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// World units per grid cell.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Marching bound: the grid extent in world units.
    pub fn max_depth(&self) -> f64 {
        self.grid.side() as f64 * self.tile_size
    }

    /// Grid cell `(row, col)` containing a world point (may be out of bounds).
    #[inline]
    pub fn cell_at(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (y / self.tile_size).floor() as i64,
            (x / self.tile_size).floor() as i64,
        )
    }

    #[inline]
    pub fn is_wall_at(&self, x: f64, y: f64) -> bool {
        let (row, col) = self.cell_at(x, y);
        self.grid.is_wall(row, col)
    }

    pub fn apply_movement(&mut self, movement: Movement) {
        self.pose.apply_movement(movement);
    }

    pub fn apply_action(&mut self, action: PlayerAction) {
        self.pose.apply_action(action);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Grid::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_DEPTH, TILE_SIZE};

    #[test]
    fn default_world_matches_builtin_layout() {
        let world = World::default();
        assert_eq!(world.tile_size(), TILE_SIZE);
        assert_eq!(world.max_depth(), MAX_DEPTH);
        assert_eq!(world.pose().x, 240.0);
        assert_eq!(world.pose().y, 240.0);
        assert_eq!(world.pose().angle, PI);
    }

    #[test]
    fn cell_lookup_floors_world_coordinates() {
        let world = World::default();
        assert_eq!(world.cell_at(59.9, 60.0), (1, 0));
        assert_eq!(world.cell_at(-0.5, 10.0), (0, -1));
        assert!(world.is_wall_at(130.0, 70.0)); // row 1, col 2
        assert!(!world.is_wall_at(70.0, 70.0)); // row 1, col 1
    }

    #[test]
    fn smaller_maps_scale_to_the_same_extent() {
        let grid = Grid::from_rows(&["####", "#  #", "#  #", "####"]).unwrap();
        let world = World::new(grid);
        assert_eq!(world.tile_size(), 120.0);
        assert_eq!(world.max_depth(), WORLD_EXTENT);
    }
}
