//! Core raycasting module - pure, deterministic, and testable
//!
//! This crate owns the world model and the ray marcher. It has **zero
//! dependencies** on terminals, input devices or clocks, so every property of
//! the projection can be checked headlessly.
//!
//! # Module Structure
//!
//! - [`grid`]: validated, wall-enclosed square occupancy map
//! - [`pose`]: camera position/heading and the movement deltas applied to it
//! - [`world`]: grid + pose, world-to-cell conversion
//! - [`raycast`]: ray fan, marching, fish-eye correction, wall height and shade
//! - [`snapshot`]: serializable per-frame depth/height buffer
//!
//! # Projection
//!
//! For each of `R` rays across a field of view `F`:
//!
//! - **Angle**: `heading - F/2 + i * F/R`
//! - **March**: one world unit per step until a wall cell or the grid extent
//! - **Corrected depth**: `depth * cos(heading - angle)`
//! - **Wall height**: `min(480, 21000 / corrected)`
//! - **Shade**: `255 / (1 + depth² * 0.0001)`
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{Raycaster, World};
//! use tui_raycaster_types::PlayerAction;
//!
//! let mut world = World::default();
//! world.apply_action(PlayerAction::MoveForward);
//!
//! let mut caster = Raycaster::default();
//! let rays = caster.cast(&world);
//!
//! // The built-in map is enclosed, so every ray finds a wall.
//! assert!(rays.iter().all(|r| r.is_hit()));
//! ```

pub mod grid;
pub mod pose;
pub mod raycast;
pub mod snapshot;
pub mod world;

pub use tui_raycaster_types as types;

pub use grid::{Grid, GridError, Tile, DEFAULT_MAP};
pub use pose::{Movement, Pose};
pub use raycast::{
    cast_ray, corrected_distance, shade, wall_height, Ray, RayFan, RayHit, Raycaster, Sliver,
    DEPTH_STEP,
};
pub use snapshot::{FrameSnapshot, RaySample};
pub use world::{World, WORLD_EXTENT};
