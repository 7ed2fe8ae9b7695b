//! Core types module - shared constants and player actions
//!
//! Everything here is plain data with no external dependencies, so the
//! world model, the projector and the input layer can agree on the same
//! numbers without depending on each other.
//!
//! # Viewport Layout
//!
//! The renderer paints into a 960x480 pixel surface split in two halves:
//!
//! - **Left half** (480x480): top-down minimap of the grid, camera dot and ray fan
//! - **Right half** (480x480): first-person view built from vertical wall slivers
//!
//! # Render Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAP_SIZE` | 8 | Side length of the built-in grid |
//! | `TILE_SIZE` | 60 | Minimap pixels per grid cell |
//! | `FOV` | π/3 | Horizontal field of view (60°) |
//! | `CASTED_RAYS` | 160 | Rays (and slivers) per frame |
//! | `MAX_DEPTH` | 480 | Marching bound, the grid extent in world units |
//! | `PROJECTION_CONSTANT` | 21000 | Numerator of the inverse-depth wall height |
//! | `SHADE_ATTENUATION` | 0.0001 | Squared-depth falloff of wall brightness |
//! | `MOVEMENT_SPEED` | 5 | World units per forward/backward step |
//! | `ROTATION_SPEED` | 0.1 | Radians per turn step |
//! | `TICK_MS` | 16 | Frame period (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{PlayerAction, MAP_SIZE, TILE_SIZE, VIEWPORT_WIDTH};
//!
//! let action = PlayerAction::from_str("up").unwrap();
//! assert_eq!(action, PlayerAction::MoveForward);
//!
//! // The minimap fills exactly half the viewport.
//! assert_eq!(MAP_SIZE as f64 * TILE_SIZE, VIEWPORT_WIDTH as f64 / 2.0);
//! ```

use std::f64::consts::PI;

/// Pixel height of the render surface.
pub const VIEWPORT_HEIGHT: u32 = 480;

/// Pixel width of the render surface (minimap + first-person view).
pub const VIEWPORT_WIDTH: u32 = VIEWPORT_HEIGHT * 2;

/// Side length of the built-in map.
pub const MAP_SIZE: usize = 8;

/// Minimap pixels per grid cell for the built-in map.
pub const TILE_SIZE: f64 = (VIEWPORT_WIDTH / 2) as f64 / MAP_SIZE as f64;

/// Horizontal field of view in radians (60°).
pub const FOV: f64 = PI / 3.0;

/// Number of rays cast per frame.
pub const CASTED_RAYS: usize = 160;

/// Marching bound in world units (grid extent).
pub const MAX_DEPTH: f64 = MAP_SIZE as f64 * TILE_SIZE;

/// Wall height numerator: `height = PROJECTION_CONSTANT / corrected_depth`.
pub const PROJECTION_CONSTANT: f64 = 21000.0;

/// Brightness falloff: `shade = 255 / (1 + depth² * SHADE_ATTENUATION)`.
pub const SHADE_ATTENUATION: f64 = 0.0001;

/// World units moved per forward/backward step.
pub const MOVEMENT_SPEED: f64 = 5.0;

/// Radians turned per rotation step.
pub const ROTATION_SPEED: f64 = 0.1;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Discrete player commands produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    RotateLeft,
    RotateRight,
    MoveForward,
    MoveBackward,
}

impl PlayerAction {
    /// Parse an action name (case-insensitive).
    ///
    /// Accepts both the direction names (`left`, `right`, `up`, `down`) and
    /// the descriptive camelCase names.
    ///
    /// ```
    /// use tui_raycaster_types::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::from_str("LEFT"), Some(PlayerAction::RotateLeft));
    /// assert_eq!(PlayerAction::from_str("moveBackward"), Some(PlayerAction::MoveBackward));
    /// assert_eq!(PlayerAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "rotateleft" => Some(PlayerAction::RotateLeft),
            "right" | "rotateright" => Some(PlayerAction::RotateRight),
            "up" | "forward" | "moveforward" => Some(PlayerAction::MoveForward),
            "down" | "backward" | "movebackward" => Some(PlayerAction::MoveBackward),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerAction::RotateLeft => "rotateLeft",
            PlayerAction::RotateRight => "rotateRight",
            PlayerAction::MoveForward => "moveForward",
            PlayerAction::MoveBackward => "moveBackward",
        }
    }

    /// The action that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            PlayerAction::RotateLeft => PlayerAction::RotateRight,
            PlayerAction::RotateRight => PlayerAction::RotateLeft,
            PlayerAction::MoveForward => PlayerAction::MoveBackward,
            PlayerAction::MoveBackward => PlayerAction::MoveForward,
        }
    }
}
