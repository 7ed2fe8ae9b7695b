//! Camera pose and the movement deltas that mutate it.
//!
//! Heading convention: 0 rad faces +Y, and a forward step moves by
//! `(-sin(heading), cos(heading))`. Heading π therefore faces -Y, which is
//! "north" (toward row 0) on the minimap. The ray marcher uses the same
//! parametric form, so the two must stay in sync or the view renders
//! mirrored.
//!
//! Heading is never wrapped into [0, 2π).

use serde::{Deserialize, Serialize};

use crate::types::{PlayerAction, MOVEMENT_SPEED, ROTATION_SPEED};

/// A single pose delta, expressed in steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    /// Translate along the heading by `steps * MOVEMENT_SPEED` (negative = backward).
    Advance(f64),
    /// Rotate by `steps * ROTATION_SPEED` radians (negative = left).
    Turn(f64),
}

impl From<PlayerAction> for Movement {
    fn from(action: PlayerAction) -> Self {
        match action {
            PlayerAction::RotateLeft => Movement::Turn(-1.0),
            PlayerAction::RotateRight => Movement::Turn(1.0),
            PlayerAction::MoveForward => Movement::Advance(1.0),
            PlayerAction::MoveBackward => Movement::Advance(-1.0),
        }
    }
}

/// Camera position (world units) and heading (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }

    /// Unit vector of the heading in world space.
    #[inline]
    pub fn direction(&self) -> (f64, f64) {
        (-self.angle.sin(), self.angle.cos())
    }

    /// Apply a movement delta in place. No collision checks: the camera can
    /// pass through walls.
    pub fn apply_movement(&mut self, movement: Movement) {
        match movement {
            Movement::Advance(steps) => {
                let (dx, dy) = self.direction();
                self.x += dx * MOVEMENT_SPEED * steps;
                self.y += dy * MOVEMENT_SPEED * steps;
            }
            Movement::Turn(steps) => {
                self.angle += ROTATION_SPEED * steps;
            }
        }
    }

    pub fn apply_action(&mut self, action: PlayerAction) {
        self.apply_movement(action.into());
    }
}
