//! Projector: paints one frame of the world onto a [`Surface`].
//!
//! Layout of the 960x480 surface:
//! - left half: minimap tiles, camera dot and the ray fan
//! - right half: ceiling, floor and one grey wall sliver per ray
//!
//! This module is pure (no I/O). It can be unit-tested against a [`Canvas`].
//!
//! [`Canvas`]: crate::canvas::Canvas

use crate::canvas::Surface;
use crate::core::{Ray, RayFan, Raycaster, World};
use crate::fb::Rgb;
use crate::types::VIEWPORT_HEIGHT;

pub const WALL_TILE: Rgb = Rgb::grey(191);
pub const EMPTY_TILE: Rgb = Rgb::grey(65);
pub const PLAYER: Rgb = Rgb::new(162, 0, 255);
pub const RAY: Rgb = Rgb::new(233, 166, 49);
pub const FLOOR: Rgb = Rgb::grey(100);
pub const CEILING: Rgb = Rgb::grey(200);

/// Radius of the camera dot on the minimap.
pub const PLAYER_RADIUS: f64 = 12.0;

#[derive(Debug, Clone, Default)]
pub struct Projector {
    caster: Raycaster,
}

impl Projector {
    pub fn new(fan: RayFan) -> Self {
        Self {
            caster: Raycaster::new(fan),
        }
    }

    pub fn fan(&self) -> &RayFan {
        self.caster.fan()
    }

    /// Rays cast by the last [`Projector::draw_frame`].
    pub fn rays(&self) -> &[Ray] {
        self.caster.rays()
    }

    /// Clear, draw the minimap, then cast and project the ray fan.
    pub fn draw_frame<S: Surface>(&mut self, world: &World, surface: &mut S) {
        draw_background(surface);
        draw_minimap(world, surface);
        self.project(world, surface);
    }

    fn project<S: Surface>(&mut self, world: &World, surface: &mut S) {
        let fan = *self.caster.fan();
        let pose = *world.pose();

        for ray in self.caster.cast(world) {
            // Missed rays leave their column blank.
            let Some(hit) = ray.hit else {
                continue;
            };
            surface.stroke_line(pose.x, pose.y, hit.x, hit.y, RAY);

            if let Some(s) = ray.sliver(&fan) {
                surface.fill_rect(s.x, s.y, s.width, s.height, Rgb::grey(s.shade));
            }
        }
    }
}

fn draw_background<S: Surface>(surface: &mut S) {
    let half = VIEWPORT_HEIGHT as f64;
    surface.clear(Rgb::BLACK);
    surface.fill_rect(half, half / 2.0, half, half, FLOOR);
    surface.fill_rect(half, -half / 2.0, half, half, CEILING);
}

/// Grid tiles (inset by one pixel so the grid lines show) and the camera dot.
pub fn draw_minimap<S: Surface>(world: &World, surface: &mut S) {
    let tile = world.tile_size();
    for (row, col, t) in world.grid().iter() {
        let color = if t.is_wall() { WALL_TILE } else { EMPTY_TILE };
        surface.fill_rect(
            col as f64 * tile,
            row as f64 * tile,
            tile - 1.0,
            tile - 1.0,
            color,
        );
    }

    let pose = world.pose();
    surface.fill_circle(pose.x, pose.y, PLAYER_RADIUS, PLAYER);
}
