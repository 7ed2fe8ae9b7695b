//! Ray marching and projection math.
//!
//! Each frame a fan of rays is cast from the camera. A ray advances in
//! fixed one-unit depth steps along `(-sin(angle), cos(angle))` and stops at
//! the first step whose point lands in a wall cell. The raw depth feeds the
//! brightness falloff; the fish-eye corrected depth feeds the wall height.
//!
//! This module is pure: it produces [`Ray`]s and [`Sliver`]s, and the term
//! crate decides how to paint them.

use crate::types::{
    CASTED_RAYS, FOV, PROJECTION_CONSTANT, SHADE_ATTENUATION, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use crate::world::World;

/// Distance advanced per marching step, in world units.
pub const DEPTH_STEP: f64 = 1.0;

/// Angular layout of the rays cast each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayFan {
    /// Total field of view in radians.
    pub fov: f64,
    pub ray_count: usize,
}

impl Default for RayFan {
    fn default() -> Self {
        Self {
            fov: FOV,
            ray_count: CASTED_RAYS,
        }
    }
}

impl RayFan {
    pub fn new(fov: f64, ray_count: usize) -> Self {
        Self { fov, ray_count }
    }

    /// Angle between adjacent rays.
    pub fn step_angle(&self) -> f64 {
        if self.ray_count == 0 {
            0.0
        } else {
            self.fov / self.ray_count as f64
        }
    }

    /// Absolute angle of ray `index` for a camera facing `heading`.
    #[inline]
    pub fn ray_angle(&self, heading: f64, index: usize) -> f64 {
        heading - self.fov / 2.0 + index as f64 * self.step_angle()
    }

    /// Width in pixels of one sliver of the first-person view.
    pub fn sliver_width(&self) -> f64 {
        if self.ray_count == 0 {
            0.0
        } else {
            (VIEWPORT_WIDTH / 2) as f64 / self.ray_count as f64
        }
    }
}

/// World-space point where a ray struck a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub x: f64,
    pub y: f64,
}

/// Result of casting one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub index: usize,
    /// Absolute angle in radians.
    pub angle: f64,
    /// `angle - heading`.
    pub offset: f64,
    /// Raw marched depth; the marching bound when nothing was hit.
    pub depth: f64,
    pub hit: Option<RayHit>,
}

impl Ray {
    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }

    /// Depth with fish-eye distortion removed.
    pub fn corrected_depth(&self) -> f64 {
        self.depth * self.offset.cos()
    }

    /// Projected wall height, if the ray hit anything.
    pub fn wall_height(&self) -> Option<f64> {
        self.hit.map(|_| wall_height(self.corrected_depth()))
    }

    /// Grey level of the wall, if the ray hit anything.
    pub fn shade(&self) -> Option<u8> {
        self.hit.map(|_| shade(self.depth))
    }

    /// Screen rectangle for this ray's wall, in surface pixels.
    ///
    /// Returns None for rays that ran past the marching bound; those columns
    /// stay blank.
    pub fn sliver(&self, fan: &RayFan) -> Option<Sliver> {
        self.hit?;
        let width = fan.sliver_width();
        let height = wall_height(self.corrected_depth());
        Some(Sliver {
            x: VIEWPORT_HEIGHT as f64 + self.index as f64 * width,
            y: VIEWPORT_HEIGHT as f64 / 2.0 - height / 2.0,
            width,
            height,
            shade: shade(self.depth),
        })
    }
}

/// One vertical wall rectangle of the first-person view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sliver {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shade: u8,
}

/// Fish-eye correction: project a radial depth onto the view direction.
#[inline]
pub fn corrected_distance(depth: f64, heading: f64, ray_angle: f64) -> f64 {
    depth * (heading - ray_angle).cos()
}

/// Inverse-depth wall height, clamped to the viewport.
///
/// A corrected distance of zero (camera standing inside a wall) divides to
/// infinity and clamps to the full viewport height.
#[inline]
pub fn wall_height(corrected: f64) -> f64 {
    (PROJECTION_CONSTANT / corrected).min(VIEWPORT_HEIGHT as f64)
}

/// Grey level for a wall at raw `depth`.
#[inline]
pub fn shade(depth: f64) -> u8 {
    let level = 255.0 / (1.0 + depth * depth * SHADE_ATTENUATION);
    level.round().clamp(0.0, 255.0) as u8
}

/// March a single ray from the camera. Returns the hit depth and point, or
/// None if the marching bound was reached first.
pub fn cast_ray(world: &World, angle: f64) -> Option<(f64, RayHit)> {
    let pose = world.pose();
    let (sin, cos) = angle.sin_cos();
    let max_depth = world.max_depth();

    let mut step: u32 = 0;
    loop {
        let depth = step as f64 * DEPTH_STEP;
        if depth >= max_depth {
            return None;
        }
        let x = pose.x - sin * depth;
        let y = pose.y + cos * depth;
        if world.is_wall_at(x, y) {
            return Some((depth, RayHit { x, y }));
        }
        step += 1;
    }
}

/// Casts a [`RayFan`] every frame into a reusable buffer.
#[derive(Debug, Clone)]
pub struct Raycaster {
    fan: RayFan,
    rays: Vec<Ray>,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self::new(RayFan::default())
    }
}

impl Raycaster {
    pub fn new(fan: RayFan) -> Self {
        Self {
            fan,
            rays: Vec::with_capacity(fan.ray_count),
        }
    }

    pub fn fan(&self) -> &RayFan {
        &self.fan
    }

    /// Rays from the most recent [`Raycaster::cast`].
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Cast the whole fan for the current pose.
    ///
    /// The ray buffer keeps its allocation across frames.
    pub fn cast(&mut self, world: &World) -> &[Ray] {
        let heading = world.pose().angle;
        let max_depth = world.max_depth();
        self.rays.clear();

        for index in 0..self.fan.ray_count {
            let angle = self.fan.ray_angle(heading, index);
            let (depth, hit) = match cast_ray(world, angle) {
                Some((depth, hit)) => (depth, Some(hit)),
                None => (max_depth, None),
            };
            self.rays.push(Ray {
                index,
                angle,
                offset: angle - heading,
                depth,
                hit,
            });
        }

        log::trace!(
            "cast {} rays, {} hits",
            self.rays.len(),
            self.rays.iter().filter(|r| r.is_hit()).count()
        );
        &self.rays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::pose::Pose;
    use std::f64::consts::PI;

    #[test]
    fn fan_spans_fov_centered_on_heading() {
        let fan = RayFan::default();
        let first = fan.ray_angle(PI, 0);
        let last = fan.ray_angle(PI, fan.ray_count - 1);
        assert!((first - (PI - FOV / 2.0)).abs() < 1e-12);
        assert!((last + fan.step_angle() - (PI + FOV / 2.0)).abs() < 1e-12);
        assert_eq!(fan.sliver_width(), 3.0);
    }

    #[test]
    fn zero_fov_single_ray_points_along_heading() {
        let fan = RayFan::new(0.0, 1);
        assert_eq!(fan.ray_angle(1.25, 0), 1.25);
        assert_eq!(fan.sliver_width(), 480.0);
    }

    #[test]
    fn shade_falls_off_with_depth() {
        assert_eq!(shade(0.0), 255);
        assert_eq!(shade(200.0), 51); // 255 / 5
        assert!(shade(400.0) < shade(200.0));
    }

    #[test]
    fn wall_height_clamps_at_zero_distance() {
        assert_eq!(wall_height(0.0), VIEWPORT_HEIGHT as f64);
        assert_eq!(wall_height(21000.0 / 100.0), 100.0);
    }

    #[test]
    fn ray_from_inside_wall_hits_at_depth_zero() {
        let world = World::new(Grid::builtin()).with_pose(Pose::new(10.0, 10.0, 0.0));
        let (depth, hit) = cast_ray(&world, 0.3).unwrap();
        assert_eq!(depth, 0.0);
        assert_eq!(hit, RayHit { x: 10.0, y: 10.0 });
    }

    #[test]
    fn ray_from_outside_the_grid_pointing_away_misses() {
        let world = World::new(Grid::builtin()).with_pose(Pose::new(-50.0, 240.0, 0.0));
        // Heading π/2 marches toward -X, away from the map.
        assert!(cast_ray(&world, PI / 2.0).is_none());

        let fan = RayFan::new(0.0, 1);
        let mut caster = Raycaster::new(fan);
        let world = world.with_pose(Pose::new(-50.0, 240.0, PI / 2.0));
        let rays = caster.cast(&world);
        assert!(!rays[0].is_hit());
        assert_eq!(rays[0].depth, world.max_depth());
        assert!(rays[0].sliver(&fan).is_none());
    }

    #[test]
    fn sliver_geometry_follows_index_and_height() {
        let ray = Ray {
            index: 10,
            angle: PI,
            offset: 0.0,
            depth: 200.0,
            hit: Some(RayHit { x: 0.0, y: 0.0 }),
        };
        let s = ray.sliver(&RayFan::default()).unwrap();
        assert_eq!(s.x, 480.0 + 30.0);
        assert_eq!(s.width, 3.0);
        assert_eq!(s.height, 105.0);
        assert_eq!(s.y, 240.0 - 52.5);
        assert_eq!(s.shade, 51);
    }
}
