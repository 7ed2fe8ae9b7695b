use serde::Serialize;

use crate::pose::Pose;
use crate::raycast::Ray;

/// Per-ray projection results in a serializable form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaySample {
    pub angle: f64,
    pub hit: bool,
    /// Raw marched depth, `None` when the ray missed.
    pub depth: Option<f64>,
    pub corrected_depth: Option<f64>,
    pub wall_height: Option<f64>,
    pub shade: Option<u8>,
}

impl From<&Ray> for RaySample {
    fn from(ray: &Ray) -> Self {
        let hit = ray.is_hit();
        Self {
            angle: ray.angle,
            hit,
            depth: hit.then_some(ray.depth),
            corrected_depth: hit.then(|| ray.corrected_depth()),
            wall_height: ray.wall_height(),
            shade: ray.shade(),
        }
    }
}

/// The 1-D depth/height buffer of one frame, plus the pose it was cast from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub frame: u64,
    pub pose: Pose,
    pub rays: Vec<RaySample>,
}

impl FrameSnapshot {
    pub fn capture(frame: u64, pose: &Pose, rays: &[Ray]) -> Self {
        Self {
            frame,
            pose: *pose,
            rays: rays.iter().map(RaySample::from).collect(),
        }
    }

    pub fn hit_count(&self) -> usize {
        self.rays.iter().filter(|r| r.hit).count()
    }

    /// Reuse this snapshot's allocation for a new frame.
    pub fn recapture(&mut self, frame: u64, pose: &Pose, rays: &[Ray]) {
        self.frame = frame;
        self.pose = *pose;
        self.rays.clear();
        self.rays.extend(rays.iter().map(RaySample::from));
    }
}
