//! One running view: the world plus every buffer needed to present it.
//!
//! All buffers are allocated once and reused, so a steady-state frame
//! performs no heap allocation.

use crate::core::{FrameSnapshot, World};
use crate::input::InputQueue;
use crate::term::{Canvas, FrameBuffer, Projector, ScreenView, Viewport};
use crate::types::{PlayerAction, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

pub struct Session {
    world: World,
    projector: Projector,
    canvas: Canvas,
    view: ScreenView,
    fb: FrameBuffer,
    input: InputQueue,
    frame: u64,
}

impl Session {
    pub fn new(world: World) -> Self {
        Self::with_projector(world, Projector::default())
    }

    pub fn with_projector(world: World, projector: Projector) -> Self {
        Self {
            world,
            projector,
            canvas: Canvas::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            view: ScreenView::default(),
            fb: FrameBuffer::new(0, 0),
            input: InputQueue::new(),
            frame: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Frames rendered so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Queue an action for the next frame. Returns false if it was dropped.
    pub fn queue(&mut self, action: PlayerAction) -> bool {
        self.input.push(action)
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Run one frame: apply queued input, then clear, draw the minimap and
    /// raycast into the canvas.
    pub fn tick(&mut self) {
        for action in self.input.drain() {
            self.world.apply_action(action);
        }
        self.projector.draw_frame(&self.world, &mut self.canvas);
        self.frame += 1;
    }

    /// Downsample the last frame into the terminal framebuffer.
    pub fn compose(&mut self, viewport: Viewport) -> &mut FrameBuffer {
        self.view
            .render_into(&self.canvas, self.world.pose(), viewport, &mut self.fb);
        &mut self.fb
    }

    /// Depth/height buffer of the last frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self.frame, self.world.pose(), self.projector.rays())
    }

    /// Refresh `snap` with the last frame, reusing its ray buffer.
    pub fn snapshot_into(&self, snap: &mut FrameSnapshot) {
        snap.recapture(self.frame, self.world.pose(), self.projector.rays());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Rgb, UPPER_HALF_BLOCK};

    #[test]
    fn input_is_applied_at_the_next_tick() {
        let mut session = Session::new(World::default());
        session.queue(PlayerAction::MoveForward);
        assert_eq!(session.world().pose().y, 240.0);
        assert_eq!(session.pending_input(), 1);

        session.tick();
        assert!((session.world().pose().y - 235.0).abs() < 1e-9);
        assert_eq!(session.pending_input(), 0);
        assert_eq!(session.frame(), 1);
    }

    #[test]
    fn compose_fills_viewport_with_half_blocks() {
        let mut session = Session::new(World::default());
        session.tick();
        let fb = session.compose(Viewport::new(80, 21));
        assert_eq!((fb.width(), fb.height()), (80, 21));

        let top_left = fb.get(0, 0).unwrap();
        assert_eq!(top_left.ch, UPPER_HALF_BLOCK);
        assert_ne!(top_left.style.fg, Rgb::BLACK);
        assert!(fb.row_text(20).contains("POS"));
    }

    #[test]
    fn snapshot_reports_last_frame() {
        let mut session = Session::new(World::default());
        session.tick();
        session.tick();
        let snap = session.snapshot();
        assert_eq!(snap.frame, 2);
        assert_eq!(snap.rays.len(), 160);
    }

    #[test]
    fn snapshot_into_matches_a_fresh_snapshot() {
        let mut session = Session::new(World::default());
        session.tick();
        let mut snap = session.snapshot();
        let buffer = snap.rays.as_ptr();

        session.queue(PlayerAction::RotateLeft);
        session.tick();
        session.snapshot_into(&mut snap);
        assert_eq!(snap, session.snapshot());
        assert_eq!(snap.frame, 2);
        assert_eq!(snap.rays.as_ptr(), buffer);
    }
}
