//! ScreenView: maps the pixel canvas into a terminal framebuffer.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half block glyph: the foreground paints the top pixel and the background
//! paints the bottom one. Terminal cells are roughly twice as tall as they
//! are wide, so one cell column by two half-rows is close to square.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{Canvas, Surface};
use crate::core::Pose;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Glyph whose foreground fills the top half of the cell.
pub const UPPER_HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the downsampled canvas lands in the framebuffer, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

pub struct ScreenView {
    show_status: bool,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self { show_status: true }
    }
}

impl ScreenView {
    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }

    fn status_rows(&self, viewport: Viewport) -> u16 {
        if self.show_status && viewport.height >= 3 {
            1
        } else {
            0
        }
    }

    /// Largest aspect-preserving fit of the canvas, centred above the status row.
    pub fn placement(&self, canvas: &Canvas, viewport: Viewport) -> Placement {
        let avail_rows = viewport.height - self.status_rows(viewport);
        let (cw, ch) = (canvas.width() as u64, canvas.height() as u64);
        if cw == 0 || ch == 0 {
            return Placement { x: 0, y: 0, cols: 0, rows: 0 };
        }

        // One column per pixel horizontally, two pixels per row vertically.
        let max_cols = viewport.width as u64;
        let max_px_rows = avail_rows as u64 * 2;
        let (cols, rows) = if max_cols * ch <= max_px_rows * cw {
            (max_cols, max_cols * ch / cw / 2)
        } else {
            (max_px_rows * cw / ch, max_px_rows / 2)
        };
        let (cols, rows) = (cols as u16, rows as u16);

        Placement {
            x: (viewport.width - cols) / 2,
            y: (avail_rows - rows) / 2,
            cols,
            rows,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path; the framebuffer only reallocates
    /// when the viewport grows.
    pub fn render_into(&self, canvas: &Canvas, pose: &Pose, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let place = self.placement(canvas, viewport);
        if place.cols > 0 && place.rows > 0 {
            self.blit(canvas, place, fb);
        }

        if self.status_rows(viewport) > 0 {
            self.draw_status(fb, pose, viewport.height - 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &Canvas, pose: &Pose, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, pose, viewport, &mut fb);
        fb
    }

    fn blit(&self, canvas: &Canvas, place: Placement, fb: &mut FrameBuffer) {
        let (cw, ch) = (canvas.width() as u64, canvas.height() as u64);
        let cols = place.cols as u64;
        let half_rows = place.rows as u64 * 2;

        for row in 0..place.rows {
            let top = row as u64 * 2;
            for col in 0..place.cols {
                let c = col as u64;
                let x0 = (c * cw / cols) as u32;
                let x1 = (((c + 1) * cw / cols) as u32).max(x0 + 1);
                let upper = sample(canvas, x0, x1, top, half_rows, ch);
                let lower = sample(canvas, x0, x1, top + 1, half_rows, ch);
                fb.put_char(
                    place.x + col,
                    place.y + row,
                    UPPER_HALF_BLOCK,
                    CellStyle::new(upper, lower),
                );
            }
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, pose: &Pose, y: u16) {
        let value = CellStyle::default();
        let label = CellStyle { bold: true, ..value };
        let help = CellStyle::new(Rgb::new(140, 140, 150), Rgb::BLACK);

        let mut x = fb.put_str(1, y, "POS ", label);
        x = fb.put_fmt(x, y, format_args!("{:.0},{:.0}  ", pose.x, pose.y), value);
        x = fb.put_str(x, y, "HDG ", label);
        x = fb.put_fmt(x, y, format_args!("{:.2}  ", pose.angle), value);
        fb.put_str(x, y, "←→ turn  ↑↓ move  q quit", help);
    }
}

/// Average of the canvas rows covered by half-row `half` out of `half_rows`.
#[inline]
fn sample(canvas: &Canvas, x0: u32, x1: u32, half: u64, half_rows: u64, ch: u64) -> Rgb {
    let y0 = (half * ch / half_rows) as u32;
    let y1 = (((half + 1) * ch / half_rows) as u32).max(y0 + 1);
    canvas.average(x0, y0, x1, y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_preserves_two_to_one_aspect() {
        let canvas = Canvas::new(960, 480);
        let view = ScreenView::default();

        // 120 columns, 30 image rows + 1 status row: 120x60 pixels fit exactly.
        let p = view.placement(&canvas, Viewport::new(120, 31));
        assert_eq!(p, Placement { x: 0, y: 0, cols: 120, rows: 30 });

        // Height-limited: 10 image rows = 20 pixel rows = 40 columns.
        let p = view.placement(&canvas, Viewport::new(100, 11));
        assert_eq!(p, Placement { x: 30, y: 0, cols: 40, rows: 10 });
    }

    #[test]
    fn tiny_viewport_renders_without_panicking() {
        let canvas = Canvas::new(960, 480);
        let fb = ScreenView::default().render(&canvas, &Pose::new(0.0, 0.0, 0.0), Viewport::new(1, 1));
        assert_eq!(fb.width(), 1);
    }
}
