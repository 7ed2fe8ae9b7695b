//! Pixel surface the projector paints into.
//!
//! [`Surface`] is the drawing contract of the projector; [`Canvas`] is the
//! in-memory RGB implementation that later gets downsampled to terminal
//! cells. Coordinates are floating-point surface pixels with the origin at
//! the top-left; anything outside the surface is clipped.

use crate::fb::Rgb;

/// Minimal 2-D drawing target.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb);

    /// One-pixel line between two points.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb);

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgb);
}

/// Row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width as usize) * (height as usize)],
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.idx(x as i64, y as i64).map(|i| self.pixels[i])
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Pixel span `[start, end)` covered by a real interval, clipped to `0..limit`.
    #[inline]
    fn span(start: f64, len: f64, limit: u32) -> (usize, usize) {
        let a = start.round().clamp(0.0, limit as f64) as usize;
        let b = (start + len).round().clamp(0.0, limit as f64) as usize;
        (a, b.max(a))
    }

    /// Mean color of the pixel block `[x0, x1) x [y0, y1)`.
    ///
    /// An empty or fully clipped block is black.
    pub fn average(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> Rgb {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return Rgb::BLACK;
        }

        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for y in y0..y1 {
            let row = (y as usize) * (self.width as usize);
            for p in &self.pixels[row + x0 as usize..row + x1 as usize] {
                r += p.r as u64;
                g += p.g as u64;
                b += p.b as u64;
            }
        }
        let n = ((x1 - x0) as u64) * ((y1 - y0) as u64);
        Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        if !(w > 0.0 && h > 0.0) {
            return;
        }
        let (x0, x1) = Self::span(x, w, self.width);
        let (y0, y1) = Self::span(y, h, self.height);
        let stride = self.width as usize;
        for row in y0..y1 {
            self.pixels[row * stride + x0..row * stride + x1].fill(color);
        }
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb) {
        // Bresenham between the rounded endpoints.
        let (mut x, mut y) = (x1.round() as i64, y1.round() as i64);
        let (xe, ye) = (x2.round() as i64, y2.round() as i64);
        let dx = (xe - x).abs();
        let dy = -(ye - y).abs();
        let sx = if x < xe { 1 } else { -1 };
        let sy = if y < ye { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == xe && y == ye {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgb) {
        if !(r > 0.0) {
            return;
        }
        let (x0, x1) = Self::span(cx - r, 2.0 * r, self.width);
        let (y0, y1) = Self::span(cy - r, 2.0 * r, self.height);
        let r2 = r * r;
        for py in y0..y1 {
            let fy = py as f64 + 0.5 - cy;
            for px in x0..x1 {
                let fx = px as f64 + 0.5 - cx;
                if fx * fx + fy * fy <= r2 {
                    self.pixels[py * self.width as usize + px] = color;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn fill_rect_is_clipped_to_surface() {
        let mut c = Canvas::new(10, 10);
        c.fill_rect(-5.0, 8.0, 8.0, 10.0, RED);
        assert_eq!(c.pixel(0, 8), Some(RED));
        assert_eq!(c.pixel(2, 9), Some(RED));
        assert_eq!(c.pixel(3, 9), Some(Rgb::BLACK));
        assert_eq!(c.pixel(0, 7), Some(Rgb::BLACK));
    }

    #[test]
    fn fill_rect_rounds_fractional_edges() {
        let mut c = Canvas::new(10, 10);
        c.fill_rect(2.0, 1.4, 3.0, 2.2, RED); // rows round(1.4)=1 .. round(3.6)=4
        assert_eq!(c.pixel(2, 1), Some(RED));
        assert_eq!(c.pixel(4, 3), Some(RED));
        assert_eq!(c.pixel(5, 3), Some(Rgb::BLACK));
        assert_eq!(c.pixel(2, 4), Some(Rgb::BLACK));
    }

    #[test]
    fn degenerate_rect_draws_nothing() {
        let mut c = Canvas::new(4, 4);
        c.fill_rect(1.0, 1.0, 0.0, 3.0, RED);
        c.fill_rect(1.0, 1.0, 2.0, f64::NAN, RED);
        assert!(c.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut c = Canvas::new(10, 10);
        c.stroke_line(1.0, 1.0, 8.0, 5.0, RED);
        assert_eq!(c.pixel(1, 1), Some(RED));
        assert_eq!(c.pixel(8, 5), Some(RED));
        let lit = c.pixels().iter().filter(|&&p| p == RED).count();
        assert_eq!(lit, 8); // one pixel per column on a shallow line
    }

    #[test]
    fn line_partly_outside_is_clipped() {
        let mut c = Canvas::new(4, 4);
        c.stroke_line(-3.0, 1.0, 10.0, 1.0, RED);
        assert!((0..4).all(|x| c.pixel(x, 1) == Some(RED)));
    }

    #[test]
    fn circle_is_round() {
        let mut c = Canvas::new(20, 20);
        c.fill_circle(10.0, 10.0, 5.0, RED);
        assert_eq!(c.pixel(10, 10), Some(RED));
        assert_eq!(c.pixel(10, 5), Some(RED));
        assert_eq!(c.pixel(5, 5), Some(Rgb::BLACK)); // corner of the bounding box
        assert_eq!(c.pixel(10, 16), Some(Rgb::BLACK));
    }

    #[test]
    fn average_mixes_block() {
        let mut c = Canvas::new(2, 2);
        c.fill_rect(0.0, 0.0, 1.0, 2.0, Rgb::grey(200));
        assert_eq!(c.average(0, 0, 2, 2), Rgb::grey(100));
        assert_eq!(c.average(0, 0, 1, 1), Rgb::grey(200));
        assert_eq!(c.average(1, 1, 1, 2), Rgb::BLACK);
    }
}
