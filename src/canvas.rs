// The back buffer: all drawn content lives here and is copied to the window
// on paint requests. Nothing in this module touches the platform; it is
// plain memory, testable without a window.

use crate::types::{BACKGROUND, Point, STROKE_COLOR, STROKE_WIDTH};

/// The off-screen raster surface everything is drawn into.
/// Each pixel is 0x00RRGGBB, the format minifb presents directly.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Allocate a buffer of the given size, filled with the background.
    /// Zero-sized buffers are legal; every drawing call on one is a no-op.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    /// Throw the current buffer away and start blank at the new size.
    /// Prior content is lost; nothing is preserved or rescaled.
    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Canvas::new(width, height);
    }

    /// Fill the whole buffer with the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Draw one solid stroke segment from `from` to `to`.
    /// Visual: a black line of fixed width; parts outside the buffer are
    /// clipped, and a zero-length segment leaves a single round dot.
    pub fn stroke_segment(&mut self, from: Point, to: Point) {
        if self.is_empty() {
            return;
        }

        // Walk the segment with Bresenham and stamp a disc at every step.
        // Opaque overwrite: drawing the same segment again changes nothing.
        let (mut x0, mut y0) = (from.x, from.y);
        let (x1, y1) = (to.x, to.y);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.stamp_disc(x0, y0, STROKE_WIDTH / 2, STROKE_COLOR);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Stamp a filled disc centered at (cx,cy). This is what gives the
    /// stroke its width and its round caps.
    fn stamp_disc(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        let r2 = radius * radius;
        // Scan just the bounding box (fast enough for small radii)
        for y in (cy - radius)..=(cy + radius) {
            for x in (cx - radius)..=(cx + radius) {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                self.put_pixel(x, y, color);
            }
        }
    }

    /// Put a pixel if (x,y) is inside bounds; out-of-bounds writes are
    /// silently dropped, never an error.
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }

    /* ---------- read-only access (the snapshot side) ---------- */

    /// The raw pixels, ready for `update_with_buffer`. Never mutates.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Bounds-checked read of a single pixel.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_background(canvas: &Canvas) -> bool {
        canvas.pixels().iter().all(|&p| p == BACKGROUND)
    }

    #[test]
    fn new_buffer_is_all_white() {
        let canvas = Canvas::new(800, 600);
        assert_eq!(canvas.size(), (800, 600));
        assert!(all_background(&canvas));
    }

    #[test]
    fn resize_discards_content_and_starts_white() {
        let mut canvas = Canvas::new(64, 64);
        canvas.stroke_segment(Point::new(5, 5), Point::new(40, 40));
        canvas.resize(800, 600);
        assert_eq!(canvas.size(), (800, 600));
        assert!(all_background(&canvas), "resize must not preserve pixels");
    }

    #[test]
    fn strokes_then_clear_equals_fresh_buffer() {
        let mut canvas = Canvas::new(120, 80);
        canvas.stroke_segment(Point::new(10, 10), Point::new(100, 10));
        canvas.stroke_segment(Point::new(10, 30), Point::new(100, 70));
        canvas.clear();
        assert_eq!(canvas.pixels(), Canvas::new(120, 80).pixels());
    }

    #[test]
    fn clear_on_white_buffer_changes_nothing() {
        let mut canvas = Canvas::new(32, 32);
        canvas.clear();
        assert_eq!(canvas.pixels(), Canvas::new(32, 32).pixels());
    }

    #[test]
    fn horizontal_stroke_covers_its_width_and_no_more() {
        // A width-6 line along y=10 blackens (50,10); (50,20) stays white.
        let mut canvas = Canvas::new(200, 100);
        canvas.stroke_segment(Point::new(10, 10), Point::new(100, 10));
        assert_eq!(canvas.pixel(50, 10), Some(STROKE_COLOR));
        assert_eq!(canvas.pixel(50, 20), Some(BACKGROUND));
    }

    #[test]
    fn zero_length_segment_paints_a_dot() {
        let mut canvas = Canvas::new(40, 40);
        canvas.stroke_segment(Point::new(20, 20), Point::new(20, 20));
        assert_eq!(canvas.pixel(20, 20), Some(STROKE_COLOR));
        // The dot carries the stroke's full footprint, not one lone pixel.
        assert_eq!(canvas.pixel(22, 20), Some(STROKE_COLOR));
        assert_eq!(canvas.pixel(20, 18), Some(STROKE_COLOR));
    }

    #[test]
    fn fully_out_of_bounds_segment_leaves_buffer_unchanged() {
        let mut canvas = Canvas::new(50, 50);
        canvas.stroke_segment(Point::new(-40, -10), Point::new(-5, -30));
        canvas.stroke_segment(Point::new(200, 200), Point::new(300, 260));
        assert!(all_background(&canvas));
    }

    #[test]
    fn segment_crossing_the_edge_is_clipped() {
        let mut canvas = Canvas::new(50, 50);
        canvas.stroke_segment(Point::new(-20, 25), Point::new(20, 25));
        assert_eq!(canvas.pixel(10, 25), Some(STROKE_COLOR));
        assert_eq!(canvas.pixel(49, 25), Some(BACKGROUND));
    }

    #[test]
    fn repeated_draw_is_visually_identical() {
        let mut once = Canvas::new(60, 60);
        once.stroke_segment(Point::new(5, 5), Point::new(50, 40));
        let mut twice = Canvas::new(60, 60);
        twice.stroke_segment(Point::new(5, 5), Point::new(50, 40));
        twice.stroke_segment(Point::new(5, 5), Point::new(50, 40));
        assert_eq!(once.pixels(), twice.pixels());
    }

    #[test]
    fn zero_sized_buffer_absorbs_every_operation() {
        let mut canvas = Canvas::new(0, 0);
        canvas.stroke_segment(Point::new(0, 0), Point::new(10, 10));
        canvas.clear();
        assert!(canvas.is_empty());
        assert!(canvas.pixels().is_empty());
        assert_eq!(canvas.pixel(0, 0), None);
    }
}
