//! Software raster for the fixed size logical canvas.
//! Pixels are stored row-major as 0x00RRGGBB, the layout minifb expects.

use core::convert::Infallible;

use super::*;

/// Logical canvas size, independent of the actual window size
pub const CANVAS_WIDTH: usize = 800;
pub const CANVAS_HEIGHT: usize = 600;

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![0u32; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Put a pixel on the canvas if (x,y) is inside bounds.
    #[inline]
    fn put_pixel(&mut self, x: i64, y: i64, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

/// Snap a logical coordinate to its pixel
fn to_pixel(v: NativeFloat) -> i64 {
    v.floor() as i64
}

/// Liang-Barsky: cut the segment to the rectangle [0,width]x[0,height].
/// Returns None if nothing of it is inside.
fn clip_line(begin: Vec2, end: Vec2, width: NativeFloat, height: NativeFloat) -> Option<(Vec2, Vec2)> {
    let d = end - begin;
    let (mut t0, mut t1): (NativeFloat, NativeFloat) = (0.0, 1.0);
    let edges = [
        (-d.x, begin.x),
        (d.x, width - begin.x),
        (-d.y, begin.y),
        (d.y, height - begin.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    let (begin, end) = (begin + d * t0, begin + d * t1);
    if begin.x.is_finite() && begin.y.is_finite() && end.x.is_finite() && end.y.is_finite() {
        Some((begin, end))
    } else {
        None
    }
}

impl Renderer for Canvas {
    type Error = Infallible;

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_0rgb());
    }

    /// Bresenham between the floored endpoints after clipping to the canvas.
    /// Lines with a non-finite endpoint are skipped.
    fn draw_line(&mut self, begin: Vec2, end: Vec2, color: Color) {
        if !(begin.x.is_finite() && begin.y.is_finite() && end.x.is_finite() && end.y.is_finite()) {
            return;
        }
        let (begin, end) = match clip_line(begin, end, self.width as NativeFloat, self.height as NativeFloat) {
            Some(clipped) => clipped,
            None => return,
        };
        let color = color.to_0rgb();
        let (mut x0, mut y0) = (to_pixel(begin.x), to_pixel(begin.y));
        let (x1, y1) = (to_pixel(end.x), to_pixel(end.y));
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put_pixel(x0, y0, color);
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

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        if !(top_left.x.is_finite() && top_left.y.is_finite() && size.x.is_finite() && size.y.is_finite()) {
            return;
        }
        let color = color.to_0rgb();
        let x0 = to_pixel(top_left.x).max(0);
        let y0 = to_pixel(top_left.y).max(0);
        let x1 = (to_pixel(top_left.x) + to_pixel(size.x)).min(self.width as i64);
        let y1 = (to_pixel(top_left.y) + to_pixel(size.y)).min(self.height as i64);
        for y in y0..y1 {
            let row = y as usize * self.width;
            for x in x0..x1 {
                self.pixels[row + x as usize] = color;
            }
        }
    }

    fn present(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}
