//! Renderer adapter and per-frame composition.
//!
//! A frame is recomputed from scratch from the controller state: clear,
//! curve primitives, control polygon with point markers, probe marker.

use serde::{Deserialize, Serialize};

use super::*;

/// 32-bit color packed as 0xRRGGBBAA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Unpack into [r, g, b, a]
    pub fn channels(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Pixel layout of a 0RGB framebuffer, alpha is dropped
    pub fn to_0rgb(self) -> u32 {
        self.0 >> 8
    }
}

/// Drawing backend. Coordinates are in logical canvas space.
pub trait Renderer {
    type Error;

    fn clear(&mut self, color: Color);

    fn draw_line(&mut self, begin: Vec2, end: Vec2, color: Color);

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color);

    /// Finish the frame and show it
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Colors used by `Frame::compose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    /// Curve markers and segments
    pub curve: Color,
    /// Markers of the quadratic sampling mode
    pub quadratic: Color,
    /// Control point markers and control polygon
    pub control: Color,
    /// Probe marker when it lies on the quadratic
    pub probe_hit: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color(0x181926FF),
            curve: Color(0xF5A97FFF),
            quadratic: Color(0xF0C6C6FF),
            control: Color(0xB7BDF8FF),
            probe_hit: Color(0x6778E6FF),
        }
    }
}

/// Frame composition settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub palette: Palette,
    pub marker_size: NativeFloat,
    /// Draw a marker at the pointer, highlighted when it lies on the quadratic
    /// of the first three control points
    pub show_probe: bool,
    pub probe_threshold: NativeFloat,
}

impl Default for FrameStyle {
    fn default() -> Self {
        FrameStyle {
            palette: Palette::default(),
            marker_size: MARKER_SIZE,
            show_probe: false,
            probe_threshold: PROBE_THRESHOLD,
        }
    }
}

/// Fill a `size` square centered on `center`
pub fn draw_marker<R>(renderer: &mut R, center: Vec2, size: NativeFloat, color: Color)
where
    R: Renderer + ?Sized,
{
    let extent = Vec2::new(size, size);
    renderer.fill_rect(center - extent * 0.5, extent, color);
}

/// Buffers reused from frame to frame
#[derive(Debug, Default)]
pub struct Frame {
    scratch: Vec<Vec2>,
    primitives: Vec<Primitive<Vec2>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives of the curve drawn by the last `compose()`
    pub fn primitives(&self) -> &[Primitive<Vec2>] {
        &self.primitives
    }

    /// Draw the complete frame for the current `controller` state and present it.
    pub fn compose<R, const N: usize>(
        &mut self,
        renderer: &mut R,
        controller: &Controller<Vec2, N>,
        style: &FrameStyle,
    ) -> Result<(), R::Error>
    where
        R: Renderer + ?Sized,
        [Vec2; N]: tinyvec::Array<Item = Vec2>,
    {
        let palette = &style.palette;
        let points = controller.points().points();
        renderer.clear(palette.background);

        tessellate_into(points, controller.step(), controller.mode(), &mut self.scratch, &mut self.primitives);
        let curve_color = match controller.mode() {
            SampleMode::QuadraticMarkers => palette.quadratic,
            SampleMode::Markers | SampleMode::Segments => palette.curve,
        };
        for primitive in &self.primitives {
            match *primitive {
                Primitive::Marker(p) => draw_marker(renderer, p, style.marker_size, curve_color),
                Primitive::Segment(a, b) => renderer.draw_line(a, b, curve_color),
            }
        }

        for (i, p) in points.iter().enumerate() {
            draw_marker(renderer, *p, style.marker_size, palette.control);
            if let Some(next) = points.get(i + 1) {
                renderer.draw_line(*p, *next, palette.control);
            }
        }

        if style.show_probe {
            if let Some(probe) = controller.pointer() {
                let hit = QuadraticBezier::from_leading(points)
                    .map_or(false, |q| q.passes_near(probe, style.probe_threshold));
                let color = if hit { palette.probe_hit } else { palette.curve };
                draw_marker(renderer, probe, style.marker_size, color);
            }
        }

        renderer.present()
    }
}
