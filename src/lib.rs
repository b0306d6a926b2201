//! Interactive Bézier curves of arbitrary degree.
//!
//! The library holds everything but the window: De Casteljau evaluation over
//! a slice of control points, the sampling policy that turns the curve into
//! markers or line segments, the editable control point set, the controller
//! translating input events into edits and the frame composition on top of a
//! small `Renderer` trait. The `window` feature adds a minifb window used by
//! the `casteljau` binary.
//!
//! ```rust
//! use casteljau::{tessellate, Bezier, Primitive, SampleMode, Vec2};
//!
//! let points = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)];
//! let curve = Bezier::new(&points).unwrap();
//! assert_eq!(curve.eval(0.5), Vec2::new(75.0, 25.0));
//!
//! let primitives = tessellate(&points, 0.5, SampleMode::Markers);
//! assert_eq!(primitives.len(), 3);
//! assert_eq!(primitives[1], Primitive::Marker(Vec2::new(75.0, 25.0)));
//! ```

pub mod bezier;
pub mod config;
pub mod control_points;
pub mod framebuffer;
pub mod interaction;
pub mod point;
pub mod point2;
pub mod quadratic_bezier;
pub mod render;
pub mod tessellate;
#[cfg(feature = "window")]
pub mod window;

// Float type of the canvas and its curves, single precision is plenty for pixels
pub type NativeFloat = f32;

/// Tolerance for squared distance comparisons
pub const EPSILON: NativeFloat = 1e-6;

/// The point type of the interactive canvas
pub type Vec2 = point2::Point2<NativeFloat>;

pub use bezier::Bezier;
pub use config::ViewerOptions;
pub use control_points::{ControlPointSet, DEFAULT_CAPACITY, MARKER_SIZE};
pub use framebuffer::{Canvas, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use interaction::{
    Button, Controller, Flow, InputEvent, Key, SampleStep, SAMPLE_STEP, SAMPLE_STEP_DELTA, SAMPLE_STEP_MAX,
    SAMPLE_STEP_MIN,
};
pub use point::Point;
pub use point2::Point2;
pub use quadratic_bezier::{QuadraticBezier, PROBE_THRESHOLD};
pub use render::{draw_marker, Color, Frame, FrameStyle, Palette, Renderer};
pub use tessellate::{parameters, tessellate, tessellate_into, Primitive, SampleMode};
#[cfg(feature = "window")]
pub use window::{CanvasWindow, WindowError};
