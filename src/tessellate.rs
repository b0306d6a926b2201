//! Sampling policy that turns a curve into renderable primitives.
//!
//! Samples are taken at t = 0, step, 2·step, ... while t <= 1 with the
//! parameter accumulated by repeated addition. Accumulation error may include
//! or skip the sample at t≈1 depending on the step; this is accepted and not
//! corrected by snapping.

use num_traits::Float;

use super::*;

/// How a curve is turned into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// One marker per sample, evaluated with the generic algorithm
    #[default]
    Markers,
    /// One line per sample from B(t) to B(t + step)
    Segments,
    /// One marker per sample on the quadratic formed by the first three control
    /// points. Produces nothing for fewer than three points.
    QuadraticMarkers,
}

impl SampleMode {
    /// Flip between marker and segment rendering.
    pub fn toggled(self) -> Self {
        match self {
            SampleMode::Markers => SampleMode::Segments,
            SampleMode::Segments | SampleMode::QuadraticMarkers => SampleMode::Markers,
        }
    }
}

/// Renderable output of the sampling policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<P> {
    Marker(P),
    Segment(P, P),
}

/// Iterator over the accumulated parameter sequence 0, step, 2·step, ... <= 1
#[derive(Debug, Clone)]
pub struct Parameters<F> {
    t: F,
    step: F,
}

impl<F: Float> Iterator for Parameters<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        if self.t <= F::one() {
            let t = self.t;
            self.t = self.t + self.step;
            Some(t)
        } else {
            None
        }
    }
}

/// Parameter values sampled for `step`. A step that is not strictly positive
/// (or NaN) would never reach the end and yields no parameters at all.
/// Neither does a step so small that `1 + step` rounds back to 1: the
/// accumulated `t` would stop advancing somewhere below 1.
pub fn parameters<F: Float>(step: F) -> Parameters<F> {
    if step > F::zero() && F::one() + step > F::one() {
        Parameters { t: F::zero(), step }
    } else {
        Parameters {
            t: F::infinity(),
            step,
        }
    }
}

/// Tessellate the curve defined by `control_points` into primitives.
/// An empty control point slice produces no primitives.
pub fn tessellate<P: Point>(control_points: &[P], step: P::Scalar, mode: SampleMode) -> Vec<Primitive<P>> {
    let mut out = Vec::new();
    let mut scratch = Vec::with_capacity(control_points.len());
    tessellate_into(control_points, step, mode, &mut scratch, &mut out);
    out
}

/// Same as `tessellate()` but appends into `out` after clearing it and evaluates in
/// `scratch`, so a caller running this every frame keeps both allocations.
pub fn tessellate_into<P: Point>(
    control_points: &[P],
    step: P::Scalar,
    mode: SampleMode,
    scratch: &mut Vec<P>,
    out: &mut Vec<Primitive<P>>,
) {
    out.clear();
    let curve = match Bezier::new(control_points) {
        Some(curve) => curve,
        None => return,
    };

    match mode {
        SampleMode::Markers => {
            out.extend(parameters(step).map(|t| Primitive::Marker(curve.eval_with(t, scratch))));
        }
        SampleMode::Segments => {
            // t + step may slightly exceed 1 and is extrapolated, not clamped
            for t in parameters(step) {
                let begin = curve.eval_with(t, scratch);
                let end = curve.eval_with(t + step, scratch);
                out.push(Primitive::Segment(begin, end));
            }
        }
        SampleMode::QuadraticMarkers => {
            if let Some(quadratic) = QuadraticBezier::from_leading(control_points) {
                out.extend(parameters(step).map(|t| Primitive::Marker(quadratic.eval(t))));
            }
        }
    }
}
