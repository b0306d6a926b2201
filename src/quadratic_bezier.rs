use num_traits::{Float, One, Zero};

use super::*;
use crate::bezier::scalar;

/// Default distance in canvas units within which `passes_near()` accepts a probe.
pub const PROBE_THRESHOLD: NativeFloat = 10.0;

/// A quadratic Bezier curve defined by three points: the starting point, a control point
/// and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * start + 2 * (1 - t) * t * ctrl + t² * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl: P,
    pub(crate) end: P,
}

impl<P> QuadraticBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl: P, end: P) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    /// Build a quadratic from the first three entries of `control_points`,
    /// any further points are ignored. Returns None for fewer than three points.
    pub fn from_leading(control_points: &[P]) -> Option<Self> {
        match control_points {
            [start, ctrl, end, ..] => Some(QuadraticBezier::new(*start, *ctrl, *end)),
            _ => None,
        }
    }

    /// Evaluate the curve at t by direct evaluation of the polynomial in power basis:
    /// `start + 2t(ctrl - start) + t²(end - 2ctrl + start)`
    pub fn eval(&self, t: P::Scalar) -> P {
        let two = scalar::<P::Scalar>(2.0);
        self.start + (self.ctrl - self.start) * (two * t) + self.accel() * (t * t)
    }

    /// Second order coefficient `end - 2ctrl + start`
    fn accel(&self) -> P {
        self.end + self.ctrl * scalar::<P::Scalar>(-2.0) + self.start
    }

    /// Tests whether `probe` lies on the curve within `threshold`.
    ///
    /// Solves x(t) = probe.x with the quadratic formula and accepts if any root
    /// in [0,1] has a y(t) within `threshold` of probe.y.
    /// Only meaningful for a proper quadratic: if the x coefficient `a` is zero
    /// (control points evenly spaced along x) the division yields
    /// infinities/NaN and the probe is rejected.
    pub fn passes_near(&self, probe: P, threshold: P::Scalar) -> bool {
        let zero = P::Scalar::zero();
        let one = P::Scalar::one();
        let two = scalar::<P::Scalar>(2.0);
        let four = scalar::<P::Scalar>(4.0);

        let a = self.accel().x();
        let b = two * (self.ctrl.x() - self.start.x());
        let c = self.start.x() - probe.x();
        let dx = b * b - four * a * c;
        if dx < zero {
            return false;
        }

        let y_at = |t: P::Scalar| {
            self.start.y()
                + two * t * (self.ctrl.y() - self.start.y())
                + t * t * self.accel().y()
        };
        let near = |t: P::Scalar| {
            zero <= t && t <= one && (probe.y() - y_at(t)).abs() < threshold
        };

        let t1 = (-b + dx.sqrt()) / (two * a);
        let t2 = (-b - dx.sqrt()) / (two * a);
        near(t1) || near(t2)
    }
}
