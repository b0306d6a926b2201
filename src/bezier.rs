use core::slice;

use num_traits::{Float, NumCast, One, Zero};
use tinyvec::TinyVec;

use super::*;
use crate::point::Point;

/// Control point count up to which `eval()` keeps its working buffer on the stack.
const INLINE_POINTS: usize = 16;

/// General implementation of a Bezier curve of arbitrary degree (= number of control points - 1).
/// The curve is solely defined by a borrowed slice of 'control_points', which may be
/// changed between frames by the caller; the curve itself holds no state.
/// Points on the curve can be evaluated with an interpolation parameter 't' in interval [0,1]
/// using the eval() and eval_with() methods.
/// Generic parameters:
/// P: Generic points 'P' as defined by their Point trait
#[derive(Debug, Clone, Copy)]
pub struct Bezier<'a, P>
where
    P: Point,
{
    /// Control points which define the curve and hence its degree
    control_points: &'a [P],
}

impl<'a, P: Point> IntoIterator for &Bezier<'a, P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.control_points.iter()
    }
}

impl<'a, P> Bezier<'a, P>
where
    P: Point,
{
    /// Create a new Bezier curve over `control_points`. The degree is defined as
    /// degree = control_points.len() - 1.
    /// A curve needs at least one control point, for an empty slice None is returned.
    pub fn new(control_points: &'a [P]) -> Option<Bezier<'a, P>> {
        if control_points.is_empty() {
            None
        } else {
            Some(Bezier { control_points })
        }
    }

    pub fn control_points(&self) -> &'a [P] {
        self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn start(&self) -> P {
        self.control_points[0]
    }

    pub fn end(&self) -> P {
        self.control_points[self.control_points.len() - 1]
    }

    /// Evaluate a point on the curve at point 't' which should be in the interval [0,1].
    /// Values outside of the interval extrapolate with the same formula.
    /// This is implemented using De Casteljau's algorithm over a temporary buffer
    /// which lives on the stack for small curves.
    pub fn eval(&self, t: P::Scalar) -> P {
        let mut p: TinyVec<[P; INLINE_POINTS]> = self.control_points.iter().copied().collect();
        casteljau(&mut p, t)
    }

    /// Same as `eval()` but works in the caller provided `scratch` buffer, so that
    /// repeated evaluation (e.g. once per sample and frame) does not allocate.
    /// The buffer is resized to the control point count before each pass.
    pub fn eval_with(&self, t: P::Scalar, scratch: &mut Vec<P>) -> P {
        scratch.clear();
        scratch.extend_from_slice(self.control_points);
        casteljau(scratch, t)
    }

    /// Split the curve at `t` into two sub-curves of the same degree.
    /// The left curve covers [0,t], the right one [t,1] of the parent curve.
    pub fn split(&self, t: P::Scalar) -> (Vec<P>, Vec<P>) {
        let n = self.control_points.len();
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        // these points get overriden each level; we save the first and last of each level
        let mut casteljau_points = self.control_points.to_vec();

        for i in 1..=n {
            left.push(casteljau_points[0]);
            right.push(casteljau_points[n - i]);
            for j in 0..n - i {
                casteljau_points[j] = casteljau_points[j].lerp(casteljau_points[j + 1], t);
            }
        }
        right.reverse();
        (left, right)
    }

    /// Returns the control points of the derivative curve (hodograph) of self which has n-1 control points.
    /// The derivative of an nth degree Bézier curve is an (n-1)th degree Bézier curve,
    /// with new weights derived from the original weights as n(w[i+1] - w[i]).
    /// A zero degree curve has a constant position and an empty derivative.
    pub fn derivative(&self) -> Vec<P> {
        let degree = <P::Scalar as NumCast>::from(self.degree()).unwrap_or_else(P::Scalar::zero);
        self.control_points
            .windows(2)
            .map(|w| (w[1] - w[0]) * degree)
            .collect()
    }

    /// Approximates the arc length of the curve by flattening it with `nsteps` straight line segments.
    pub fn arclen(&self, nsteps: usize) -> P::Scalar {
        let nsteps = nsteps.max(1);
        let n = <P::Scalar as NumCast>::from(nsteps).unwrap_or_else(P::Scalar::one);
        let mut scratch = Vec::with_capacity(self.control_points.len());
        let mut arclen = P::Scalar::zero();
        let mut prev = self.start();
        for i in 1..=nsteps {
            let t = <P::Scalar as NumCast>::from(i).unwrap_or_else(P::Scalar::zero) / n;
            let p = self.eval_with(t, &mut scratch);
            arclen = arclen + prev.distance(p);
            prev = p;
        }
        arclen
    }
}

/// De Casteljau's algorithm in place: each level replaces buffer[i] by
/// lerp(buffer[i], buffer[i+1], t) and shrinks the live region by one until
/// one point remains. `buffer` must not be empty.
fn casteljau<P: Point>(buffer: &mut [P], t: P::Scalar) -> P {
    let mut n = buffer.len();
    while n > 1 {
        for i in 0..n - 1 {
            buffer[i] = buffer[i].lerp(buffer[i + 1], t);
        }
        n -= 1;
    }
    buffer[0]
}

/// Convert a native float literal into the scalar type of a point
pub(crate) fn scalar<F: Float>(value: NativeFloat) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn quadratic_closed_form(p: &[Vec2; 3], t: f32) -> Vec2 {
        let s = 1.0 - t;
        p[0] * (s * s) + p[1] * (2.0 * t * s) + p[2] * (t * t)
    }

    #[test]
    fn empty_curve_is_rejected() {
        let points: [Vec2; 0] = [];
        assert!(Bezier::new(&points).is_none());
    }

    #[test]
    fn single_point_identity() {
        let points = [Vec2::new(3.5, -7.25)];
        let curve = Bezier::new(&points).unwrap();
        assert_eq!(curve.degree(), 0);
        for t in [-1.0, 0.0, 0.3, 0.5, 1.0, 2.0] {
            assert_eq!(curve.eval(t), points[0]);
        }
    }

    #[test]
    fn eval_endpoints() {
        let points = [
            Vec2::new(0.0, 1.77),
            Vec2::new(1.1, -1.0),
            Vec2::new(4.3, 3.0),
            Vec2::new(3.2, -4.0),
            Vec2::new(7.3, 2.7),
            Vec2::new(8.9, 1.7),
        ];
        let curve = Bezier::new(&points).unwrap();

        // check if start/end points match
        let err_start = curve.eval(0.0) - points[0];
        assert!(err_start.squared_length() < EPSILON);

        let err_end = curve.eval(1.0) - points[points.len() - 1];
        assert!(err_end.squared_length() < EPSILON);
    }

    #[test]
    fn linear_is_single_lerp() {
        let points = [Vec2::new(-2.0, 5.0), Vec2::new(8.0, 1.0)];
        let curve = Bezier::new(&points).unwrap();
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert_eq!(curve.eval(t), points[0].lerp(points[1], t));
        }
    }

    #[test]
    fn quadratic_matches_closed_form() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
        ];
        let curve = Bezier::new(&points).unwrap();
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let expected = quadratic_closed_form(&points, t);
            let actual = curve.eval(t);
            assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-4);
            assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-4);
        }
        // (50,0) and (100,50) on the first level, lerped again at 0.5
        let mid = curve.eval(0.5);
        assert_abs_diff_eq!(mid.x, 75.0, epsilon = 1e-4);
        assert_abs_diff_eq!(mid.y, 25.0, epsilon = 1e-4);
    }

    #[test]
    fn scratch_buffer_is_reused_and_resized() {
        let quadratic = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(3.0, 0.0)];
        let linear = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)];
        let mut scratch = Vec::new();

        let a = Bezier::new(&quadratic).unwrap().eval_with(0.3, &mut scratch);
        assert_eq!(a, Bezier::new(&quadratic).unwrap().eval(0.3));

        // a shorter curve after a longer one must not pick up stale points
        let b = Bezier::new(&linear).unwrap().eval_with(0.5, &mut scratch);
        assert_eq!(b, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn large_curves_spill_to_heap() {
        let points: Vec<Vec2> = (0..40).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let curve = Bezier::new(&points).unwrap();
        // evenly spaced collinear control points give a linear parametrization
        assert_abs_diff_eq!(curve.eval(0.5).x, 19.5, epsilon = 1e-3);
        assert_abs_diff_eq!(curve.eval(1.0).x, 39.0, epsilon = 1e-3);
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0)];
        let curve = Bezier::new(&points).unwrap();
        assert_eq!(curve.eval(1.25), Vec2::new(125.0, 125.0));
        assert_eq!(curve.eval(-0.5), Vec2::new(-50.0, -50.0));
    }

    #[test]
    fn split_equivalence() {
        let points = [
            Vec2::new(0.0, 1.77),
            Vec2::new(2.9, 0.0),
            Vec2::new(4.3, 3.0),
            Vec2::new(3.2, -4.0),
        ];
        let curve = Bezier::new(&points).unwrap();
        let (left, right) = curve.split(0.5);
        let left = Bezier::new(&left).unwrap();
        let right = Bezier::new(&right).unwrap();
        let nsteps: usize = 100;
        for t in 0..=nsteps {
            let t = t as f32 / nsteps as f32;
            let err = curve.eval(t / 2.0) - left.eval(t);
            assert!(err.squared_length() < 1e-6);
            let err = curve.eval(t * 0.5 + 0.5) - right.eval(t);
            assert!(err.squared_length() < 1e-6);
        }
    }

    #[test]
    fn derivative_of_quadratic() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(3.0, 0.0)];
        let curve = Bezier::new(&points).unwrap();
        let d = curve.derivative();
        assert_eq!(d, vec![Vec2::new(2.0, 4.0), Vec2::new(4.0, -4.0)]);

        let single = [Vec2::new(1.0, 1.0)];
        assert!(Bezier::new(&single).unwrap().derivative().is_empty());
    }

    #[test]
    fn arclen_of_straight_line() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)];
        let curve = Bezier::new(&points).unwrap();
        assert_abs_diff_eq!(curve.arclen(32), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn arclen_samples_in_double_precision() {
        let points = [
            Point2::new(0.0f64, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
        ];
        let curve = Bezier::new(&points).unwrap();
        let nsteps = 3;
        let mut expected = 0.0;
        let mut prev = curve.start();
        for i in 1..=nsteps {
            let p = curve.eval(i as f64 / nsteps as f64);
            expected += prev.distance(p);
            prev = p;
        }
        assert_abs_diff_eq!(curve.arclen(nsteps), expected, epsilon = 1e-12);
    }
}
