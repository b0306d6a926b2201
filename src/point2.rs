use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

use super::point::Point;

/// Two dimensional point/vector with components of generic type T.
/// Plain value type without identity, two points are equal if their components are.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T: Float> Point2<T> {
    /// Component-wise scaling, same as `self * s`
    pub fn scale(self, s: T) -> Self {
        Point2 {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Neg for Point2<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    // The multiplication is done by multiplying T * T => T for each component,
    // the scalar is the right hand side operand.
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default,
{
    type Scalar = T;

    fn x(&self) -> Self::Scalar {
        self.x
    }

    fn y(&self) -> Self::Scalar {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic() {
        let a = Point2::new(1.0f32, 2.0);
        let b = Point2::new(4.0f32, -2.0);
        assert_eq!(a + b, Point2::new(5.0, 0.0));
        assert_eq!(b - a, Point2::new(3.0, -4.0));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
        assert_eq!(a.scale(0.5), Point2::new(0.5, 1.0));
        assert_eq!(-a, Point2::new(-1.0, -2.0));
    }

    /// Check whether classic pythagorean equality holds for sides 3, 4 with hypotenuse 5
    #[test]
    fn length_and_distance() {
        let a = Point2::new(1.0f32, 2.0);
        let b = Point2::new(4.0f32, -2.0);
        assert_relative_eq!((b - a).length(), 5.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(Point2::new(0.0f32, 0.0).length(), 0.0);
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Point2::new(0.0f32, 0.0);
        let b = Point2::new(10.0f32, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert!((a.lerp(b, 0.5) - Point2::new(5.0, 10.0)).squared_length() < EPSILON);
        assert!((a.lerp(b, 1.5) - Point2::new(15.0, 30.0)).squared_length() < EPSILON);
        assert!((a.lerp(b, -0.5) - Point2::new(-5.0, -10.0)).squared_length() < EPSILON);
    }

    #[test]
    fn nan_propagates() {
        let a = Point2::new(f32::NAN, 0.0);
        let b = Point2::new(1.0f32, 1.0);
        let p = a.lerp(b, 0.5);
        assert!(p.x.is_nan());
        assert_relative_eq!(p.y, 0.5);
    }

    #[test]
    fn tuple_conversion() {
        let p: Point2<f32> = (3.0, 4.0).into();
        let (x, y): (f32, f32) = p.into();
        assert_eq!((x, y), (3.0, 4.0));
    }
}
