use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Trait defined over generic 2D points P which themselves are generic over their Scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
{
    type Scalar: Float;

    /// Returns the x component of the Point
    fn x(&self) -> Self::Scalar;

    /// Returns the y component of the Point
    fn y(&self) -> Self::Scalar;

    /// Linear interpolation `self + (other - self) * t`.
    /// `t` is not clamped, values outside of [0,1] extrapolate.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self) * t
    }

    /// Returns the squared L2 norm of the Point interpreted as a vector
    fn squared_length(&self) -> Self::Scalar {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Returns the L2 norm of the Point interpreted as a vector
    fn length(&self) -> Self::Scalar {
        self.squared_length().sqrt()
    }

    /// Returns the distance between the two Points self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).length()
    }
}
