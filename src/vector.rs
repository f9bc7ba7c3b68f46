//! The 3D point type stored in a near tree.
//!
//! Spherical and hyperbolic points are stored in their planar embedding (stereographic
//! projection and Poincaré disk respectively), so only `x` and `y` take part in the complex
//! plane conversions used by those metrics.

use num_complex::Complex;
use std::ops::{Add, Mul, Neg, Sub};

use crate::types::Axis;

/// A point, or a displacement between two points, in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3D<A> {
    /// x co-ordinate
    pub x: A,
    /// y co-ordinate
    pub y: A,
    /// z co-ordinate
    pub z: A,
}

impl<A: Axis> Vector3D<A> {
    /// Creates a new point from its co-ordinates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::Vector3D;
    ///
    /// let p = Vector3D::new(3.0f64, 4.0, 0.0);
    ///
    /// assert_eq!(p.abs(), 5.0);
    /// ```
    #[inline]
    pub fn new(x: A, y: A, z: A) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self::new(A::zero(), A::zero(), A::zero())
    }

    /// The point at infinity of the extended plane.
    #[inline]
    pub fn infinity() -> Self {
        Self::new(A::infinity(), A::infinity(), A::zero())
    }

    /// Returns true if any co-ordinate is infinite.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.x.is_infinite() || self.y.is_infinite() || self.z.is_infinite()
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> A {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared magnitude.
    #[inline]
    pub fn mag_squared(&self) -> A {
        self.dot(self)
    }

    /// Magnitude of this vector, i.e. its Euclidean distance from the origin.
    #[inline]
    pub fn abs(&self) -> A {
        self.mag_squared().sqrt()
    }

    /// Rotates the vector about the z axis by `angle` radians.
    pub fn rotate_xy(&mut self, angle: A) {
        let (sin, cos) = angle.sin_cos();
        let x = self.x * cos - self.y * sin;
        let y = self.x * sin + self.y * cos;
        self.x = x;
        self.y = y;
    }

    /// Projects onto the complex plane, discarding `z`.
    #[inline]
    pub fn to_complex(&self) -> Complex<A> {
        Complex::new(self.x, self.y)
    }

    /// Lifts a complex number into the `z = 0` plane.
    #[inline]
    pub fn from_complex(c: Complex<A>) -> Self {
        Self::new(c.re, c.im, A::zero())
    }
}

impl<A: Axis> Add for Vector3D<A> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<A: Axis> Sub for Vector3D<A> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<A: Axis> Neg for Vector3D<A> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<A: Axis> Mul<A> for Vector3D<A> {
    type Output = Self;

    fn mul(self, rhs: A) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<A: Axis> From<[A; 3]> for Vector3D<A> {
    fn from([x, y, z]: [A; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<A: Axis> From<Complex<A>> for Vector3D<A> {
    fn from(c: Complex<A>) -> Self {
        Self::from_complex(c)
    }
}
