//! Möbius transformations of the extended complex plane.
//!
//! Only the subset needed to move points around isometrically is provided: the
//! orientation-preserving isometries of the stereographically projected sphere, the
//! Euclidean plane and the Poincaré disk.

use num_complex::Complex;
use num_traits::Zero;

use crate::geometry::Geometry;
use crate::types::Axis;
use crate::vector::Vector3D;

/// The transformation `z -> (a z + b) / (c z + d)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mobius<A> {
    /// coefficient `a`
    pub a: Complex<A>,
    /// coefficient `b`
    pub b: Complex<A>,
    /// coefficient `c`
    pub c: Complex<A>,
    /// coefficient `d`
    pub d: Complex<A>,
}

impl<A: Axis> Default for Mobius<A> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<A: Axis> Mobius<A> {
    /// Creates a transformation from its four coefficients.
    pub fn new(a: Complex<A>, b: Complex<A>, c: Complex<A>, d: Complex<A>) -> Self {
        Self { a, b, c, d }
    }

    /// The identity transformation.
    pub fn identity() -> Self {
        Self::new(
            Complex::new(A::one(), A::zero()),
            Complex::zero(),
            Complex::zero(),
            Complex::new(A::one(), A::zero()),
        )
    }

    /// Creates an isometry of `geometry` that rotates by `angle` radians about the origin
    /// and then moves the origin to `translation`.
    ///
    /// `translation` must be finite. For the hyperbolic case it must also lie inside the
    /// unit disk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Geometry, Mobius, Vector3D};
    ///
    /// let p = Vector3D::new(0.3f64, -0.2, 0.0);
    /// let m = Mobius::isometry(Geometry::Hyperbolic, 0.0, (-p).to_complex());
    ///
    /// assert!(m.apply(&p).abs() < 1e-12);
    /// ```
    pub fn isometry(geometry: Geometry, angle: A, translation: Complex<A>) -> Self {
        let t = Complex::from_polar(A::one(), angle);
        let one = Complex::new(A::one(), A::zero());
        let c = match geometry {
            Geometry::Spherical => -(translation.conj() * t),
            Geometry::Euclidean => Complex::zero(),
            Geometry::Hyperbolic => translation.conj() * t,
        };

        Self::new(t, translation, c, one)
    }

    /// Applies the transformation to a complex number. Infinite inputs and poles map
    /// consistently through the point at infinity.
    pub fn apply_complex(&self, z: Complex<A>) -> Complex<A> {
        let infinity = Complex::new(A::infinity(), A::infinity());

        if z.re.is_infinite() || z.im.is_infinite() {
            if self.c.is_zero() {
                return infinity;
            }
            return self.a / self.c;
        }

        let denominator = self.c * z + self.d;
        if denominator.is_zero() {
            return infinity;
        }

        (self.a * z + self.b) / denominator
    }

    /// Applies the transformation to the complex projection of `point`.
    /// The result lies in the `z = 0` plane.
    pub fn apply(&self, point: &Vector3D<A>) -> Vector3D<A> {
        Vector3D::from_complex(self.apply_complex(point.to_complex()))
    }

    /// Returns the transformation equivalent to applying `other` and then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
        )
    }

    /// Returns the inverse transformation.
    pub fn inverse(&self) -> Self {
        Self::new(self.d, -self.b, -self.c, self.a)
    }
}
