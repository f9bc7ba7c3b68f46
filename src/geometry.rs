//! The three ambient geometries a near tree can index, along with the conversions
//! between a Euclidean-embedded distance from the origin and the true geometric distance.
//!
//! Spherical points live in the stereographic projection of the unit sphere, hyperbolic
//! points in the Poincaré disk. Both conversions are only valid for a displacement measured
//! from the origin, which is why the non-Euclidean metrics first move one point there with a
//! [`Mobius`](crate::Mobius) isometry.

use crate::error::NearTreeError;
use crate::types::Axis;

/// The geometry of the space that points are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// Positive curvature: the unit sphere, stereographically projected onto the plane.
    Spherical,
    /// Zero curvature.
    #[default]
    Euclidean,
    /// Negative curvature: the Poincaré disk.
    Hyperbolic,
}

impl Geometry {
    /// Returns the geometry induced by the regular tiling `{p,q}`, i.e. `q` regular
    /// `p`-gons meeting at every vertex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::Geometry;
    ///
    /// assert_eq!(Geometry::from_schlafli(5, 3), Ok(Geometry::Spherical));
    /// assert_eq!(Geometry::from_schlafli(4, 4), Ok(Geometry::Euclidean));
    /// assert_eq!(Geometry::from_schlafli(7, 3), Ok(Geometry::Hyperbolic));
    /// assert!(Geometry::from_schlafli(2, 3).is_err());
    /// ```
    pub fn from_schlafli(p: u32, q: u32) -> Result<Self, NearTreeError> {
        if p < 3 || q < 3 {
            return Err(NearTreeError::InvalidSchlafli { p, q });
        }

        // 1/p + 1/q against 1/2, cleared of denominators
        let excess = (u64::from(p) - 2) * (u64::from(q) - 2);
        Ok(match excess.cmp(&4) {
            std::cmp::Ordering::Less => Geometry::Spherical,
            std::cmp::Ordering::Equal => Geometry::Euclidean,
            std::cmp::Ordering::Greater => Geometry::Hyperbolic,
        })
    }
}

/// Converts the Euclidean distance `r` of a stereographically projected point from the
/// origin into its great-circle distance on the unit sphere.
#[inline]
pub fn e2s_norm<A: Axis>(r: A) -> A {
    A::two() * r.atan()
}

/// Inverse of [`e2s_norm`].
#[inline]
pub fn s2e_norm<A: Axis>(d: A) -> A {
    (d / A::two()).tan()
}

/// Converts the Euclidean distance `r` of a Poincaré disk point from the origin into its
/// hyperbolic distance. Points on or beyond the boundary circle are infinitely far away.
#[inline]
pub fn e2h_norm<A: Axis>(r: A) -> A {
    if r >= A::one() {
        return A::infinity();
    }
    A::two() * r.atanh()
}

/// Inverse of [`e2h_norm`].
#[inline]
pub fn h2e_norm<A: Axis>(d: A) -> A {
    (d / A::two()).tanh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[rstest]
    #[case(3, 3, Geometry::Spherical)]
    #[case(3, 5, Geometry::Spherical)]
    #[case(5, 3, Geometry::Spherical)]
    #[case(4, 3, Geometry::Spherical)]
    #[case(4, 4, Geometry::Euclidean)]
    #[case(6, 3, Geometry::Euclidean)]
    #[case(3, 6, Geometry::Euclidean)]
    #[case(7, 3, Geometry::Hyperbolic)]
    #[case(4, 5, Geometry::Hyperbolic)]
    #[case(5, 5, Geometry::Hyperbolic)]
    fn schlafli_symbol_selects_geometry(
        #[case] p: u32,
        #[case] q: u32,
        #[case] expected: Geometry,
    ) {
        assert_eq!(Geometry::from_schlafli(p, q), Ok(expected));
    }

    #[rstest]
    #[case(0, 3)]
    #[case(2, 7)]
    #[case(5, 1)]
    fn degenerate_schlafli_symbols_are_rejected(#[case] p: u32, #[case] q: u32) {
        assert_eq!(
            Geometry::from_schlafli(p, q),
            Err(NearTreeError::InvalidSchlafli { p, q })
        );
    }

    #[test]
    fn spherical_norm() {
        assert_eq!(e2s_norm(0.0f64), 0.0);
        // the unit circle is the equator
        assert!((e2s_norm(1.0f64) - FRAC_PI_2).abs() < 1e-12);
        // infinity is the antipode of the origin
        assert!((e2s_norm(f64::INFINITY) - PI).abs() < 1e-12);
    }

    #[test]
    fn hyperbolic_norm() {
        assert_eq!(e2h_norm(0.0f64), 0.0);
        assert!((e2h_norm(0.5f64) - 2.0 * 0.5f64.atanh()).abs() < 1e-12);
        assert!(e2h_norm(1.0f64).is_infinite());
        assert!(e2h_norm(1.5f64).is_infinite());
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.1)]
    #[case(0.5)]
    #[case(0.9)]
    #[case(0.999)]
    fn norm_conversions_round_trip(#[case] r: f64) {
        assert!((s2e_norm(e2s_norm(r)) - r).abs() < 1e-9);
        assert!((h2e_norm(e2h_norm(r)) - r).abs() < 1e-9);
    }
}
