//! Contains the distance metrics for each of the three geometries a near tree can index.

use crate::distance_metric::DistanceMetric;
use crate::geometry::{e2h_norm, e2s_norm, Geometry};
use crate::mobius::Mobius;
use crate::types::Axis;
use crate::vector::Vector3D;

/// Returns the straight-line distance between two points.
///
/// # Examples
///
/// ```rust
/// use neartree::distance::Euclidean;
/// use neartree::distance_metric::DistanceMetric;
/// use neartree::Vector3D;
///
/// let a = Vector3D::new(0f64, 0f64, 0f64);
/// let b = Vector3D::new(1f64, 2f64, 2f64);
///
/// assert_eq!(0f64, Euclidean::dist(&a, &a));
/// assert_eq!(3f64, Euclidean::dist(&a, &b));
/// ```
pub struct Euclidean {}

impl<A: Axis> DistanceMetric<A> for Euclidean {
    #[inline]
    fn dist(a: &Vector3D<A>, b: &Vector3D<A>) -> A {
        (*b - *a).abs()
    }
}

/// Returns the great-circle distance on the unit sphere between two stereographically
/// projected points.
///
/// The point at infinity of the projection is the north pole and is a valid location.
///
/// # Examples
///
/// ```rust
/// use neartree::distance::Spherical;
/// use neartree::distance_metric::DistanceMetric;
/// use neartree::Vector3D;
///
/// let south_pole = Vector3D::new(0f64, 0f64, 0f64);
/// let equator = Vector3D::new(1f64, 0f64, 0f64);
///
/// assert!((Spherical::dist(&south_pole, &equator) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub struct Spherical {}

impl<A: Axis> DistanceMetric<A> for Spherical {
    #[inline]
    fn dist(a: &Vector3D<A>, b: &Vector3D<A>) -> A {
        // only a finite point can be moved to the origin
        match (a.is_infinite(), b.is_infinite()) {
            (true, true) => A::zero(),
            (true, false) => e2s_norm(recentre(Geometry::Spherical, b, a).abs()),
            _ => e2s_norm(recentre(Geometry::Spherical, a, b).abs()),
        }
    }
}

/// Returns the hyperbolic distance between two points of the Poincaré disk.
///
/// Points on or beyond the boundary circle are infinitely far from everything.
///
/// # Examples
///
/// ```rust
/// use neartree::distance::Hyperbolic;
/// use neartree::distance_metric::DistanceMetric;
/// use neartree::Vector3D;
///
/// let a = Vector3D::new(0f64, 0f64, 0f64);
/// let b = Vector3D::new(0.5f64, 0f64, 0f64);
///
/// assert!((Hyperbolic::dist(&a, &b) - 3f64.ln()).abs() < 1e-12);
/// ```
pub struct Hyperbolic {}

impl<A: Axis> DistanceMetric<A> for Hyperbolic {
    #[inline]
    fn dist(a: &Vector3D<A>, b: &Vector3D<A>) -> A {
        if a.abs() >= A::one() || b.abs() >= A::one() {
            return A::infinity();
        }
        e2h_norm(recentre(Geometry::Hyperbolic, a, b).abs())
    }
}

/// Where `to` lands once `from` has been moved to the origin.
#[inline]
fn recentre<A: Axis>(geometry: Geometry, from: &Vector3D<A>, to: &Vector3D<A>) -> Vector3D<A> {
    Mobius::isometry(geometry, A::zero(), (-*from).to_complex()).apply(to)
}
