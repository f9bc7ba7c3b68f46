//! Selection of the distance metric shared by every node of a near tree.

use std::fmt;

use crate::distance::{Euclidean, Hyperbolic, Spherical};
use crate::distance_metric::{DistanceFn, DistanceMetric};
use crate::error::NearTreeError;
use crate::geometry::Geometry;
use crate::types::Axis;
use crate::vector::Vector3D;

/// The distance metric used by a near tree.
///
/// Resolved into a plain function with [`Metric::distance_fn`] once when a tree is
/// created or reset, so no dispatch happens per distance evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// see [`Euclidean`]
    #[default]
    Euclidean,
    /// see [`Spherical`]
    Spherical,
    /// see [`Hyperbolic`]
    Hyperbolic,
}

impl Metric {
    /// Returns the distance function for this metric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, Vector3D};
    ///
    /// let dist = Metric::Euclidean.distance_fn::<f64>();
    ///
    /// assert_eq!(dist(&Vector3D::origin(), &Vector3D::new(0.0, 3.0, 4.0)), 5.0);
    /// ```
    pub fn distance_fn<A: Axis>(self) -> DistanceFn<A> {
        match self {
            Metric::Euclidean => <Euclidean as DistanceMetric<A>>::dist,
            Metric::Spherical => <Spherical as DistanceMetric<A>>::dist,
            Metric::Hyperbolic => <Hyperbolic as DistanceMetric<A>>::dist,
        }
    }

    /// Measures a single distance under this metric.
    pub fn dist<A: Axis>(self, a: &Vector3D<A>, b: &Vector3D<A>) -> A {
        (self.distance_fn())(a, b)
    }
}

impl From<Geometry> for Metric {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Spherical => Metric::Spherical,
            Geometry::Euclidean => Metric::Euclidean,
            Geometry::Hyperbolic => Metric::Hyperbolic,
        }
    }
}

impl From<Metric> for u8 {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Euclidean => 0,
            Metric::Spherical => 1,
            Metric::Hyperbolic => 2,
        }
    }
}

impl TryFrom<u8> for Metric {
    type Error = NearTreeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Metric::Euclidean),
            1 => Ok(Metric::Spherical),
            2 => Ok(Metric::Hyperbolic),
            _ => Err(NearTreeError::UnsupportedMetric(code)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Euclidean => "euclidean",
            Metric::Spherical => "spherical",
            Metric::Hyperbolic => "hyperbolic",
        };
        f.write_str(name)
    }
}
