//! The trait that needs to be implemented by any distance metrics

use crate::vector::Vector3D;

/// Trait that needs to be implemented by any potential distance
/// metric to be used by a near tree
pub trait DistanceMetric<A> {
    /// returns the distance between two points, as measured
    /// by a particular distance metric.
    ///
    /// Must be non-negative, symmetric and satisfy the triangle inequality:
    /// the near tree's pruning relies on it.
    fn dist(a: &Vector3D<A>, b: &Vector3D<A>) -> A;
}

/// A distance function resolved from a [`DistanceMetric`]
pub type DistanceFn<A> = fn(&Vector3D<A>, &Vector3D<A>) -> A;
