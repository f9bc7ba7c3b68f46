//! The objects stored in a near tree.

use crate::types::Axis;
use crate::vector::Vector3D;

/// The unit of storage in a near tree: a caller-defined identifier paired with a location.
///
/// The tree never inspects `id`. Once inserted, an object is owned by the tree and never
/// changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearTreeObject<A, T> {
    /// caller-defined identifier
    pub id: T,
    /// where the object lives, in the embedding used by the tree's geometry
    pub location: Vector3D<A>,
}

impl<A: Axis, T> NearTreeObject<A, T> {
    /// Pairs `id` with `location`.
    #[inline]
    pub fn new(id: T, location: Vector3D<A>) -> Self {
        Self { id, location }
    }
}

impl<A: Axis, T> From<(Vector3D<A>, T)> for NearTreeObject<A, T> {
    fn from((location, id): (Vector3D<A>, T)) -> Self {
        Self::new(id, location)
    }
}
