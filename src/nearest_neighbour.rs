//! A result item returned by a query
use std::cmp::Ordering;

/// Represents an entry in the results of a near tree query, with `distance` being the distance of this
/// particular item from the query point, and `item` being the stored object that was found
/// as part of the query.
#[derive(Debug, Copy, Clone)]
pub struct NearestNeighbour<A, T> {
    /// the distance of the found item from the query point according to the tree's distance metric
    pub distance: A,
    /// the stored object that was found in the query
    pub item: T,
}

#[allow(unknown_lints)]
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<A: PartialOrd, T: PartialEq> PartialOrd for NearestNeighbour<A, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: PartialEq, T: PartialEq> PartialEq for NearestNeighbour<A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.item == other.item
    }
}

impl<A, T> From<NearestNeighbour<A, T>> for (A, T) {
    fn from(elem: NearestNeighbour<A, T>) -> Self {
        (elem.distance, elem.item)
    }
}
