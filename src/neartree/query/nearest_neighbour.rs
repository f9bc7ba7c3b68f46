use az::{Az, Cast};

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::nearest_neighbour::NearestNeighbour;
use crate::neartree::object::NearTreeObject;
use crate::neartree::tree::{NearTree, ROOT};
use crate::types::{Axis, Index};
use crate::vector::Vector3D;

/// Running state of a nearest neighbour search, threaded by value through the recursion.
struct NearestSearch<'a, A, T> {
    // tightens every time a closer object turns up
    radius: A,
    closest: Option<&'a NearTreeObject<A, T>>,
}

impl<A, T, IDX> NearTree<A, T, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Queries the tree to find the object nearest to `location` that lies no further than
    /// `search_radius` from it.
    ///
    /// Returns `None` if nothing lies within `search_radius`, which is always the case for an
    /// empty tree. Pass [`Float::infinity`](num_traits::Float::infinity) to search without a
    /// bound. When several objects are equally near, any one of them may be returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, NearTree, Vector3D};
    ///
    /// let mut tree: NearTree<f64, u32> = NearTree::new(Metric::Euclidean);
    ///
    /// tree.add(Vector3D::new(1.0, 2.0, 5.0), 100);
    /// tree.add(Vector3D::new(2.0, 3.0, 6.0), 101);
    ///
    /// let nearest = tree.nearest_neighbour(&Vector3D::new(1.0, 2.0, 5.1), f64::INFINITY).unwrap();
    ///
    /// assert!((nearest.distance - 0.1f64).abs() < 1e-12);
    /// assert_eq!(nearest.item.id, 100);
    ///
    /// assert!(tree.nearest_neighbour(&Vector3D::new(10.0, 10.0, 10.0), 1.0).is_none());
    /// ```
    pub fn nearest_neighbour(
        &self,
        location: &Vector3D<A>,
        search_radius: A,
    ) -> Option<NearestNeighbour<A, &NearTreeObject<A, T>>> {
        #[cfg(feature = "tracing")]
        event!(Level::TRACE, size = self.size, "nearest neighbour query");

        let search = self.nearest_neighbour_recurse(
            location,
            ROOT,
            NearestSearch {
                radius: search_radius,
                closest: None,
            },
        );

        search.closest.map(|item| NearestNeighbour {
            distance: search.radius,
            item,
        })
    }

    fn nearest_neighbour_recurse<'a>(
        &'a self,
        location: &Vector3D<A>,
        node_idx: usize,
        mut search: NearestSearch<'a, A, T>,
    ) -> NearestSearch<'a, A, T> {
        let node = &self.nodes[node_idx];

        let mut dist_to_left = None;
        if let Some(left) = &node.left {
            let dist = (self.distance_fn)(location, &left.location);
            if dist <= search.radius {
                search.radius = dist;
                search.closest = Some(left);
            }
            dist_to_left = Some(dist);
        }

        let mut dist_to_right = None;
        if let Some(right) = &node.right {
            let dist = (self.distance_fn)(location, &right.location);
            if dist <= search.radius {
                search.radius = dist;
                search.closest = Some(right);
            }
            dist_to_right = Some(dist);
        }

        // Nothing in a branch is further than its bound from the object it hangs off, so by the
        // triangle inequality a branch can only hold something closer if this holds.
        if let (Some(branch), Some(dist)) = (node.left_branch, dist_to_left) {
            if search.radius + node.max_left >= dist {
                search = self.nearest_neighbour_recurse(location, branch.az::<usize>(), search);
            }
        }

        if let (Some(branch), Some(dist)) = (node.right_branch, dist_to_right) {
            if search.radius + node.max_right >= dist {
                search = self.nearest_neighbour_recurse(location, branch.az::<usize>(), search);
            }
        }

        search
    }
}
