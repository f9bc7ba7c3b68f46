use az::{Az, Cast};
use std::cmp::Ordering;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::nearest_neighbour::NearestNeighbour;
use crate::neartree::object::NearTreeObject;
use crate::neartree::tree::{NearTree, ROOT};
use crate::types::{Axis, Index};
use crate::vector::Vector3D;

impl<A, T, IDX> NearTree<A, T, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Finds all objects no further than `search_radius` from `location`.
    ///
    /// Results are returned in arbitrary order. An empty `Vec` means nothing qualified.
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
    /// tree.add(Vector3D::new(200.0, 300.0, 600.0), 102);
    ///
    /// let close = tree.close_objects(&Vector3D::new(1.0, 2.0, 5.0), 10f64);
    ///
    /// assert_eq!(close.len(), 2);
    /// ```
    pub fn close_objects(
        &self,
        location: &Vector3D<A>,
        search_radius: A,
    ) -> Vec<NearestNeighbour<A, &NearTreeObject<A, T>>> {
        #[cfg(feature = "tracing")]
        event!(
            Level::TRACE,
            size = self.size,
            radius = ?search_radius,
            "close objects query"
        );

        let mut matching_items = Vec::new();

        self.close_objects_recurse(location, search_radius, ROOT, &mut |distance, item| {
            matching_items.push(NearestNeighbour { distance, item })
        });

        matching_items
    }

    /// Finds all objects no further than `search_radius` from `location`, nearest first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, NearTree, Vector3D};
    ///
    /// let mut tree: NearTree<f64, u32> = NearTree::new(Metric::Hyperbolic);
    ///
    /// tree.add(Vector3D::new(0.5, 0.0, 0.0), 1);
    /// tree.add(Vector3D::new(0.0, 0.1, 0.0), 2);
    /// tree.add(Vector3D::new(-0.3, 0.0, 0.0), 3);
    ///
    /// let ids: Vec<u32> = tree
    ///     .close_objects_sorted(&Vector3D::origin(), 2.0)
    ///     .into_iter()
    ///     .map(|nn| nn.item.id)
    ///     .collect();
    ///
    /// assert_eq!(ids, vec![2, 3, 1]);
    /// ```
    pub fn close_objects_sorted(
        &self,
        location: &Vector3D<A>,
        search_radius: A,
    ) -> Vec<NearestNeighbour<A, &NearTreeObject<A, T>>> {
        let mut matching_items = self.close_objects(location, search_radius);
        matching_items.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
        matching_items
    }

    /// Counts the objects no further than `search_radius` from `location` without collecting them.
    pub fn close_objects_count(&self, location: &Vector3D<A>, search_radius: A) -> usize {
        let mut count = 0;
        self.close_objects_recurse(location, search_radius, ROOT, &mut |_, _| count += 1);
        count
    }

    // The radius never tightens here: every qualifying object is wanted, not just the closest.
    fn close_objects_recurse<'a, F>(
        &'a self,
        location: &Vector3D<A>,
        search_radius: A,
        node_idx: usize,
        visit: &mut F,
    ) where
        F: FnMut(A, &'a NearTreeObject<A, T>),
    {
        let node = &self.nodes[node_idx];

        let mut dist_to_left = None;
        if let Some(left) = &node.left {
            let dist = (self.distance_fn)(location, &left.location);
            if dist <= search_radius {
                visit(dist, left);
            }
            dist_to_left = Some(dist);
        }

        let mut dist_to_right = None;
        if let Some(right) = &node.right {
            let dist = (self.distance_fn)(location, &right.location);
            if dist <= search_radius {
                visit(dist, right);
            }
            dist_to_right = Some(dist);
        }

        if let (Some(branch), Some(dist)) = (node.left_branch, dist_to_left) {
            if search_radius + node.max_left >= dist {
                self.close_objects_recurse(location, search_radius, branch.az::<usize>(), visit);
            }
        }

        if let (Some(branch), Some(dist)) = (node.right_branch, dist_to_right) {
            if search_radius + node.max_right >= dist {
                self.close_objects_recurse(location, search_radius, branch.az::<usize>(), visit);
            }
        }
    }
}
