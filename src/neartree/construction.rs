use az::{Az, Cast};

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::metric::Metric;
use crate::neartree::object::NearTreeObject;
use crate::neartree::tree::{NearTree, NearTreeNode, ROOT};
use crate::types::{Axis, Index};
use crate::vector::Vector3D;

impl<A, T, IDX> NearTree<A, T, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Inserts an object into the tree.
    ///
    /// The tree takes ownership of the object. Descent is iterative, so no amount of
    /// lopsidedness in the insertion order can overflow the stack here.
    ///
    /// # Panics
    ///
    /// If a new node is needed and the arena already holds as many nodes as `IDX` can index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, NearTree, NearTreeObject, Vector3D};
    ///
    /// let mut tree: NearTree<f64, u32> = NearTree::new(Metric::Euclidean);
    ///
    /// tree.insert(NearTreeObject::new(100, Vector3D::new(1.0, 2.0, 5.0)));
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, object: NearTreeObject<A, T>) {
        let distance_fn = self.distance_fn;
        let mut node_idx = ROOT;

        loop {
            let node = &mut self.nodes[node_idx];

            let (dist_to_left, dist_to_right) = match (&node.left, &node.right) {
                (Some(left), Some(right)) => (
                    distance_fn(&object.location, &left.location),
                    distance_fn(&object.location, &right.location),
                ),
                (None, _) => {
                    node.left = Some(object);
                    break;
                }
                (Some(_), None) => {
                    node.right = Some(object);
                    break;
                }
            };

            // ties go left
            let is_right = dist_to_left > dist_to_right;
            let branch = if is_right {
                if node.max_right < dist_to_right {
                    node.max_right = dist_to_right;
                }
                node.right_branch
            } else {
                if node.max_left < dist_to_left {
                    node.max_left = dist_to_left;
                }
                node.left_branch
            };

            node_idx = match branch {
                Some(branch_idx) => branch_idx.az::<usize>(),
                None => self.add_branch(node_idx, is_right),
            };
        }

        self.size += 1;
    }

    /// Inserts a new object with identifier `id` at `location`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, NearTree, Vector3D};
    ///
    /// let mut tree: NearTree<f64, u32> = NearTree::new(Metric::Spherical);
    ///
    /// tree.add(Vector3D::new(1.0, 2.0, 0.0), 100);
    /// tree.add(Vector3D::new(-0.5, 0.5, 0.0), 101);
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn add(&mut self, location: Vector3D<A>, id: T) {
        self.insert(NearTreeObject::new(id, location));
    }

    /// Builds a tree over `metric` holding every object yielded by `objects`, inserted in order.
    pub fn from_objects<I>(metric: Metric, objects: I) -> Self
    where
        I: IntoIterator<Item = NearTreeObject<A, T>>,
    {
        let objects = objects.into_iter();
        let mut tree = Self::with_capacity(metric, objects.size_hint().0);
        tree.extend(objects);
        tree
    }

    fn add_branch(&mut self, parent_idx: usize, is_right: bool) -> usize {
        let branch_idx = self.nodes.len();
        assert!(
            branch_idx <= IDX::capacity(),
            "near tree has run out of node indices for its index type ({} nodes)",
            branch_idx
        );

        self.nodes.push(NearTreeNode::new());
        let parent = &mut self.nodes[parent_idx];
        if is_right {
            parent.right_branch = Some(branch_idx.az::<IDX>());
        } else {
            parent.left_branch = Some(branch_idx.az::<IDX>());
        }

        #[cfg(feature = "tracing")]
        event!(
            Level::TRACE,
            parent = parent_idx,
            branch = branch_idx,
            side = if is_right { "right" } else { "left" },
            "near tree branch created"
        );

        branch_idx
    }
}

impl<A, T, IDX> Extend<NearTreeObject<A, T>> for NearTree<A, T, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn extend<I: IntoIterator<Item = NearTreeObject<A, T>>>(&mut self, objects: I) {
        for object in objects {
            self.insert(object);
        }
    }
}
