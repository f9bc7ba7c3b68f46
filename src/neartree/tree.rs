//! Near tree, for nearest-neighbour and radius queries over points drawn from a Euclidean,
//! spherical or hyperbolic space.

use az::{Az, Cast};

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::distance_metric::DistanceFn;
use crate::geometry::Geometry;
use crate::metric::Metric;
use crate::neartree::object::NearTreeObject;
use crate::types::{Axis, Index};
use crate::vector::Vector3D;

/// Near tree
///
/// Every node stores up to two objects, `left` and `right`, filled in that order. Once both are
/// occupied, each further object is routed to the branch hanging off whichever of the two it is
/// closer to, and that branch's bound on the distance from its stored object grows to cover it.
/// Queries use those bounds with the triangle inequality to skip whole branches.
///
/// Nodes live in an arena indexed by `IDX`, which caps how many nodes the tree can hold.
///
/// # Examples
///
/// ```rust
/// use neartree::{Metric, NearTree, Vector3D};
///
/// let mut tree: NearTree<f64, u32> = NearTree::new(Metric::Euclidean);
///
/// tree.add(Vector3D::new(0.0, 0.0, 0.0), 1);
/// tree.add(Vector3D::new(1.0, 0.0, 0.0), 2);
/// tree.add(Vector3D::new(0.0, 1.0, 0.0), 3);
/// tree.add(Vector3D::new(5.0, 5.0, 0.0), 4);
///
/// let nearest = tree.nearest_neighbour(&Vector3D::new(0.9, 0.0, 0.0), 10.0).unwrap();
/// assert_eq!(nearest.item.id, 2);
///
/// let mut close: Vec<u32> = tree
///     .close_objects(&Vector3D::origin(), 1.5)
///     .into_iter()
///     .map(|nn| nn.item.id)
///     .collect();
/// close.sort();
/// assert_eq!(close, vec![1, 2, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct NearTree<A, T, IDX = u32> {
    pub(crate) metric: Metric,
    pub(crate) distance_fn: DistanceFn<A>,
    pub(crate) nodes: Vec<NearTreeNode<A, T, IDX>>,
    pub(crate) size: usize,
}

/// A single node of the tree. The root is always at index zero.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NearTreeNode<A, T, IDX> {
    pub(crate) left: Option<NearTreeObject<A, T>>,
    pub(crate) right: Option<NearTreeObject<A, T>>,
    // furthest any object routed into the branch has been from `left` / `right`
    pub(crate) max_left: A,
    pub(crate) max_right: A,
    pub(crate) left_branch: Option<IDX>,
    pub(crate) right_branch: Option<IDX>,
}

impl<A: Axis, T, IDX> NearTreeNode<A, T, IDX> {
    pub(crate) fn new() -> Self {
        Self {
            left: None,
            right: None,
            // below any legal distance, so the first object routed to a branch always raises it
            max_left: A::neg_infinity(),
            max_right: A::neg_infinity(),
            left_branch: None,
            right_branch: None,
        }
    }
}

pub(crate) const ROOT: usize = 0;

impl<A, T, IDX> Default for NearTree<A, T, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn default() -> Self {
        Self::new(Metric::default())
    }
}

impl<A, T, IDX> NearTree<A, T, IDX>
where
    A: Axis,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Creates a new, empty near tree that measures distances with `metric`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, NearTree, Vector3D};
    ///
    /// let mut tree: NearTree<f64, &str> = NearTree::new(Metric::Hyperbolic);
    ///
    /// tree.add(Vector3D::new(0.1, 0.2, 0.0), "a");
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn new(metric: Metric) -> Self {
        Self::with_capacity(metric, 0)
    }

    /// Creates a new, empty near tree and reserves room for `capacity` objects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, NearTree, Vector3D};
    ///
    /// let mut tree: NearTree<f32, u32, u16> = NearTree::with_capacity(Metric::Spherical, 1000);
    ///
    /// tree.add(Vector3D::new(1.0, 2.0, 0.0), 100);
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn with_capacity(metric: Metric, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.div_ceil(2).max(1));
        nodes.push(NearTreeNode::new());

        Self {
            metric,
            distance_fn: metric.distance_fn(),
            nodes,
            size: 0,
        }
    }

    /// Creates a new, empty near tree using the metric native to `geometry`.
    #[inline]
    pub fn for_geometry(geometry: Geometry) -> Self {
        Self::new(Metric::from(geometry))
    }

    /// Discards every stored object and rebinds the tree to `metric`.
    ///
    /// The tree afterwards behaves exactly like one freshly created with [`NearTree::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, NearTree, Vector3D};
    ///
    /// let mut tree: NearTree<f64, u32> = NearTree::new(Metric::Euclidean);
    /// tree.add(Vector3D::new(0.5, 0.0, 0.0), 1);
    ///
    /// tree.reset(Metric::Hyperbolic);
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.metric(), Metric::Hyperbolic);
    /// ```
    pub fn reset(&mut self, metric: Metric) {
        #[cfg(feature = "tracing")]
        event!(
            Level::DEBUG,
            from = %self.metric,
            to = %metric,
            discarded = self.size,
            "near tree reset"
        );

        self.metric = metric;
        self.distance_fn = metric.distance_fn();
        self.nodes.clear();
        self.nodes.push(NearTreeNode::new());
        self.size = 0;
    }

    /// The metric shared by every node of this tree.
    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Measures the distance between two points with this tree's metric.
    #[inline]
    pub fn dist(&self, a: &Vector3D<A>, b: &Vector3D<A>) -> A {
        (self.distance_fn)(a, b)
    }

    /// Returns the number of objects stored in the tree.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if no objects have been inserted since creation or the last reset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes in the tree's arena.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// The tree is never rebalanced, so this depends on insertion order.
    pub fn depth(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut deepest = 0;
        let mut stack = vec![(ROOT, 1usize)];
        while let Some((node_idx, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[node_idx];
            for branch in [node.left_branch, node.right_branch].into_iter().flatten() {
                stack.push((branch.az::<usize>(), level + 1));
            }
        }

        deepest
    }

    /// Iterate over all stored objects in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use neartree::{Metric, NearTree, Vector3D};
    ///
    /// let mut tree: NearTree<f64, u32> = NearTree::new(Metric::Euclidean);
    /// tree.add(Vector3D::new(1.0, 2.0, 3.0), 10);
    ///
    /// let ids: Vec<_> = tree.iter().map(|object| object.id).collect();
    /// assert_eq!(ids, vec![10]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &NearTreeObject<A, T>> + '_ {
        self.nodes
            .iter()
            .flat_map(|node| node.left.iter().chain(node.right.iter()))
    }
}
