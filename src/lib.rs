#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # Neartree
//!
//! A near tree for nearest-neighbour and radius queries over points drawn from a Euclidean,
//! spherical or hyperbolic space.
//!
//! A near tree is a binary metric tree. Each node holds up to two objects and two branches, and
//! remembers how far anything in each branch lies from the object it hangs off. Queries use those
//! bounds with the triangle inequality to skip branches that can't hold an answer, so the only
//! thing the tree needs from the geometry is a distance function. That makes it equally happy
//! indexing points of the Poincaré disk, the stereographically projected sphere, or plain 3D space.
//!
//! ## Installation
//!
//! Add `neartree` to `Cargo.toml`
//! ```toml
//! [dependencies]
//! neartree = "0.3"
//! ```
//!
//! ## Usage
//! ```rust
//! use neartree::{Geometry, NearTree, Vector3D};
//!
//! let mut tree: NearTree<f64, u32> = NearTree::for_geometry(Geometry::Euclidean);
//!
//! tree.add(Vector3D::new(0.0, 0.0, 0.0), 1);
//! tree.add(Vector3D::new(1.0, 0.0, 0.0), 2);
//! tree.add(Vector3D::new(0.0, 1.0, 0.0), 3);
//! tree.add(Vector3D::new(5.0, 5.0, 0.0), 4);
//!
//! assert_eq!(tree.size(), 4);
//!
//! let nearest = tree.nearest_neighbour(&Vector3D::new(0.9, 0.0, 0.0), 10.0).unwrap();
//! assert_eq!(nearest.item.id, 2);
//!
//! let mut close: Vec<u32> = tree
//!     .close_objects(&Vector3D::origin(), 1.5)
//!     .into_iter()
//!     .map(|nn| nn.item.id)
//!     .collect();
//! close.sort();
//! assert_eq!(close, vec![1, 2, 3]);
//! ```
//!
//! ## Hyperbolic points
//! ```rust
//! use neartree::{Geometry, NearTree, Vector3D};
//!
//! let mut tree: NearTree<f64, &str> = NearTree::for_geometry(Geometry::Hyperbolic);
//!
//! tree.add(Vector3D::new(0.0, 0.0, 0.0), "centre");
//! tree.add(Vector3D::new(0.9, 0.0, 0.0), "edge");
//!
//! // a point close to the boundary is a long way from everything
//! let nearest = tree.nearest_neighbour(&Vector3D::new(0.5, 0.0, 0.0), f64::INFINITY).unwrap();
//! assert_eq!(nearest.item.id, "centre");
//! ```

pub mod distance;
pub mod distance_metric;
pub mod error;
pub mod geometry;
pub mod metric;
pub mod mobius;
pub mod nearest_neighbour;
pub mod neartree;
#[cfg(feature = "test_utils")]
#[doc(hidden)]
pub mod test_utils;
pub mod types;
pub mod vector;

pub use crate::error::NearTreeError;
pub use crate::geometry::Geometry;
pub use crate::metric::Metric;
pub use crate::mobius::Mobius;
pub use crate::nearest_neighbour::NearestNeighbour;
pub use crate::neartree::object::NearTreeObject;
pub use crate::neartree::tree::NearTree;
pub use crate::vector::Vector3D;
