//! Error types.

use thiserror::Error;

/// Errors raised while configuring a near tree.
///
/// Queries never fail: an empty result is reported through `Option` or an empty `Vec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NearTreeError {
    /// A raw metric code outside of the known Euclidean / spherical / hyperbolic set.
    #[error("unsupported metric code: {0}")]
    UnsupportedMetric(u8),

    /// A Schläfli symbol `{p,q}` that does not describe a regular tiling.
    #[error("invalid Schläfli symbol {{{p},{q}}}: p and q must both be at least 3")]
    InvalidSchlafli {
        /// number of sides of each polygon
        p: u32,
        /// number of polygons meeting at each vertex
        q: u32,
    },
}
