//! Near tree storage, construction and queries.

#[doc(hidden)]
pub mod construction;
pub mod object;
#[doc(hidden)]
pub mod query;
pub mod tree;
