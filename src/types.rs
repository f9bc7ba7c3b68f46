//! Definitions for some types that are used across the crate

use az::Cast;
use num_traits::{Float, FloatConst, PrimInt, Unsigned};
use std::fmt::Debug;

/// Axis trait represents the traits that must be implemented
/// by the type used for the co-ordinates of points stored in a
/// [`NearTree`](crate::NearTree). This will be [`f64`] or [`f32`].
pub trait Axis: Float + FloatConst + Default + Debug + Copy + Sync + Send + std::ops::AddAssign {
    /// returns the constant two, used throughout the norm conversions
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}
impl<T: Float + FloatConst + Default + Debug + Copy + Sync + Send + std::ops::AddAssign> Axis for T {}

/// Implemented on the types that can be used to index the nodes of a
/// [`NearTree`](crate::NearTree). Determines the maximum number of nodes the tree can hold.
pub trait Index: PrimInt + Unsigned + Cast<usize> + Debug {
    /// the largest node index representable by this type
    fn capacity() -> usize;
}

impl Index for u16 {
    fn capacity() -> usize {
        u16::MAX as usize
    }
}

impl Index for u32 {
    fn capacity() -> usize {
        u32::MAX as usize
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Index};

    #[test]
    fn two_is_two() {
        assert_eq!(f32::two(), 2.0f32);
        assert_eq!(f64::two(), 2.0f64);
    }

    #[test]
    fn capacity_is_the_max_index() {
        assert_eq!(<u16 as Index>::capacity(), 65_535);
        assert_eq!(<u32 as Index>::capacity(), 4_294_967_295);
    }
}
