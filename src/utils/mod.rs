/*!
# Utilities

Provides the [`Set`] abstraction over visited-bookkeeping containers and the
[`FromCapacity`] helper for sizing them. Traversals are generic over both, so
callers can trade the default bitset for a hash set on very sparse searches.
*/

mod set;

pub use set::Set;

use std::{collections::HashSet, hash::BuildHasher};

use crate::prelude::*;

/// Helper trait for datastructures that can be initialized with capacity.
///
/// `total` is the maximum value that may be stored (relevant for index-based
/// containers), `used` the number of elements expected to be stored.
pub trait FromCapacity: Sized {
    /// Creates a new instance from a single capacity used as both bounds
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity and the actual
    /// capacity that will be used
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeBitSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // a bitset must span the maximum element
        Self::new(total as NumNodes)
    }
}

impl<T, S> FromCapacity for HashSet<T, S>
where
    S: BuildHasher + Default,
{
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // a hash set only needs room for the elements actually stored
        Self::with_capacity_and_hasher(used, S::default())
    }
}
