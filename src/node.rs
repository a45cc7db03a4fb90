/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve far less than `2^32` nodes.
This saves space compared to `usize`/`u64` and allows manipulating node values
directly without abstracting over them.
*/

use std::num::NonZero;

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// A fixed-size set of nodes backed by a bitset.
///
/// Used for adjacency-matrix rows as well as the visited-bookkeeping of
/// traversals. Bits are iterated in ascending index order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeBitSet(FixedBitSet);

impl NodeBitSet {
    /// Creates a new bitset for `n` nodes with all bits unset
    pub fn new(n: NumNodes) -> Self {
        Self(FixedBitSet::with_capacity(n as usize))
    }

    /// Creates a new bitset for `n` nodes with all bits set
    pub fn new_all_set(n: NumNodes) -> Self {
        let mut bits = FixedBitSet::with_capacity(n as usize);
        bits.insert_range(..);
        Self(bits)
    }

    /// Creates a new bitset for `n` nodes with exactly the given bits set
    pub fn new_with_bits_set<I>(n: NumNodes, bits: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(n);
        for u in bits {
            set.set_bit(u);
        }
        set
    }

    /// Returns the number of bits (set or unset) in the bitset
    pub fn number_of_bits(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Sets bit `u` and returns its previous value.
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.0.put(u as usize)
    }

    /// Clears bit `u` and returns its previous value.
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        let prev = self.0.contains(u as usize);
        self.0.set(u as usize, false);
        prev
    }

    /// Returns *true* if bit `u` is set.
    /// ** Panics if `u >= n` **
    pub fn get_bit(&self, u: Node) -> bool {
        self.0.contains(u as usize)
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.0.count_ones(..) as NumNodes
    }

    /// Iterates over all set bits in ascending order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.ones().map(|u| u as Node)
    }

    /// Unsets all bits
    pub fn clear_all(&mut self) {
        self.0.clear();
    }
}

/// As `Option<u32>` uses additional bytes for padding, it can be inefficient
/// since we often need whole `Vec<Option<u32>>`s. This instead uses the
/// `NonZero`-Wrapper to reserve a constant niche value `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalIndex<const N: u32>(NonZero<u32>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalIndex<INVALID_NODE>;

impl<const N: u32> OptionalIndex<N> {
    /// Returns `Some(OptionalIndex)` if `n != N` and `None` otherwise
    pub const fn new(n: u32) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalIndex(inner)),
            None => None,
        }
    }

    /// Gets the underlying index value
    pub const fn get(&self) -> u32 {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitset_ops() {
        let mut set = NodeBitSet::new(10);
        assert_eq!(set.cardinality(), 0);

        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        assert!(!set.set_bit(7));

        assert_eq!(set.cardinality(), 2);
        assert!(set.get_bit(3));
        assert!(!set.get_bit(4));
        assert_eq!(set.iter_set_bits().collect::<Vec<_>>(), vec![3, 7]);

        assert!(set.clear_bit(3));
        assert!(!set.clear_bit(3));
        assert_eq!(set.cardinality(), 1);

        set.clear_all();
        assert_eq!(set.cardinality(), 0);
        assert_eq!(set.number_of_bits(), 10);
    }

    #[test]
    fn bitset_constructors() {
        let set = NodeBitSet::new_all_set(5);
        assert_eq!(set.cardinality(), 5);

        let set = NodeBitSet::new_with_bits_set(5, [1, 4, 1]);
        assert_eq!(set.iter_set_bits().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn optional_index_niche() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );

        assert!(OptionalNode::new(INVALID_NODE).is_none());
        let x = OptionalNode::new(0).unwrap();
        assert_eq!(x.get(), 0);
        let y = OptionalNode::new(42).unwrap();
        assert_eq!(y.get(), 42);
    }
}
