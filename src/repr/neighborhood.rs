use smallvec::SmallVec;

use crate::*;

/// Trait for methods on the Neighborhood of a specified node.
///
/// The two implementations encode the dense/sparse trade-off: a
/// [`BitNeighborhood`] collapses duplicates and iterates in ascending index
/// order, a [`MultiNeighborhood`] preserves parallel entries and iterates
/// most-recently-inserted first.
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood for a graph of `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of entries in the Neighborhood,
    /// counting parallel entries with their multiplicity
    fn degree(&self) -> NumNodes;

    /// Returns an iterator over all entries in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Stores `v` in the Neighborhood.
    /// Returns *true* exactly if a new entry was stored; implementations
    /// that collapse duplicates return *false* for an already present `v`.
    /// ** Might panic if `v >= n` **
    fn add_neighbor(&mut self, v: Node) -> bool;

    /// Removes every entry matching `v` and returns the removed multiplicity
    /// ** Might panic if `v >= n` **
    fn remove_neighbor(&mut self, v: Node) -> NumNodes;

    /// Removes all entries in the Neighborhood
    fn clear(&mut self);
}

/// A Neighborhood represented by one adjacency-matrix row.
///
/// Duplicate entries collapse into a single bit.
#[derive(Debug, Default, Clone)]
pub struct BitNeighborhood(pub NodeBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(NodeBitSet::new(n))
    }

    fn degree(&self) -> NumNodes {
        self.0.cardinality()
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter_set_bits()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.get_bit(v)
    }

    fn add_neighbor(&mut self, v: Node) -> bool {
        !self.0.set_bit(v)
    }

    fn remove_neighbor(&mut self, v: Node) -> NumNodes {
        self.0.clear_bit(v) as NumNodes
    }

    fn clear(&mut self) {
        self.0.clear_all();
    }
}

/// A Neighborhood represented by an unordered list of entries.
///
/// Parallel entries are fully preserved. New entries are appended but
/// iterated first, mirroring list-prepending adjacency lists.
#[derive(Debug, Default, Clone)]
pub struct MultiNeighborhood(pub SmallVec<[Node; 8]>);

impl Neighborhood for MultiNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn degree(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().rev().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(&v)
    }

    fn add_neighbor(&mut self, v: Node) -> bool {
        self.0.push(v);
        true
    }

    fn remove_neighbor(&mut self, v: Node) -> NumNodes {
        let size_before = self.0.len();
        self.0.retain(|x| *x != v);
        (size_before - self.0.len()) as NumNodes
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}
