use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V.
    ///
    /// The returned range does not borrow self and hence may be used where
    /// additional mutable references of self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns a full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// Parallel edges count with their multiplicity.
    fn number_of_edges(&self) -> NumEdges;
}

/// Provides the orientation of a graph, fixed at construction
pub trait GraphOrientation {
    /// Returns *true* if edges have orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges are unordered pairs
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphOrientation + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// The iteration order is representation-defined: dense graphs yield
    /// ascending indices, sparse graphs most-recently-inserted first.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`, counting parallel
    /// edges with their multiplicity.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(move |u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over all stored adjacency entries of a given
    /// vertex as edges `(u, v)`.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph.
    ///
    /// Directed graphs yield every stored entry. Undirected graphs rely on
    /// the adjacency symmetry guaranteed by `insert` and yield only edges
    /// `(u, v)` with `u < v`, so parallel edges keep their multiplicity and
    /// self-loops are not reported.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.is_directed();
        self.vertices()
            .flat_map(move |u| self.edges_of(u))
            .filter(move |e| directed || e.0 < e.1)
    }

    /// Returns an iterator over all edges in the graph in sorted order
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> {
        self.edges().sorted_unstable()
    }
}

/// Trait to test existence of certain structures in a graph
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `(u, v)` exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop `(u, u)` exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Provides functions to insert/delete edges.
///
/// For undirected graphs, both operations keep the reciprocal adjacency
/// entries in sync automatically.
pub trait GraphEdgeEditing {
    /// The edge value consumed by `insert` and matched by `remove`
    type Edge: Copy;

    /// Adds an edge to the graph.
    ///
    /// Dense representations collapse duplicates into a single cell and only
    /// count a transition from absent to present (weighted: the last insert
    /// wins for that cell's weight). Sparse representations preserve every
    /// parallel copy and always increment the edge count.
    /// ** Panics if an endpoint is `>= n` **
    fn insert(&mut self, e: Self::Edge);

    /// Removes an edge from the graph, matched by its endpoint pair.
    ///
    /// Sparse representations remove **every** parallel copy between the two
    /// endpoints and decrement the edge count by the removed multiplicity.
    /// Removing a non-existent edge is a no-op.
    /// ** Panics if an endpoint is `>= n` **
    fn remove(&mut self, e: Self::Edge);

    /// Adds all edges in the collection
    fn insert_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<Self::Edge>,
    {
        for e in edges {
            self.insert(e.into());
        }
    }

    /// Removes all edges in the collection
    fn remove_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<Self::Edge>,
    {
        for e in edges {
            self.remove(e.into());
        }
    }
}

/// Trait for creating a new empty graph with a fixed node count and orientation
pub trait GraphNew: Sized {
    /// Creates a graph with `n` singleton nodes and the given orientation
    fn new(n: NumNodes, directed: bool) -> Self;

    /// Creates an undirected graph with `n` singleton nodes
    fn new_undirected(n: NumNodes) -> Self {
        Self::new(n, false)
    }

    /// Creates a directed graph with `n` singleton nodes
    fn new_directed(n: NumNodes) -> Self {
        Self::new(n, true)
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromEdges: GraphNew + GraphEdgeEditing {
    /// Creates a graph from a number of nodes and an iterator over edges
    fn from_edges<I>(n: NumNodes, directed: bool, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Edge>,
    {
        let mut graph = Self::new(n, directed);
        graph.insert_edges(edges);
        graph
    }
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromEdges for G {}

/// Access to the live edge records of weighted representations
pub trait WeightedAdjacency: AdjacencyList {
    /// Returns the stored edge between `u` and `v`, if any. For parallel
    /// edges, the most recently inserted copy is returned.
    /// ** Panics if `u >= n || v >= n` **
    fn get_edge(&self, u: Node, v: Node) -> Option<&WeightedEdge>;

    /// Returns the stored edge between `u` and `v` for weight mutation.
    /// The endpoints of the record must not be changed.
    /// ** Panics if `u >= n || v >= n` **
    fn get_edge_mut(&mut self, u: Node, v: Node) -> Option<&mut WeightedEdge>;

    /// Returns the weight of the stored edge between `u` and `v`, if any.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<EdgeWeight> {
        self.get_edge(u, v).map(|e| e.weight)
    }

    /// Returns an iterator over the edge records incident to `u`
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = &WeightedEdge> + '_;

    /// Returns an iterator over all edge records, each logical edge exactly once
    fn weighted_edges(&self) -> impl Iterator<Item = &WeightedEdge> + '_;
}
