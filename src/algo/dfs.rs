/*!
Depth-first search with recorded per-vertex state.

[`DepthFirstSearch`] binds to a graph by reference and offers two
exploration strategies with identical bookkeeping:

- [`DepthFirstSearch::search`] explores recursively in adjacency order, like
  the classic textbook formulation. Recursion depth is bounded by the longest
  simple path from the start vertex.
- [`DepthFirstSearch::search_iterative`] drives an explicit stack of
  `(parent, child)` discovery pairs and should be preferred for deeply
  chained inputs.

Both record, per vertex, the visitation rank, the discovery edge through
which the vertex was first reached (the self-pair `(start, start)` for the
start vertex), and the overall discovery sequence. Querying state before any
search returns empty/`None` answers.
*/

use super::*;

/// Depth-first traversal recording visit order and discovery edges
pub struct DepthFirstSearch<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    order: Vec<Node>,
    parent: Vec<Node>,
    discovery: Vec<Edge>,
}

impl<'a, G: AdjacencyList> DepthFirstSearch<'a, G> {
    /// Binds a new search to the given graph without exploring anything
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: NodeBitSet::default(),
            order: Vec::new(),
            parent: Vec::new(),
            discovery: Vec::new(),
        }
    }

    fn reset(&mut self) {
        let n = self.graph.len();
        self.visited = self.graph.vertex_bitset_unset();
        self.order = vec![INVALID_NODE; n];
        self.parent = vec![INVALID_NODE; n];
        self.discovery.clear();
    }

    fn record(&mut self, p: Node, v: Node) {
        self.visited.set_bit(v);
        self.order[v as usize] = self.discovery.len() as Node;
        self.parent[v as usize] = p;
        self.discovery.push(Edge(p, v));
    }

    /// Explores all vertices reachable from `s` recursively, descending into
    /// every unvisited neighbor in adjacency order. Previous search state is
    /// discarded.
    /// ** Panics if `s >= n` **
    pub fn search(&mut self, s: Node) {
        self.reset();
        self.explore(s, s);
    }

    fn explore(&mut self, p: Node, s: Node) {
        self.record(p, s);

        let graph = self.graph;
        for v in graph.neighbors_of(s) {
            if !self.visited.get_bit(v) {
                self.explore(s, v);
            }
        }
    }

    /// Explores all vertices reachable from `s` with an explicit stack of
    /// `(parent, child)` discovery pairs seeded with `(s, s)`. A vertex may
    /// sit in the stack multiple times; stale entries are skipped, so each
    /// vertex is explored exactly once. Previous search state is discarded.
    /// ** Panics if `s >= n` **
    pub fn search_iterative(&mut self, s: Node) {
        self.reset();
        for (p, v) in DFSWithPredecessor::new(self.graph, s) {
            self.record(p, v);
        }
    }

    /// Returns *true* if `u` was reached by the last search
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Returns the number of vertices reached by the last search
    pub fn number_of_visited(&self) -> NumNodes {
        self.discovery.len() as NumNodes
    }

    /// Returns the rank (starting at 0) at which `u` was visited,
    /// or `None` if it was not reached
    pub fn visit_order_of(&self, u: Node) -> Option<Node> {
        let rank = *self.order.get(u as usize)?;
        (rank != INVALID_NODE).then_some(rank)
    }

    /// Returns the edge through which `u` was first reached. The start
    /// vertex reports the self-pair `(start, start)`; unreached vertices
    /// report `None`.
    pub fn discovery_edge_of(&self, u: Node) -> Option<Edge> {
        let p = *self.parent.get(u as usize)?;
        (p != INVALID_NODE).then_some(Edge(p, u))
    }

    /// Returns *true* if `e` is contained in the discovery-edge set of the
    /// last search. Orientation matters; for undirected graphs callers may
    /// additionally test `e.reversed()`.
    pub fn is_discovery_edge(&self, e: Edge) -> bool {
        self.discovery_edge_of(e.1) == Some(e)
    }

    /// Returns all discovery edges in the order they were traversed,
    /// starting with the self-pair of the start vertex
    pub fn discovery_edges(&self) -> &[Edge] {
        &self.discovery
    }
}
