/*!
Breadth-first search with recorded per-vertex state.

[`BreadthFirstSearch`] binds to a graph by reference; `search(start)`
explores the connected component of `start` with a FIFO frontier, recording
per vertex the unweighted shortest-path distance from `start`, the
visitation rank and the discovery edge. Vertices outside the component keep
their "unreached" sentinel and report `None`.
*/

use super::*;

/// Breadth-first traversal recording distances, visit order and discovery edges
pub struct BreadthFirstSearch<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    dist: Vec<Node>,
    order: Vec<Node>,
    parent: Vec<Node>,
    discovery: Vec<Edge>,
}

impl<'a, G: AdjacencyList> BreadthFirstSearch<'a, G> {
    /// Binds a new search to the given graph without exploring anything
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: NodeBitSet::default(),
            dist: Vec::new(),
            order: Vec::new(),
            parent: Vec::new(),
            discovery: Vec::new(),
        }
    }

    /// Explores the component of `s`: vertices are marked when they enter
    /// the queue, every discovered vertex records distance = parent
    /// distance + 1, and the visit order is consistent with non-decreasing
    /// distance. Previous search state is discarded.
    /// ** Panics if `s >= n` **
    pub fn search(&mut self, s: Node) {
        let n = self.graph.len();
        self.visited = self.graph.vertex_bitset_unset();
        self.dist = vec![INVALID_NODE; n];
        self.order = vec![INVALID_NODE; n];
        self.parent = vec![INVALID_NODE; n];
        self.discovery.clear();

        let mut rank: Node = 0;
        for (p, v) in BFSWithPredecessor::new(self.graph, s) {
            self.visited.set_bit(v);
            self.order[v as usize] = rank;
            rank += 1;
            self.parent[v as usize] = p;
            if p == v {
                self.dist[v as usize] = 0;
            } else {
                self.dist[v as usize] = self.dist[p as usize] + 1;
                self.discovery.push(Edge(p, v));
            }
        }
    }

    /// Returns *true* if `u` was reached by the last search
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Returns the number of vertices reached by the last search
    pub fn number_of_visited(&self) -> NumNodes {
        self.discovery.len() as NumNodes + !self.order.is_empty() as NumNodes
    }

    /// Returns the number of edges on a shortest path from the start vertex
    /// to `u`, or `None` if `u` was not reached
    pub fn distance_of(&self, u: Node) -> Option<NumNodes> {
        let d = *self.dist.get(u as usize)?;
        (d != INVALID_NODE).then_some(d)
    }

    /// Returns the distance array of the last search with [`INVALID_NODE`]
    /// as the "unreached" sentinel
    pub fn distances(&self) -> &[Node] {
        &self.dist
    }

    /// Returns the rank (starting at 0) at which `u` was visited,
    /// or `None` if it was not reached
    pub fn visit_order_of(&self, u: Node) -> Option<Node> {
        let rank = *self.order.get(u as usize)?;
        (rank != INVALID_NODE).then_some(rank)
    }

    /// Returns the edge through which `u` was first reached. The start
    /// vertex reports the self-pair; unreached vertices report `None`.
    pub fn discovery_edge_of(&self, u: Node) -> Option<Edge> {
        let p = *self.parent.get(u as usize)?;
        (p != INVALID_NODE).then_some(Edge(p, u))
    }

    /// Returns the tree edges of the last search in the order they were
    /// traversed (the start vertex' self-pair is not included)
    pub fn discovery_edges(&self) -> &[Edge] {
        &self.discovery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_graph() -> SparseMultiGraph {
        SparseMultiGraph::from_edges(
            8,
            false,
            [
                (0, 2),
                (0, 5),
                (0, 7),
                (1, 7),
                (2, 6),
                (3, 4),
                (3, 5),
                (4, 5),
                (4, 6),
                (4, 7),
            ],
        )
    }

    #[test]
    fn distances_are_shortest_paths() {
        let graph = scenario_graph();
        let mut bfs = BreadthFirstSearch::new(&graph);
        bfs.search(0);

        assert_eq!(bfs.distance_of(0), Some(0));
        assert_eq!(bfs.distance_of(2), Some(1));
        assert_eq!(bfs.distance_of(5), Some(1));
        assert_eq!(bfs.distance_of(7), Some(1));
        assert_eq!(bfs.distance_of(1), Some(2));
        assert_eq!(bfs.distance_of(3), Some(2));
        assert_eq!(bfs.distance_of(4), Some(2));
        assert_eq!(bfs.distance_of(6), Some(2));
        assert_eq!(bfs.number_of_visited(), 8);
    }

    #[test]
    fn visit_order_respects_distances() {
        let graph = scenario_graph();
        let mut bfs = BreadthFirstSearch::new(&graph);
        bfs.search(0);

        for u in graph.vertices() {
            for v in graph.vertices() {
                let (du, dv) = (bfs.distance_of(u).unwrap(), bfs.distance_of(v).unwrap());
                if du < dv {
                    assert!(bfs.visit_order_of(u).unwrap() < bfs.visit_order_of(v).unwrap());
                }
            }
        }
    }

    #[test]
    fn unreached_vertices_have_no_distance() {
        let graph = DenseGraph::from_edges(5, false, [(0, 1), (3, 4)]);
        let mut bfs = BreadthFirstSearch::new(&graph);
        bfs.search(0);

        assert!(bfs.did_visit_node(1));
        assert!(!bfs.did_visit_node(3));
        assert_eq!(bfs.distance_of(3), None);
        assert_eq!(bfs.distance_of(4), None);
        assert_eq!(bfs.distances()[3], INVALID_NODE);
        assert_eq!(bfs.number_of_visited(), 2);
    }

    #[test]
    fn discovery_edges_form_a_tree() {
        let graph = scenario_graph();
        let mut bfs = BreadthFirstSearch::new(&graph);
        bfs.search(0);

        let edges = bfs.discovery_edges();
        // one tree edge per vertex except the start
        assert_eq!(edges.len(), graph.len() - 1);
        assert_eq!(bfs.discovery_edge_of(0), Some(Edge(0, 0)));

        for &Edge(p, v) in edges {
            assert_eq!(bfs.distance_of(v).unwrap(), bfs.distance_of(p).unwrap() + 1);
        }
    }

    #[test]
    fn directed_reachability() {
        let graph = DenseGraph::from_edges(4, true, [(0, 1), (1, 2), (3, 2)]);
        let mut bfs = BreadthFirstSearch::new(&graph);
        bfs.search(0);

        assert_eq!(bfs.distance_of(2), Some(2));
        assert_eq!(bfs.distance_of(3), None);
    }

    #[test]
    fn state_is_empty_before_search() {
        let graph = scenario_graph();
        let bfs = BreadthFirstSearch::new(&graph);

        assert_eq!(bfs.number_of_visited(), 0);
        assert_eq!(bfs.distance_of(0), None);
        assert_eq!(bfs.visit_order_of(0), None);
        assert!(bfs.discovery_edges().is_empty());
    }
}
