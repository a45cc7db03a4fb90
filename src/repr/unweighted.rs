use crate::{ops::*, testing::test_graph_ops, *};

/// An unweighted graph parameterized by its per-vertex storage.
///
/// The orientation is fixed at construction: undirected graphs keep the
/// reciprocal adjacency entry of every edge in sync automatically.
#[derive(Clone)]
pub struct Graph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
    directed: bool,
}

/// Representation using an Adjacency-Matrix: no parallel edges,
/// `O(1)` existence checks, `O(n)` adjacency iteration
pub type DenseGraph = Graph<BitNeighborhood>;

/// Representation using Adjacency-Lists: parallel edges preserved,
/// `O(1)` insertion, `O(deg)` existence checks
pub type SparseMultiGraph = Graph<MultiNeighborhood>;

impl<Nbs: Neighborhood> GraphNew for Graph<Nbs> {
    fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
            directed,
        }
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for Graph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for Graph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> GraphOrientation for Graph<Nbs> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<Nbs: Neighborhood> AdjacencyList for Graph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].degree()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for Graph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for Graph<Nbs> {
    type Edge = Edge;

    fn insert(&mut self, e: Edge) {
        let Edge(u, v) = e;
        let stored = self.nbs[u as usize].add_neighbor(v);
        if !self.directed && u != v {
            self.nbs[v as usize].add_neighbor(u);
        }
        self.num_edges += stored as NumEdges;
    }

    fn remove(&mut self, e: Edge) {
        let Edge(u, v) = e;
        let removed = self.nbs[u as usize].remove_neighbor(v);
        if removed == 0 {
            return;
        }
        if !self.directed && u != v {
            self.nbs[v as usize].remove_neighbor(u);
        }
        self.num_edges -= removed as NumEdges;
    }
}

// ---------- Testing ----------

test_graph_ops!(dense_graph_ops, DenseGraph, false);
test_graph_ops!(sparse_multi_graph_ops, SparseMultiGraph, true);

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const SAMPLE_EDGES: [(Node, Node); 10] = [
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
    ];

    #[test]
    fn dense_insert_remove_round() {
        let mut graph = DenseGraph::from_edges(8, false, SAMPLE_EDGES);
        assert_eq!(graph.number_of_edges(), 10);

        let edges = graph.edges().collect_vec();
        assert_eq!(edges.len(), 10);

        graph.remove_edges(edges);
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
    }

    #[test]
    fn sparse_insert_remove_round() {
        let mut graph = SparseMultiGraph::from_edges(8, false, SAMPLE_EDGES);
        assert_eq!(graph.number_of_edges(), 10);

        let edges = graph.edges().collect_vec();
        assert_eq!(edges.len(), 10);

        graph.remove_edges(edges);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn dense_collapses_duplicates() {
        let mut graph = DenseGraph::new_undirected(4);
        graph.insert(Edge(1, 2));
        graph.insert(Edge(1, 2));
        graph.insert(Edge(2, 1));
        assert_eq!(graph.number_of_edges(), 1);

        graph.remove(Edge(2, 1));
        assert_eq!(graph.number_of_edges(), 0);
        assert!(!graph.has_edge(1, 2));
    }

    #[test]
    fn sparse_parallel_edges() {
        let mut graph = SparseMultiGraph::new_undirected(4);
        graph.insert(Edge(1, 2));
        graph.insert(Edge(1, 2));
        graph.insert(Edge(2, 1));
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.degree_of(1), 3);
        assert_eq!(graph.degree_of(2), 3);

        // removes every parallel copy between the endpoints in one call
        graph.remove(Edge(1, 2));
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.degree_of(1), 0);
        assert_eq!(graph.degree_of(2), 0);
    }

    #[test]
    fn remove_missing_edge_is_noop() {
        let mut graph = DenseGraph::new_directed(3);
        graph.insert(Edge(0, 1));
        graph.remove(Edge(1, 0));
        graph.remove(Edge(2, 2));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn directed_keeps_orientation() {
        let graph = DenseGraph::from_edges(3, true, [(0, 1), (2, 1)]);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.ordered_edges().collect_vec(), vec![Edge(0, 1), Edge(2, 1)]);
    }

    #[test]
    fn undirected_adjacency_is_symmetric() {
        let graph = SparseMultiGraph::from_edges(5, false, [(0, 3), (3, 1), (2, 2)]);
        for u in graph.vertices() {
            for v in graph.vertices() {
                assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
            }
        }
    }

    #[test]
    fn dense_neighbors_ascending() {
        let graph = DenseGraph::from_edges(6, false, [(3, 5), (3, 0), (3, 4)]);
        assert_eq!(graph.neighbors_of(3).collect_vec(), vec![0, 4, 5]);
    }

    #[test]
    fn sparse_neighbors_newest_first() {
        let graph = SparseMultiGraph::from_edges(6, true, [(3, 5), (3, 0), (3, 4)]);
        assert_eq!(graph.neighbors_of(3).collect_vec(), vec![4, 0, 5]);
    }

    #[test]
    fn undirected_edges_are_normalized() {
        let graph = SparseMultiGraph::from_edges(4, false, [(2, 0), (1, 3), (3, 1)]);
        let edges = graph.ordered_edges().collect_vec();
        assert_eq!(edges, vec![Edge(0, 2), Edge(1, 3), Edge(1, 3)]);
    }
}
