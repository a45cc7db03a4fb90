/*!
Connected components of undirected graphs.

Two entry points are provided:

- [`ConnectedComponents`] — a lazy iterator that yields each component's
  vertex list, restarting an internal BFS at the smallest unvisited vertex.
- [`Ucc`] — a stateful analysis that labels every vertex with its component
  id and records the discovery edges in traversal order (for visualization).

Both are intended for undirected graphs. Directed graphs are accepted
without complaint, but component membership then reflects plain traversal
reachability over the stored adjacency rather than true bidirectional
connectivity.
*/

use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Iterator over the connected components of a graph, one vertex-list at a time
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Creates the iterator; components are emitted in order of their
    /// smallest vertex
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }

        self.bfs = None;
        None
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

/// Provides connectivity methods directly on graph data structures
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns *true* if all vertices lie in one connected component.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        self.connected_components().take(2).count() <= 1
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Sorts the nodes in each component increasingly and then the components
/// themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

/// Undirected connected components: labels every vertex with a component id
pub struct Ucc<'a, G> {
    graph: &'a G,
    components: Vec<Node>,
    num_components: NumNodes,
    discovery: Vec<Edge>,
}

impl<'a, G: AdjacencyList> Ucc<'a, G> {
    /// Binds a new analysis to the given graph without exploring anything
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            components: Vec::new(),
            num_components: 0,
            discovery: Vec::new(),
        }
    }

    /// Partitions all vertices into connected components. For each unvisited
    /// vertex in index order a new component id (counting from 0) is opened
    /// and every vertex reached by BFS is labeled with it.
    pub fn calculate(&mut self) {
        self.components = vec![INVALID_NODE; self.graph.len()];
        self.num_components = 0;
        self.discovery.clear();

        if self.graph.is_empty() {
            return;
        }

        let mut bfs = BFSWithPredecessor::new(self.graph, 0);
        loop {
            for (p, v) in bfs.by_ref() {
                self.components[v as usize] = self.num_components;
                if p != v {
                    self.discovery.push(Edge(p, v));
                }
            }
            self.num_components += 1;

            if !bfs.try_restart_at_unvisited() {
                return;
            }
        }
    }

    /// Returns the number of components found by the last `calculate`
    pub fn number_of_components(&self) -> NumNodes {
        self.num_components
    }

    /// Returns the component id of `u`, or `None` before `calculate` ran
    pub fn component_of(&self, u: Node) -> Option<Node> {
        let cc = *self.components.get(u as usize)?;
        (cc != INVALID_NODE).then_some(cc)
    }

    /// Returns the component-id array of the last `calculate`
    pub fn components(&self) -> &[Node] {
        &self.components
    }

    /// Returns *true* iff `u` and `v` lie in the same component.
    /// Must be called after `calculate`.
    pub fn in_same_component(&self, u: Node, v: Node) -> bool {
        self.components[u as usize] == self.components[v as usize]
    }

    /// Returns the discovery edges of all component traversals in the order
    /// they were traversed
    pub fn discovery_edges(&self) -> &[Edge] {
        &self.discovery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_graph() -> SparseMultiGraph {
        SparseMultiGraph::from_edges(
            10,
            false,
            [
                (0, 2),
                (0, 4),
                (2, 4),
                (4, 6),
                (4, 8),
                (1, 3),
                (5, 7),
                (5, 9),
            ],
        )
    }

    #[test]
    fn three_components() {
        let graph = scenario_graph();
        let mut ucc = Ucc::new(&graph);
        ucc.calculate();

        assert_eq!(ucc.number_of_components(), 3);

        for pair in [(0, 2), (0, 4), (0, 6), (0, 8)] {
            assert!(ucc.in_same_component(pair.0, pair.1));
        }
        assert!(ucc.in_same_component(1, 3));
        assert!(ucc.in_same_component(5, 7));
        assert!(ucc.in_same_component(5, 9));

        assert!(!ucc.in_same_component(0, 1));
        assert!(!ucc.in_same_component(1, 5));
        assert!(!ucc.in_same_component(0, 9));
    }

    #[test]
    fn component_ids_count_from_zero_in_index_order() {
        let graph = scenario_graph();
        let mut ucc = Ucc::new(&graph);
        ucc.calculate();

        assert_eq!(ucc.component_of(0), Some(0));
        assert_eq!(ucc.component_of(1), Some(1));
        assert_eq!(ucc.component_of(5), Some(2));
    }

    #[test]
    fn discovery_edges_span_every_component() {
        let graph = scenario_graph();
        let mut ucc = Ucc::new(&graph);
        ucc.calculate();

        // a spanning forest has n - #components edges
        assert_eq!(
            ucc.discovery_edges().len() as NumNodes,
            graph.number_of_nodes() - ucc.number_of_components()
        );
    }

    #[test]
    fn component_iterator_matches_ucc() {
        let graph = scenario_graph();
        let components = sort_components(graph.connected_components().collect());
        assert_eq!(
            components,
            vec![vec![0, 2, 4, 6, 8], vec![1, 3], vec![5, 7, 9]]
        );

        assert!(!graph.is_connected());
        let path = SparseMultiGraph::from_edges(3, false, [(0, 1), (1, 2)]);
        assert!(path.is_connected());
    }

    #[test]
    fn singletons_form_their_own_components() {
        let graph = DenseGraph::new_undirected(3);
        let mut ucc = Ucc::new(&graph);
        ucc.calculate();

        assert_eq!(ucc.number_of_components(), 3);
        assert_eq!(ucc.components(), &[0, 1, 2]);
        assert!(ucc.discovery_edges().is_empty());
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = DenseGraph::new_undirected(0);
        let mut ucc = Ucc::new(&graph);
        ucc.calculate();

        assert_eq!(ucc.number_of_components(), 0);
        assert_eq!(graph.connected_components().count(), 0);
    }

    #[test]
    fn directed_graphs_use_traversal_reachability() {
        let graph = DenseGraph::from_edges(3, true, [(0, 1), (2, 1)]);
        let mut ucc = Ucc::new(&graph);
        ucc.calculate();

        // 1 is swallowed by the traversal from 0; 2 opens its own component
        assert_eq!(ucc.component_of(0), Some(0));
        assert_eq!(ucc.component_of(1), Some(0));
        assert_eq!(ucc.component_of(2), Some(1));
    }

    #[test]
    fn state_is_empty_before_calculate() {
        let graph = scenario_graph();
        let ucc = Ucc::new(&graph);

        assert_eq!(ucc.number_of_components(), 0);
        assert_eq!(ucc.component_of(0), None);
        assert!(ucc.discovery_edges().is_empty());
    }
}
