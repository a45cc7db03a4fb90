/*!
Reverse-postorder labeling of directed acyclic graphs.

[`TopoSort::sort`] runs a depth-first exploration from every unvisited
vertex in index order and assigns each vertex its label when it finishes
(after all descendants). Labels are drawn from `[1, n]`: the first vertex to
finish (a sink) receives 1, the last receives `n`, so for every edge
`(u, v)` of a DAG the labeling satisfies `label(u) > label(v)` and sorting
vertices by descending label yields a valid topological order.

`sort` performs **no cycle check**: on cyclic input a labeling is still
produced but violates the edge property. Use
[`Traversal::is_acyclic`](super::Traversal::is_acyclic) up front or
[`TopoSort::is_valid_labeling`] after the fact when the input is not known
to be acyclic.
*/

use super::*;

/// DFS-based topological labeling of a directed acyclic graph
pub struct TopoSort<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    labels: Vec<Node>,
    next_label: Node,
}

impl<'a, G: AdjacencyList> TopoSort<'a, G> {
    /// Binds a new sort to the given graph without exploring anything
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: NodeBitSet::default(),
            labels: Vec::new(),
            next_label: 0,
        }
    }

    /// Labels every vertex of the graph. The input must be a directed
    /// acyclic graph for the labeling to be meaningful.
    pub fn sort(&mut self) {
        self.visited = self.graph.vertex_bitset_unset();
        self.labels = vec![INVALID_NODE; self.graph.len()];
        self.next_label = 1;

        for v in self.graph.vertices() {
            if !self.visited.get_bit(v) {
                self.explore(v);
            }
        }
    }

    fn explore(&mut self, s: Node) {
        self.visited.set_bit(s);

        let graph = self.graph;
        for v in graph.neighbors_of(s) {
            if !self.visited.get_bit(v) {
                self.explore(v);
            }
        }

        self.labels[s as usize] = self.next_label;
        self.next_label += 1;
    }

    /// Returns the topological label of `u`, or `None` before `sort` ran
    pub fn label_of(&self, u: Node) -> Option<Node> {
        let label = *self.labels.get(u as usize)?;
        (label != INVALID_NODE).then_some(label)
    }

    /// Returns the label array of the last sort
    pub fn labels(&self) -> &[Node] {
        &self.labels
    }

    /// Returns *true* iff the computed labeling satisfies
    /// `label(u) > label(v)` for every edge `(u, v)`; a violation means the
    /// input contained a cycle. Must be called after `sort`.
    pub fn is_valid_labeling(&self) -> bool {
        self.graph
            .edges()
            .all(|Edge(u, v)| self.labels[u as usize] > self.labels[v as usize])
    }
}
