/*!
`smallgraphs` is a companion library of classic graph data structures and
traversal algorithms for graphs with up to a few thousand nodes.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number
of nodes in the graph; all per-node state lives in parallel arrays indexed
by this value. For **edges**, we use a simple tuple-struct `Edge(Node, Node)`
and a weight-carrying `WeightedEdge` for the weighted representations.

### Directed vs Undirected

Orientation is a runtime property fixed at construction: every
representation is created via [`GraphNew`](crate::ops::GraphNew) as either
directed or undirected. Undirected graphs store each edge's reciprocal
adjacency entry automatically and keep both sides in sync on removal.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`DenseGraph`](crate::repr::DenseGraph) — adjacency matrix, no parallel
  edges, `O(1)` edge queries
- [`SparseMultiGraph`](crate::repr::SparseMultiGraph) — adjacency lists,
  parallel edges preserved, `O(1)` insertion
- [`WeightedDenseGraph`](crate::repr::WeightedDenseGraph) /
  [`WeightedSparseMultiGraph`](crate::repr::WeightedSparseMultiGraph) —
  the same trade-offs with arena-owned weighted edge records

# Design

Capabilities (node/edge counts, orientation, adjacency enumeration, edge
editing) are split into small traits in [`ops`]; every algorithm in [`algo`]
is generic over these capabilities rather than over concrete graph types, so
dense, sparse, weighted and unweighted graphs can be traversed by the same
code. Algorithms come both as lazy iterators and as stateful analyses whose
results (visit order, distances, topological labels, component ids,
discovery edges) stay queryable after the run.

# Usage

```
use smallgraphs::{prelude::*, algo::*};

let mut graph = SparseMultiGraph::new_undirected(5);
graph.insert_edges([(0, 1), (1, 2), (3, 4)]);

let order: Vec<Node> = graph.bfs(0).collect();
assert_eq!(order, vec![0, 1, 2]);

let mut ucc = Ucc::new(&graph);
ucc.calculate();
assert_eq!(ucc.number_of_components(), 2);
```

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations,
  and all standard graph representations,
- [`algo`] includes the traversal and analysis algorithms (BFS, DFS,
  topological sorting, connected components),
- [`io`] includes handlers for reading edge lists and writing graphs to the
  DOT format of GraphViz,
- [`utils`] includes the `Set` abstraction used for visited-bookkeeping.

In most use-cases, `use smallgraphs::{prelude::*, algo::*};` suffices for
your needs.
*/

pub mod algo;
pub mod edge;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `smallgraphs::prelude` includes definitions for nodes and edges, all
/// basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}

pub use prelude::*;
