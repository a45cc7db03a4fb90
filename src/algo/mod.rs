/*!
# Graph Algorithms

This module provides the traversal and analysis algorithms built on top of
the graph representations in this crate. All algorithms are generic over the
[`AdjacencyList`](crate::ops::AdjacencyList) capability and bind to a graph
by shared borrow; the bound graph must not be mutated while an algorithm
instance holds outstanding traversal state.

Two API layers are offered:

- Lazy traversal **iterators** ([`BFS`], [`DFS`], predecessor-tracking
  variants, [`TopoSearch`]) for composable, allocation-light consumption.
- Stateful **analyses** ([`BreadthFirstSearch`], [`DepthFirstSearch`],
  [`TopoSort`], [`Ucc`]) whose entry operation records per-vertex results
  (visited flags, visit order, distances, labels, component ids, discovery
  edges) for querying after the call completes.

All algorithms are re-exported at the top level of this module:
```rust
use smallgraphs::{prelude::*, algo::*};
```
*/

mod bfs;
mod components;
mod dfs;
mod topo;
mod traversal;

use crate::{ops::*, prelude::*, utils::*};

pub use bfs::*;
pub use components::*;
pub use dfs::*;
pub use topo::*;
pub use traversal::*;
