/*!
# Graph Representations

This module defines the graph storage backends.

A graph is represented by parameterizing [`Graph`] with a [`Neighborhood`]
type, which controls how per-vertex adjacency information is stored:

- [`DenseGraph`] — adjacency-matrix rows ([`BitNeighborhood`]); `O(1)` edge
  existence checks, no parallel edges, `O(n)` adjacency iteration per vertex.
- [`SparseMultiGraph`] — adjacency lists ([`MultiNeighborhood`]); `O(1)`
  insertion, parallel edges preserved, `O(deg)` existence checks.

The weighted variants [`WeightedDenseGraph`] and [`WeightedSparseMultiGraph`]
make the same trade-offs but store [`WeightedEdge`](crate::WeightedEdge)
records in an internal arena, referenced by handle from both endpoints of an
undirected edge.

All representations are constructed with a fixed node count and a runtime
orientation flag; see [`GraphNew`](crate::ops::GraphNew).
*/

mod neighborhood;
mod unweighted;
mod weighted;

pub use neighborhood::*;
pub use unweighted::*;
pub use weighted::*;
