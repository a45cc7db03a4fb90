use fxhash::FxHashSet;
use smallvec::SmallVec;

use crate::{ops::*, testing::test_graph_ops, *};

/// Arena owning the edge records of a weighted graph.
///
/// An undirected edge is referenced by the same handle from both endpoints,
/// so removal from either side resolves to one record and each record is
/// released exactly once. Freed slots are recycled.
#[derive(Debug, Default, Clone)]
struct EdgeArena {
    slots: Vec<Option<WeightedEdge>>,
    free: Vec<EdgeHandle>,
}

impl EdgeArena {
    fn alloc(&mut self, e: WeightedEdge) -> EdgeHandle {
        if let Some(h) = self.free.pop() {
            self.slots[h as usize] = Some(e);
            h
        } else {
            self.slots.push(Some(e));
            (self.slots.len() - 1) as EdgeHandle
        }
    }

    fn release(&mut self, h: EdgeHandle) {
        debug_assert!(self.slots[h as usize].is_some());
        self.slots[h as usize] = None;
        self.free.push(h);
    }

    fn get(&self, h: EdgeHandle) -> &WeightedEdge {
        self.slots[h as usize].as_ref().unwrap()
    }

    fn get_mut(&mut self, h: EdgeHandle) -> &mut WeightedEdge {
        self.slots[h as usize].as_mut().unwrap()
    }
}

/// A weighted graph backed by an adjacency matrix of edge handles.
///
/// Parallel edges collapse into a single cell; re-inserting an existing edge
/// overwrites the cell's record, so the last insert wins for its weight.
#[derive(Clone)]
pub struct WeightedDenseGraph {
    cells: Vec<Option<OptionalHandle>>,
    arena: EdgeArena,
    n: NumNodes,
    num_edges: NumEdges,
    directed: bool,
}

impl WeightedDenseGraph {
    fn cell(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }

    fn handle_at(&self, u: Node, v: Node) -> Option<EdgeHandle> {
        self.cells[self.cell(u, v)].map(|h| h.get())
    }
}

impl GraphNew for WeightedDenseGraph {
    fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            cells: vec![None; n as usize * n as usize],
            arena: Default::default(),
            n,
            num_edges: 0,
            directed,
        }
    }
}

impl GraphNodeOrder for WeightedDenseGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for WeightedDenseGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphOrientation for WeightedDenseGraph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for WeightedDenseGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&v| self.handle_at(u, v).is_some())
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }
}

impl AdjacencyTest for WeightedDenseGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.handle_at(u, v).is_some()
    }
}

impl GraphEdgeEditing for WeightedDenseGraph {
    type Edge = WeightedEdge;

    fn insert(&mut self, e: WeightedEdge) {
        let Edge(u, v) = e.endpoints();
        if let Some(h) = self.handle_at(u, v) {
            *self.arena.get_mut(h) = e;
        } else {
            let h = self.arena.alloc(e);
            let idx = self.cell(u, v);
            self.cells[idx] = OptionalHandle::new(h);
            if !self.directed {
                let mirror = self.cell(v, u);
                self.cells[mirror] = OptionalHandle::new(h);
            }
            self.num_edges += 1;
        }
    }

    fn remove(&mut self, e: WeightedEdge) {
        let Edge(u, v) = e.endpoints();
        if let Some(h) = self.handle_at(u, v) {
            self.arena.release(h);
            let idx = self.cell(u, v);
            self.cells[idx] = None;
            if !self.directed {
                let mirror = self.cell(v, u);
                self.cells[mirror] = None;
            }
            self.num_edges -= 1;
        }
    }
}

impl WeightedAdjacency for WeightedDenseGraph {
    fn get_edge(&self, u: Node, v: Node) -> Option<&WeightedEdge> {
        self.handle_at(u, v).map(|h| self.arena.get(h))
    }

    fn get_edge_mut(&mut self, u: Node, v: Node) -> Option<&mut WeightedEdge> {
        let h = self.handle_at(u, v)?;
        Some(self.arena.get_mut(h))
    }

    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.vertices().filter_map(move |v| self.get_edge(u, v))
    }

    fn weighted_edges(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        let directed = self.directed;
        self.vertices().flat_map(move |u| {
            self.vertices()
                .filter(move |&v| directed || u < v)
                .filter_map(move |v| self.get_edge(u, v))
        })
    }
}

/// A weighted multigraph backed by per-vertex lists of edge handles.
///
/// Parallel edges are fully preserved; `remove` deletes every copy between
/// the endpoint pair regardless of weight.
#[derive(Clone)]
pub struct WeightedSparseMultiGraph {
    lists: Vec<SmallVec<[EdgeHandle; 4]>>,
    arena: EdgeArena,
    num_edges: NumEdges,
    directed: bool,
}

impl GraphNew for WeightedSparseMultiGraph {
    fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            lists: vec![Default::default(); n as usize],
            arena: Default::default(),
            num_edges: 0,
            directed,
        }
    }
}

impl GraphNodeOrder for WeightedSparseMultiGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.lists.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightedSparseMultiGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphOrientation for WeightedSparseMultiGraph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for WeightedSparseMultiGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.lists[u as usize]
            .iter()
            .rev()
            .map(move |&h| self.arena.get(h).other(u))
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.lists[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for WeightedSparseMultiGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.get_edge(u, v).is_some()
    }
}

impl GraphEdgeEditing for WeightedSparseMultiGraph {
    type Edge = WeightedEdge;

    fn insert(&mut self, e: WeightedEdge) {
        let Edge(u, v) = e.endpoints();
        assert!(v < self.number_of_nodes());
        let h = self.arena.alloc(e);
        self.lists[u as usize].push(h);
        if !self.directed && u != v {
            self.lists[v as usize].push(h);
        }
        self.num_edges += 1;
    }

    fn remove(&mut self, e: WeightedEdge) {
        let Edge(u, v) = e.endpoints();
        let mut removed: SmallVec<[EdgeHandle; 4]> = SmallVec::new();
        let arena = &self.arena;
        self.lists[u as usize].retain(|h| {
            if arena.get(*h).other(u) == v {
                removed.push(*h);
                false
            } else {
                true
            }
        });

        if removed.is_empty() {
            return;
        }

        if !self.directed && u != v {
            let gone: FxHashSet<EdgeHandle> = removed.iter().copied().collect();
            self.lists[v as usize].retain(|h| !gone.contains(h));
        }
        for &h in &removed {
            self.arena.release(h);
        }
        self.num_edges -= removed.len() as NumEdges;
    }
}

impl WeightedAdjacency for WeightedSparseMultiGraph {
    fn get_edge(&self, u: Node, v: Node) -> Option<&WeightedEdge> {
        self.lists[u as usize]
            .iter()
            .rev()
            .map(|&h| self.arena.get(h))
            .find(|e| e.other(u) == v)
    }

    fn get_edge_mut(&mut self, u: Node, v: Node) -> Option<&mut WeightedEdge> {
        let h = self.lists[u as usize]
            .iter()
            .rev()
            .copied()
            .find(|&h| self.arena.get(h).other(u) == v)?;
        Some(self.arena.get_mut(h))
    }

    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.lists[u as usize]
            .iter()
            .rev()
            .map(move |&h| self.arena.get(h))
    }

    /// Each record is yielded exactly once, from its source endpoint's list
    fn weighted_edges(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.lists[u as usize]
                .iter()
                .rev()
                .map(move |&h| self.arena.get(h))
                .filter(move |e| e.is_source(u))
        })
    }
}

// ---------- Testing ----------

test_graph_ops!(weighted_dense_graph_ops, WeightedDenseGraph, false);
test_graph_ops!(weighted_sparse_multi_graph_ops, WeightedSparseMultiGraph, true);
