/// Randomized consistency tests shared by every graph representation.
///
/// Expands to a `#[cfg(test)]` module exercising construction, insertion,
/// removal and the undirected symmetry invariant against a seeded random
/// edge stream. `$multi` selects the reference edge-counting semantics:
/// multigraphs count parallel edges, dense graphs collapse them.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $multi:literal) => {
        #[cfg(test)]
        mod $env {
            use super::$graph;
            use crate::{ops::*, prelude::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of `m` random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Reference edge count for the inserted stream
            fn expected_edge_count(edges: &[Edge], directed: bool) -> NumEdges {
                if $multi {
                    edges.len() as NumEdges
                } else {
                    let mut cells = edges
                        .iter()
                        .map(|e| if directed { *e } else { e.normalized() })
                        .collect_vec();
                    cells.sort_unstable();
                    cells.dedup();
                    cells.len() as NumEdges
                }
            }

            #[test]
            fn graph_new() {
                for directed in [false, true] {
                    for n in 1..20 {
                        let graph = <$graph>::new(n, directed);

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), 0);
                        assert_eq!(graph.is_directed(), directed);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                        assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
                    }
                }
            }

            #[test]
            fn insert_consistency() {
                let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

                for directed in [false, true] {
                    for n in [5 as NumNodes, 10, 30] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, 3 * n);
                            let graph = <$graph>::from_edges(n, directed, edges.iter().copied());

                            assert_eq!(
                                graph.number_of_edges(),
                                expected_edge_count(&edges, directed)
                            );

                            for &Edge(u, v) in &edges {
                                assert!(graph.has_edge(u, v));
                                if !directed {
                                    assert!(graph.has_edge(v, u));
                                }
                            }

                            if directed {
                                // every stored entry sits in exactly one list
                                let total: NumNodes = graph.degrees().sum();
                                assert_eq!(total, graph.number_of_edges());
                            }
                        }
                    }
                }
            }

            #[test]
            fn remove_enumerated_edges_empties_graph() {
                let rng = &mut Pcg64Mcg::seed_from_u64(0xfeed);

                for directed in [false, true] {
                    for _ in 0..10 {
                        let n = 12 as NumNodes;
                        let edges: Vec<Edge> = random_edges(rng, n, 50)
                            .into_iter()
                            .filter(|e| directed || !e.is_loop())
                            .collect_vec();
                        let mut graph = <$graph>::from_edges(n, directed, edges.iter().copied());

                        let stored = graph.edges().collect_vec();
                        graph.remove_edges(stored);

                        assert_eq!(graph.number_of_edges(), 0);
                        assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
                    }
                }
            }

            #[test]
            fn undirected_symmetry_invariant() {
                let rng = &mut Pcg64Mcg::seed_from_u64(0xd1ce);

                let n = 16 as NumNodes;
                let edges = random_edges(rng, n, 40);
                let mut graph = <$graph>::from_edges(n, false, edges.iter().copied());

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
                    }
                }

                for e in edges.iter().step_by(2) {
                    graph.remove((*e).into());
                }

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
