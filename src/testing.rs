/// Every graph representation should implement `GraphFromScratch` and `WeightedAdjacencyList`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{error::Error, ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random arcs (possibly parallel or loops) for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge> {
                (0..m).map(|_| {
                    WeightedEdge(
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(-10..=10),
                    )
                }).collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphFromScratch) => {
        #[test]
        fn graph_from_scratch() {
            for n in 0..20 {
                let graph = <$graph>::from_edges(n, Vec::<WeightedEdge>::new());

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }

            assert_eq!(
                <$graph>::try_from_edges(3, [(0, 1, 1), (1, 3, 2)]),
                Err(Error::InvalidVertex { vertex: 3, number_of_nodes: 3 })
            );
        }
    };
    ($graph:ident: WeightedAdjacencyList) => {
        #[test]
        fn test_weighted_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);

                        // arcs are grouped by tail in insertion order
                        let grouped = edges.iter().copied().sorted_by_key(|e| e.source()).collect_vec();
                        assert_eq!(graph.edges().collect_vec(), grouped);

                        for u in 0..n {
                            let out = edges.iter().filter(|e| e.source() == u).collect_vec();
                            assert_eq!(graph.out_degree_of(u) as usize, out.len());
                            assert_eq!(graph.try_out_edges_of(u).unwrap().count(), out.len());

                            for v in 0..n {
                                let min = out.iter().filter(|e| e.target() == v).map(|e| e.weight()).min();
                                assert_eq!(graph.min_weight_between(u, v), min);
                                assert_eq!(graph.has_edge(u, v), min.is_some());
                            }
                        }

                        assert!(matches!(
                            graph.try_out_edges_of(n),
                            Err(Error::InvalidVertex { vertex, number_of_nodes }) if vertex == n && number_of_nodes == n
                        ));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
