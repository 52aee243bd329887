/*!
# Bellman-Ford-Yen

Label-correcting single-source shortest paths with negative arc weights.

The algorithm is Bellman-Ford with Yen's improvement: instead of scanning every arc in each
round, only the outgoing arcs of nodes whose distance improved are scanned, using a FIFO queue
of such nodes. A marker in the queue separates consecutive *phases*; phase `k` handles exactly
the nodes improved during phase `k - 1`. After `k` phases every node carries a distance no
larger than that of any walk with at most `k` arcs, so if there are still pending nodes after
`n` phases, some improvement used a walk with `n` or more arcs and the source reaches a cycle
of negative weight. That cycle is then read off the predecessor labels.

The running time is `O(n * m)` in the worst case, but usually much smaller as nodes are only
rescanned after they improved.

# Example
```rust
use wdgraphs::{prelude::*, algo::*};

let graph = WeightedAdjArray::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 1, -3)]);
let cycle = BellmanFordYen::new(&graph).compute(0).unwrap().into_cycle().unwrap();

assert_eq!(cycle.total_weight(), -2);
assert_eq!(cycle.len(), 2);
```
*/

use super::{paths::UNREACHABLE_DISTANCE, *};
use crate::error::{ensure_vertex, raise_error_unless};
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

/// Configurable Bellman-Ford-Yen shortest path algorithm on a borrowed graph.
///
/// The struct only holds the graph and settings; all working state is created per call to
/// [`BellmanFordYen::compute`], so one instance may answer queries for many sources and the
/// graph may be shared between threads running independent computations.
pub struct BellmanFordYen<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    verify_reachability: bool,
}

impl<'a, G> BellmanFordYen<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            verify_reachability: false,
        }
    }

    /// If set, every negative cycle found is additionally checked to be reachable from the
    /// source by a breadth-first search. Cycles are reachable by construction, so the check
    /// never fails on a correct run; it is off by default.
    pub fn verify_reachability(mut self, verify: bool) -> Self {
        self.verify_reachability = verify;
        self
    }

    /// Computes a shortest path tree rooted at `source`, or a negative cycle reachable from it.
    ///
    /// # Errors
    /// - [`Error::InvalidVertex`] if `source` is not a node of the graph
    /// - [`Error::ArithmeticOverflow`] if a distance leaves the range of [`Distance`]
    /// - [`Error::UnreachableCycle`] if reachability verification is enabled and fails
    pub fn compute(&self, source: Node) -> Result<PathResult> {
        ensure_vertex!(source, self.graph.number_of_nodes());

        debug!(
            source,
            n = self.graph.number_of_nodes(),
            m = self.graph.number_of_edges(),
            "computing shortest paths"
        );

        let result = Relaxation::new(self.graph, source).run()?;

        if self.verify_reachability {
            if let PathResult::NegativeCycle(cycle) = &result {
                let vertex = cycle.vertices()[0];
                raise_error_unless!(
                    self.graph.reachable_from(source).get_bit(vertex),
                    Error::UnreachableCycle { vertex }
                );
            }
        }

        Ok(result)
    }
}

/// Shortest path queries implemented on every weighted graph using [`BellmanFordYen`]
pub trait ShortestPaths: WeightedAdjacencyList {
    /// Computes a shortest path tree rooted at `source`, or a negative cycle reachable from it.
    /// See [`BellmanFordYen::compute`].
    fn shortest_paths_from(&self, source: Node) -> Result<PathResult> {
        BellmanFordYen::new(self).compute(source)
    }

    /// Returns a negative cycle reachable from `source` if there is one
    fn negative_cycle_from(&self, source: Node) -> Result<Option<NegativeCycle>> {
        Ok(self.shortest_paths_from(source)?.into_cycle())
    }
}

impl<G: WeightedAdjacencyList> ShortestPaths for G {}

/// Entries of the work queue. The phase marker is a separate variant and can never be
/// confused with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueEntry {
    Vertex(Node),
    PhaseEnd,
}

/// Working state of a single run
struct Relaxation<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    source: Node,
    distances: Vec<Distance>,
    predecessors: Vec<Option<OptionalNode>>,
    queue: VecDeque<QueueEntry>,
    queued: NodeBitSet,
    phase: NumNodes,
    relaxations: u64,
}

impl<'a, G> Relaxation<'a, G>
where
    G: WeightedAdjacencyList,
{
    fn new(graph: &'a G, source: Node) -> Self {
        let mut distances = vec![UNREACHABLE_DISTANCE; graph.len()];
        distances[source as usize] = 0;

        let mut queued = graph.vertex_bitset_unset();
        queued.set_bit(source);

        Self {
            graph,
            source,
            distances,
            predecessors: vec![None; graph.len()],
            queue: VecDeque::from(vec![QueueEntry::Vertex(source), QueueEntry::PhaseEnd]),
            queued,
            phase: 0,
            relaxations: 0,
        }
    }

    fn run(mut self) -> Result<PathResult> {
        let n = self.graph.number_of_nodes();

        while let Some(entry) = self.queue.pop_front() {
            match entry {
                QueueEntry::Vertex(u) => {
                    self.queued.clear_bit(u);
                    self.relax_out_edges(u)?;
                }
                // The marker is dropped once no node is pending, which ends the loop
                QueueEntry::PhaseEnd if self.queue.is_empty() => {}
                QueueEntry::PhaseEnd => {
                    self.phase += 1;
                    trace!(phase = self.phase, pending = self.queue.len(), "phase finished");

                    if self.phase >= n {
                        if let Some(cycle) = self.extract_cycle() {
                            debug!(
                                source = self.source,
                                phases = self.phase,
                                relaxations = self.relaxations,
                                length = cycle.len(),
                                weight = cycle.total_weight(),
                                "negative cycle found"
                            );
                            return Ok(cycle.into());
                        }

                        warn!(
                            phase = self.phase,
                            "predecessors do not close a cycle yet; running another phase"
                        );
                    }

                    self.queue.push_back(QueueEntry::PhaseEnd);
                }
            }
        }

        debug!(
            source = self.source,
            phases = self.phase,
            relaxations = self.relaxations,
            "shortest path tree computed"
        );

        Ok(ShortestPathTree::new(self.source, self.distances, self.predecessors).into())
    }

    fn relax_out_edges(&mut self, u: Node) -> Result<()> {
        let graph = self.graph;

        for WeightedNeighbor { node: v, weight } in graph.out_edges_of(u) {
            // Re-read in every iteration: a negative self-loop improves `u` itself
            let du = self.distances[u as usize];
            if du == UNREACHABLE_DISTANCE {
                continue;
            }

            let candidate = du
                .checked_add(weight as Distance)
                .ok_or(Error::ArithmeticOverflow { from: u, to: v })?;

            if candidate < self.distances[v as usize] {
                self.distances[v as usize] = candidate;
                self.predecessors[v as usize] = OptionalNode::new(u);
                self.relaxations += 1;

                if !self.queued.set_bit(v) {
                    self.queue.push_back(QueueEntry::Vertex(v));
                }
            }
        }

        Ok(())
    }

    /// Tries the pending nodes in queue order as starting points of the predecessor walk.
    /// The front node closes a cycle in all but degenerate cases.
    fn extract_cycle(&self) -> Option<NegativeCycle> {
        let mut pending = self.queue.iter().filter_map(|entry| match entry {
            QueueEntry::Vertex(u) => Some(*u),
            QueueEntry::PhaseEnd => None,
        });

        let front = pending.next()?;
        if let Some(cycle) = NegativeCycle::extract(self.graph, &self.predecessors, front) {
            return Some(cycle);
        }

        warn!(
            front,
            "predecessor walk from the front of the queue does not close a cycle"
        );
        pending.find_map(|u| NegativeCycle::extract(self.graph, &self.predecessors, u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gens::*,
        testing::checks::{assert_negative_cycle, assert_shortest_path_tree, init_tracing},
    };
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn single_vertex() {
        let graph = WeightedAdjArray::from_edges(1, Vec::<WeightedEdge>::new());
        let tree = graph.shortest_paths_from(0).unwrap().into_tree().unwrap();

        assert_eq!(tree.distances().collect_vec(), vec![Some(0)]);
        assert_eq!(tree.predecessors().collect_vec(), vec![None]);
    }

    #[test]
    fn invalid_source() {
        let graph = WeightedAdjArray::from_edges(3, [(0, 1, 1)]);
        assert_eq!(
            graph.shortest_paths_from(3),
            Err(Error::InvalidVertex {
                vertex: 3,
                number_of_nodes: 3
            })
        );

        let empty = WeightedCsrGraph::default();
        assert!(matches!(
            BellmanFordYen::new(&empty).compute(0),
            Err(Error::InvalidVertex { .. })
        ));
    }

    #[test]
    fn isolated_source() {
        let graph = WeightedAdjArray::from_edges(4, [(1, 2, -4), (2, 3, 1)]);
        let tree = graph.shortest_paths_from(0).unwrap().into_tree().unwrap();

        assert_eq!(
            tree.distances().collect_vec(),
            vec![Some(0), None, None, None]
        );
        assert_eq!(tree.reachable_vertices().collect_vec(), vec![0]);
    }

    #[test]
    fn negative_arc_shortcut() {
        let graph = WeightedAdjArray::from_edges(3, [(0, 1, 5), (1, 2, -3), (0, 2, 10)]);
        let tree = graph.shortest_paths_from(0).unwrap().into_tree().unwrap();

        assert_eq!(
            tree.distances().collect_vec(),
            vec![Some(0), Some(5), Some(2)]
        );
        assert_eq!(
            tree.predecessors().collect_vec(),
            vec![None, Some(0), Some(1)]
        );
        assert_shortest_path_tree(&graph, 0, &tree);
    }

    #[test]
    fn simple_negative_cycle() {
        init_tracing();

        let graph = WeightedAdjArray::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 1, -3)]);
        let cycle = graph.negative_cycle_from(0).unwrap().unwrap();

        assert_eq!(cycle.vertices().iter().copied().sorted().collect_vec(), vec![1, 2]);
        assert_eq!(cycle.total_weight(), -2);
        assert_negative_cycle(&graph, &cycle);
    }

    #[test]
    fn parallel_arcs_on_cycle() {
        let graph = WeightedCsrGraph::from_edges(
            3,
            [(0, 1, 0), (1, 2, 4), (1, 2, -1), (2, 1, 0)],
        );
        let cycle = graph.negative_cycle_from(0).unwrap().unwrap();

        assert_eq!(cycle.total_weight(), -1);
        assert!(cycle.edges().contains(&WeightedEdge(1, 2, -1)));
        assert_negative_cycle(&graph, &cycle);
    }

    #[test]
    fn negative_self_loop() {
        let graph = WeightedAdjArray::from_edges(2, [(0, 1, 3), (1, 1, -1)]);
        let cycle = graph.negative_cycle_from(0).unwrap().unwrap();

        assert_eq!(cycle.vertices(), &[1]);
        assert_eq!(cycle.total_weight(), -1);

        let graph = WeightedAdjArray::from_edges(1, [(0, 0, -7)]);
        let cycle = graph.negative_cycle_from(0).unwrap().unwrap();
        assert_eq!(cycle.vertices(), &[0]);
        assert_eq!(cycle.total_weight(), -7);
    }

    #[test]
    fn source_on_cycle() {
        let graph = WeightedAdjArray::from_edges(3, [(0, 1, -1), (1, 2, -1), (2, 0, -1)]);
        let cycle = graph.negative_cycle_from(0).unwrap().unwrap();

        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle.total_weight(), -3);
        assert!(cycle.contains(0));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        // nodes 3 and 4 form a negative cycle only reachable from 2, not from 0
        let graph = WeightedAdjArray::from_edges(
            5,
            [(0, 1, 2), (1, 0, 2), (2, 3, 0), (3, 4, -2), (4, 3, -2)],
        );

        let tree = graph.shortest_paths_from(0).unwrap().into_tree().unwrap();
        assert_shortest_path_tree(&graph, 0, &tree);
        assert!(!tree.is_reachable(3));

        let cycle = graph.negative_cycle_from(2).unwrap().unwrap();
        assert_eq!(cycle.total_weight(), -4);
    }

    #[test]
    fn zero_weight_cycle_is_not_negative() {
        let graph = WeightedAdjArray::from_edges(3, [(0, 1, 1), (1, 2, -2), (2, 1, 2)]);
        let tree = graph.shortest_paths_from(0).unwrap().into_tree().unwrap();

        assert_eq!(
            tree.distances().collect_vec(),
            vec![Some(0), Some(1), Some(-1)]
        );
    }

    #[test]
    fn extreme_weights_do_not_overflow() {
        let n = 50;
        let mut edges = (0..n - 1).map(|u| (u, u + 1, Weight::MIN)).collect_vec();
        edges.push((0, n - 1, Weight::MAX));

        let graph = WeightedAdjArray::from_edges(n, edges);
        let tree = graph.shortest_paths_from(0).unwrap().into_tree().unwrap();

        assert_eq!(
            tree.distance_to(n - 1),
            Some((n as Distance - 1) * Weight::MIN as Distance)
        );
        assert_shortest_path_tree(&graph, 0, &tree);
    }

    #[test]
    fn verify_reachability_is_noop() {
        let graph = WeightedAdjArray::from_edges(
            4,
            [(0, 1, 1), (1, 2, -2), (2, 3, 0), (3, 1, 1)],
        );

        let plain = BellmanFordYen::new(&graph).compute(0).unwrap();
        let verified = BellmanFordYen::new(&graph)
            .verify_reachability(true)
            .compute(0)
            .unwrap();

        assert!(plain.is_negative_cycle());
        assert_eq!(plain, verified);
    }

    #[test]
    fn idempotent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let graph = WeightedAdjArray::weighted_gnm(rng, 30, 90, -3..=10);
        let algo = BellmanFordYen::new(&graph);

        for source in graph.vertices() {
            assert_eq!(algo.compute(source), algo.compute(source));
        }
    }

    #[test]
    fn random_graphs_without_negative_arcs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in [2 as NumNodes, 10, 40] {
            for _ in 0..20 {
                let graph = WeightedCsrGraph::weighted_gnm(rng, n, 3 * n, 0..=20);
                let source = rng.random_range(0..n);

                let tree = graph.shortest_paths_from(source).unwrap().into_tree().unwrap();
                assert_shortest_path_tree(&graph, source, &tree);
            }
        }
    }

    #[test]
    fn random_graphs_with_negative_arcs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let (mut trees, mut cycles) = (0, 0);

        for n in [2 as NumNodes, 5, 10, 30] {
            for m in [n, 2 * n, 4 * n] {
                for _ in 0..30 {
                    let graph = WeightedAdjArray::weighted_gnm(rng, n, m, -4..=12);
                    let source = rng.random_range(0..n);

                    match graph.shortest_paths_from(source).unwrap() {
                        PathResult::ShortestPathTree(tree) => {
                            assert_shortest_path_tree(&graph, source, &tree);
                            trees += 1;
                        }
                        PathResult::NegativeCycle(cycle) => {
                            assert_negative_cycle(&graph, &cycle);
                            assert!(graph.is_reachable(source, cycle.vertices()[0]));
                            cycles += 1;
                        }
                    }
                }
            }
        }

        assert!(trees > 0 && cycles > 0);
    }

    #[test]
    fn planted_cycle_behind_long_path() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [10 as NumNodes, 25, 60] {
            // A long path with positive weights leading into a cycle of weight -split;
            // random arcs are too heavy to close any other negative cycle
            let split = n / 2;
            let mut edges = weighted_path(0..split, |_| 3);
            edges.extend(weighted_cycle(split - 1..n, |i| if i == 0 { -(n as Weight) } else { 1 }));
            edges.extend(
                (0..n)
                    .map(|_| {
                        WeightedEdge(rng.random_range(0..n), rng.random_range(0..n), 2 * n as Weight)
                    })
                    .collect_vec(),
            );

            let graph = WeightedCsrGraph::from_edges(n, edges);
            let cycle = graph.negative_cycle_from(0).unwrap().unwrap();

            assert_negative_cycle(&graph, &cycle);
            assert!(cycle.vertices().iter().all(|&u| u >= split - 1));
        }
    }
}
