/*!
Breadth-first reachability on weighted digraphs. Weights are ignored: an arc of any weight
connects its endpoints.
*/

use super::*;
use std::collections::VecDeque;

/// Breadth-first search iterator yielding nodes in the order they are discovered.
pub struct Bfs<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> Bfs<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Starts a new search at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Returns the set of nodes discovered so far
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Runs the search to completion and returns the set of all discovered nodes
    pub fn into_visited(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.visited
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: WeightedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let u = self.queue.pop_front()?;

        for v in self.graph.out_neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// Reachability queries implemented on every weighted graph
pub trait Reachability: WeightedAdjacencyList {
    /// Returns a BFS iterator starting at `start`, or [`Error::InvalidVertex`] if `start >= n`
    fn try_bfs(&self, start: Node) -> Result<Bfs<'_, Self>> {
        crate::error::ensure_vertex!(start, self.number_of_nodes());
        Ok(Bfs::new(self, start))
    }

    /// Returns the set of nodes reachable from `source` (including `source`).
    /// ** Panics if `source >= n` **
    fn reachable_from(&self, source: Node) -> NodeBitSet {
        Bfs::new(self, source).into_visited()
    }

    /// Returns *true* if there is a directed path from `source` to `target`.
    /// ** Panics if `source >= n` **
    fn is_reachable(&self, source: Node, target: Node) -> bool {
        Bfs::new(self, source).any(|u| u == target)
    }
}

impl<G: WeightedAdjacencyList> Reachability for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        let graph = WeightedAdjArray::from_edges(
            6,
            [(0, 1, -1), (0, 2, 3), (1, 3, 0), (2, 3, 7), (3, 0, 1), (4, 5, 2)],
        );

        assert_eq!(Bfs::new(&graph, 0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.try_bfs(4).unwrap().collect_vec(), vec![4, 5]);
        assert!(graph.try_bfs(6).is_err());
    }

    #[test]
    fn reachable_sets() {
        let graph = WeightedCsrGraph::from_edges(5, [(0, 1, 1), (1, 2, 1), (3, 4, -5), (4, 3, -5)]);

        assert_eq!(graph.reachable_from(0).iter_set_bits().collect_vec(), vec![0, 1, 2]);
        assert_eq!(graph.reachable_from(3).cardinality(), 2);
        assert!(graph.is_reachable(0, 2));
        assert!(!graph.is_reachable(0, 3));
        assert!(!graph.is_reachable(2, 0));
    }
}
