/*!
# Negative Cycles

Extraction of a cycle of negative weight from the predecessor labels of a label-correcting
shortest path computation. Once the relaxation has run for `n` phases with vertices still
pending, following predecessors backwards from a pending vertex eventually repeats a vertex;
the repeated part of that walk is a cycle of negative weight.
*/

use super::*;
use itertools::Itertools;

/// A directed cycle of negative total weight.
///
/// The nodes are listed in cycle order: for consecutive nodes `u, v` (including the last and
/// the first node) there is an arc `(u, v)` in the graph. As graphs may contain parallel arcs,
/// the weight of each step is the weight of the cheapest arc between both nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeCycle {
    vertices: Vec<Node>,
    /// `weights[i]` is the weight of the arc leaving `vertices[i]`
    weights: Vec<Weight>,
    total_weight: Distance,
}

impl NegativeCycle {
    /// Walks backwards from `start` along `predecessors` until a vertex repeats and returns the
    /// cycle closed by this repetition.
    ///
    /// Returns `None` if the walk reaches a vertex without predecessor before a repetition, or
    /// if a predecessor arc is missing in `graph`.
    pub(crate) fn extract<G>(
        graph: &G,
        predecessors: &[Option<OptionalNode>],
        start: Node,
    ) -> Option<Self>
    where
        G: WeightedAdjacencyList,
    {
        let mut visited = graph.vertex_bitset_unset();

        // walk[i + 1] is the predecessor of walk[i]
        let mut walk = Vec::new();
        let mut u = start;
        while !visited.set_bit(u) {
            walk.push(u);
            u = predecessors[u as usize]?.get();
        }

        // Drop the acyclic tail leading into the cycle; reversing yields arc order
        let entry = walk.iter().position(|&x| x == u)?;
        let mut vertices = walk.split_off(entry);
        vertices.reverse();

        let weights = vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&a, &b)| graph.min_weight_between(a, b))
            .collect::<Option<Vec<Weight>>>()?;

        let total_weight = weights.iter().map(|&w| w as Distance).sum();

        Some(Self {
            vertices,
            weights,
            total_weight,
        })
    }

    /// Returns the nodes of the cycle in cycle order
    pub fn vertices(&self) -> &[Node] {
        &self.vertices
    }

    /// Returns the sum of the cheapest arc weights between consecutive nodes
    pub fn total_weight(&self) -> Distance {
        self.total_weight
    }

    /// Returns the number of nodes (and arcs) on the cycle
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// A cycle always has at least one node
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns *true* if `v` lies on the cycle
    pub fn contains(&self, v: Node) -> bool {
        self.vertices.contains(&v)
    }

    /// Returns the arcs of the cycle in cycle order, each with the weight it contributes
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .zip(self.weights.iter())
            .map(|((&u, &v), &w)| WeightedEdge(u, v, w))
    }
}
