/*!
# Graph Operations

Read-only traits every weighted graph representation implements. Algorithms in
[`algo`](crate::algo) are written against these traits only, so callers may also
plug in their own representations.

Unchecked accessors (`out_edges_of`, `out_degree_of`, ...) panic on out-of-range
nodes; their `try_`-counterparts return [`Error::InvalidVertex`](crate::error::Error::InvalidVertex) instead.
*/

use std::ops::Range;

use crate::{
    error::{Result, ensure_vertex},
    *,
};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a node of the graph
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (parallel edges are counted individually)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weighted outgoing neighborhoods & edges
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the outgoing arcs of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedNeighbor> + '_;

    /// Returns the number of outgoing arcs of `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the outgoing arcs of a given vertex or
    /// [`Error::InvalidVertex`](crate::error::Error::InvalidVertex) if `u` is not a node of the graph.
    fn try_out_edges_of(&self, u: Node) -> Result<impl Iterator<Item = WeightedNeighbor> + '_> {
        ensure_vertex!(u, self.number_of_nodes());
        Ok(self.out_edges_of(u))
    }

    /// Returns an iterator over the heads of all outgoing arcs of `u`.
    /// Nodes appear multiple times if there are parallel arcs.
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_edges_of(u).map(|nb| nb.node)
    }

    /// Returns *true* if there is at least one arc `(u, v)`
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_neighbors_of(u).any(|w| w == v)
    }

    /// Returns the smallest weight among all (parallel) arcs `(u, v)` or `None` if there is none.
    /// ** Panics if `u >= n` **
    fn min_weight_between(&self, u: Node, v: Node) -> Option<Weight> {
        self.out_edges_of(u)
            .filter(|nb| nb.node == v)
            .map(|nb| nb.weight)
            .min()
    }

    /// Returns an iterator over all arcs of the graph, grouped by tail
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.out_edges_of(u)
                .map(move |nb| WeightedEdge(u, nb.node, nb.weight))
        })
    }

    /// Returns the maximum out-degree in the graph
    fn max_out_degree(&self) -> NumNodes {
        self.vertices()
            .map(|u| self.out_degree_of(u))
            .max()
            .unwrap_or(0)
    }
}

/// Construction of an immutable graph from a list of arcs
pub trait GraphFromScratch: Sized {
    /// Creates a graph with `n` nodes and the given arcs.
    /// Fails with [`Error::InvalidVertex`](crate::error::Error::InvalidVertex) if an endpoint is not in `0..n`.
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>;

    /// Creates a graph with `n` nodes and the given arcs.
    /// ** Panics if an endpoint is `>= n` **
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        match Self::try_from_edges(n, edges) {
            Ok(graph) => graph,
            Err(e) => panic!("{e}"),
        }
    }
}
