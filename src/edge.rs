use std::fmt::{Debug, Display};

use crate::{Node, NumNodes};

/// Edge weights are signed and may be negative.
pub type Weight = i32;

/// Lengths of paths and walks.
///
/// Twice the width of [`Weight`] so that adding any edge weight to a finite distance
/// cannot overflow for realistic path lengths; relaxations still use checked arithmetic.
pub type Distance = i64;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An entry of an outgoing adjacency list: the head of the arc and its weight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedNeighbor {
    pub node: Node,
    pub weight: Weight,
}

impl WeightedNeighbor {
    pub const fn new(node: Node, weight: Weight) -> Self {
        Self { node, weight }
    }
}

/// A directed, weighted arc `(tail, head, weight)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// Returns the tail of the arc
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the head of the arc
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns the weight of the arc
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Returns the larger endpoint; an edge fits into a graph with `n` nodes iff this is `< n`
    pub fn max_node(&self) -> Node {
        self.0.max(self.1)
    }

    /// Returns true if both endpoints are valid nodes in a graph with `n` nodes
    pub fn fits_into(&self, n: NumNodes) -> bool {
        self.max_node() < n
    }

    /// Returns the head and weight as an adjacency entry
    pub fn neighbor(&self) -> WeightedNeighbor {
        WeightedNeighbor::new(self.1, self.2)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let e = WeightedEdge::from((3, 5, -7));
        assert_eq!((e.source(), e.target(), e.weight()), (3, 5, -7));
        assert_eq!(e.neighbor(), WeightedNeighbor::new(5, -7));
        assert!(!e.is_loop());
        assert!(WeightedEdge(2, 2, 0).is_loop());
        assert!(e.fits_into(6));
        assert!(!e.fits_into(5));
        assert_eq!(format!("{e}"), "(3,5:-7)");
    }
}
