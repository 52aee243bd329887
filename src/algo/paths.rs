use super::*;

/// Internal distance label of nodes that were not reached (yet)
pub(crate) const UNREACHABLE_DISTANCE: Distance = Distance::MAX;

/// Outcome of a single-source shortest path computation.
///
/// Exactly one of both exists for a given source: if no cycle of negative weight is reachable,
/// all shortest paths are well-defined and form a tree; otherwise distances are unbounded below
/// and a witness cycle is returned instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    ShortestPathTree(ShortestPathTree),
    NegativeCycle(NegativeCycle),
}

impl PathResult {
    /// Returns *true* if a negative cycle was found
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, PathResult::NegativeCycle(_))
    }

    /// Returns *true* if a shortest path tree was computed
    pub fn is_shortest_path_tree(&self) -> bool {
        matches!(self, PathResult::ShortestPathTree(_))
    }

    pub fn as_tree(&self) -> Option<&ShortestPathTree> {
        match self {
            PathResult::ShortestPathTree(tree) => Some(tree),
            PathResult::NegativeCycle(_) => None,
        }
    }

    pub fn as_cycle(&self) -> Option<&NegativeCycle> {
        match self {
            PathResult::ShortestPathTree(_) => None,
            PathResult::NegativeCycle(cycle) => Some(cycle),
        }
    }

    pub fn into_tree(self) -> Option<ShortestPathTree> {
        match self {
            PathResult::ShortestPathTree(tree) => Some(tree),
            PathResult::NegativeCycle(_) => None,
        }
    }

    pub fn into_cycle(self) -> Option<NegativeCycle> {
        match self {
            PathResult::ShortestPathTree(_) => None,
            PathResult::NegativeCycle(cycle) => Some(cycle),
        }
    }
}

impl From<ShortestPathTree> for PathResult {
    fn from(tree: ShortestPathTree) -> Self {
        PathResult::ShortestPathTree(tree)
    }
}

impl From<NegativeCycle> for PathResult {
    fn from(cycle: NegativeCycle) -> Self {
        PathResult::NegativeCycle(cycle)
    }
}

/// Shortest path distances and predecessors of all nodes with respect to a fixed source.
///
/// Nodes not reachable from the source have neither a distance nor a predecessor.
/// If a node `v` has predecessor `u`, then `distance_to(v) == distance_to(u) + w(u, v)` for
/// the cheapest arc `(u, v)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Node,
    distances: Vec<Distance>,
    predecessors: Vec<Option<OptionalNode>>,
}

impl ShortestPathTree {
    pub(crate) fn new(
        source: Node,
        distances: Vec<Distance>,
        predecessors: Vec<Option<OptionalNode>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        debug_assert_eq!(distances[source as usize], 0);
        Self {
            source,
            distances,
            predecessors,
        }
    }

    /// Returns the root of the tree
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the number of nodes of the underlying graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.distances.len() as NumNodes
    }

    /// Returns the length of a shortest path from the source to `v`, or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Distance> {
        let d = self.distances[v as usize];
        (d != UNREACHABLE_DISTANCE).then_some(d)
    }

    /// Returns the node preceding `v` on a shortest path from the source.
    /// `None` for the source itself and all unreachable nodes.
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize].map(|u| u.get())
    }

    /// Returns *true* if there is a path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distances[v as usize] != UNREACHABLE_DISTANCE
    }

    /// Returns an iterator over the distances of all nodes in order
    pub fn distances(&self) -> impl Iterator<Item = Option<Distance>> + '_ {
        self.distances
            .iter()
            .map(|&d| (d != UNREACHABLE_DISTANCE).then_some(d))
    }

    /// Returns an iterator over the predecessors of all nodes in order
    pub fn predecessors(&self) -> impl Iterator<Item = Option<Node>> + '_ {
        self.predecessors.iter().map(|p| p.map(|u| u.get()))
    }

    /// Returns an iterator over all nodes reachable from the source (including the source)
    pub fn reachable_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(v, &d)| (d != UNREACHABLE_DISTANCE).then_some(v as Node))
    }

    /// Returns the nodes of a shortest path from the source to `v` (both inclusive),
    /// or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.predecessor_of(u) {
            debug_assert!(path.len() < self.distances.len());
            path.push(p);
            u = p;
        }

        path.reverse();
        Some(path)
    }
}
