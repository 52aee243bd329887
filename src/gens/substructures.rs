/*!
# Substructure Generators

Deterministic weighted motifs (paths and cycles) as arc lists. Since graphs are immutable,
these are meant to be combined with other arcs before building a graph.

```rust
use wdgraphs::{prelude::*, gens::*};

let mut edges = weighted_path([0, 1, 2], |_| 4);
edges.extend(weighted_cycle([2, 3, 4], |i| if i == 0 { -9 } else { 1 }));

let graph = WeightedAdjArray::from_edges(5, edges);
assert_eq!(graph.min_weight_between(4, 2), Some(1));
assert_eq!(graph.min_weight_between(2, 3), Some(-9));
```
*/

use itertools::Itertools;

use super::*;

/// Connects the given nodes in order by a path. The `i`-th arc gets weight `weight_of(i)`.
pub fn weighted_path<P, F>(nodes_on_path: P, mut weight_of: F) -> Vec<WeightedEdge>
where
    P: IntoIterator<Item = Node>,
    F: FnMut(usize) -> Weight,
{
    nodes_on_path
        .into_iter()
        .tuple_windows()
        .enumerate()
        .map(|(i, (u, v))| WeightedEdge(u, v, weight_of(i)))
        .collect_vec()
}

/// Connects the given nodes in order by a cycle, including the arc from the last to the first
/// node. The `i`-th arc gets weight `weight_of(i)`. A single node yields a self-loop.
pub fn weighted_cycle<C, F>(nodes_in_cycle: C, mut weight_of: F) -> Vec<WeightedEdge>
where
    C: IntoIterator<Item = Node>,
    F: FnMut(usize) -> Weight,
{
    let nodes = nodes_in_cycle.into_iter().collect_vec();

    nodes
        .iter()
        .circular_tuple_windows()
        .enumerate()
        .map(|(i, (&u, &v))| WeightedEdge(u, v, weight_of(i)))
        .collect_vec()
}
