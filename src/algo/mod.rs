/*!
# Graph Algorithms

Single-source shortest paths on weighted digraphs whose arc weights may be negative.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wdgraphs::{prelude::*, algo::*};

let graph = WeightedAdjArray::from_edges(3, [(0, 1, 5), (1, 2, -3), (0, 2, 10)]);
let tree = graph.shortest_paths_from(0).unwrap().into_tree().unwrap();

assert_eq!(tree.distance_to(2), Some(2));
assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
```

The main entry point is [`BellmanFordYen`] (or the [`ShortestPaths`] trait implemented on every
graph) which returns a [`PathResult`]: either a [`ShortestPathTree`] or, if the source reaches a
cycle of negative weight, that [`NegativeCycle`].
*/

mod negative_cycle;
mod paths;
mod traversal;
mod yen;

use crate::prelude::*;

pub use negative_cycle::*;
pub use paths::*;
pub use traversal::*;
pub use yen::*;
