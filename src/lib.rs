/*!
`wdgraphs` is a small graph library for **w**eighted **d**irected graphs whose arc weights may be
negative, centered around single-source shortest paths with negative-cycle detection.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Arc **weights** are `i32` and may be negative; path lengths are accumulated in `i64`
([`Distance`]) with checked arithmetic, so they never wrap silently.
Graphs are immutable once built and may contain self-loops and parallel arcs.

See the [`repr`] module for the available storage backends:

- [`WeightedAdjArray`](crate::repr::WeightedAdjArray)
- [`WeightedCsrGraph`](crate::repr::WeightedCsrGraph)

# Shortest Paths

[`algo::BellmanFordYen`] computes, for a given source, either a shortest path tree or a cycle of
negative total weight reachable from the source, whichever exists. It is a label-correcting
algorithm (Bellman-Ford with Yen's queue-based improvement) that detects negative cycles while
relaxing by counting phases, and then reads the cycle off the predecessor labels.

```rust
use wdgraphs::{prelude::*, algo::*};

let graph = WeightedCsrGraph::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 1, -3)]);

match graph.shortest_paths_from(0).unwrap() {
    PathResult::ShortestPathTree(_) => unreachable!(),
    PathResult::NegativeCycle(cycle) => assert_eq!(cycle.total_weight(), -2),
}
```

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all representations,
- [`algo`] includes the shortest path algorithm, its result types and reachability queries,
- [`gens`] includes random and deterministic generators for weighted graphs.

In most use-cases, `use wdgraphs::{prelude::*, algo::*};` suffices for your needs.
Reading graphs from files and printing results is left to the caller.

# Logging

The crate reports progress through the [`tracing`](https://docs.rs/tracing) facade (`debug` per
computation, `trace` per phase) and never installs a subscriber itself.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `wdgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{Error, Result},
        node::*,
        ops::*,
        repr::*,
    };
}
