/*!
# Weighted Digraph Representations

Immutable storage backends for weighted directed graphs:

- [`WeightedAdjArray`]: one adjacency array (`Vec<WeightedNeighbor>`) per node.
- [`WeightedCsrGraph`]: **Compressed Sparse Row** layout with all arcs in a single buffer.

Both keep the outgoing arcs of every node in insertion order, allow self-loops and parallel
arcs, and implement the traits of [`ops`](crate::ops). Neither can be modified after
construction; create them via [`GraphFromScratch`].
*/

use crate::{
    error::{Result, ensure_vertex},
    ops::*,
    testing::test_graph_ops,
    *,
};

mod adj_array;
mod csr;

pub use adj_array::*;
pub use csr::*;
