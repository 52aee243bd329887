/*!
# Graph Generators

Random and deterministic generators for weighted digraphs, mainly to create test and benchmark
instances for the shortest path algorithms.

Generators follow a builder pattern:

1. Create a generator instance (e.g., `WeightedGnm::new()`).
2. Set parameters (e.g., `.nodes(n).edges(m).weights(-5..=10)`).
3. Generate arcs via `generate()` or `stream()`.

The [`RandomWeightedGraph`] trait wraps this into constructors for every graph type implementing
[`GraphFromScratch`].

```rust
use wdgraphs::{prelude::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
let graph = WeightedAdjArray::weighted_gnm(rng, 10, 30, -2..=8);

assert_eq!(graph.number_of_edges(), 30);
assert!(graph.edges().all(|e| (-2..=8).contains(&e.weight())));
```
*/

use rand::Rng;
use std::ops::RangeInclusive;

use crate::prelude::*;

mod gnm;
mod substructures;

pub use gnm::*;
pub use substructures::*;

/// General trait for a configurable random arc generator.
pub trait WeightedGraphGenerator {
    /// Generates a list of random arcs.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated arcs.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomWeightedGraph: Sized {
    /// Creates a random `G(n,m)` multigraph: `m` arcs with endpoints and weights drawn
    /// uniformly at random (self-loops and parallel arcs included).
    /// ** Panics if `n == 0 && m > 0` or `weights` is empty **
    fn weighted_gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;
}

impl<G> RandomWeightedGraph for G
where
    G: GraphFromScratch,
{
    fn weighted_gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            WeightedGnm::new()
                .nodes(n)
                .edges(m)
                .weights(weights)
                .stream(rng),
        )
    }
}
