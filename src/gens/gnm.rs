use super::*;

/// Generator for random weighted `G(n,m)` multigraphs with `n` nodes and `m` arcs.
///
/// Every arc is drawn independently: tail, head and weight are uniform in `0..n`, `0..n` and
/// the configured weight range. Self-loops can be excluded with `.loops(false)`.
#[derive(Debug, Clone)]
pub struct WeightedGnm {
    n: NumNodes,
    m: NumEdges,
    weights: RangeInclusive<Weight>,
    loops: bool,
}

impl Default for WeightedGnm {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            weights: 1..=1,
            loops: true,
        }
    }
}

impl WeightedGnm {
    /// Creates a new empty generator with unit weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Sets the number of arcs
    pub fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }

    /// Sets the (inclusive) range arc weights are drawn from
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        self.weights = weights;
        self
    }

    /// Allows or forbids self-loops
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }
}

impl WeightedGraphGenerator for WeightedGnm {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        assert!(self.m == 0 || self.n > 0, "cannot place arcs without nodes");
        assert!(self.loops || self.m == 0 || self.n > 1, "loop-free arcs require two nodes");
        assert!(!self.weights.is_empty());

        (0..self.m).map(move |_| loop {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if self.loops || u != v {
                break WeightedEdge(u, v, rng.random_range(self.weights.clone()));
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn parameters_are_respected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2 as NumNodes, 5, 20] {
            for m in [0, n, 10 * n] {
                let edges = WeightedGnm::new()
                    .nodes(n)
                    .edges(m)
                    .weights(-3..=3)
                    .loops(false)
                    .generate(rng);

                assert_eq!(edges.len(), m as usize);
                assert!(edges.iter().all(|e| e.fits_into(n) && !e.is_loop()));
                assert!(edges.iter().all(|e| (-3..=3).contains(&e.weight())));
            }
        }
    }

    #[test]
    fn deterministic_for_seed() {
        let gen_edges = |seed| {
            WeightedGnm::new()
                .nodes(10)
                .edges(40)
                .weights(-10..=10)
                .generate(&mut Pcg64Mcg::seed_from_u64(seed))
        };

        assert_eq!(gen_edges(9), gen_edges(9));
        assert_ne!(gen_edges(9), gen_edges(10));
    }

    #[test]
    fn produces_parallel_arcs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let edges = WeightedGnm::new().nodes(3).edges(50).generate(rng);

        assert!(!edges.iter().map(|e| (e.source(), e.target())).all_unique());
    }
}
