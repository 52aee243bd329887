/*!
# Compressed Sparse Row (CSR) Representation

All arcs are stored in one flat buffer, grouped by tail; `offsets[u]..offsets[u + 1]` is the
range of the outgoing arcs of `u`. This gives compact storage and cache-friendly iteration over
outgoing arcs, which is where the relaxation loop of the shortest path algorithms spends its time.
Construction is a two-pass counting sort over the arc list that keeps insertion order per node.
*/

use super::*;

/// Weighted directed **CSR graph** storing outgoing arcs only.
///
/// Invariants:
/// - `offsets.len() == n + 1` and `offsets[0] == 0`
/// - `offsets` is non-decreasing and `offsets[n] == nbs.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedCsrGraph {
    offsets: Vec<NumEdges>,
    nbs: Vec<WeightedNeighbor>,
}

impl Default for WeightedCsrGraph {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            nbs: Vec::new(),
        }
    }
}

impl WeightedCsrGraph {
    /// Copies any weighted graph into CSR layout, keeping the arc order of every node
    pub fn from_graph<G: WeightedAdjacencyList>(graph: &G) -> Self {
        let mut offsets = Vec::with_capacity(graph.len() + 1);
        let mut nbs = Vec::with_capacity(graph.number_of_edges() as usize);

        offsets.push(0);
        for u in graph.vertices() {
            nbs.extend(graph.out_edges_of(u));
            offsets.push(nbs.len() as NumEdges);
        }

        Self { offsets, nbs }
    }

    /// Returns the outgoing arcs of `u` as a slice.
    /// ** Panics if `u >= n` **
    pub fn out_edges_slice(&self, u: Node) -> &[WeightedNeighbor] {
        let begin = self.offsets[u as usize] as usize;
        let end = self.offsets[u as usize + 1] as usize;
        &self.nbs[begin..end]
    }
}

impl GraphNodeOrder for WeightedCsrGraph {
    fn number_of_nodes(&self) -> NumNodes {
        (self.offsets.len() - 1) as NumNodes
    }
}

impl GraphEdgeOrder for WeightedCsrGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.nbs.len() as NumEdges
    }
}

impl WeightedAdjacencyList for WeightedCsrGraph {
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedNeighbor> + '_ {
        self.out_edges_slice(u).iter().copied()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_edges_slice(u).len() as NumNodes
    }
}

impl GraphFromScratch for WeightedCsrGraph {
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let edges: Vec<WeightedEdge> = edges.into_iter().map(Into::into).collect();

        // First pass: out-degrees shifted by one, so that the prefix sum yields the offsets
        let mut offsets: Vec<NumEdges> = vec![0; n as usize + 1];
        for edge in &edges {
            ensure_vertex!(edge.max_node(), n);
            offsets[edge.source() as usize + 1] += 1;
        }

        for i in 1..offsets.len() {
            offsets[i] += offsets[i - 1];
        }

        // Second pass: place every arc at the next free position of its tail
        let mut cursor = offsets.clone();
        let mut nbs = vec![WeightedNeighbor::new(INVALID_NODE, 0); edges.len()];
        for edge in &edges {
            let pos = &mut cursor[edge.source() as usize];
            nbs[*pos as usize] = edge.neighbor();
            *pos += 1;
        }

        Ok(Self { offsets, nbs })
    }
}

test_graph_ops!(
    test_weighted_csr_graph,
    WeightedCsrGraph,
    (GraphFromScratch, WeightedAdjacencyList)
);
