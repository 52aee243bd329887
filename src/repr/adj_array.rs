use super::*;

/// Weighted directed graph storing one adjacency array per node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedAdjArray {
    out_nbs: Vec<Vec<WeightedNeighbor>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for WeightedAdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for WeightedAdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl WeightedAdjacencyList for WeightedAdjArray {
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedNeighbor> + '_ {
        self.out_nbs[u as usize].iter().copied()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].len() as NumNodes
    }
}

impl GraphFromScratch for WeightedAdjArray {
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut out_nbs = vec![Vec::new(); n as usize];
        let mut num_edges = 0;

        for edge in edges {
            let edge: WeightedEdge = edge.into();
            ensure_vertex!(edge.max_node(), n);

            out_nbs[edge.source() as usize].push(edge.neighbor());
            num_edges += 1;
        }

        Ok(Self { out_nbs, num_edges })
    }
}

test_graph_ops!(
    test_weighted_adj_array,
    WeightedAdjArray,
    (GraphFromScratch, WeightedAdjacencyList)
);
