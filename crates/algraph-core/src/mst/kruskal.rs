use crate::error::Result;
use crate::graph::{Edge, EdgeId, EdgeWeightedGraph, GraphView};
use crate::mst::MinimumSpanningTree;
use crate::pq::MinPQ;
use crate::union_find::{DisjointSet, UnionFind};

/// Kruskal's algorithm.
///
/// Tree edges are reported in ascending weight order.
#[derive(Debug, Clone)]
pub struct Kruskal {
    edges: Vec<Edge>,
}

impl Kruskal {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let vertices = graph.vertex_count();
        let target = vertices.saturating_sub(1);

        let mut queue: MinPQ<(f64, EdgeId)> = graph
            .edges()
            .enumerate()
            .map(|(id, edge)| (edge.weight(), id))
            .collect();
        let mut forest = DisjointSet::new(vertices);
        let mut edges = Vec::with_capacity(target);
        let mut examined = 0_usize;

        while !queue.is_empty() && edges.len() < target {
            let (_, id) = queue.delete_min()?;
            examined += 1;
            let Some(edge) = graph.edge(id).copied() else {
                continue;
            };
            let (v, w) = edge.endpoints();
            if forest.union(v, w)? {
                edges.push(edge);
            }
        }

        let mst = Self { edges };
        tracing::debug!(
            edges = mst.edges.len(),
            examined,
            weight = mst.weight(),
            "kruskal complete"
        );
        Ok(mst)
    }
}

impl MinimumSpanningTree for Kruskal {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
