use crate::error::Result;
use crate::graph::{Edge, EdgeId, EdgeWeightedGraph, GraphView};
use crate::mst::MinimumSpanningTree;
use crate::pq::MinPQ;

/// Prim's algorithm keeping every crossing edge in the queue
#[derive(Debug, Clone)]
pub struct LazyPrim {
    edges: Vec<Edge>,
}

struct Search<'g> {
    graph: &'g EdgeWeightedGraph,
    marked: Vec<bool>,
    /// (weight, id) so equal weights come out in insertion order
    crossing: MinPQ<(f64, EdgeId)>,
}

impl Search<'_> {
    fn visit(&mut self, v: usize) {
        self.marked[v] = true;
        for (id, edge) in self.graph.adjacent_edges(v) {
            if !self.marked[edge.other(v)] {
                self.crossing.insert((edge.weight(), id));
            }
        }
    }

    fn grow(&mut self, root: usize, tree: &mut Vec<Edge>) -> Result<()> {
        self.visit(root);
        while !self.crossing.is_empty() {
            let (_, id) = self.crossing.delete_min()?;
            let Some(edge) = self.graph.edge(id).copied() else {
                continue;
            };
            let (v, w) = edge.endpoints();
            if self.marked[v] && self.marked[w] {
                continue;
            }
            tree.push(edge);
            if !self.marked[v] {
                self.visit(v);
            }
            if !self.marked[w] {
                self.visit(w);
            }
        }
        Ok(())
    }
}

impl LazyPrim {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let vertices = graph.vertex_count();
        let mut search = Search {
            graph,
            marked: vec![false; vertices],
            crossing: MinPQ::new(),
        };
        let mut edges = Vec::with_capacity(vertices.saturating_sub(1));

        for root in 0..vertices {
            if !search.marked[root] {
                search.grow(root, &mut edges)?;
            }
        }

        let mst = Self { edges };
        tracing::debug!(edges = mst.edges.len(), weight = mst.weight(), "lazy prim complete");
        Ok(mst)
    }
}

impl MinimumSpanningTree for LazyPrim {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
