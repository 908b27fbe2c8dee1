use crate::error::Result;
use crate::graph::{Edge, EdgeId, EdgeWeightedGraph, GraphView};
use crate::mst::MinimumSpanningTree;
use crate::pq::IndexMinPQ;

/// Prim's algorithm with at most one queue entry per non-tree vertex.
///
/// Tree edges are reported in order of the vertex they connect.
#[derive(Debug, Clone)]
pub struct EagerPrim {
    edges: Vec<Edge>,
}

struct Search<'g> {
    graph: &'g EdgeWeightedGraph,
    marked: Vec<bool>,
    edge_to: Vec<Option<EdgeId>>,
    dist_to: Vec<f64>,
    queue: IndexMinPQ<f64>,
}

impl Search<'_> {
    fn scan(&mut self, v: usize) -> Result<()> {
        self.marked[v] = true;
        for (id, edge) in self.graph.adjacent_edges(v) {
            let w = edge.other(v);
            if self.marked[w] || edge.weight() >= self.dist_to[w] {
                continue;
            }
            self.dist_to[w] = edge.weight();
            self.edge_to[w] = Some(id);
            if self.queue.contains(w) {
                self.queue.decrease_key(w, edge.weight())?;
            } else {
                self.queue.insert(w, edge.weight())?;
            }
        }
        Ok(())
    }

    fn grow(&mut self, root: usize) -> Result<()> {
        self.dist_to[root] = 0.0;
        self.queue.insert(root, 0.0)?;
        while !self.queue.is_empty() {
            let v = self.queue.delete_min()?;
            self.scan(v)?;
        }
        Ok(())
    }
}

impl EagerPrim {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let vertices = graph.vertex_count();
        if vertices == 0 {
            return Ok(Self { edges: Vec::new() });
        }

        let mut search = Search {
            graph,
            marked: vec![false; vertices],
            edge_to: vec![None; vertices],
            dist_to: vec![f64::INFINITY; vertices],
            queue: IndexMinPQ::with_capacity(vertices)?,
        };
        for root in 0..vertices {
            if !search.marked[root] {
                search.grow(root)?;
            }
        }

        let edges = search
            .edge_to
            .iter()
            .flatten()
            .filter_map(|&id| graph.edge(id).copied())
            .collect();
        let mst = Self { edges };
        tracing::debug!(edges = mst.edges.len(), weight = mst.weight(), "eager prim complete");
        Ok(mst)
    }
}

impl MinimumSpanningTree for EagerPrim {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
