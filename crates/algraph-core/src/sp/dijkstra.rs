use crate::error::Result;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, GraphView};
use crate::pq::IndexMinPQ;
use crate::sp::{PathTree, ShortestPaths};

/// Dijkstra's algorithm.
///
/// Requires non-negative weights; with a negative edge the distances are
/// silently wrong.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    tree: PathTree,
}

impl Dijkstra {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;

        let mut tree = PathTree::new(graph.vertex_count(), source, f64::INFINITY);
        let mut queue = IndexMinPQ::with_capacity(graph.vertex_count())?;
        queue.insert(source, 0.0)?;
        let mut relaxed = 0_usize;

        while !queue.is_empty() {
            let v = queue.delete_min()?;
            for edge in graph.adjacent(v) {
                let w = edge.to();
                let candidate = tree.dist_to[v] + edge.weight();
                if candidate >= tree.dist_to[w] {
                    continue;
                }
                tree.improve(edge, candidate);
                relaxed += 1;
                if queue.contains(w) {
                    queue.decrease_key(w, candidate)?;
                } else {
                    queue.insert(w, candidate)?;
                }
            }
        }

        tracing::debug!(relaxed, reached = tree.reached_count(), "dijkstra complete");
        Ok(Self { tree })
    }
}

impl ShortestPaths for Dijkstra {
    fn source(&self) -> usize {
        self.tree.source
    }

    fn dist_to(&self, v: usize) -> Result<f64> {
        self.tree.dist(v)
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.tree.has_path(v)
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        self.tree.path(v)
    }
}
