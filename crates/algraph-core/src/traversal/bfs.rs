use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::GraphView;
use crate::traversal::trace_back;

/// Shortest unweighted paths from a single source.
///
/// A vertex's distance is fixed the first time it is discovered, so `dist_to`
/// is the minimum number of edges from the source.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    source: usize,
    dist_to: Vec<Option<usize>>,
    edge_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new<G: GraphView>(graph: &G, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;

        let vertices = graph.vertex_count();
        let mut dist_to = vec![None; vertices];
        let mut edge_to = vec![None; vertices];
        let mut queue = VecDeque::new();

        dist_to[source] = Some(0);
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d| d + 1);
            for w in graph.neighbors(v) {
                if dist_to[w].is_none() {
                    dist_to[w] = Some(next);
                    edge_to[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }

        let reached = dist_to.iter().filter(|d| d.is_some()).count();
        tracing::debug!(reached, "breadth-first search complete");

        Ok(Self {
            source,
            dist_to,
            edge_to,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        Ok(self.dist_to(v)?.is_some())
    }

    /// Number of edges on a shortest path to `v`, `None` if unreachable
    pub fn dist_to(&self, v: usize) -> Result<Option<usize>> {
        crate::ensure_vertex!(v, self.dist_to.len());
        Ok(self.dist_to[v])
    }

    /// Vertices of a shortest path from the source to `v`, both included
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(trace_back(&self.edge_to, self.source, v)))
    }
}
