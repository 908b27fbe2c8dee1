use crate::error::Result;
use crate::graph::GraphView;
use crate::traversal::{depth_first, trace_back, DfsVisitor};

/// Reachability from a single source, with one valid (not necessarily
/// shortest) path to each reached vertex
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
}

struct TreeRecorder<'a> {
    edge_to: &'a mut [Option<usize>],
}

impl DfsVisitor for TreeRecorder<'_> {
    fn tree_edge(&mut self, v: usize, w: usize) {
        self.edge_to[w] = Some(v);
    }
}

impl DepthFirstPaths {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new<G: GraphView>(graph: &G, source: usize) -> Result<Self> {
        graph.validate_vertex(source)?;

        let vertices = graph.vertex_count();
        let mut marked = vec![false; vertices];
        let mut edge_to = vec![None; vertices];
        depth_first(
            graph,
            source,
            &mut marked,
            &mut TreeRecorder {
                edge_to: &mut edge_to,
            },
        );

        tracing::debug!(
            reached = marked.iter().filter(|&&m| m).count(),
            "depth-first search complete"
        );

        Ok(Self {
            source,
            marked,
            edge_to,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        crate::ensure_vertex!(v, self.marked.len());
        Ok(self.marked[v])
    }

    /// Vertices of the tree path from the source to `v`, both included
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        Ok(Some(trace_back(&self.edge_to, self.source, v)))
    }
}
