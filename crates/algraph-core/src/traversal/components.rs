use crate::error::Result;
use crate::graph::Undirected;
use crate::traversal::{depth_first, DfsVisitor};

/// Connected components of an undirected graph.
///
/// Components are numbered `0..count` in order of their smallest vertex.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    size: Vec<usize>,
}

struct Labeler<'a> {
    id: &'a mut [usize],
    label: usize,
    members: usize,
}

impl DfsVisitor for Labeler<'_> {
    fn pre_visit(&mut self, v: usize) {
        self.id[v] = self.label;
        self.members += 1;
    }
}

impl ConnectedComponents {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new<G: Undirected>(graph: &G) -> Self {
        let vertices = graph.vertex_count();
        let mut marked = vec![false; vertices];
        let mut id = vec![0; vertices];
        let mut size = Vec::new();

        for root in 0..vertices {
            if marked[root] {
                continue;
            }
            let mut labeler = Labeler {
                id: &mut id,
                label: size.len(),
                members: 0,
            };
            depth_first(graph, root, &mut marked, &mut labeler);
            size.push(labeler.members);
        }

        tracing::debug!(components = size.len(), "connected components labeled");
        Self { id, size }
    }

    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Component label of `v`
    pub fn id(&self, v: usize) -> Result<usize> {
        crate::ensure_vertex!(v, self.id.len());
        Ok(self.id[v])
    }

    /// Number of vertices in the component containing `v`
    pub fn size(&self, v: usize) -> Result<usize> {
        Ok(self.size[self.id(v)?])
    }

    pub fn connected(&self, v: usize, w: usize) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }
}
