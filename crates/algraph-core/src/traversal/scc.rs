use crate::error::Result;
use crate::graph::Reversible;
use crate::traversal::{depth_first, DepthFirstOrder, DfsVisitor};

/// Strongly connected components (Kosaraju-Sharir).
///
/// Computes the reverse postorder of the transpose, then runs depth-first
/// search on the graph itself taking roots in that order; each search tree is
/// one component.
#[derive(Debug, Clone)]
pub struct StrongComponents {
    id: Vec<usize>,
    count: usize,
}

struct Labeler<'a> {
    id: &'a mut [usize],
    label: usize,
}

impl DfsVisitor for Labeler<'_> {
    fn pre_visit(&mut self, v: usize) {
        self.id[v] = self.label;
    }
}

impl StrongComponents {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new<G: Reversible>(graph: &G) -> Self {
        let vertices = graph.vertex_count();
        let order = DepthFirstOrder::new(&graph.reverse());

        let mut marked = vec![false; vertices];
        let mut id = vec![0; vertices];
        let mut count = 0;
        for root in order.reverse_post() {
            if marked[root] {
                continue;
            }
            depth_first(
                graph,
                root,
                &mut marked,
                &mut Labeler {
                    id: &mut id,
                    label: count,
                },
            );
            count += 1;
        }

        tracing::debug!(components = count, "strong components labeled");
        Self { id, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn id(&self, v: usize) -> Result<usize> {
        crate::ensure_vertex!(v, self.id.len());
        Ok(self.id[v])
    }

    pub fn strongly_connected(&self, v: usize, w: usize) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }
}
