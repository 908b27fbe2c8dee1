use crate::graph::GraphView;
use crate::traversal::{depth_first, DfsVisitor};

/// Preorder, postorder and reverse postorder of a full depth-first sweep.
///
/// Roots are taken in increasing vertex order. For a DAG the reverse postorder
/// is a topological order; cycles are not detected.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
}

impl DfsVisitor for DepthFirstOrder {
    fn pre_visit(&mut self, v: usize) {
        self.pre.push(v);
    }

    fn post_visit(&mut self, v: usize) {
        self.post.push(v);
    }
}

impl DepthFirstOrder {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new<G: GraphView>(graph: &G) -> Self {
        Self::with_roots(graph, 0..graph.vertex_count())
    }

    /// Sweep roots in the given order; vertices out of range are skipped
    pub fn with_roots<G, I>(graph: &G, roots: I) -> Self
    where
        G: GraphView,
        I: IntoIterator<Item = usize>,
    {
        let vertices = graph.vertex_count();
        let mut marked = vec![false; vertices];
        let mut order = Self {
            pre: Vec::with_capacity(vertices),
            post: Vec::with_capacity(vertices),
        };
        for root in roots.into_iter().filter(|&r| r < vertices) {
            depth_first(graph, root, &mut marked, &mut order);
        }
        order
    }

    /// Vertices in the order they were discovered
    pub fn pre(&self) -> impl Iterator<Item = usize> + '_ {
        self.pre.iter().copied()
    }

    /// Vertices in the order they were finished
    pub fn post(&self) -> impl Iterator<Item = usize> + '_ {
        self.post.iter().copied()
    }

    /// Postorder read back to front
    pub fn reverse_post(&self) -> impl Iterator<Item = usize> + '_ {
        self.post.iter().rev().copied()
    }
}
