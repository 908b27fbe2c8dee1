use crate::error::Result;
use crate::graph::{GraphView, Undirected};

/// Undirected, unweighted graph.
///
/// Each edge `v-w` is stored in both adjacency lists; a self-loop appears twice
/// in the list of its vertex.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    /// (v, w) per added edge, in insertion order
    edge_list: Vec<(usize, usize)>,
}

impl Graph {
    /// Create a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
            edge_list: Vec::new(),
        }
    }

    /// Connect `v` and `w`; both endpoints are checked before anything changes
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.adj[v].push(w);
        self.adj[w].push(v);
        self.edge_list.push((v, w));
        Ok(())
    }

    /// Vertices adjacent to `v`, empty for a vertex outside the graph
    pub fn adjacent(&self, v: usize) -> &[usize] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every edge once, as given to `add_edge`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edge_list.iter().copied()
    }
}

impl GraphView for Graph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacent(v).iter().copied()
    }
}

impl Undirected for Graph {}
