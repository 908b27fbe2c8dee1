use crate::error::Result;
use crate::graph::{GraphView, Reversible};

/// Directed, unweighted graph
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    adj: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    /// (v, w) per added edge, in insertion order
    edge_list: Vec<(usize, usize)>,
}

impl Digraph {
    /// Create a digraph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
            in_degree: vec![0; vertices],
            edge_list: Vec::new(),
        }
    }

    /// Add the edge `v->w`
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        self.adj[v].push(w);
        self.in_degree[w] += 1;
        self.edge_list.push((v, w));
        Ok(())
    }

    /// Vertices `w` with an edge `v->w`, empty for a vertex outside the graph
    pub fn adjacent(&self, v: usize) -> &[usize] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every edge as `(from, to)`, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edge_list.iter().copied()
    }

    pub fn out_degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].len())
    }

    pub fn in_degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.in_degree[v])
    }
}

impl GraphView for Digraph {
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

impl Reversible for Digraph {
    fn reverse(&self) -> Self {
        let mut reversed = Digraph::new(self.vertex_count());
        for (v, targets) in self.adj.iter().enumerate() {
            for &w in targets {
                reversed.adj[w].push(v);
                reversed.in_degree[v] += 1;
            }
        }
        reversed.edge_list = self.edge_list.iter().map(|&(v, w)| (w, v)).collect();
        reversed
    }
}
