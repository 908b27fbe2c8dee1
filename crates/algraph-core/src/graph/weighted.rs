use crate::error::{AlgoError, Result};
use crate::graph::edge::{DirectedEdge, Edge, EdgeId};
use crate::graph::{GraphView, Reversible, Undirected};

/// Undirected graph with weighted edges.
///
/// Edge records live once in an arena; both adjacency lists of an edge hold its
/// id, so a weight change is seen from either endpoint.
#[derive(Debug, Clone, Default)]
pub struct EdgeWeightedGraph {
    edges: Vec<Edge>,
    adj: Vec<Vec<EdgeId>>,
}

impl EdgeWeightedGraph {
    pub fn new(vertices: usize) -> Self {
        Self {
            edges: Vec::new(),
            adj: vec![Vec::new(); vertices],
        }
    }

    /// Add the edge `v-w` and return its id
    pub fn add_edge(&mut self, v: usize, w: usize, weight: f64) -> Result<EdgeId> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        let edge = Edge::new(v, w, weight)?;
        let id = self.edges.len();
        self.edges.push(edge);
        self.adj[v].push(id);
        self.adj[w].push(id);
        Ok(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn set_weight(&mut self, id: EdgeId, weight: f64) -> Result<()> {
        let edge = self
            .edges
            .get_mut(id)
            .ok_or_else(|| AlgoError::invalid_value("edge id", id))?;
        edge.set_weight(weight)
    }

    /// Edges incident to `v` with their ids, in insertion order
    pub fn adjacent_edges(&self, v: usize) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.adj
            .get(v)
            .into_iter()
            .flatten()
            .map(|&id| (id, &self.edges[id]))
    }

    /// Every edge exactly once, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }
}

impl GraphView for EdgeWeightedGraph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacent_edges(v).map(move |(_, edge)| edge.other(v))
    }
}

impl Undirected for EdgeWeightedGraph {}

/// Directed graph with weighted edges
#[derive(Debug, Clone, Default)]
pub struct EdgeWeightedDigraph {
    edges: Vec<DirectedEdge>,
    adj: Vec<Vec<EdgeId>>,
    in_degree: Vec<usize>,
}

impl EdgeWeightedDigraph {
    pub fn new(vertices: usize) -> Self {
        Self {
            edges: Vec::new(),
            adj: vec![Vec::new(); vertices],
            in_degree: vec![0; vertices],
        }
    }

    /// Add the edge `from->to` and return its id
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<EdgeId> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;
        let edge = DirectedEdge::new(from, to, weight)?;
        let id = self.edges.len();
        self.edges.push(edge);
        self.adj[from].push(id);
        self.in_degree[to] += 1;
        Ok(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&DirectedEdge> {
        self.edges.get(id)
    }

    pub fn set_weight(&mut self, id: EdgeId, weight: f64) -> Result<()> {
        let edge = self
            .edges
            .get_mut(id)
            .ok_or_else(|| AlgoError::invalid_value("edge id", id))?;
        edge.set_weight(weight)
    }

    /// Edges leaving `v`, in insertion order
    pub fn adjacent(&self, v: usize) -> impl Iterator<Item = &DirectedEdge> + '_ {
        self.adj
            .get(v)
            .into_iter()
            .flatten()
            .map(|&id| &self.edges[id])
    }

    /// Every edge in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> + '_ {
        self.edges.iter()
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

impl GraphView for EdgeWeightedDigraph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacent(v).map(DirectedEdge::to)
    }
}

impl Reversible for EdgeWeightedDigraph {
    fn reverse(&self) -> Self {
        let mut reversed = EdgeWeightedDigraph::new(self.vertex_count());
        for edge in &self.edges {
            let flipped = edge.reversed();
            let id = reversed.edges.len();
            reversed.edges.push(flipped);
            reversed.adj[flipped.from()].push(id);
            reversed.in_degree[flipped.to()] += 1;
        }
        reversed
    }
}
