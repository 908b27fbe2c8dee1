//! Degree statistics for undirected graphs

use serde::Serialize;

use crate::error::Result;
use crate::graph::Undirected;

/// Number of adjacency entries of `v`; a self-loop contributes two
pub fn degree<G: Undirected>(graph: &G, v: usize) -> Result<usize> {
    graph.validate_vertex(v)?;
    Ok(graph.neighbors(v).count())
}

/// Largest degree over all vertices, 0 for an empty graph
pub fn max_degree<G: Undirected>(graph: &G) -> usize {
    (0..graph.vertex_count())
        .map(|v| graph.neighbors(v).count())
        .max()
        .unwrap_or(0)
}

/// `2E / V`, or 0 for a graph without vertices
pub fn average_degree<G: Undirected>(graph: &G) -> f64 {
    if graph.vertex_count() == 0 {
        return 0.0;
    }
    2.0 * graph.edge_count() as f64 / graph.vertex_count() as f64
}

/// Number of self-loops, each counted once
pub fn self_loops<G: Undirected>(graph: &G) -> usize {
    let entries: usize = (0..graph.vertex_count())
        .map(|v| graph.neighbors(v).filter(|&w| w == v).count())
        .sum();
    // each loop shows up twice in its vertex's adjacency list
    entries / 2
}

/// All degree statistics at once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeSummary {
    pub vertices: usize,
    pub edges: usize,
    pub max_degree: usize,
    pub average_degree: f64,
    pub self_loops: usize,
}

pub fn summarize<G: Undirected>(graph: &G) -> DegreeSummary {
    DegreeSummary {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        max_degree: max_degree(graph),
        average_degree: average_degree(graph),
        self_loops: self_loops(graph),
    }
}
