//! Single-source shortest paths in edge-weighted digraphs
//!
//! - `Dijkstra`: non-negative weights, indexed priority queue keyed by distance
//! - `BellmanFord`: any weights; a reachable negative cycle is detected and
//!   reported instead of distances
//! - `AcyclicSp`: DAGs only, one relaxation per edge in topological order; also
//!   computes longest paths
//!
//! Preconditions on the graph (non-negative weights, acyclicity) are the
//! caller's responsibility and are not checked.

pub mod acyclic;
pub mod bellman_ford;
pub mod dijkstra;

pub use acyclic::AcyclicSp;
pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;

use crate::error::Result;
use crate::graph::DirectedEdge;

/// Queries shared by every shortest path result
pub trait ShortestPaths {
    fn source(&self) -> usize;

    /// Distance from the source to `v`.
    ///
    /// Unreachable vertices report `f64::INFINITY` (`f64::NEG_INFINITY` for
    /// longest paths).
    fn dist_to(&self, v: usize) -> Result<f64>;

    fn has_path_to(&self, v: usize) -> Result<bool>;

    /// Edges from the source to `v` in travel order, `None` if unreachable
    fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>>;
}

/// Distances and parent edges rooted at a source
#[derive(Debug, Clone)]
pub(crate) struct PathTree {
    source: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl PathTree {
    /// Every vertex starts at `unreached` except the source at 0
    fn new(vertices: usize, source: usize, unreached: f64) -> Self {
        let mut dist_to = vec![unreached; vertices];
        dist_to[source] = 0.0;
        Self {
            source,
            dist_to,
            edge_to: vec![None; vertices],
        }
    }

    fn reached(&self, v: usize) -> bool {
        self.dist_to[v].is_finite()
    }

    /// Record `edge` as the best way into its head at distance `dist`
    fn improve(&mut self, edge: &DirectedEdge, dist: f64) {
        self.dist_to[edge.to()] = dist;
        self.edge_to[edge.to()] = Some(*edge);
    }

    fn dist(&self, v: usize) -> Result<f64> {
        crate::ensure_vertex!(v, self.dist_to.len());
        Ok(self.dist_to[v])
    }

    fn has_path(&self, v: usize) -> Result<bool> {
        crate::ensure_vertex!(v, self.dist_to.len());
        Ok(self.reached(v))
    }

    fn path(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        if !self.has_path(v)? {
            return Ok(None);
        }
        let mut edges = Vec::new();
        let mut current = v;
        // bounded by V so a parent cycle cannot loop forever
        while current != self.source && edges.len() < self.edge_to.len() {
            let Some(edge) = self.edge_to[current] else {
                break;
            };
            edges.push(edge);
            current = edge.from();
        }
        edges.reverse();
        Ok(Some(edges))
    }

    fn reached_count(&self) -> usize {
        (0..self.dist_to.len()).filter(|&v| self.reached(v)).count()
    }
}
