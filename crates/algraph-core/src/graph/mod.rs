//! Graph containers
//!
//! Vertices are plain integers in `0..V`, fixed at construction. Each container
//! keeps an adjacency list per vertex in insertion order, which is the order every
//! traversal visits neighbors in:
//! - `Graph`: undirected, unweighted
//! - `Digraph`: directed, unweighted
//! - `EdgeWeightedGraph`: undirected, one shared edge record per edge
//! - `EdgeWeightedDigraph`: directed, weighted
//!
//! Algorithms depend on the capability traits below rather than on a concrete
//! container.

pub mod directed;
pub mod edge;
pub mod processing;
pub mod undirected;
pub mod weighted;

pub use directed::Digraph;
pub use edge::{DirectedEdge, Edge, EdgeId};
pub use processing::{average_degree, degree, max_degree, self_loops, summarize, DegreeSummary};
pub use undirected::Graph;
pub use weighted::{EdgeWeightedDigraph, EdgeWeightedGraph};

use crate::error::Result;

/// Read access shared by every graph container
pub trait GraphView {
    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Vertices adjacent to `v` in insertion order.
    /// Yields nothing for a vertex outside the graph.
    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_;

    /// Reject a vertex outside `0..vertex_count`
    fn validate_vertex(&self, v: usize) -> Result<()> {
        crate::ensure_vertex!(v, self.vertex_count());
        Ok(())
    }
}

/// Directed graphs that can produce their transpose
pub trait Reversible: GraphView + Sized {
    /// Copy of the graph with every edge pointing the other way
    fn reverse(&self) -> Self;
}

/// Marker for graphs whose adjacency is symmetric
pub trait Undirected: GraphView {}
