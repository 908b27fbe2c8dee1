//! Minimum spanning trees of edge-weighted undirected graphs
//!
//! Three algorithms produce the same total weight:
//! - `LazyPrim`: queue of every crossing edge, stale entries skipped on pop
//! - `EagerPrim`: indexed queue holding the best known edge per non-tree vertex
//! - `Kruskal`: edges in ascending weight, cycles rejected through a `DisjointSet`
//!
//! A disconnected graph yields a minimum spanning forest. Equal weights are
//! broken by edge insertion order, so the edge set is reproducible.

pub mod eager_prim;
pub mod kruskal;
pub mod lazy_prim;

pub use eager_prim::EagerPrim;
pub use kruskal::Kruskal;
pub use lazy_prim::LazyPrim;

use crate::graph::Edge;

/// Result of a spanning tree computation
pub trait MinimumSpanningTree {
    /// Tree edges; restartable, never mutated after construction
    fn edges(&self) -> &[Edge];

    /// Sum of the tree edge weights
    fn weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).fold(0.0, |total, w| total + w)
    }
}

#[cfg(test)]
mod tests;
