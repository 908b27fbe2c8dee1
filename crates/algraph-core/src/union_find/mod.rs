//! Union-find (disjoint set) structures over elements `0..n`
//!
//! - `DisjointSet`: union-by-size with path halving, used by Kruskal
//! - `QuickFind`: eager component ids, constant-time `find`, linear `union`
//! - `QuickUnion`: unweighted forest, kept as the baseline the weighted
//!   version improves on

pub mod quick;
pub mod weighted;

pub use quick::{QuickFind, QuickUnion};
pub use weighted::DisjointSet;

use crate::error::Result;

/// Dynamic connectivity over a fixed set of elements.
///
/// Out-of-range elements are rejected with `VertexOutOfRange`.
pub trait UnionFind {
    /// Number of elements
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets
    fn count(&self) -> usize;

    /// Canonical identifier of the set containing `p`
    fn find(&mut self, p: usize) -> Result<usize>;

    /// Merge the sets containing `p` and `q`; returns false when they were
    /// already the same set
    fn union(&mut self, p: usize, q: usize) -> Result<bool>;

    fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }
}
