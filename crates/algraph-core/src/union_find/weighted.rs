use crate::error::{AlgoError, Result};
use crate::union_find::UnionFind;

/// Weighted quick-union with path compression.
///
/// Invariants:
/// - following `parent` from any element ends at a root with `parent[r] == r`
/// - `size[r]` is the number of elements in the tree rooted at `r`
///
/// Amortized cost per operation is bounded by the inverse Ackermann function.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets `{0}, {1}, ..., {n-1}`
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements in the set containing `p`
    pub fn size_of(&mut self, p: usize) -> Result<usize> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }

    fn validate(&self, p: usize) -> Result<()> {
        if p >= self.parent.len() {
            return Err(AlgoError::vertex_out_of_range(p, self.parent.len()));
        }
        Ok(())
    }
}

impl UnionFind for DisjointSet {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    /// Path halving: each visited node is relinked to its grandparent
    fn find(&mut self, mut p: usize) -> Result<usize> {
        self.validate(p)?;
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        Ok(p)
    }

    /// The smaller tree goes under the larger root; on equal sizes the root of
    /// `q` goes under the root of `p`
    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }

        let (big, small) = if self.size[root_p] < self.size[root_q] {
            (root_q, root_p)
        } else {
            (root_p, root_q)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.count -= 1;
        Ok(true)
    }
}
