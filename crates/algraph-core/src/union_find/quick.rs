use crate::error::{AlgoError, Result};
use crate::union_find::UnionFind;

fn validate(p: usize, n: usize) -> Result<()> {
    if p >= n {
        return Err(AlgoError::vertex_out_of_range(p, n));
    }
    Ok(())
}

/// Eager approach: `id[p]` is the set identifier of `p`.
/// `find` is O(1); `union` rewrites every id of the absorbed set, O(n).
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl QuickFind {
    pub fn new(n: usize) -> Self {
        Self {
            id: (0..n).collect(),
            count: n,
        }
    }
}

impl UnionFind for QuickFind {
    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> Result<usize> {
        validate(p, self.id.len())?;
        Ok(self.id[p])
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let id_p = self.find(p)?;
        let id_q = self.find(q)?;
        if id_p == id_q {
            return Ok(false);
        }
        for id in self.id.iter_mut().filter(|id| **id == id_p) {
            *id = id_q;
        }
        self.count -= 1;
        Ok(true)
    }
}

/// Lazy approach: a forest of parent links without balancing.
/// Trees can degenerate into paths, so `find` is O(n) in the worst case.
#[derive(Debug, Clone)]
pub struct QuickUnion {
    parent: Vec<usize>,
    count: usize,
}

impl QuickUnion {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            count: n,
        }
    }
}

impl UnionFind for QuickUnion {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut p: usize) -> Result<usize> {
        validate(p, self.parent.len())?;
        while self.parent[p] != p {
            p = self.parent[p];
        }
        Ok(p)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }
        self.parent[root_p] = root_q;
        self.count -= 1;
        Ok(true)
    }
}
