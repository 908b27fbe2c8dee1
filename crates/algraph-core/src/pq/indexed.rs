//! Indexed priority queue
//!
//! Associates each external index in `0..capacity` with at most one key and
//! keeps the indices heap-ordered by key. Clients address entries by index, which
//! is what lets eager Prim and Dijkstra change the priority of a vertex in place.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::error::{AlgoError, Result};
use crate::pq::order::{HeapOrder, MaxOrder, MinOrder};
use crate::pq::positions::HeapPositions;

/// Binary heap over external indices with per-index keys.
///
/// | operation | cost |
/// |-----------|------|
/// | insert, change_key, pop, delete | O(log n) |
/// | contains, len, top_index, key_of | O(1) |
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K, O = MinOrder> {
    /// keys[i] is the priority of external index i
    keys: Vec<Option<K>>,
    positions: HeapPositions,
    order: PhantomData<O>,
}

/// Indexed queue with the smallest key on top
pub type IndexMinPQ<K> = IndexedPriorityQueue<K, MinOrder>;

/// Indexed queue with the largest key on top
pub type IndexMaxPQ<K> = IndexedPriorityQueue<K, MaxOrder>;

impl<K: PartialOrd, O: HeapOrder> IndexedPriorityQueue<K, O> {
    /// Create an empty queue accepting indices in `0..capacity`
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AlgoError::InvalidCapacity { capacity });
        }
        Ok(Self {
            keys: std::iter::repeat_with(|| None).take(capacity).collect(),
            positions: HeapPositions::new(capacity),
            order: PhantomData,
        })
    }

    pub fn capacity(&self) -> usize {
        self.positions.capacity()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.len() == 0
    }

    /// Whether `index` currently has a key. Out-of-range indices are never present.
    pub fn contains(&self, index: usize) -> bool {
        self.positions.position_of(index).is_some()
    }

    /// Associate `key` with `index`
    pub fn insert(&mut self, index: usize, key: K) -> Result<()> {
        self.check_index(index)?;
        if self.contains(index) {
            return Err(AlgoError::DuplicateIndex { index });
        }
        self.keys[index] = Some(key);
        let pos = self.positions.push(index);
        self.sift_up(pos);
        Ok(())
    }

    /// Index whose key sits at the root
    pub fn top_index(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(AlgoError::EmptyQueue);
        }
        Ok(self.positions.index_at(0))
    }

    /// Key at the root
    pub fn top_key(&self) -> Result<&K> {
        let index = self.top_index()?;
        self.key_of(index)
    }

    /// Key currently associated with `index`
    pub fn key_of(&self, index: usize) -> Result<&K> {
        self.check_index(index)?;
        self.keys[index]
            .as_ref()
            .ok_or(AlgoError::MissingIndex { index })
    }

    /// Replace the key of `index` and restore heap order in whichever
    /// direction the new key requires
    pub fn change_key(&mut self, index: usize, key: K) -> Result<()> {
        let pos = self.present_position(index)?;
        self.keys[index] = Some(key);
        let pos = self.sift_up(pos);
        self.sift_down(pos);
        Ok(())
    }

    /// Lower the key of `index`; fails unless `key` is strictly smaller
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<()> {
        if key.partial_cmp(self.key_of(index)?) != Some(Ordering::Less) {
            return Err(AlgoError::InvalidKeyChange {
                index,
                direction: "decrease",
            });
        }
        self.change_key(index, key)
    }

    /// Raise the key of `index`; fails unless `key` is strictly larger
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<()> {
        if key.partial_cmp(self.key_of(index)?) != Some(Ordering::Greater) {
            return Err(AlgoError::InvalidKeyChange {
                index,
                direction: "increase",
            });
        }
        self.change_key(index, key)
    }

    /// Remove the root entry and return its index and key
    pub fn pop(&mut self) -> Result<(usize, K)> {
        let index = self.top_index()?;
        let key = self.delete(index)?;
        Ok((index, key))
    }

    /// Remove `index` from the queue wherever it sits and return its key
    pub fn delete(&mut self, index: usize) -> Result<K> {
        let pos = self.present_position(index)?;
        let last = self.len() - 1;
        self.positions.swap(pos, last);
        self.positions.pop_last();
        let key = self.keys[index]
            .take()
            .ok_or(AlgoError::MissingIndex { index })?;
        if pos < self.len() {
            let pos = self.sift_up(pos);
            self.sift_down(pos);
        }
        Ok(key)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.capacity() {
            return Err(AlgoError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn present_position(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        self.positions
            .position_of(index)
            .ok_or(AlgoError::MissingIndex { index })
    }

    /// Whether the entry at heap position `a` belongs above the one at `b`
    fn precedes(&self, a: usize, b: usize) -> bool {
        let key_a = &self.keys[self.positions.index_at(a)];
        let key_b = &self.keys[self.positions.index_at(b)];
        match (key_a, key_b) {
            (Some(ka), Some(kb)) => O::precedes(ka, kb),
            _ => false,
        }
    }

    /// Move the entry at `pos` toward the root; returns its final position
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(pos, parent) {
                break;
            }
            self.positions.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Move the entry at `pos` toward the leaves
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(child, pos) {
                break;
            }
            self.positions.swap(pos, child);
            pos = child;
        }
    }

    /// Verify the heap-order property and the index/position bijection
    #[cfg(test)]
    pub(crate) fn is_heap_ordered(&self) -> bool {
        self.positions.is_consistent()
            && (1..self.len()).all(|pos| !self.precedes(pos, (pos - 1) / 2))
    }
}

impl<K: PartialOrd> IndexedPriorityQueue<K, MinOrder> {
    /// Remove the index with the smallest key
    pub fn delete_min(&mut self) -> Result<usize> {
        self.pop().map(|(index, _)| index)
    }

    pub fn min_index(&self) -> Result<usize> {
        self.top_index()
    }

    pub fn min_key(&self) -> Result<&K> {
        self.top_key()
    }
}

impl<K: PartialOrd> IndexedPriorityQueue<K, MaxOrder> {
    /// Remove the index with the largest key
    pub fn delete_max(&mut self) -> Result<usize> {
        self.pop().map(|(index, _)| index)
    }

    pub fn max_index(&self) -> Result<usize> {
        self.top_index()
    }

    pub fn max_key(&self) -> Result<&K> {
        self.top_key()
    }
}
