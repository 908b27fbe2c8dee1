//! Plain binary heap of comparable items
//!
//! Lazy Prim keeps every crossing edge here and Kruskal drains all edges from it
//! in ascending order. Items are usually `(weight, edge id)` pairs so equal
//! weights fall back to edge insertion order.

use std::marker::PhantomData;

use crate::error::{AlgoError, Result};
use crate::pq::order::{HeapOrder, MaxOrder, MinOrder};

/// Array-backed heap-ordered complete binary tree
#[derive(Debug, Clone)]
pub struct BinaryHeapQueue<T, O = MinOrder> {
    items: Vec<T>,
    order: PhantomData<O>,
}

/// Heap with the smallest item on top
pub type MinPQ<T> = BinaryHeapQueue<T, MinOrder>;

/// Heap with the largest item on top
pub type MaxPQ<T> = BinaryHeapQueue<T, MaxOrder>;

impl<T: PartialOrd, O: HeapOrder> Default for BinaryHeapQueue<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd, O: HeapOrder> BinaryHeapQueue<T, O> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at the root, if any
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn insert(&mut self, item: T) {
        let last = self.items.len();
        self.items.push(item);
        swim::<T, O>(&mut self.items, last);
    }

    /// Remove and return the root item; fails on an empty queue
    pub fn delete_top(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(AlgoError::EmptyQueue);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop().ok_or(AlgoError::EmptyQueue)?;
        let len = self.items.len();
        sink::<T, O>(&mut self.items, 0, len);
        Ok(top)
    }
}

impl<T: PartialOrd> BinaryHeapQueue<T, MinOrder> {
    pub fn delete_min(&mut self) -> Result<T> {
        self.delete_top()
    }
}

impl<T: PartialOrd> BinaryHeapQueue<T, MaxOrder> {
    pub fn delete_max(&mut self) -> Result<T> {
        self.delete_top()
    }
}

impl<T: PartialOrd, O: HeapOrder> FromIterator<T> for BinaryHeapQueue<T, O> {
    /// Bottom-up heap construction in linear time
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        let len = items.len();
        for pos in (0..len / 2).rev() {
            sink::<T, O>(&mut items, pos, len);
        }
        Self {
            items,
            order: PhantomData,
        }
    }
}

impl<T: PartialOrd, O: HeapOrder> Extend<T> for BinaryHeapQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

/// Promote the item at `pos` until its parent precedes or ties it
pub(crate) fn swim<T: PartialOrd, O: HeapOrder>(items: &mut [T], mut pos: usize) {
    while pos > 0 {
        let parent = (pos - 1) / 2;
        if !O::precedes(&items[pos], &items[parent]) {
            break;
        }
        items.swap(pos, parent);
        pos = parent;
    }
}

/// Demote the item at `pos` within `items[..len]`
pub(crate) fn sink<T: PartialOrd, O: HeapOrder>(items: &mut [T], mut pos: usize, len: usize) {
    loop {
        let left = 2 * pos + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let child = if right < len && O::precedes(&items[right], &items[left]) {
            right
        } else {
            left
        };
        if !O::precedes(&items[child], &items[pos]) {
            break;
        }
        items.swap(pos, child);
        pos = child;
    }
}
