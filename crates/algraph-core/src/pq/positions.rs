//! Bijection between external indices and heap positions

/// Co-maintained `position -> index` and `index -> position` tables.
///
/// Every mutation goes through `push`, `swap` or `pop_last`, each of which
/// updates both directions, so the two tables never disagree.
#[derive(Debug, Clone)]
pub(crate) struct HeapPositions {
    /// heap[p] is the external index stored at heap position p
    heap: Vec<usize>,
    /// position[i] is the heap position of external index i, if present
    position: Vec<Option<usize>>,
}

impl HeapPositions {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.position.len()
    }

    pub(crate) fn index_at(&self, pos: usize) -> usize {
        self.heap[pos]
    }

    pub(crate) fn position_of(&self, index: usize) -> Option<usize> {
        self.position.get(index).copied().flatten()
    }

    /// Append `index` at the last heap position and return that position
    pub(crate) fn push(&mut self, index: usize) -> usize {
        let pos = self.heap.len();
        self.heap.push(index);
        self.position[index] = Some(pos);
        pos
    }

    /// Exchange the entries at two heap positions
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    /// Remove the entry at the last heap position and return its index
    pub(crate) fn pop_last(&mut self) -> Option<usize> {
        let index = self.heap.pop()?;
        self.position[index] = None;
        Some(index)
    }

    /// Check that both tables describe the same bijection
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let mapped = self.position.iter().filter(|p| p.is_some()).count();
        mapped == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(pos, &index)| self.position[index] == Some(pos))
    }
}
