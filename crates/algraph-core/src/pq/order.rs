//! Ordering markers shared by the heap implementations

/// Decides which of two keys belongs closer to the root of a heap
pub trait HeapOrder {
    /// Human-readable name used in log fields
    const NAME: &'static str;

    /// Returns true when `a` must sit strictly above `b`.
    /// Equal or incomparable keys never precede each other, so ties keep
    /// their current heap positions.
    fn precedes<K: PartialOrd + ?Sized>(a: &K, b: &K) -> bool;
}

/// Smallest key at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

/// Largest key at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl HeapOrder for MinOrder {
    const NAME: &'static str = "min";

    fn precedes<K: PartialOrd + ?Sized>(a: &K, b: &K) -> bool {
        a < b
    }
}

impl HeapOrder for MaxOrder {
    const NAME: &'static str = "max";

    fn precedes<K: PartialOrd + ?Sized>(a: &K, b: &K) -> bool {
        a > b
    }
}
