//! Priority queues
//!
//! Array-backed binary heaps used by the spanning tree and shortest path algorithms:
//! - `IndexedPriorityQueue`: heap keyed by external integer indices with key changes
//! - `BinaryHeapQueue`: plain heap of comparable items
//! - `heap_sort`: in-place heapsort over the same sink routine
//!
//! Both queues are generic over a `HeapOrder` marker so one implementation serves
//! min and max variants.

pub mod binary;
pub mod indexed;
pub mod order;
mod positions;
pub mod sort;

pub use binary::{BinaryHeapQueue, MaxPQ, MinPQ};
pub use indexed::{IndexMaxPQ, IndexMinPQ, IndexedPriorityQueue};
pub use order::{HeapOrder, MaxOrder, MinOrder};
pub use sort::heap_sort;
