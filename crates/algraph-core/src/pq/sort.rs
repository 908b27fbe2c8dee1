//! In-place heapsort
//!
//! Not stable; O(n log n) compares in the worst case and no extra space.

use crate::pq::binary::sink;
use crate::pq::order::MaxOrder;

/// Sort `items` ascending by first arranging them as a max-heap and then
/// repeatedly moving the root behind the shrinking heap.
pub fn heap_sort<T: PartialOrd>(items: &mut [T]) {
    let mut len = items.len();
    for pos in (0..len / 2).rev() {
        sink::<T, MaxOrder>(items, pos, len);
    }
    while len > 1 {
        len -= 1;
        items.swap(0, len);
        sink::<T, MaxOrder>(items, 0, len);
    }
}
