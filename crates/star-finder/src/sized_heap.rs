//! A max-heap that never grows past a fixed size.

use std::collections::BinaryHeap;

/// A max-heap holding at most `k` items.
///
/// Once full, the heap keeps the `k` smallest items it has been offered. This
/// is the working set for a k-nearest search: the top of the heap is the
/// farthest of the current candidates and is the first to be evicted.
#[derive(Debug, Clone)]
pub struct SizedHeap<T: Ord> {
    /// The heap of items.
    heap: BinaryHeap<T>,
    /// The maximum size of the heap.
    k: usize,
}

impl<T: Ord> SizedHeap<T> {
    /// Creates an empty `SizedHeap` that holds at most `k` items.
    #[must_use]
    pub fn new(k: usize) -> Self {
        // `k` may be far larger than the input, so cap the up-front allocation.
        Self {
            heap: BinaryHeap::with_capacity(k.min(1 << 16)),
            k,
        }
    }

    /// Returns the number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offers an item to the heap.
    ///
    /// The outcome is the same as pushing the item and then popping the
    /// largest item if the heap grew past `k`, but an item that would be
    /// evicted straight away is never inserted. When the item equals the
    /// current largest, the item already in the heap is kept.
    pub fn push(&mut self, item: T) {
        if self.heap.len() < self.k {
            self.heap.push(item);
        } else if let Some(mut top) = self.heap.peek_mut() {
            if item < *top {
                *top = item;
            }
        }
    }

    /// Consumes the heap and returns its items in ascending order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }
}
