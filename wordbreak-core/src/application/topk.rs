//! Bounded best-of-N selection

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};

/// Keeps the `capacity` greatest elements offered to it
///
/// When full, an offered element replaces the current minimum only if it is
/// strictly greater; equal elements already held are never displaced by a
/// newcomer.
#[derive(Debug, Clone)]
pub struct BoundedHeap<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedHeap<T> {
    /// Create a heap holding at most `capacity` elements
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument(
                "heap capacity must be greater than 0".into(),
            ));
        }
        Ok(Self {
            heap: BinaryHeap::with_capacity(capacity + 1),
            capacity,
        })
    }

    /// Offer an element; returns whether it was kept
    pub fn offer(&mut self, value: T) -> bool {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(value));
            return true;
        }
        match self.heap.peek() {
            Some(Reverse(min)) if value > *min => {
                self.heap.pop();
                self.heap.push(Reverse(value));
                true
            }
            _ => false,
        }
    }

    /// Smallest element held
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(v)| v)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held elements in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter().map(|Reverse(v)| v)
    }

    /// Held elements, greatest first
    pub fn into_sorted_vec(self) -> Vec<T> {
        // Ascending order of Reverse<T> is descending order of T
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(v)| v)
            .collect()
    }
}

impl<T: Ord> Extend<T> for BoundedHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}
