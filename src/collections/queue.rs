//! `Queue` — a first-in-first-out container backed by a `VecDeque` ring buffer.
//!
//! Performance Characteristics:
//! - Enqueue/Dequeue: O(1) amortized
//! - Size: O(1)

use std::collections::VecDeque;

use crate::collections::Frontier;

/// A FIFO queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Adds `item` to the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front item, or `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of queued items.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    #[inline]
    fn put(&mut self, item: T) {
        self.enqueue(item);
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.dequeue()
    }

    #[inline]
    fn size(&self) -> usize {
        Queue::size(self)
    }
}
